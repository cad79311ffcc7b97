//! Wire names for repeating form fields.
//!
//! The server reads submitted rows positionally from names shaped like
//! `category_name_0`, `category_percentage_0`, `offer_amount_3`. The section
//! prefix is known to both sides, so a field part may itself contain `_`.

use crate::error::FormError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName {
    pub section: String,
    pub field: String,
    pub index: usize,
}

impl FieldName {
    pub fn new(section: impl Into<String>, field: impl Into<String>, index: usize) -> Self {
        Self {
            section: section.into(),
            field: field.into(),
            index,
        }
    }

    /// Parse a rendered name for a known section.
    ///
    /// ```
    /// use ccr_forms::FieldName;
    ///
    /// let name = FieldName::parse("offer", "offer_type_2").unwrap();
    /// assert_eq!(name.field, "type");
    /// assert_eq!(name.index, 2);
    /// ```
    pub fn parse(section: &str, raw: &str) -> Result<Self, FormError> {
        let malformed = || FormError::MalformedFieldName {
            section: section.to_string(),
            raw: raw.to_string(),
        };

        let rest = raw
            .strip_prefix(section)
            .and_then(|r| r.strip_prefix('_'))
            .ok_or_else(malformed)?;
        let (field, index) = rest.rsplit_once('_').ok_or_else(malformed)?;
        if field.is_empty() || index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let index = index.parse::<usize>().map_err(|_| malformed())?;

        Ok(Self::new(section, field, index))
    }

    /// Same section and field, different row index.
    pub fn with_index(&self, index: usize) -> Self {
        Self {
            index,
            ..self.clone()
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.section, self.field, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_section_field_index() {
        let name = FieldName::new("category", "percentage", 4);
        assert_eq!(name.to_string(), "category_percentage_4");
    }

    #[test]
    fn parses_field_with_underscores() {
        let name = FieldName::parse("card", "card_signup_bonus_12").unwrap();
        assert_eq!(name.section, "card");
        assert_eq!(name.field, "signup_bonus");
        assert_eq!(name.index, 12);
    }

    #[test]
    fn rejects_foreign_section_and_missing_index() {
        assert!(FieldName::parse("offer", "category_name_0").is_err());
        assert!(FieldName::parse("offer", "offer_type_").is_err());
        assert!(FieldName::parse("offer", "offer_type_x1").is_err());
        assert!(FieldName::parse("offer", "offer__1").is_err());
        assert!(FieldName::parse("offer", "offer_3").is_err());
    }

    #[test]
    fn with_index_keeps_section_and_field() {
        let name = FieldName::new("offer", "frequency", 0).with_index(7);
        assert_eq!(name.to_string(), "offer_frequency_7");
    }
}
