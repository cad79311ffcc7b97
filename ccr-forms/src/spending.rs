//! Monthly spending totals on the user profile form.
//!
//! The total field always mirrors the sum of the category inputs, so the
//! mismatch warning never needs to show after a recalculation.

use regex::Regex;
use std::sync::OnceLock;

/// Read a number the way a browser `parseFloat` does: the longest numeric
/// prefix after leading whitespace, or `None` when there is none.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let number = NUMBER.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("number pattern is a literal")
    });
    number
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// One category spending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingInput {
    /// Element id, `category_<key>`.
    pub id: String,
    /// Submitted name.
    pub name: String,
    pub label: String,
    pub value: String,
}

impl SpendingInput {
    /// Parsed amount; empty or non-numeric input counts as zero.
    pub fn amount(&self) -> f64 {
        parse_float_prefix(&self.value).unwrap_or(0.0)
    }
}

/// Sum of all category inputs, starting from `0.0` so that no inputs
/// formats as `0.00` rather than `-0.00`.
pub fn category_total(inputs: &[SpendingInput]) -> f64 {
    inputs.iter().fold(0.0, |total, input| total + input.amount())
}

/// Value written into the total input.
pub fn format_total(total: f64) -> String {
    format!("{:.2}", total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(key: &str, value: &str) -> SpendingInput {
        SpendingInput {
            id: format!("category_{key}"),
            name: format!("category_{key}"),
            label: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn parse_float_prefix_matches_browser() {
        assert_eq!(parse_float_prefix("12.5"), Some(12.5));
        assert_eq!(parse_float_prefix("  7"), Some(7.0));
        assert_eq!(parse_float_prefix("12abc"), Some(12.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("-3.25e2x"), Some(-325.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn total_treats_blank_as_zero() {
        let inputs = vec![
            input("dining", "250"),
            input("gas", ""),
            input("groceries", "410.75"),
            input("travel", "n/a"),
        ];
        assert_eq!(category_total(&inputs), 660.75);
        assert_eq!(format_total(category_total(&inputs)), "660.75");
    }

    #[test]
    fn empty_profile_totals_zero() {
        assert_eq!(format_total(category_total(&[])), "0.00");
        assert!(category_total(&[]).is_sign_positive());
        assert_eq!(format_total(category_total(&[input("gas", "abc")])), "0.00");
    }
}
