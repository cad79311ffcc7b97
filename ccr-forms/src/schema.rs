//! Field schemas for repeating rows.
//!
//! A `RowSchema` describes one row of a section in display order. Schemas
//! derive `Deserialize` so a page may hand its own layout to the app as JSON;
//! the card edit page uses the built-in [`RowSchema::category`] and
//! [`RowSchema::offer`] layouts.

use serde::{Deserialize, Serialize};

/// One `<option>` of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected: false,
        }
    }
}

/// Where a select field gets its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSource {
    /// Options listed in the schema.
    Static(Vec<SelectOption>),
    /// Options copied from the first rendered row that shows this field as a
    /// select. When no such row exists the field renders as a text input
    /// with the given placeholder.
    CloneExisting {
        #[serde(default)]
        fallback_placeholder: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputKind {
    Text {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Number {
        step: String,
        min: String,
        #[serde(default)]
        default: String,
    },
    Select {
        options: OptionSource,
    },
}

/// Bootstrap input-group text shown before or after a control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Addon {
    Prefix(String),
    Suffix(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field part of the wire name, e.g. `percentage`.
    pub name: String,
    pub label: String,
    #[serde(flatten)]
    pub kind: InputKind,
    #[serde(default)]
    pub addon: Option<Addon>,
    /// Bootstrap `col-md-*` span.
    #[serde(default = "default_column")]
    pub column: u8,
}

fn default_column() -> u8 {
    4
}

impl FieldDescriptor {
    pub fn text(name: &str, label: &str, placeholder: &str, column: u8) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: InputKind::Text {
                placeholder: Some(placeholder.to_string()),
            },
            addon: None,
            column,
        }
    }

    pub fn number(name: &str, label: &str, step: &str, min: &str, default: &str, column: u8) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: InputKind::Number {
                step: step.to_string(),
                min: min.to_string(),
                default: default.to_string(),
            },
            addon: None,
            column,
        }
    }

    pub fn select(name: &str, label: &str, options: OptionSource, column: u8) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: InputKind::Select { options },
            addon: None,
            column,
        }
    }

    pub fn with_addon(mut self, addon: Addon) -> Self {
        self.addon = Some(addon);
        self
    }
}

/// Layout of one row of a repeating section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowSchema {
    /// Section identifier, also the wire-name prefix.
    pub section: String,
    /// Class that marks an element as a row of this section.
    pub row_class: String,
    /// Action tag carried by the row's remove button.
    pub remove_action: String,
    pub fields: Vec<FieldDescriptor>,
}

impl RowSchema {
    /// Category rows: name (select cloned from the first row, or text),
    /// reward percentage.
    pub fn category() -> Self {
        Self {
            section: "category".to_string(),
            row_class: "category-row".to_string(),
            remove_action: "remove-category".to_string(),
            fields: vec![
                FieldDescriptor::select(
                    "name",
                    "Category",
                    OptionSource::CloneExisting {
                        fallback_placeholder: Some("e.g., Gas, Groceries".to_string()),
                    },
                    6,
                ),
                FieldDescriptor::number("percentage", "Reward Percentage", "0.1", "0", "0", 5)
                    .with_addon(Addon::Suffix("%".to_string())),
            ],
        }
    }

    /// Offer rows: type, amount, frequency.
    pub fn offer() -> Self {
        Self {
            section: "offer".to_string(),
            row_class: "offer-row".to_string(),
            remove_action: "remove-offer".to_string(),
            fields: vec![
                FieldDescriptor::text("type", "Offer Type", "e.g., Travel Credit", 4),
                FieldDescriptor::number("amount", "Amount", "0.01", "0", "0", 3)
                    .with_addon(Addon::Prefix("$".to_string())),
                FieldDescriptor::select(
                    "frequency",
                    "Frequency",
                    OptionSource::Static(vec![
                        SelectOption::new("one_time", "One Time"),
                        SelectOption::new("annual", "Annual"),
                        SelectOption::new("monthly", "Monthly"),
                    ]),
                    4,
                ),
            ],
        }
    }

    pub fn descriptor(&self, field: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|d| d.name == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_layouts_match_card_form() {
        let category = RowSchema::category();
        assert_eq!(category.section, "category");
        assert_eq!(category.remove_action, "remove-category");
        assert_eq!(category.fields.len(), 2);
        assert_eq!(
            category.descriptor("percentage").unwrap().addon,
            Some(Addon::Suffix("%".to_string()))
        );

        let offer = RowSchema::offer();
        let names: Vec<_> = offer.fields.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["type", "amount", "frequency"]);
        match &offer.descriptor("frequency").unwrap().kind {
            InputKind::Select {
                options: OptionSource::Static(options),
            } => {
                let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, ["one_time", "annual", "monthly"]);
            }
            other => panic!("frequency should be a static select, got {:?}", other),
        }
    }

    #[test]
    fn schema_loads_from_json() {
        let json = r#"{
            "section": "perk",
            "row_class": "perk-row",
            "remove_action": "remove-perk",
            "fields": [
                {"name": "title", "label": "Perk", "kind": "text", "placeholder": "Lounge access", "column": 6},
                {"name": "value", "label": "Value", "kind": "number", "step": "1", "min": "0", "addon": {"prefix": "$"}},
                {"name": "tier", "label": "Tier", "kind": "select",
                 "options": {"static": [{"value": "gold", "label": "Gold"}]}}
            ]
        }"#;
        let schema: RowSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.fields.len(), 3);
        assert_eq!(schema.fields[1].column, 4);
        assert_eq!(schema.fields[1].addon, Some(Addon::Prefix("$".to_string())));
        assert!(matches!(
            schema.fields[2].kind,
            InputKind::Select {
                options: OptionSource::Static(_)
            }
        ));
    }
}
