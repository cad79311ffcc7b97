//! Structured row model.
//!
//! Rows are built from data rather than markup strings; the HTML serializer,
//! the Dioxus views and DOM hydration all read and write this model.

use crate::naming::FieldName;
use crate::schema::{Addon, FieldDescriptor, InputKind, OptionSource, RowSchema, SelectOption};
use std::fmt;

/// Internal row identity. Never rendered and never reused within a section,
/// unlike the wire index which can collide after a remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub(crate) u64);

impl RowKey {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Text {
        placeholder: Option<String>,
        value: String,
    },
    Number {
        step: String,
        min: String,
        value: String,
    },
    Select {
        options: Vec<SelectOption>,
    },
}

impl Control {
    pub fn is_select(&self) -> bool {
        matches!(self, Control::Select { .. })
    }

    /// Clear every `selected` marker.
    pub fn strip_selection(&mut self) {
        if let Control::Select { options } = self {
            for option in options.iter_mut() {
                option.selected = false;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: FieldName,
    pub label: String,
    pub control: Control,
    pub addon: Option<Addon>,
    pub column: u8,
}

impl Field {
    pub fn from_descriptor(descriptor: &FieldDescriptor, name: FieldName, control: Control) -> Self {
        Self {
            name,
            label: descriptor.label.clone(),
            control,
            addon: descriptor.addon.clone(),
            column: descriptor.column,
        }
    }

    /// Current value as the browser would submit it. A select with nothing
    /// marked submits its first option.
    pub fn value(&self) -> &str {
        match &self.control {
            Control::Text { value, .. } | Control::Number { value, .. } => value,
            Control::Select { options } => options
                .iter()
                .find(|o| o.selected)
                .or_else(|| options.first())
                .map(|o| o.value.as_str())
                .unwrap_or(""),
        }
    }

    pub fn set_value(&mut self, new_value: &str) {
        match &mut self.control {
            Control::Text { value, .. } | Control::Number { value, .. } => {
                *value = new_value.to_string();
            }
            Control::Select { options } => {
                for option in options.iter_mut() {
                    option.selected = option.value == new_value;
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub(crate) key: RowKey,
    pub(crate) index: usize,
    pub(crate) fields: Vec<Field>,
}

impl Row {
    pub fn key(&self) -> RowKey {
        self.key
    }

    /// Wire index shared by every field of this row.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, field: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.field == field)
    }

    pub fn field_mut(&mut self, field: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name.field == field)
    }

    /// Wire names of every field, in display order.
    pub fn names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.to_string()).collect()
    }
}

/// Build the fields of a new row from the schema.
///
/// Select fields whose options come from [`OptionSource::CloneExisting`] copy
/// them from the first row in `existing` that renders that field as a select.
pub(crate) fn synthesize_fields(schema: &RowSchema, index: usize, existing: &[Row]) -> Vec<Field> {
    schema
        .fields
        .iter()
        .map(|descriptor| {
            let name = FieldName::new(&schema.section, &descriptor.name, index);
            let control = match &descriptor.kind {
                InputKind::Text { placeholder } => Control::Text {
                    placeholder: placeholder.clone(),
                    value: String::new(),
                },
                InputKind::Number { step, min, default } => Control::Number {
                    step: step.clone(),
                    min: min.clone(),
                    value: default.clone(),
                },
                InputKind::Select {
                    options: OptionSource::Static(options),
                } => Control::Select {
                    options: options.clone(),
                },
                InputKind::Select {
                    options: OptionSource::CloneExisting { fallback_placeholder },
                } => match existing
                    .iter()
                    .filter_map(|row| row.field(&descriptor.name))
                    .find(|f| f.control.is_select())
                {
                    Some(source) => {
                        let mut control = source.control.clone();
                        control.strip_selection();
                        control
                    }
                    None => Control::Text {
                        placeholder: fallback_placeholder.clone(),
                        value: String::new(),
                    },
                },
            };
            Field::from_descriptor(descriptor, name, control)
        })
        .collect()
}

/// Structural copy of `row` relabelled for `index`: names rewritten,
/// selection stripped, text cleared, numbers back at the schema default.
pub(crate) fn relabel_fields(schema: &RowSchema, row: &Row, index: usize) -> Vec<Field> {
    row.fields
        .iter()
        .map(|field| {
            let mut copy = field.clone();
            copy.name = field.name.with_index(index);
            match &mut copy.control {
                Control::Text { value, .. } => value.clear(),
                Control::Number { value, .. } => {
                    *value = match schema.descriptor(&field.name.field).map(|d| &d.kind) {
                        Some(InputKind::Number { default, .. }) => default.clone(),
                        _ => String::new(),
                    };
                }
                select => select.strip_selection(),
            }
            copy
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_row_with_select() -> Row {
        let schema = RowSchema::category();
        let mut fields = synthesize_fields(&schema, 0, &[]);
        fields[0].control = Control::Select {
            options: vec![
                SelectOption::new("dining", "Dining"),
                SelectOption {
                    value: "gas".to_string(),
                    label: "Gas".to_string(),
                    selected: true,
                },
            ],
        };
        Row {
            key: RowKey(0),
            index: 0,
            fields,
        }
    }

    #[test]
    fn synthesize_without_template_falls_back_to_text() {
        let fields = synthesize_fields(&RowSchema::category(), 3, &[]);
        assert_eq!(fields[0].name.to_string(), "category_name_3");
        assert_eq!(
            fields[0].control,
            Control::Text {
                placeholder: Some("e.g., Gas, Groceries".to_string()),
                value: String::new(),
            }
        );
        assert_eq!(fields[1].name.to_string(), "category_percentage_3");
        assert_eq!(fields[1].value(), "0");
    }

    #[test]
    fn synthesize_clones_template_select_without_selection() {
        let template = category_row_with_select();
        let fields = synthesize_fields(&RowSchema::category(), 1, std::slice::from_ref(&template));
        match &fields[0].control {
            Control::Select { options } => {
                assert_eq!(options.len(), 2);
                assert!(options.iter().all(|o| !o.selected));
            }
            other => panic!("expected select, got {:?}", other),
        }
        // the template keeps its own selection
        assert_eq!(template.field("name").unwrap().value(), "gas");
    }

    #[test]
    fn relabel_rewrites_names_and_clears_state() {
        let mut template = category_row_with_select();
        template.field_mut("percentage").unwrap().set_value("3");
        let fields = relabel_fields(&RowSchema::category(), &template, 5);
        assert_eq!(fields[0].name.to_string(), "category_name_5");
        assert_eq!(fields[1].name.to_string(), "category_percentage_5");
        assert_eq!(fields[1].value(), "0");
        assert_eq!(fields[0].value(), "dining");
    }

    #[test]
    fn select_value_follows_set_value() {
        let mut row = category_row_with_select();
        let field = row.field_mut("name").unwrap();
        field.set_value("dining");
        assert_eq!(field.value(), "dining");
        field.set_value("unknown");
        // nothing selected: first option submits
        assert_eq!(field.value(), "dining");
    }
}
