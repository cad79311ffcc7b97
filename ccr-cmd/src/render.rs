//! `slug` and `render-row`.

use crate::SectionKind;
use ccr_forms::{html, Control, Field, FieldName, InputKind, OptionSource, RowSchema, SelectOption};
use ccr_forms::{Section, SectionConfig};
use log::info;

pub fn slug(display_name: &str) -> String {
    ccr_forms::slug::slugify(display_name)
}

fn config(kind: SectionKind) -> SectionConfig {
    match kind {
        SectionKind::Category => SectionConfig::category(),
        SectionKind::Offer => SectionConfig::offer(),
    }
}

/// A server-rendered row at index 0 whose cloned selects list `options`.
fn template_row(schema: &RowSchema, options: &[String]) -> Vec<Field> {
    schema
        .fields
        .iter()
        .map(|descriptor| {
            let name = FieldName::new(schema.section.as_str(), descriptor.name.as_str(), 0);
            let control = match &descriptor.kind {
                InputKind::Select {
                    options: OptionSource::CloneExisting { .. },
                } => Control::Select {
                    options: options
                        .iter()
                        .map(|o| SelectOption::new(o.as_str(), o.as_str()))
                        .collect(),
                },
                InputKind::Select {
                    options: OptionSource::Static(fixed),
                } => Control::Select {
                    options: fixed.clone(),
                },
                InputKind::Number { step, min, default } => Control::Number {
                    step: step.clone(),
                    min: min.clone(),
                    value: default.clone(),
                },
                InputKind::Text { placeholder } => Control::Text {
                    placeholder: placeholder.clone(),
                    value: String::new(),
                },
            };
            Field::from_descriptor(descriptor, name, control)
        })
        .collect()
}

/// HTML of the row appended to a section that already shows `index` rows.
///
/// With `select_options` the first existing row renders its name as a
/// select over those options, so at least one existing row is required.
pub fn render_row(
    kind: SectionKind,
    index: usize,
    select_options: Option<&[String]>,
) -> anyhow::Result<String> {
    let mut section = Section::new(config(kind));
    if let Some(options) = select_options {
        if index == 0 {
            anyhow::bail!("--select-options needs an existing row to clone from; pass --index 1 or more");
        }
        section.adopt(template_row(section.schema(), options));
    }
    let row = section.draft_row(index);
    info!("Rendered {} row {}", section.id(), row.index());
    Ok(html::render_row(section.schema(), &row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Gas & Groceries"), "gas_groceries");
    }

    #[test]
    fn test_render_row_uses_index() {
        let html = render_row(SectionKind::Offer, 2, None).unwrap();
        assert!(html.contains(r#"name="offer_type_2""#));
        assert!(html.contains(r#"name="offer_amount_2""#));
        assert!(html.contains(r#"name="offer_frequency_2""#));
        assert!(html.contains("remove-offer"));
    }

    #[test]
    fn test_render_row_builds_only_the_requested_row() {
        let html = render_row(SectionKind::Offer, usize::MAX, None).unwrap();
        assert!(html.contains(&format!(r#"name="offer_amount_{}""#, usize::MAX)));
        assert_eq!(html.matches("offer-row").count(), 1);
    }

    #[test]
    fn test_render_row_without_options_falls_back_to_text() {
        let html = render_row(SectionKind::Category, 0, None).unwrap();
        assert!(html.contains(r#"name="category_name_0""#));
        assert!(html.contains("e.g., Gas, Groceries"));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn test_render_row_clones_select_options() {
        let options = vec!["gas".to_string(), "dining".to_string()];
        let html = render_row(SectionKind::Category, 1, Some(&options)).unwrap();
        assert!(html.contains(r#"name="category_name_1""#));
        assert!(html.contains(r#"<option value="dining">dining</option>"#));
        assert!(!html.contains("selected"));
    }

    #[test]
    fn test_render_row_options_need_existing_row() {
        let options = vec!["gas".to_string()];
        assert!(render_row(SectionKind::Category, 0, Some(&options)).is_err());
    }
}
