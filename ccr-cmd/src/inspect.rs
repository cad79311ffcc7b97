//! `parse-field` and `monthly-values`.

use ccr_charts::monthly::{parse_monthly_values, tooltip_label};
use ccr_charts::ValueChartVariant;
use ccr_forms::FieldName;
use std::fmt::Write;

/// One line per part of the wire name.
pub fn parse_field(section: &str, raw: &str) -> anyhow::Result<String> {
    let name = FieldName::parse(section, raw)?;
    Ok(format!(
        "section: {}\nfield: {}\nindex: {}",
        name.section, name.field, name.index
    ))
}

/// Label printed for points past the variant's last label.
const NO_LABEL: &str = "(no label)";

/// One `label<TAB>value<TAB>tooltip` line per chart point.
pub fn monthly_values(json: &str, raw: bool) -> anyhow::Result<String> {
    let variant = if raw {
        ValueChartVariant::SavedView
    } else {
        ValueChartVariant::Recommendation
    };
    let values = parse_monthly_values(json)?;
    let series = variant.series(&values);
    log::debug!("{:?}: {} values, {} labels", variant, values.len(), series.labels.len());

    if series.values.len() > series.labels.len() {
        log::warn!(
            "expected at most {} monthly values, got {}; the chart leaves the rest unlabelled",
            series.labels.len(),
            series.values.len()
        );
    }

    let mut out = String::new();
    for (i, value) in series.values.iter().enumerate() {
        let label = series.labels.get(i).map(String::as_str).unwrap_or(NO_LABEL);
        let _ = writeln!(out, "{}\t{}\t{}", label, value, tooltip_label(*value));
    }
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        let out = parse_field("category", "category_name_3").unwrap();
        assert_eq!(out, "section: category\nfield: name\nindex: 3");
    }

    #[test]
    fn test_parse_field_rejects_other_section() {
        assert!(parse_field("offer", "category_name_3").is_err());
    }

    #[test]
    fn test_monthly_values_in_cents() {
        let out = monthly_values("[10050,20075]", false).unwrap();
        assert_eq!(out, "Month 1\t100\t$100\nMonth 2\t201\t$201");
    }

    #[test]
    fn test_monthly_values_raw() {
        let out = monthly_values("[12.5]", true).unwrap();
        let first = out.lines().next().unwrap();
        assert_eq!(first, "Month 1\t12.5\t$13");
    }

    #[test]
    fn test_monthly_values_raw_keeps_points_past_month_12() {
        let out = monthly_values("[1,2,3,4,5,6,7,8,9,10,11,12,13]", true).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[11], "Month 12\t12\t$12");
        assert_eq!(lines[12], "(no label)\t13\t$13");
    }

    #[test]
    fn test_monthly_values_malformed() {
        assert!(monthly_values("not json", false).is_err());
        assert!(monthly_values("[]", false).is_err());
    }
}
