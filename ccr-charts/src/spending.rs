//! Spending breakdown doughnut on the user profile page.

use crate::error::ChartDataError;
use serde_json::{json, Map, Value};

pub const SPENDING_CANVAS_ID: &str = "spending-chart";
/// Attribute on the canvas carrying `{category: monthly amount}`.
pub const SPENDING_ATTR: &str = "data-category-spending";
/// Global the template may set instead.
pub const SPENDING_GLOBAL: &str = "categorySpending";

pub const PALETTE: [&str; 10] = [
    "#4e73df", "#1cc88a", "#36b9cc", "#f6c23e", "#e74a3b", "#6f42c1", "#5a5c69", "#8fd19e",
    "#f8f9fc", "#858796",
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpendingBreakdown {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

fn capitalize(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl SpendingBreakdown {
    /// Keep categories with a positive amount, in the order given.
    pub fn from_map(spending: &Map<String, Value>) -> Self {
        let mut breakdown = Self::default();
        for (category, value) in spending {
            match amount(value) {
                Some(v) if v > 0.0 => {
                    breakdown.labels.push(capitalize(category));
                    breakdown.values.push(v);
                }
                _ => {}
            }
        }
        breakdown
    }

    pub fn from_value(value: &Value) -> Result<Self, ChartDataError> {
        value
            .as_object()
            .map(Self::from_map)
            .ok_or(ChartDataError::NotAnObject)
    }

    pub fn from_json(raw: &str) -> Result<Self, ChartDataError> {
        Self::from_value(&serde_json::from_str(raw)?)
    }

    /// Nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn chart_config(&self) -> Value {
        json!({
            "type": "doughnut",
            "data": {
                "labels": self.labels,
                "datasets": [{
                    "data": self.values,
                    "backgroundColor": PALETTE
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": {
                    "legend": {
                        "position": "right",
                        "labels": { "boxWidth": 12 }
                    },
                    "title": {
                        "display": true,
                        "text": "Your Spending Breakdown"
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_zero_and_keeps_order() {
        let breakdown = SpendingBreakdown::from_json(
            r#"{"groceries": 400, "gas": 0, "dining": "125.5", "travel": -3, "streaming": null}"#,
        )
        .unwrap();
        assert_eq!(breakdown.labels, vec!["Groceries", "Dining"]);
        assert_eq!(breakdown.values, vec![400.0, 125.5]);
    }

    #[test]
    fn all_zero_draws_nothing() {
        let breakdown = SpendingBreakdown::from_json(r#"{"gas": 0}"#).unwrap();
        assert!(breakdown.is_empty());
    }

    #[test]
    fn rejects_non_object() {
        assert!(matches!(
            SpendingBreakdown::from_json("[1,2]"),
            Err(ChartDataError::NotAnObject)
        ));
        assert!(matches!(
            SpendingBreakdown::from_json("{"),
            Err(ChartDataError::Malformed(_))
        ));
    }

    #[test]
    fn doughnut_config() {
        let breakdown = SpendingBreakdown::from_json(r#"{"online_shopping": 80}"#).unwrap();
        let config = breakdown.chart_config();
        assert_eq!(config["type"], "doughnut");
        assert_eq!(config["data"]["labels"][0], "Online_shopping");
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"][0], "#4e73df");
        assert_eq!(config["options"]["plugins"]["legend"]["position"], "right");
    }
}
