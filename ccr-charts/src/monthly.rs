//! Cumulative card value line charts.
//!
//! Two pages draw this chart into `#valueChart`:
//!
//! - the recommendation page, whose `data-monthly-values` are in cents and
//!   are shown as whole dollars with one label per value;
//! - the saved recommendation view, whose values are already dollars, may
//!   come from the `window.monthlyValues` global instead, and always uses the
//!   twelve first-year labels.

use crate::error::ChartDataError;
use serde_json::{json, Value};

/// Canvas both variants render into.
pub const VALUE_CANVAS_ID: &str = "valueChart";
/// Attribute on the canvas carrying the JSON array.
pub const MONTHLY_VALUES_ATTR: &str = "data-monthly-values";
/// Global the view page falls back to.
pub const MONTHLY_VALUES_GLOBAL: &str = "monthlyValues";

/// Read a JSON array of numbers.
pub fn values_from_json(value: &Value) -> Result<Vec<f64>, ChartDataError> {
    let items = value.as_array().ok_or(ChartDataError::NotAnArray)?;
    items
        .iter()
        .enumerate()
        .map(|(i, v)| v.as_f64().ok_or(ChartDataError::NotNumeric(i)))
        .collect()
}

/// Parse the `data-monthly-values` attribute. An empty array is `Missing`.
pub fn parse_monthly_values(raw: &str) -> Result<Vec<f64>, ChartDataError> {
    let value: Value = serde_json::from_str(raw)?;
    let values = values_from_json(&value)?;
    if values.is_empty() {
        return Err(ChartDataError::Missing);
    }
    Ok(values)
}

/// Cents to whole dollars. Halves round to the even dollar.
pub fn cents_to_dollars(cents: f64) -> f64 {
    (cents / 100.0).round_ties_even()
}

/// Tooltip text for a point, rounded like the browser's `Math.round`.
pub fn tooltip_label(value: f64) -> String {
    format!("${}", (value + 0.5).floor())
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueChartVariant {
    /// Recommendation page: cents, attribute only.
    Recommendation,
    /// Saved recommendation view: raw dollars, attribute then global.
    SavedView,
}

impl ValueChartVariant {
    /// Pick the chart input from the canvas attribute and, for the view
    /// page, the global fallback.
    pub fn resolve(self, attribute: Option<&str>, global: Option<&Value>) -> Result<Vec<f64>, ChartDataError> {
        match self {
            ValueChartVariant::Recommendation => {
                parse_monthly_values(attribute.ok_or(ChartDataError::Missing)?)
            }
            ValueChartVariant::SavedView => {
                let from_attribute = match attribute.filter(|a| !a.is_empty()) {
                    Some(raw) => match parse_monthly_values(raw) {
                        Ok(values) => Some(values),
                        Err(ChartDataError::Missing) => None,
                        Err(ChartDataError::Malformed(e)) => {
                            log::warn!("[CCR] monthly values attribute unreadable: {}", e);
                            None
                        }
                        // valid JSON of the wrong shape does not fall back
                        Err(e) => return Err(e),
                    },
                    None => None,
                };
                if let Some(values) = from_attribute {
                    return Ok(values);
                }
                let values = values_from_json(global.ok_or(ChartDataError::Missing)?)?;
                if values.is_empty() {
                    return Err(ChartDataError::Missing);
                }
                Ok(values)
            }
        }
    }

    pub fn series(self, raw: &[f64]) -> MonthlySeries {
        match self {
            ValueChartVariant::Recommendation => MonthlySeries {
                labels: (1..=raw.len()).map(|m| format!("Month {}", m)).collect(),
                values: raw.iter().copied().map(cents_to_dollars).collect(),
            },
            ValueChartVariant::SavedView => MonthlySeries {
                labels: (1..=12).map(|m| format!("Month {}", m)).collect(),
                values: raw.to_vec(),
            },
        }
    }

    /// Chart.js line config. Dollar tick and tooltip callbacks are attached
    /// by the bridge since functions cannot travel as JSON.
    pub fn chart_config(self, series: &MonthlySeries) -> Value {
        match self {
            ValueChartVariant::Recommendation => json!({
                "type": "line",
                "data": {
                    "labels": series.labels,
                    "datasets": [{
                        "label": "Cumulative Value ($)",
                        "data": series.values,
                        "backgroundColor": "rgba(75, 192, 192, 0.2)",
                        "borderColor": "rgba(75, 192, 192, 1)",
                        "borderWidth": 2,
                        "pointRadius": 3,
                        "pointBackgroundColor": "rgba(75, 192, 192, 1)",
                        "tension": 0.1
                    }]
                },
                "options": {
                    "responsive": true,
                    "maintainAspectRatio": false,
                    "scales": { "y": { "beginAtZero": true } }
                }
            }),
            ValueChartVariant::SavedView => json!({
                "type": "line",
                "data": {
                    "labels": series.labels,
                    "datasets": [{
                        "label": "Cumulative Value ($)",
                        "data": series.values,
                        "borderColor": "rgb(54, 162, 235)",
                        "backgroundColor": "rgba(54, 162, 235, 0.1)",
                        "tension": 0.1,
                        "fill": true
                    }]
                },
                "options": {
                    "responsive": true,
                    "plugins": {
                        "title": {
                            "display": true,
                            "text": "Cumulative Card Value Over First Year"
                        }
                    },
                    "scales": { "y": { "beginAtZero": true } }
                }
            }),
        }
    }
}
