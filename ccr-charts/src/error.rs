use thiserror::Error;

/// Problems with chart input. Callers log these as warnings and skip the
/// chart; they never reach the page.
#[derive(Debug, Error)]
pub enum ChartDataError {
    #[error("Failed to parse monthly values: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("No monthly values provided for chart.")]
    Missing,

    #[error("expected a JSON array of numbers")]
    NotAnArray,

    #[error("expected a JSON object of category amounts")]
    NotAnObject,

    #[error("value at position {0} is not a number")]
    NotNumeric(usize),
}
