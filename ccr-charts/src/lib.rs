//! Chart data for the card recommender pages.
//!
//! Everything here is plain data in, `serde_json::Value` out: the browser
//! apps hand the result to Chart.js or jQuery tablesorter through
//! `ccr_ui::js_bridge` and never inspect it further.
//!
//! - `monthly`: cumulative card value line charts (cents and raw variants)
//! - `spending`: spending breakdown doughnut
//! - `table`: sortable credit card table options

pub mod error;
pub mod monthly;
pub mod spending;
pub mod table;

pub use error::ChartDataError;
pub use monthly::{MonthlySeries, ValueChartVariant};
pub use spending::SpendingBreakdown;
pub use table::{SortDirection, SortableTableConfig};
