//! Reusable Dioxus RSX components for the card recommender apps.

mod chart_canvas;
mod field_control;
mod repeating_section;
mod row_view;

pub use chart_canvas::ChartCanvas;
pub use field_control::FieldControl;
pub use repeating_section::RepeatingSection;
pub use row_view::RowView;
