//! Cumulative card value chart on the recommendation page.
//!
//! The template renders `<canvas id="valueChart" data-monthly-values="...">`
//! inside `#value-chart-root`, with one cumulative value per month in cents.
//! The chart shows dollars, labelled `Month 1` to `Month N`.
//!
//! Data flow:
//! 1. Before launch the attribute is read off the server-rendered canvas.
//!    No canvas means no chart; the app is not launched.
//! 2. Missing or malformed values are logged and the canvas is left as is.
//! 3. Otherwise Dioxus renders the canvas again and an effect hands the
//!    Chart.js config to `js_bridge::render_chart`.

use ccr_charts::monthly::{MONTHLY_VALUES_ATTR, VALUE_CANVAS_ID};
use ccr_charts::ValueChartVariant;
use ccr_ui::components::ChartCanvas;
use ccr_ui::{js_bridge, page};
use dioxus::prelude::*;

const ROOT_ID: &str = "value-chart-root";

/// Chart.js config built before launch.
#[derive(Clone)]
struct ChartConfig(String);

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let Some(canvas) = page::element_by_id(VALUE_CANVAS_ID) else {
        log::warn!("No valueChart canvas found.");
        return;
    };
    let variant = ValueChartVariant::Recommendation;
    let attribute = canvas.get_attribute(MONTHLY_VALUES_ATTR);
    let values = match variant.resolve(attribute.as_deref(), None) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("[CCR] {}", e);
            return;
        }
    };
    let series = variant.series(&values);
    let config = match serde_json::to_string(&variant.chart_config(&series)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("[CCR] failed to serialize value chart config: {}", e);
            return;
        }
    };
    log::info!("[CCR] value chart: {} months", series.labels.len());

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .with_context(ChartConfig(config))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<ChartConfig>();

    use_effect(move || {
        js_bridge::render_chart(VALUE_CANVAS_ID, &config.0, true);
    });

    rsx! {
        ChartCanvas { id: VALUE_CANVAS_ID.to_string() }
    }
}
