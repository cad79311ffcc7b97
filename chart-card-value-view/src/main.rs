//! Cumulative card value chart on the saved recommendation view.
//!
//! Values here are already in dollars. They come from the canvas's
//! `data-monthly-values` attribute or, when that is absent or unreadable,
//! from the `window.monthlyValues` global the template may define instead.
//! The x axis is always `Month 1` to `Month 12`.

use ccr_charts::monthly::{MONTHLY_VALUES_ATTR, MONTHLY_VALUES_GLOBAL, VALUE_CANVAS_ID};
use ccr_charts::ValueChartVariant;
use ccr_ui::components::ChartCanvas;
use ccr_ui::{js_bridge, page};
use dioxus::prelude::*;

const ROOT_ID: &str = "value-chart-root";

#[derive(Clone)]
struct ChartConfig(String);

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let Some(canvas) = page::element_by_id(VALUE_CANVAS_ID) else {
        log::warn!("No valueChart canvas found.");
        return;
    };
    let variant = ValueChartVariant::SavedView;
    let attribute = canvas.get_attribute(MONTHLY_VALUES_ATTR);
    let global = page::global_json(MONTHLY_VALUES_GLOBAL);
    let values = match variant.resolve(attribute.as_deref(), global.as_ref()) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("[CCR] {}", e);
            return;
        }
    };
    if values.len() != 12 {
        log::warn!("[CCR] expected 12 monthly values, got {}", values.len());
    }
    let series = variant.series(&values);
    let config = match serde_json::to_string(&variant.chart_config(&series)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("[CCR] failed to serialize value chart config: {}", e);
            return;
        }
    };

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
