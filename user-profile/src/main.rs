//! User profile page: monthly spending by category.
//!
//! The template renders one number input per spending category
//! (`id="category_<name>"`), the `total_monthly_spend` input and the
//! `spending-warning` alert inside `#spending-root`, and the
//! `spending-chart` canvas elsewhere on the page.
//!
//! - The total is always the sum of the category inputs, recalculated on
//!   load and on every input. Unparseable inputs count as zero.
//! - The warning is hidden after every recalculation.
//! - The doughnut reads `data-category-spending` on the canvas, falling back
//!   to `window.categorySpending`. Categories at zero are left out, and an
//!   empty breakdown draws nothing.
//! - Bootstrap tooltips are enabled for the whole page.

use ccr_charts::spending::{SPENDING_ATTR, SPENDING_CANVAS_ID, SPENDING_GLOBAL};
use ccr_charts::SpendingBreakdown;
use ccr_forms::spending::{category_total, format_total, SpendingInput};
use ccr_ui::{js_bridge, page};
use dioxus::prelude::*;

const ROOT_ID: &str = "spending-root";
const TOTAL_ID: &str = "total_monthly_spend";
const WARNING_ID: &str = "spending-warning";

/// What the template rendered inside the mount root.
#[derive(Clone, Debug, Default)]
struct ProfilePage {
    inputs: Vec<SpendingInput>,
    has_total: bool,
    warning: Option<String>,
}

impl ProfilePage {
    fn read() -> Self {
        Self {
            inputs: page::spending_inputs(),
            has_total: page::element_by_id(TOTAL_ID).is_some(),
            warning: page::element_by_id(WARNING_ID)
                .map(|el| el.text_content().unwrap_or_default().trim().to_string()),
        }
    }
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    let initial = ProfilePage::read();
    log::info!("[CCR] user-profile: {} spending categories", initial.inputs.len());
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .with_context(initial)
        .launch(App);
}

/// Spending breakdown from the canvas attribute or the page global.
fn spending_breakdown() -> Option<SpendingBreakdown> {
    let from_attribute = page::data_attribute(SPENDING_CANVAS_ID, SPENDING_ATTR)
        .filter(|raw| !raw.trim().is_empty())
        .and_then(|raw| match SpendingBreakdown::from_json(&raw) {
            Ok(breakdown) => Some(breakdown),
            Err(e) => {
                log::warn!("[CCR] {} unreadable: {}", SPENDING_ATTR, e);
                None
            }
        });
    if from_attribute.is_some() {
        return from_attribute;
    }
    let global = page::global_json(SPENDING_GLOBAL)?;
    match SpendingBreakdown::from_value(&global) {
        Ok(breakdown) => Some(breakdown),
        Err(e) => {
            log::warn!("[CCR] window.{} unreadable: {}", SPENDING_GLOBAL, e);
            None
        }
    }
}

#[component]
fn App() -> Element {
    let initial = use_context::<ProfilePage>();
    let inputs = use_signal(|| initial.inputs.clone());
    let total = use_memo(move || category_total(&inputs.read()));

    use_effect(move || {
        js_bridge::enable_tooltips();
        if page::element_by_id(SPENDING_CANVAS_ID).is_none() {
            return;
        }
        let Some(breakdown) = spending_breakdown() else {
            return;
        };
        if breakdown.is_empty() {
            log::debug!("[CCR] no spending above zero, skipping doughnut");
            return;
        }
        match serde_json::to_string(&breakdown.chart_config()) {
            Ok(config) => js_bridge::render_chart(SPENDING_CANVAS_ID, &config, false),
            Err(e) => log::error!("[CCR] failed to serialize spending chart config: {}", e),
        }
    });

    let count = inputs.read().len();
    let total_text = format_total(total());

    rsx! {
        for position in 0..count {
            SpendingField { key: "{position}", inputs, position }
        }
        if initial.has_total {
            div {
                class: "mb-3",
                label { r#for: TOTAL_ID, class: "form-label", "Total Monthly Spend" }
                div {
                    class: "input-group",
                    span { class: "input-group-text", "$" }
                    input {
                        r#type: "number",
                        step: "0.01",
                        min: "0",
                        class: "form-control",
                        id: TOTAL_ID,
                        name: TOTAL_ID,
                        value: "{total_text}",
                    }
                }
            }
        }
        if let Some(warning) = initial.warning.clone() {
            div {
                id: WARNING_ID,
                class: "alert alert-warning",
                style: "display: none;",
                "{warning}"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SpendingFieldProps {
    inputs: Signal<Vec<SpendingInput>>,
    position: usize,
}

/// One category input; every keystroke updates the shared list.
#[component]
fn SpendingField(props: SpendingFieldProps) -> Element {
    let mut inputs = props.inputs;
    let position = props.position;
    let Some(input) = inputs.read().get(position).cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "mb-3",
            label { r#for: "{input.id}", class: "form-label", "{input.label}" }
            div {
                class: "input-group",
                span { class: "input-group-text", "$" }
                input {
                    r#type: "number",
                    step: "0.01",
                    min: "0",
                    class: "form-control",
                    id: "{input.id}",
                    name: "{input.name}",
                    value: "{input.value}",
                    oninput: move |evt: Event<FormData>| {
                        if let Some(entry) = inputs.write().get_mut(position) {
                            entry.value = evt.value();
                        }
                    },
                }
            }
        }
    }
}
