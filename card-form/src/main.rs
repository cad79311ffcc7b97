//! Card edit page: reward category rows and special offer rows.
//!
//! The Flask template renders the card form with its existing rows inside
//! `#card-form-sections`, which sits inside the `<form>` element. Submitted
//! field names (`category_name_0`, `offer_amount_2`, ...) are what the
//! admin card view parses, so the apps keep them exactly.
//!
//! Data flow:
//! 1. Before launch, `DomPage` reads the server-rendered rows of each
//!    section whose add button is on the page. A section without one is
//!    skipped silently.
//! 2. The bound sections go into `FormState`; Dioxus then replaces the
//!    mount root with the same markup, now driven by the section model.
//! 3. Add buttons append a row indexed by the current row count; remove
//!    buttons report to the page-level dispatcher, which leaves the other
//!    rows' indices alone.

use ccr_forms::{Section, SectionConfig};
use ccr_ui::components::RepeatingSection;
use ccr_ui::page::DomPage;
use ccr_ui::state::FormState;
use dioxus::prelude::*;

/// Mount root rendered by the template around both sections.
const ROOT_ID: &str = "card-form-sections";

/// Sections read from the page before Dioxus took over the root.
#[derive(Clone)]
struct BoundSections(Vec<Section>);

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    let sections = bind_sections();
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .with_context(BoundSections(sections))
        .launch(App);
}

fn bind_sections() -> Vec<Section> {
    let Some(page) = DomPage::new() else {
        log::warn!("[CCR] card-form: no document, nothing to bind");
        return Vec::new();
    };
    [SectionConfig::category(), SectionConfig::offer()]
        .into_iter()
        .filter_map(|config| Section::initialize(&page, config))
        .collect()
}

#[component]
fn App() -> Element {
    let bound = use_context::<BoundSections>();
    use_context_provider(move || FormState::new(bound.0));

    rsx! {
        RepeatingSection {
            section_id: "category".to_string(),
            title: "Reward Categories".to_string(),
            add_label: "Add Category".to_string(),
        }
        RepeatingSection {
            section_id: "offer".to_string(),
            title: "Special Offers".to_string(),
            add_label: "Add Offer".to_string(),
        }
    }
}
