//! Sortable credit card table.
//!
//! The card list is rendered by the server as `table#creditCardTable`. This
//! app owns no markup; it launches into an empty `#credit-card-table-root`
//! and attaches jQuery tablesorter with the Bootstrap theme, zebra rows and
//! an initial ascending sort on the first column. The bonus categories
//! column (index 5) is not sortable.

use ccr_charts::table::CREDIT_CARD_TABLE_ID;
use ccr_charts::SortableTableConfig;
use ccr_ui::{js_bridge, page};
use dioxus::prelude::*;

const ROOT_ID: &str = "credit-card-table-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    if page::element_by_id(CREDIT_CARD_TABLE_ID).is_none() {
        log::debug!("[CCR] no {} on this page", CREDIT_CARD_TABLE_ID);
        return;
    }
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_effect(move || {
        let options = SortableTableConfig::credit_cards().to_options();
        match serde_json::to_string(&options) {
            Ok(json) => js_bridge::init_table_sorter(CREDIT_CARD_TABLE_ID, &json),
            Err(e) => log::error!("[CCR] failed to serialize tablesorter options: {}", e),
        }
    });

    rsx! {}
}
