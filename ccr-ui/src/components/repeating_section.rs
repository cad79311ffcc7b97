//! Container and add button of one repeating section.

use super::RowView;
use crate::state::FormState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RepeatingSectionProps {
    /// Section identifier, e.g. `category`
    pub section_id: String,
    /// Heading shown above the rows
    pub title: String,
    /// Text of the add button
    pub add_label: String,
}

/// Renders the section's rows and add control. Renders nothing when the
/// section was not bound on this page.
#[component]
pub fn RepeatingSection(props: RepeatingSectionProps) -> Element {
    let mut state = use_context::<FormState>();
    let Some(section) = state.section(&props.section_id) else {
        return rsx! {};
    };
    let config = section.config().clone();
    let schema = section.schema().clone();
    let section_id = props.section_id.clone();

    rsx! {
        div {
            class: "mb-4",
            h5 { "{props.title}" }
            div {
                id: "{config.container_id}",
                for row in section.rows().iter().cloned() {
                    RowView {
                        key: "{row.key()}",
                        schema: schema.clone(),
                        row,
                    }
                }
            }
            button {
                r#type: "button",
                id: "{config.add_control_id}",
                class: "btn btn-sm btn-outline-primary",
                onclick: move |_| state.append(&section_id),
                "{props.add_label}"
            }
        }
    }
}
