//! One row of a repeating section.

use super::FieldControl;
use crate::state::FormState;
use ccr_forms::{Row, RowAction, RowSchema};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RowViewProps {
    pub schema: RowSchema,
    pub row: Row,
}

/// A row of fields plus its remove button. The button reports a
/// [`RowAction`] to the page-level dispatcher instead of removing itself.
#[component]
pub fn RowView(props: RowViewProps) -> Element {
    let mut state = use_context::<FormState>();
    let action = RowAction::remove(&props.schema, props.row.key());
    let section_id = props.schema.section.clone();
    let key = props.row.key();

    rsx! {
        div {
            class: "row mb-3 {props.schema.row_class}",
            for field in props.row.fields().iter().cloned() {
                FieldControl {
                    key: "{field.name}",
                    section_id: section_id.clone(),
                    row: key,
                    field,
                }
            }
            div {
                class: "col-md-1 d-flex align-items-end mb-2",
                button {
                    r#type: "button",
                    class: "btn btn-sm btn-outline-danger {props.schema.remove_action}",
                    onclick: move |_| state.dispatch(action.clone()),
                    "✕"
                }
            }
        }
    }
}
