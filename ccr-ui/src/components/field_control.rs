//! One labelled field of a repeating row.

use crate::state::FormState;
use ccr_forms::{Addon, Control, Field, RowKey};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FieldControlProps {
    pub section_id: String,
    pub row: RowKey,
    pub field: Field,
}

/// Renders the field's control inside a Bootstrap column, writing user input
/// back into the section.
#[component]
pub fn FieldControl(props: FieldControlProps) -> Element {
    let mut state = use_context::<FormState>();
    let field = props.field;
    let name = field.name.to_string();
    let section_id = props.section_id;
    let row = props.row;
    let field_key = field.name.field.clone();

    let on_input = move |evt: Event<FormData>| {
        state.set_value(&section_id, row, &field_key, &evt.value());
    };

    let control = match &field.control {
        Control::Text { placeholder, value } => {
            let placeholder = placeholder.clone().unwrap_or_default();
            rsx! {
                input {
                    r#type: "text",
                    class: "form-control",
                    name: "{name}",
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: on_input,
                }
            }
        }
        Control::Number { step, min, value } => rsx! {
            input {
                r#type: "number",
                step: "{step}",
                min: "{min}",
                class: "form-control",
                name: "{name}",
                value: "{value}",
                oninput: on_input,
            }
        },
        Control::Select { options } => rsx! {
            select {
                class: "form-select",
                name: "{name}",
                onchange: on_input,
                for opt in options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.selected,
                        "{opt.label}"
                    }
                }
            }
        },
    };

    let body = match &field.addon {
        None => control,
        Some(Addon::Prefix(text)) => rsx! {
            div {
                class: "input-group",
                span { class: "input-group-text", "{text}" }
                {control}
            }
        },
        Some(Addon::Suffix(text)) => rsx! {
            div {
                class: "input-group",
                {control}
                span { class: "input-group-text", "{text}" }
            }
        },
    };

    rsx! {
        div {
            class: "col-md-{field.column}",
            label { class: "form-label", "{field.label}" }
            {body}
        }
    }
}
