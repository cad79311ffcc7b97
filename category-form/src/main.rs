//! Category edit page: system name generation and icon picker.
//!
//! The template renders the display name, system name and icon inputs, the
//! icon preview and a row of `.icon-btn` buttons inside
//! `#category-form-fields`. Their current values are read before launch and
//! the app re-renders whichever of them were present.
//!
//! - Typing a display name fills the system name with its slug until the
//!   admin edits the system name by hand.
//! - The preview follows the icon input, defaulting to `fas fa-tag`.
//! - Clicking an icon button sets both the input and the preview.

use ccr_forms::icon::IconPicker;
use ccr_forms::slug::SlugSync;
use ccr_ui::page;
use dioxus::prelude::*;

const ROOT_ID: &str = "category-form-fields";

/// Initial state of the fields, read from the server-rendered page.
#[derive(Clone, Debug, Default)]
struct CategoryPage {
    display_name: Option<String>,
    name: Option<String>,
    icon: Option<String>,
    has_preview: bool,
    icon_choices: Vec<String>,
}

impl CategoryPage {
    fn read() -> Self {
        Self {
            display_name: page::input_value("display_name"),
            name: page::input_value("name"),
            icon: page::input_value("icon"),
            has_preview: page::element_by_id("icon-preview").is_some(),
            icon_choices: page::attribute_values(".icon-btn", "data-icon"),
        }
    }
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    let initial = CategoryPage::read();
    log::info!(
        "[CCR] category-form: {} icon choices on page",
        initial.icon_choices.len()
    );
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_ID))
        .with_context(initial)
        .launch(App);
}

#[component]
fn App() -> Element {
    let initial = use_context::<CategoryPage>();
    let show_icons = initial.icon.is_some() || initial.has_preview || !initial.icon_choices.is_empty();

    rsx! {
        NameFields {}
        if show_icons {
            IconField {}
        }
    }
}

/// Display name and system name inputs.
#[component]
fn NameFields() -> Element {
    let initial = use_context::<CategoryPage>();
    let sync_enabled = initial.display_name.is_some() && initial.name.is_some();
    let mut display_name = use_signal(|| initial.display_name.clone().unwrap_or_default());
    let mut name = use_signal(|| initial.name.clone().unwrap_or_default());
    let mut sync = use_signal(SlugSync::new);

    let on_display_input = move |evt: Event<FormData>| {
        let value = evt.value();
        if sync_enabled {
            let current = name.peek().clone();
            if let Some(generated) = sync.write().on_display_input(&value, &current) {
                name.set(generated);
            }
        }
        display_name.set(value);
    };

    rsx! {
        if initial.display_name.is_some() {
            div {
                class: "mb-3",
                label { r#for: "display_name", class: "form-label", "Display Name" }
                input {
                    r#type: "text",
                    class: "form-control",
                    id: "display_name",
                    name: "display_name",
                    required: true,
                    value: "{display_name}",
                    oninput: on_display_input,
                }
            }
        }
        if initial.name.is_some() {
            div {
                class: "mb-3",
                label { r#for: "name", class: "form-label", "System Name" }
                input {
                    r#type: "text",
                    class: "form-control",
                    id: "name",
                    name: "name",
                    required: true,
                    value: "{name}",
                    oninput: move |evt: Event<FormData>| name.set(evt.value()),
                }
                div {
                    class: "form-text",
                    "Lowercase letters, numbers and underscores. Generated from the display name."
                }
            }
        }
    }
}

/// Icon input, live preview and icon buttons.
#[component]
fn IconField() -> Element {
    let initial = use_context::<CategoryPage>();
    let has_input = initial.icon.is_some();
    let has_preview = initial.has_preview;
    let mut picker = use_signal(|| {
        IconPicker::new(
            initial.icon.clone().unwrap_or_default(),
            initial.icon_choices.clone(),
        )
    });
    let value = picker.read().value().to_string();
    let preview = picker.read().preview_class().to_string();
    let choices = picker.read().choices().to_vec();

    rsx! {
        div {
            class: "mb-3",
            label { r#for: "icon", class: "form-label", "Icon" }
            div {
                class: "input-group",
                if has_preview {
                    span {
                        class: "input-group-text",
                        i { id: "icon-preview", class: "{preview}" }
                    }
                }
                if has_input {
                    input {
                        r#type: "text",
                        class: "form-control",
                        id: "icon",
                        name: "icon",
                        placeholder: "fas fa-tag",
                        value: "{value}",
                        oninput: move |evt: Event<FormData>| picker.write().on_input(&evt.value()),
                    }
                }
            }
            div {
                class: "mt-2 d-flex flex-wrap gap-2",
                for icon in choices {
                    IconButton {
                        key: "{icon}",
                        selected: picker.read().is_selected(&icon),
                        icon: icon.clone(),
                        onselect: move |icon: String| picker.write().select(&icon),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct IconButtonProps {
    icon: String,
    selected: bool,
    onselect: EventHandler<String>,
}

#[component]
fn IconButton(props: IconButtonProps) -> Element {
    let class = if props.selected {
        "btn btn-sm btn-primary icon-btn"
    } else {
        "btn btn-sm btn-outline-secondary icon-btn"
    };
    let icon = props.icon.clone();

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            "data-icon": "{props.icon}",
            title: "{props.icon}",
            onclick: move |_| props.onselect.call(icon.clone()),
            i { class: "{props.icon}" }
        }
    }
}
