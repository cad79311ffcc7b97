//! Reading the host page.
//!
//! The Flask templates render the initial form rows, the canvases and their
//! `data-*` attributes. Apps read all of that here before `dioxus::launch`
//! replaces their mount root. Every reader returns `None` or an empty list
//! when an element is absent; optional page sections are not errors.

use ccr_forms::spending::SpendingInput;
use ccr_forms::{Control, Field, FieldName, FormDocument, RowSchema, SelectOption};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, NodeList};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn data_attribute(element_id: &str, attribute: &str) -> Option<String> {
    element_by_id(element_id)?.get_attribute(attribute)
}

/// A `window.<name>` global, round-tripped through `JSON.stringify`.
pub fn global_json(name: &str) -> Option<serde_json::Value> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let text = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    match serde_json::from_str(&text) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[CCR] window.{} is not JSON-serializable: {}", name, e);
            None
        }
    }
}

pub fn input_value(id: &str) -> Option<String> {
    element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|doc| doc.query_selector_all(selector).ok())
        .map(|list| elements(&list))
        .unwrap_or_default()
}

/// Value of `attribute` on every element matching `selector`.
pub fn attribute_values(selector: &str, attribute: &str) -> Vec<String> {
    query_all(selector)
        .iter()
        .filter_map(|el| el.get_attribute(attribute))
        .collect()
}

/// Category spending inputs (`input[id^="category_"]`) with their labels.
pub fn spending_inputs() -> Vec<SpendingInput> {
    query_all(r#"input[id^="category_"]"#)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| {
            let id = input.id();
            let label = query_all(&format!(r#"label[for="{}"]"#, id))
                .first()
                .and_then(|l| l.text_content())
                .map(|t| t.trim().to_string())
                .unwrap_or_else(|| id.trim_start_matches("category_").to_string());
            SpendingInput {
                name: input.name(),
                label,
                value: input.value(),
                id,
            }
        })
        .collect()
}

fn read_control(element: &Element) -> Control {
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        let options = select
            .query_selector_all("option")
            .map(|list| elements(&list))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .map(|option| SelectOption {
                value: option.value(),
                label: option.text(),
                selected: option.selected(),
            })
            .collect();
        return Control::Select { options };
    }
    match element.dyn_ref::<HtmlInputElement>() {
        Some(input) if input.type_() == "number" => Control::Number {
            step: input.step(),
            min: input.min(),
            value: input.value(),
        },
        Some(input) => Control::Text {
            placeholder: Some(input.placeholder()).filter(|p| !p.is_empty()),
            value: input.value(),
        },
        None => Control::Text {
            placeholder: None,
            value: String::new(),
        },
    }
}

fn read_row(row: &Element, schema: &RowSchema) -> Vec<Field> {
    let controls = row
        .query_selector_all("input[name], select[name]")
        .map(|list| elements(&list))
        .unwrap_or_default();
    controls
        .iter()
        .filter_map(|el| {
            let raw = el.get_attribute("name")?;
            let name = FieldName::parse(&schema.section, &raw).ok()?;
            let control = read_control(el);
            Some(match schema.descriptor(&name.field) {
                Some(descriptor) => Field::from_descriptor(descriptor, name, control),
                None => Field {
                    label: name.field.clone(),
                    name,
                    control,
                    addon: None,
                    column: 4,
                },
            })
        })
        .collect()
}

/// The live document as seen by the section manager.
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new() -> Option<Self> {
        Some(Self {
            document: document()?,
        })
    }
}

impl FormDocument for DomPage {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn existing_rows(&self, container_id: &str, schema: &RowSchema) -> Option<Vec<Vec<Field>>> {
        let container = self.document.get_element_by_id(container_id)?;
        let rows = container
            .query_selector_all(&format!(".{}", schema.row_class))
            .ok()?;
        Some(
            elements(&rows)
                .iter()
                .map(|row| read_row(row, schema))
                .collect(),
        )
    }
}
