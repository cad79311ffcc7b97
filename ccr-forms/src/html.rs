//! HTML serializer for rows and sections.
//!
//! Produces the same Bootstrap markup the card form renders in the browser,
//! for server-side templates and CLI previews. Every attribute value and
//! text node is escaped.

use crate::row::{Control, Field, Row};
use crate::schema::{Addon, RowSchema};
use crate::section::Section;
use std::fmt::Write;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_control(field: &Field) -> String {
    let name = escape(&field.name.to_string());
    match &field.control {
        Control::Text { placeholder, value } => {
            let mut html = format!(r#"<input type="text" class="form-control" name="{}""#, name);
            if let Some(placeholder) = placeholder {
                let _ = write!(html, r#" placeholder="{}""#, escape(placeholder));
            }
            if !value.is_empty() {
                let _ = write!(html, r#" value="{}""#, escape(value));
            }
            html.push('>');
            html
        }
        Control::Number { step, min, value } => format!(
            r#"<input type="number" step="{}" min="{}" class="form-control" name="{}" value="{}">"#,
            escape(step),
            escape(min),
            name,
            escape(value)
        ),
        Control::Select { options } => {
            let mut html = format!(r#"<select class="form-select" name="{}">"#, name);
            for option in options {
                let _ = write!(
                    html,
                    r#"<option value="{}"{}>{}</option>"#,
                    escape(&option.value),
                    if option.selected { " selected" } else { "" },
                    escape(&option.label)
                );
            }
            html.push_str("</select>");
            html
        }
    }
}

pub fn render_field(field: &Field) -> String {
    let control = render_control(field);
    let body = match &field.addon {
        None => control,
        Some(Addon::Prefix(text)) => format!(
            r#"<div class="input-group"><span class="input-group-text">{}</span>{}</div>"#,
            escape(text),
            control
        ),
        Some(Addon::Suffix(text)) => format!(
            r#"<div class="input-group">{}<span class="input-group-text">{}</span></div>"#,
            control,
            escape(text)
        ),
    };
    format!(
        r#"<div class="col-md-{}"><label class="form-label">{}</label>{}</div>"#,
        field.column,
        escape(&field.label),
        body
    )
}

pub fn render_row(schema: &RowSchema, row: &Row) -> String {
    let mut html = format!(r#"<div class="row mb-3 {}">"#, escape(&schema.row_class));
    for field in row.fields() {
        html.push_str(&render_field(field));
    }
    let _ = write!(
        html,
        r#"<div class="col-md-1 d-flex align-items-end mb-2"><button type="button" class="btn btn-sm btn-outline-danger {}">✕</button></div></div>"#,
        escape(&schema.remove_action)
    );
    html
}

pub fn render_section(section: &Section) -> String {
    let mut html = format!(r#"<div id="{}">"#, escape(&section.config().container_id));
    for row in section.rows() {
        html.push_str(&render_row(section.schema(), row));
    }
    html.push_str("</div>");
    html
}
