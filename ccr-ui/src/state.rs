//! Form state managed via Dioxus context.
//!
//! `FormState` holds every repeating section of a page in one signal and
//! provides it via `use_context_provider`. Row components retrieve it with
//! `use_context::<FormState>()` and report their actions to
//! [`FormState::dispatch`], the single handler for the whole page.

use ccr_forms::{ActionRegistry, RowAction, RowKey, Section};
use dioxus::prelude::*;

#[derive(Clone, Copy)]
pub struct FormState {
    /// Sections bound on this page, in page order.
    pub sections: Signal<Vec<Section>>,
    /// Maps row action tags to the section that owns them.
    pub registry: Signal<ActionRegistry>,
}

impl FormState {
    pub fn new(sections: Vec<Section>) -> Self {
        let mut registry = ActionRegistry::new();
        for section in &sections {
            registry.register(section.schema());
        }
        Self {
            sections: Signal::new(sections),
            registry: Signal::new(registry),
        }
    }

    /// Snapshot of one section for rendering.
    pub fn section(&self, id: &str) -> Option<Section> {
        self.sections.read().iter().find(|s| s.id() == id).cloned()
    }

    /// Append a row. The index is taken from the section as it is at the
    /// moment of the write, never from a rendered snapshot.
    pub fn append(&mut self, id: &str) {
        let mut sections = self.sections.write();
        if let Some(section) = sections.iter_mut().find(|s| s.id() == id) {
            let index = section.append_row().index();
            log::info!("[CCR] {}: appended row {}", id, index);
        }
    }

    /// Route a row action to its section.
    pub fn dispatch(&mut self, action: RowAction) {
        let registry = self.registry.read().clone();
        let mut sections = self.sections.write();
        let mut targets: Vec<&mut Section> = sections.iter_mut().collect();
        match registry.dispatch(&action, &mut targets) {
            Ok(true) => log::info!("[CCR] {} on row {}", action.tag, action.row),
            Ok(false) => log::debug!("[CCR] unhandled row action {}", action.tag),
            Err(e) => log::warn!("[CCR] {}", e),
        }
    }

    pub fn set_value(&mut self, id: &str, row: RowKey, field: &str, value: &str) {
        let mut sections = self.sections.write();
        if let Some(section) = sections.iter_mut().find(|s| s.id() == id) {
            if let Err(e) = section.set_value(row, field, value) {
                log::warn!("[CCR] {}", e);
            }
        }
    }
}
