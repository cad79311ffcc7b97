//! The page a section binds to.
//!
//! `ccr-ui` implements [`FormDocument`] over the live DOM; [`StaticPage`] is
//! an in-memory page used by tests and the CLI.

use crate::row::Field;
use crate::schema::RowSchema;
use std::collections::{HashMap, HashSet};

pub trait FormDocument {
    /// Whether an element with this id is on the page.
    fn has_element(&self, id: &str) -> bool;

    /// Fields of every row already rendered in `container_id`, in document
    /// order. `None` when the container is absent.
    fn existing_rows(&self, container_id: &str, schema: &RowSchema) -> Option<Vec<Vec<Field>>>;
}

#[derive(Debug, Default, Clone)]
pub struct StaticPage {
    elements: HashSet<String>,
    containers: HashMap<String, Vec<Vec<Field>>>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string());
        self
    }

    pub fn with_container(mut self, id: &str, rows: Vec<Vec<Field>>) -> Self {
        self.elements.insert(id.to_string());
        self.containers.insert(id.to_string(), rows);
        self
    }
}

impl FormDocument for StaticPage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn existing_rows(&self, container_id: &str, _schema: &RowSchema) -> Option<Vec<Vec<Field>>> {
        self.containers.get(container_id).cloned()
    }
}
