//! Repeating section manager.
//!
//! A `Section` owns the ordered rows of one container (the category rows or
//! the offer rows of the card form). Rows are appended with every field
//! named `{section}_{field}_{index}` and removed one at a time; removal never
//! renumbers the rows that remain.
//!
//! # Index collisions
//!
//! Under the default [`IndexPolicy::RowCount`] a new row's index is the
//! number of rows present at that moment. After a middle row is removed the
//! next append can reuse an index still held by a surviving row:
//!
//! ```
//! use ccr_forms::{Section, SectionConfig};
//!
//! let mut section = Section::new(SectionConfig::category());
//! let first = section.append_row().key();
//! section.append_row();
//! section.remove_row(first);
//! assert_eq!(section.append_row().index(), 1);
//! assert_eq!(section.rows()[0].index(), 1);
//! ```
//!
//! The server tolerates this today. [`IndexPolicy::Monotonic`] hands out
//! indices that are never reused.

use crate::document::FormDocument;
use crate::error::FormError;
use crate::row::{relabel_fields, synthesize_fields, Field, Row, RowKey};
use crate::schema::RowSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// `index = current row count`. Matches what the server parser expects.
    #[default]
    RowCount,
    /// `index = one past the highest index ever seen in this section`.
    Monotonic,
}

/// How a new row's fields are produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSource {
    /// Build from the schema; cloned-option selects copy from existing rows.
    #[default]
    Schema,
    /// Copy the first row structurally and relabel it. Falls back to the
    /// schema when the section is empty.
    CloneFirst,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub container_id: String,
    pub add_control_id: String,
    pub schema: RowSchema,
    #[serde(default)]
    pub policy: IndexPolicy,
    #[serde(default)]
    pub source: RowSource,
}

impl SectionConfig {
    pub fn category() -> Self {
        Self {
            container_id: "categories-container".to_string(),
            add_control_id: "add-category".to_string(),
            schema: RowSchema::category(),
            policy: IndexPolicy::RowCount,
            source: RowSource::Schema,
        }
    }

    pub fn offer() -> Self {
        Self {
            container_id: "offers-container".to_string(),
            add_control_id: "add-offer".to_string(),
            schema: RowSchema::offer(),
            policy: IndexPolicy::RowCount,
            source: RowSource::Schema,
        }
    }

    pub fn with_policy(mut self, policy: IndexPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_source(mut self, source: RowSource) -> Self {
        self.source = source;
        self
    }
}

/// A row-level action raised by a control inside a row, e.g. the remove
/// button. `tag` is matched against registered action tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub tag: String,
    pub row: RowKey,
}

impl RowAction {
    pub fn remove(schema: &RowSchema, row: RowKey) -> Self {
        Self {
            tag: schema.remove_action.clone(),
            row,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    config: SectionConfig,
    rows: Vec<Row>,
    next_key: u64,
    next_monotonic: usize,
}

impl Section {
    /// An empty section, not bound to any page.
    pub fn new(config: SectionConfig) -> Self {
        Self {
            config,
            rows: Vec::new(),
            next_key: 0,
            next_monotonic: 0,
        }
    }

    /// Bind to the section's container on `doc`, adopting the rows already
    /// rendered there.
    ///
    /// Returns `None` when the page has no add control or no container; an
    /// optional section that is absent from the page is not an error.
    pub fn initialize(doc: &impl FormDocument, config: SectionConfig) -> Option<Self> {
        if !doc.has_element(&config.add_control_id) {
            log::debug!(
                "[CCR] section {}: no #{} on page, skipping",
                config.schema.section,
                config.add_control_id
            );
            return None;
        }
        let existing = doc.existing_rows(&config.container_id, &config.schema)?;
        let mut section = Self::new(config);
        for fields in existing {
            section.adopt(fields);
        }
        log::info!(
            "[CCR] section {}: bound with {} existing rows",
            section.id(),
            section.len()
        );
        Some(section)
    }

    /// Adopt a row that was rendered elsewhere. Its index is read from its
    /// field names; a row without fields takes its position.
    pub fn adopt(&mut self, fields: Vec<Field>) -> RowKey {
        let index = fields.first().map(|f| f.name.index).unwrap_or(self.rows.len());
        self.push(index, fields)
    }

    pub fn id(&self) -> &str {
        &self.config.schema.section
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn schema(&self) -> &RowSchema {
        &self.config.schema
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, key: RowKey) -> Option<&Row> {
        self.rows.iter().find(|r| r.key == key)
    }

    pub fn row_mut(&mut self, key: RowKey) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.key == key)
    }

    /// Index the next appended row will receive.
    pub fn next_index(&self) -> usize {
        match self.config.policy {
            IndexPolicy::RowCount => self.rows.len(),
            IndexPolicy::Monotonic => self.next_monotonic,
        }
    }

    /// The row that would be appended at `index`, built from the current
    /// rows but not added to the section.
    pub fn draft_row(&self, index: usize) -> Row {
        Row {
            key: RowKey(self.next_key),
            index,
            fields: self.fields_at(index),
        }
    }

    fn fields_at(&self, index: usize) -> Vec<Field> {
        match (self.config.source, self.rows.first()) {
            (RowSource::CloneFirst, Some(first)) => relabel_fields(&self.config.schema, first, index),
            _ => synthesize_fields(&self.config.schema, index, &self.rows),
        }
    }

    /// Append a row as the last row of the section.
    pub fn append_row(&mut self) -> &Row {
        let index = self.next_index();
        let fields = self.fields_at(index);
        self.push(index, fields);
        log::debug!("[CCR] section {}: appended row {}", self.id(), index);
        &self.rows[self.rows.len() - 1]
    }

    /// Detach one row. Sibling rows keep their indices and values, and the
    /// section may be emptied completely.
    pub fn remove_row(&mut self, key: RowKey) -> Option<Row> {
        let position = self.rows.iter().position(|r| r.key == key)?;
        let row = self.rows.remove(position);
        log::debug!("[CCR] section {}: removed row {}", self.id(), row.index);
        Some(row)
    }

    /// Set a field value from user input.
    pub fn set_value(&mut self, key: RowKey, field: &str, value: &str) -> Result<(), FormError> {
        let section = self.id().to_string();
        let row = self.row_mut(key).ok_or(FormError::RowNotFound(key.get()))?;
        let target = row.field_mut(field).ok_or_else(|| FormError::UnknownField {
            section,
            field: field.to_string(),
        })?;
        target.set_value(value);
        Ok(())
    }

    /// Run a delegated row action. Returns false when the tag is not one of
    /// this section's actions or the row is already gone.
    pub fn handle(&mut self, action: &RowAction) -> bool {
        if action.tag != self.config.schema.remove_action {
            return false;
        }
        self.remove_row(action.row).is_some()
    }

    /// `(name, value)` pairs in document order, as the form would submit them.
    pub fn submission(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .flat_map(|row| row.fields.iter())
            .map(|f| (f.name.to_string(), f.value().to_string()))
            .collect()
    }

    fn push(&mut self, index: usize, fields: Vec<Field>) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.next_monotonic = self.next_monotonic.max(index + 1);
        self.rows.push(Row { key, index, fields });
        key
    }
}

/// Routes row actions raised anywhere on a page to the section that owns the
/// action tag. One handler at the page root serves rows appended at any time.
#[derive(Debug, Default, Clone)]
pub struct ActionRegistry {
    routes: HashMap<String, String>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, schema: &RowSchema) {
        self.routes
            .insert(schema.remove_action.clone(), schema.section.clone());
    }

    /// Section id that handles `action`, if any.
    pub fn route(&self, action: &RowAction) -> Option<&str> {
        self.routes.get(&action.tag).map(String::as_str)
    }

    /// Look up the owning section among `sections` and run the action there.
    pub fn dispatch(&self, action: &RowAction, sections: &mut [&mut Section]) -> Result<bool, FormError> {
        let Some(target) = self.route(action) else {
            return Ok(false);
        };
        let section = sections
            .iter_mut()
            .find(|s| s.id() == target)
            .ok_or_else(|| FormError::UnknownSection(target.to_string()))?;
        Ok(section.handle(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::StaticPage;
    use crate::row::Control;
    use crate::schema::SelectOption;

    fn names(section: &Section) -> Vec<Vec<String>> {
        section.rows().iter().map(Row::names).collect()
    }

    fn rendered_category_row(index: usize, selected: &str) -> Vec<Field> {
        let mut fields = synthesize_fields(&RowSchema::category(), index, &[]);
        fields[0].control = Control::Select {
            options: ["dining", "gas", "groceries"]
                .iter()
                .map(|v| SelectOption {
                    value: v.to_string(),
                    label: v.to_string(),
                    selected: *v == selected,
                })
                .collect(),
        };
        fields
    }

    #[test]
    fn append_uses_current_row_count() {
        for prior in 0..4 {
            let mut section = Section::new(SectionConfig::offer());
            for _ in 0..prior {
                section.append_row();
            }
            let row = section.append_row();
            assert_eq!(row.index(), prior);
            for name in row.names() {
                assert!(name.ends_with(&format!("_{}", prior)), "{} for N={}", name, prior);
            }
        }
    }

    #[test]
    fn offer_row_names() {
        let mut section = Section::new(SectionConfig::offer());
        section.append_row();
        assert_eq!(
            names(&section),
            vec![vec!["offer_type_0", "offer_amount_0", "offer_frequency_0"]]
        );
    }

    #[test]
    fn clone_path_keeps_options_and_drops_selection() {
        let page = StaticPage::new()
            .with_element("add-category")
            .with_container("categories-container", vec![rendered_category_row(0, "gas")]);
        let mut section = Section::initialize(&page, SectionConfig::category()).unwrap();

        let row = section.append_row();
        match &row.field("name").unwrap().control {
            Control::Select { options } => {
                let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, ["dining", "gas", "groceries"]);
                assert!(options.iter().all(|o| !o.selected));
            }
            other => panic!("expected cloned select, got {:?}", other),
        }
        assert_eq!(row.field("percentage").unwrap().value(), "0");
        // first row keeps its choice
        assert_eq!(section.rows()[0].field("name").unwrap().value(), "gas");
    }

    #[test]
    fn draft_row_leaves_section_unchanged() {
        let mut section = Section::new(SectionConfig::offer());
        section.append_row();
        let draft = section.draft_row(7);
        assert_eq!(draft.names(), ["offer_type_7", "offer_amount_7", "offer_frequency_7"]);
        assert_eq!(draft.field("amount").unwrap().value(), "0");
        assert_eq!(section.len(), 1);
        assert_eq!(section.append_row().index(), 1);
    }

    #[test]
    fn clone_first_source_relabels_whole_row() {
        let mut section = Section::new(SectionConfig::offer().with_source(RowSource::CloneFirst));
        let first = section.append_row().key();
        section.set_value(first, "type", "Lounge").unwrap();
        section.set_value(first, "amount", "25").unwrap();
        section.set_value(first, "frequency", "annual").unwrap();

        let row = section.append_row();
        assert_eq!(row.names(), ["offer_type_1", "offer_amount_1", "offer_frequency_1"]);
        assert_eq!(row.field("type").unwrap().value(), "");
        assert_eq!(row.field("amount").unwrap().value(), "0");
        assert_eq!(row.field("frequency").unwrap().value(), "one_time");
    }

    #[test]
    fn remove_leaves_siblings_untouched() {
        let mut section = Section::new(SectionConfig::offer());
        let keys: Vec<_> = (0..3).map(|_| section.append_row().key()).collect();
        section.set_value(keys[0], "type", "Travel Credit").unwrap();
        section.set_value(keys[2], "amount", "50").unwrap();

        let removed = section.remove_row(keys[1]).unwrap();
        assert_eq!(removed.index(), 1);
        assert_eq!(section.len(), 2);
        assert_eq!(
            section.submission(),
            vec![
                ("offer_type_0".to_string(), "Travel Credit".to_string()),
                ("offer_amount_0".to_string(), "0".to_string()),
                ("offer_frequency_0".to_string(), "one_time".to_string()),
                ("offer_type_2".to_string(), String::new()),
                ("offer_amount_2".to_string(), "50".to_string()),
                ("offer_frequency_2".to_string(), "one_time".to_string()),
            ]
        );
        assert!(section.remove_row(keys[1]).is_none());
    }

    #[test]
    fn emptied_section_appends_from_zero() {
        let mut section = Section::new(SectionConfig::category());
        let keys: Vec<_> = (0..2).map(|_| section.append_row().key()).collect();
        for key in keys {
            section.remove_row(key);
        }
        assert!(section.is_empty());
        assert_eq!(section.append_row().index(), 0);
    }

    #[test]
    fn delete_then_add_collides_under_row_count() {
        let page = StaticPage::new().with_element("add-category").with_container(
            "categories-container",
            vec![rendered_category_row(0, "dining"), rendered_category_row(1, "gas")],
        );
        let mut section = Section::initialize(&page, SectionConfig::category()).unwrap();
        let row0 = section.rows()[0].key();
        section.handle(&RowAction::remove(section.schema(), row0));

        let added = section.append_row().index();
        assert_eq!(added, 1);
        let indices: Vec<_> = section.rows().iter().map(Row::index).collect();
        assert_eq!(indices, [1, 1]);
        assert_eq!(names(&section)[0], names(&section)[1]);
    }

    #[test]
    fn monotonic_policy_never_reuses() {
        let mut section =
            Section::new(SectionConfig::category().with_policy(IndexPolicy::Monotonic));
        let row0 = section.append_row().key();
        section.append_row();
        section.remove_row(row0);
        assert_eq!(section.append_row().index(), 2);
    }

    #[test]
    fn initialize_without_controls_is_noop() {
        let page = StaticPage::new().with_container("categories-container", Vec::new());
        assert!(Section::initialize(&page, SectionConfig::category()).is_none());

        let page = StaticPage::new().with_element("add-offer");
        assert!(Section::initialize(&page, SectionConfig::offer()).is_none());
    }

    #[test]
    fn adopted_rows_keep_their_indices() {
        let page = StaticPage::new().with_element("add-category").with_container(
            "categories-container",
            vec![rendered_category_row(0, "gas"), rendered_category_row(4, "dining")],
        );
        let section = Section::initialize(&page, SectionConfig::category()).unwrap();
        let indices: Vec<_> = section.rows().iter().map(Row::index).collect();
        assert_eq!(indices, [0, 4]);
        assert_eq!(section.next_index(), 2);

        let monotonic = Section::initialize(
            &page,
            SectionConfig::category().with_policy(IndexPolicy::Monotonic),
        )
        .unwrap();
        assert_eq!(monotonic.next_index(), 5);
    }

    #[test]
    fn registry_routes_by_action_tag() {
        let mut categories = Section::new(SectionConfig::category());
        let mut offers = Section::new(SectionConfig::offer());
        let mut registry = ActionRegistry::new();
        registry.register(categories.schema());
        registry.register(offers.schema());

        categories.append_row();
        let offer_key = offers.append_row().key();
        // keys are per section; the tag picks the section
        let action = RowAction::remove(offers.schema(), offer_key);
        assert_eq!(registry.route(&action), Some("offer"));

        let handled = registry
            .dispatch(&action, &mut [&mut categories, &mut offers])
            .unwrap();
        assert!(handled);
        assert_eq!(categories.len(), 1);
        assert!(offers.is_empty());

        let stray = RowAction {
            tag: "remove-perk".to_string(),
            row: offer_key,
        };
        assert_eq!(registry.dispatch(&stray, &mut [&mut categories]), Ok(false));
    }

    #[test]
    fn handle_ignores_foreign_tags() {
        let mut section = Section::new(SectionConfig::category());
        let key = section.append_row().key();
        let action = RowAction {
            tag: "remove-offer".to_string(),
            row: key,
        };
        assert!(!section.handle(&action));
        assert_eq!(section.len(), 1);
    }

    #[test]
    fn set_value_reports_unknown_targets() {
        let mut section = Section::new(SectionConfig::offer());
        let key = section.append_row().key();
        assert_eq!(
            section.set_value(key, "nickname", "x"),
            Err(FormError::UnknownField {
                section: "offer".to_string(),
                field: "nickname".to_string(),
            })
        );
        section.remove_row(key);
        assert_eq!(
            section.set_value(key, "type", "x"),
            Err(FormError::RowNotFound(key.get()))
        );
    }
}
