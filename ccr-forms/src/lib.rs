//! Repeating form sections and form helpers for the card recommender pages.
//!
//! This crate has no browser dependency so every behavior can be tested
//! natively. The Dioxus apps in this workspace drive it through `ccr-ui`.
//!
//! - `naming`: the `{section}_{field}_{index}` wire names the server parses
//! - `schema`: field descriptors and the built-in category/offer row layouts
//! - `row`: the structured row model (`Row` -> `Field` -> `Control`)
//! - `section`: the repeating section manager (append, remove, delegated actions)
//! - `document`: the `FormDocument` seam a live page or a test fixture implements
//! - `html`: escaping serializer for previews and server-side templates
//! - `slug`, `icon`, `spending`: the small category and profile form helpers

pub mod document;
pub mod error;
pub mod html;
pub mod icon;
pub mod naming;
pub mod row;
pub mod schema;
pub mod section;
pub mod slug;
pub mod spending;

pub use document::{FormDocument, StaticPage};
pub use error::FormError;
pub use naming::FieldName;
pub use row::{Control, Field, Row, RowKey};
pub use schema::{Addon, FieldDescriptor, InputKind, OptionSource, RowSchema, SelectOption};
pub use section::{ActionRegistry, IndexPolicy, RowAction, RowSource, Section, SectionConfig};
