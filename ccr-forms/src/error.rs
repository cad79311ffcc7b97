use thiserror::Error;

/// Errors raised by the form model.
///
/// Missing page elements are never errors; those surface as `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field name `{raw}` does not follow `{section}_<field>_<index>`")]
    MalformedFieldName { section: String, raw: String },

    #[error("unknown section `{0}`")]
    UnknownSection(String),

    #[error("section `{section}` has no field `{field}`")]
    UnknownField { section: String, field: String },

    #[error("no row with key {0}")]
    RowNotFound(u64),
}
