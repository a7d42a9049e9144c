// File: src/error.rs
// Purpose: Errors raised at the input boundary, before any state changes

use thiserror::Error;

use crate::field::FieldName;

/// Misuse of the input boundary.
///
/// Validation failures are never reported through this type; they are data
/// (`FieldErrors`) returned from `submit`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field `{0}` takes a selection, not text")]
    NotText(FieldName),

    #[error("field `{0}` takes text, not a selection")]
    NotCategorical(FieldName),

    #[error("{code} is not an option for `{field}`")]
    UnknownOption { field: FieldName, code: i64 },

    #[error("`{raw}` is not a valid code for `{field}`")]
    InvalidCode { field: FieldName, raw: String },
}
