//! The module contains the errors the engine can produce.
//!
//! The ledger surface never shows these to the user: every public operation
//! that can fail turns them into an ignored outcome. They exist so the
//! internals can use `?` and so callers and tests can see *why* an action was
//! dropped.
//!
//! - [`MissingField`] a required draft field is empty.
//! - [`InvalidDate`] a date draft is not `YYYY-MM-DD`.
//! - [`IndexOutOfBounds`] an index does not address a current entry.
//! - [`NotEditing`] an edit action arrived while the editing slot is empty.
//!
//!  [`MissingField`]: EngineError::MissingField
//!  [`InvalidDate`]: EngineError::InvalidDate
//!  [`IndexOutOfBounds`]: EngineError::IndexOutOfBounds
//!  [`NotEditing`]: EngineError::NotEditing
use thiserror::Error;

use crate::Field;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("\"{0}\" is required")]
    MissingField(Field),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("No entry is being edited")]
    NotEditing,
}
