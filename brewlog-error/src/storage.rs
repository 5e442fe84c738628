use crate::symbolic::SymbolicError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// Another record still depends on the one being changed
    #[error("conflict: {0}")]
    Conflict(String),

    /// A referenced record exists but cannot be used in that role
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A stored ordinal no longer maps to a known variant
    #[error("corrupted row: {0}")]
    Corrupted(#[from] SymbolicError),
}
