use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid material id: {0:?}")]
    InvalidId(String),

    #[error("material id out of range: {0}")]
    IdOutOfRange(String),
}
