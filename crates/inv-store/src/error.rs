use inv_types::{Field, MaterialId};

/// Errors from material store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// One or more required fields were absent or falsy.
    #[error("missing required fields: {}", join_fields(.missing))]
    Validation { missing: Vec<Field> },

    /// Another material already uses this barcode.
    #[error("a material with barcode {barcode:?} already exists (id {existing})")]
    Conflict { barcode: String, existing: MaterialId },

    /// No material has the requested id.
    #[error("material not found: {0}")]
    NotFound(MaterialId),

    /// Every identifier the allocation strategy may hand out is in use.
    #[error("no free material id in 1..={max}")]
    IdSpaceExhausted { max: u32 },

    /// A thread panicked while holding the store lock.
    #[error("store lock poisoned")]
    LockPoisoned,
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.wire_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
