use inv_types::{Material, MaterialDraft, MaterialId};

use crate::error::StoreResult;

/// Ordered store of material records.
///
/// All implementations must satisfy these invariants:
/// - Every stored record has a unique id, chosen by the store.
/// - Every stored record has a unique, trimmed barcode.
/// - `list` returns records in insertion order; `update` keeps a record's
///   position.
/// - A failed operation leaves the collection unchanged.
pub trait MaterialStore: Send + Sync {
    /// Validate `draft`, assign an id, and append the new record.
    ///
    /// Fails with `Validation` for missing or falsy fields and `Conflict`
    /// when the trimmed barcode is already taken.
    fn create(&self, draft: MaterialDraft) -> StoreResult<Material>;

    /// Snapshot of every record, in insertion order.
    fn list(&self) -> StoreResult<Vec<Material>>;

    /// Read a single record.
    fn get(&self, id: MaterialId) -> StoreResult<Material>;

    /// Replace every business field of the record with `id`.
    fn update(&self, id: MaterialId, draft: MaterialDraft) -> StoreResult<Material>;

    /// Remove the record with `id`.
    fn delete(&self, id: MaterialId) -> StoreResult<()>;

    /// Number of stored records.
    ///
    /// Default implementation materializes `list()`. Backends may override.
    fn count(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }
}
