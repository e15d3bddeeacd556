use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use inv_types::{Material, MaterialDraft, MaterialId};

use crate::allocator::IdAllocator;
use crate::error::{StoreError, StoreResult};
use crate::policy::StorePolicy;
use crate::traits::MaterialStore;
use crate::validation;

/// In-memory, `Vec`-based material store.
///
/// Records live in insertion order behind a single `RwLock`. Each mutating
/// operation holds the write lock from validation through mutation, so
/// concurrent requests never interleave. Data is lost when the store is
/// dropped.
pub struct InMemoryMaterialStore {
    policy: StorePolicy,
    inner: RwLock<StoreState>,
}

struct StoreState {
    materials: Vec<Material>,
    allocator: IdAllocator,
}

impl StoreState {
    fn position(&self, id: MaterialId) -> Option<usize> {
        self.materials.iter().position(|m| m.id == id)
    }

    /// Id of a record using `barcode`, ignoring the record `except`.
    fn barcode_owner(&self, barcode: &str, except: Option<MaterialId>) -> Option<MaterialId> {
        self.materials
            .iter()
            .find(|m| m.barcode == barcode && Some(m.id) != except)
            .map(|m| m.id)
    }
}

impl InMemoryMaterialStore {
    /// Create a new empty store with the default policy.
    pub fn new() -> Self {
        Self::with_policy(StorePolicy::default())
    }

    pub fn with_policy(policy: StorePolicy) -> Self {
        let allocator = IdAllocator::new(policy.id_strategy);
        Self::with_allocator(policy, allocator)
    }

    /// Create a store whose random id draws are reproducible.
    pub fn with_seed(policy: StorePolicy, seed: u64) -> Self {
        let allocator = IdAllocator::with_seed(policy.id_strategy, seed);
        Self::with_allocator(policy, allocator)
    }

    fn with_allocator(policy: StorePolicy, allocator: IdAllocator) -> Self {
        Self {
            policy,
            inner: RwLock::new(StoreState {
                materials: Vec::new(),
                allocator,
            }),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").materials.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_state(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write_state(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryMaterialStore {
    fn default() -> Self {
        Self::new()
    }
}

fn build(id: MaterialId, draft: MaterialDraft) -> StoreResult<Material> {
    let missing = validation::absent_fields(&draft);
    Material::from_draft(id, draft).ok_or(StoreError::Validation { missing })
}

impl MaterialStore for InMemoryMaterialStore {
    fn create(&self, draft: MaterialDraft) -> StoreResult<Material> {
        validation::validate_create(&draft, &self.policy)?;
        let barcode = draft.normalized_barcode().unwrap_or_default().to_string();

        let mut state = self.write_state()?;
        if let Some(existing) = state.barcode_owner(&barcode, None) {
            return Err(StoreError::Conflict { barcode, existing });
        }

        let StoreState { materials, allocator } = &mut *state;
        let id = allocator.allocate(materials.len(), |id| materials.iter().any(|m| m.id == id))?;
        let material = build(id, draft)?;
        materials.push(material.clone());

        tracing::info!(id = %material.id, barcode = %material.barcode, "material created");
        Ok(material)
    }

    fn list(&self) -> StoreResult<Vec<Material>> {
        let state = self.read_state()?;
        tracing::debug!(count = state.materials.len(), "listing materials");
        Ok(state.materials.clone())
    }

    fn get(&self, id: MaterialId) -> StoreResult<Material> {
        let state = self.read_state()?;
        state
            .materials
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: MaterialId, draft: MaterialDraft) -> StoreResult<Material> {
        let mut state = self.write_state()?;
        let index = state.position(id).ok_or(StoreError::NotFound(id))?;

        validation::validate_update(&draft, &self.policy)?;
        let barcode = draft.normalized_barcode().unwrap_or_default().to_string();
        if self.policy.unique_barcode_on_update {
            if let Some(existing) = state.barcode_owner(&barcode, Some(id)) {
                return Err(StoreError::Conflict { barcode, existing });
            }
        }

        let material = build(id, draft)?;
        state.materials[index] = material.clone();

        tracing::info!(id = %material.id, barcode = %material.barcode, "material updated");
        Ok(material)
    }

    fn delete(&self, id: MaterialId) -> StoreResult<()> {
        let mut state = self.write_state()?;
        let index = state.position(id).ok_or(StoreError::NotFound(id))?;
        let removed = state.materials.remove(index);

        tracing::info!(id = %removed.id, barcode = %removed.barcode, "material deleted");
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read_state()?.materials.len())
    }
}

impl std::fmt::Debug for InMemoryMaterialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryMaterialStore")
            .field("material_count", &count)
            .field("policy", &self.policy)
            .finish()
    }
}
