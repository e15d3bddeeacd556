//! In-memory material storage for the inventory service.
//!
//! This crate owns the collection of [`Material`](inv_types::Material)
//! records and every rule that guards it: required-field validation, barcode
//! normalization and uniqueness, and identifier allocation.
//!
//! # Storage Backends
//!
//! All backends implement the [`MaterialStore`] trait:
//!
//! - [`InMemoryMaterialStore`] -- `Vec`-based ordered store behind a single `RwLock`
//!
//! # Design Rules
//!
//! 1. The store assigns identifiers; callers never do.
//! 2. Barcodes are trimmed before they are compared or stored.
//! 3. List order is insertion order. Updates keep a record's position.
//! 4. Every operation is atomic: it either fully succeeds or changes nothing.
//! 5. Identifier order is not part of the contract, only uniqueness.

pub mod allocator;
pub mod error;
pub mod memory;
pub mod policy;
pub mod traits;
pub mod validation;

// Re-export primary types at crate root for ergonomic imports.
pub use allocator::IdAllocator;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryMaterialStore;
pub use policy::{IdStrategy, StorePolicy, DEFAULT_RANDOM_MAX};
pub use traits::MaterialStore;
