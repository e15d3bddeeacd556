//! Foundation types for the inventory material service.
//!
//! This crate provides the record and identifier types shared by the store
//! and the HTTP layer.
//!
//! # Key Types
//!
//! - [`Material`] -- A stored inventory record with its assigned identifier
//! - [`MaterialDraft`] -- Caller-supplied payload of the nine business fields
//! - [`MaterialId`] -- Store-assigned integer identifier with loose parsing
//! - [`Field`] -- The business fields, carrying their wire names

pub mod error;
pub mod id;
pub mod material;

pub use error::TypeError;
pub use id::MaterialId;
pub use material::{normalize_barcode, Field, Material, MaterialDraft};
