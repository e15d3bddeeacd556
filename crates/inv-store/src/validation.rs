//! Required-field checks for material drafts.
//!
//! A field counts as missing when it is absent or falsy: empty strings, and,
//! while [`StorePolicy::reject_zero_values`] is set, zero or NaN numbers. A
//! barcode that is empty after trimming is missing too.

use inv_types::{Field, MaterialDraft};

use crate::error::{StoreError, StoreResult};
use crate::policy::StorePolicy;

/// Every missing field of `draft`, in declaration order.
pub fn missing_fields(draft: &MaterialDraft, reject_zero_values: bool) -> Vec<Field> {
    let text = |v: &Option<String>| v.as_deref().map_or(true, str::is_empty);
    let int = |v: Option<i64>| v.map_or(true, |n| reject_zero_values && n == 0);
    let num = |v: Option<f64>| v.map_or(true, |n| reject_zero_values && (n == 0.0 || n.is_nan()));

    Field::ALL
        .into_iter()
        .filter(|field| match field {
            Field::ProductName => text(&draft.product_name),
            Field::QuantityPerBox => int(draft.quantity_per_box),
            Field::UnitQuantity => int(draft.unit_quantity),
            Field::Barcode => draft.normalized_barcode().map_or(true, str::is_empty),
            Field::SupplierName => text(&draft.supplier_name),
            Field::RecipientName => text(&draft.recipient_name),
            Field::DestinationSector => text(&draft.destination_sector),
            Field::UnitValue => num(draft.unit_value),
            Field::TotalValue => num(draft.total_value),
        })
        .collect()
}

/// Fields that are absent outright, ignoring truthiness.
pub fn absent_fields(draft: &MaterialDraft) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| match field {
            Field::ProductName => draft.product_name.is_none(),
            Field::QuantityPerBox => draft.quantity_per_box.is_none(),
            Field::UnitQuantity => draft.unit_quantity.is_none(),
            Field::Barcode => draft.barcode.is_none(),
            Field::SupplierName => draft.supplier_name.is_none(),
            Field::RecipientName => draft.recipient_name.is_none(),
            Field::DestinationSector => draft.destination_sector.is_none(),
            Field::UnitValue => draft.unit_value.is_none(),
            Field::TotalValue => draft.total_value.is_none(),
        })
        .collect()
}

/// Checks applied before a material is created.
pub fn validate_create(draft: &MaterialDraft, policy: &StorePolicy) -> StoreResult<()> {
    reject_if_any(missing_fields(draft, policy.reject_zero_values))
}

/// Checks applied before a material is replaced.
///
/// Without `validate_on_update` only presence is required, since a stored
/// record cannot hold an absent field.
pub fn validate_update(draft: &MaterialDraft, policy: &StorePolicy) -> StoreResult<()> {
    if policy.validate_on_update {
        validate_create(draft, policy)
    } else {
        reject_if_any(absent_fields(draft))
    }
}

fn reject_if_any(missing: Vec<Field>) -> StoreResult<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation { missing })
    }
}
