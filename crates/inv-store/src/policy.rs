use serde::{Deserialize, Serialize};

/// Upper bound of the random id range when none is configured.
pub const DEFAULT_RANDOM_MAX: u32 = 10_000;

/// How the store picks identifiers for new materials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdStrategy {
    /// Counter starting at 1. Ids are never reused, even after deletion.
    #[default]
    Sequential,
    /// Uniform draw in `1..=max`, redrawn until unused.
    Random {
        #[serde(default = "default_random_max")]
        max: u32,
    },
}

fn default_random_max() -> u32 {
    DEFAULT_RANDOM_MAX
}

/// Rules the store enforces on incoming drafts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorePolicy {
    /// Treat `0` quantities and values as missing.
    pub reject_zero_values: bool,
    /// Apply the create-time truthiness checks on update as well.
    pub validate_on_update: bool,
    /// Reject an update whose barcode belongs to another material.
    pub unique_barcode_on_update: bool,
    // Kept last so it serializes as a trailing TOML table.
    pub id_strategy: IdStrategy,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            reject_zero_values: true,
            validate_on_update: true,
            unique_barcode_on_update: true,
            id_strategy: IdStrategy::Sequential,
        }
    }
}

impl StorePolicy {
    /// Relaxed update rules: presence only, duplicate barcodes allowed.
    pub fn legacy() -> Self {
        Self {
            validate_on_update: false,
            unique_barcode_on_update: false,
            ..Self::default()
        }
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }
}
