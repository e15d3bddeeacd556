use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::MaterialId;

/// A stored inventory record.
///
/// Field names on the wire follow the service's JSON contract
/// (`nomeProduto`, `codigoBarras`, ...). The `barcode` of a stored material
/// is always trimmed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    #[serde(rename = "nomeProduto")]
    pub product_name: String,
    #[serde(rename = "quantidadePorCaixa")]
    pub quantity_per_box: i64,
    #[serde(rename = "quantidadeUnitaria")]
    pub unit_quantity: i64,
    #[serde(rename = "codigoBarras")]
    pub barcode: String,
    #[serde(rename = "nomeFornecedor")]
    pub supplier_name: String,
    #[serde(rename = "nomeRecebedor")]
    pub recipient_name: String,
    #[serde(rename = "setorDestino")]
    pub destination_sector: String,
    #[serde(rename = "valorUnitario")]
    pub unit_value: f64,
    #[serde(rename = "valorTotal")]
    pub total_value: f64,
}

impl Material {
    /// Build a record from a draft, normalizing the barcode.
    ///
    /// Returns `None` if any field of the draft is absent. Presence is the
    /// only thing checked here; truthiness rules live in the store.
    pub fn from_draft(id: MaterialId, draft: MaterialDraft) -> Option<Self> {
        Some(Self {
            id,
            product_name: draft.product_name?,
            quantity_per_box: draft.quantity_per_box?,
            unit_quantity: draft.unit_quantity?,
            barcode: normalize_barcode(&draft.barcode?).to_string(),
            supplier_name: draft.supplier_name?,
            recipient_name: draft.recipient_name?,
            destination_sector: draft.destination_sector?,
            unit_value: draft.unit_value?,
            total_value: draft.total_value?,
        })
    }
}

/// Caller-supplied payload for create and update.
///
/// Every field is optional so that absent and `null` values reach the store,
/// which reports all missing fields at once.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDraft {
    #[serde(rename = "nomeProduto")]
    pub product_name: Option<String>,
    #[serde(rename = "quantidadePorCaixa")]
    pub quantity_per_box: Option<i64>,
    #[serde(rename = "quantidadeUnitaria")]
    pub unit_quantity: Option<i64>,
    #[serde(rename = "codigoBarras")]
    pub barcode: Option<String>,
    #[serde(rename = "nomeFornecedor")]
    pub supplier_name: Option<String>,
    #[serde(rename = "nomeRecebedor")]
    pub recipient_name: Option<String>,
    #[serde(rename = "setorDestino")]
    pub destination_sector: Option<String>,
    #[serde(rename = "valorUnitario")]
    pub unit_value: Option<f64>,
    #[serde(rename = "valorTotal")]
    pub total_value: Option<f64>,
}

impl MaterialDraft {
    /// The barcode as it will be stored and compared, if present.
    pub fn normalized_barcode(&self) -> Option<&str> {
        self.barcode.as_deref().map(normalize_barcode)
    }
}

/// Trim surrounding whitespace from a barcode.
pub fn normalize_barcode(raw: &str) -> &str {
    raw.trim()
}

/// The nine business fields of a material, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    ProductName,
    QuantityPerBox,
    UnitQuantity,
    Barcode,
    SupplierName,
    RecipientName,
    DestinationSector,
    UnitValue,
    TotalValue,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::ProductName,
        Field::QuantityPerBox,
        Field::UnitQuantity,
        Field::Barcode,
        Field::SupplierName,
        Field::RecipientName,
        Field::DestinationSector,
        Field::UnitValue,
        Field::TotalValue,
    ];

    /// JSON key used for this field.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::ProductName => "nomeProduto",
            Self::QuantityPerBox => "quantidadePorCaixa",
            Self::UnitQuantity => "quantidadeUnitaria",
            Self::Barcode => "codigoBarras",
            Self::SupplierName => "nomeFornecedor",
            Self::RecipientName => "nomeRecebedor",
            Self::DestinationSector => "setorDestino",
            Self::UnitValue => "valorUnitario",
            Self::TotalValue => "valorTotal",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
