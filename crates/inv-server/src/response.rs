//! JSON envelopes returned by the material endpoints.

use serde::{Deserialize, Serialize};

use inv_types::Material;

pub mod messages {
    pub const CREATED: &str = "Material created successfully.";
    pub const LISTED: &str = "Materials listed successfully.";
    pub const FOUND: &str = "Material found.";
    pub const UPDATED: &str = "Material updated successfully.";
    pub const DELETED: &str = "Material deleted successfully.";
}

/// Success envelope carrying a single record under `data`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(message: &str, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Success envelope for the list endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListResponse {
    pub message: String,
    #[serde(rename = "materiais")]
    pub materials: Vec<Material>,
}

/// Success envelope with no payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure envelope: a single error message.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_uses_materiais_key() {
        let body = ListResponse {
            message: messages::LISTED.into(),
            materials: Vec::new(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("materiais").is_some());
        assert!(json.get("materials").is_none());
    }

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert!(!h.version.is_empty());
    }
}
