use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use inv_store::StoreError;

use crate::response::ErrorResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Path segment that cannot name any material.
    #[error("material not found: {0}")]
    MaterialNotFound(String),

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::Validation { .. }) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Store(StoreError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Store(StoreError::NotFound(_)) | Self::MaterialNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use inv_types::{Field, MaterialId};

    #[test]
    fn status_mapping() {
        let validation = ServerError::from(StoreError::Validation {
            missing: vec![Field::Barcode],
        });
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let conflict = ServerError::from(StoreError::Conflict {
            barcode: "1".into(),
            existing: MaterialId::new(1),
        });
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let missing = ServerError::from(StoreError::NotFound(MaterialId::new(2)));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServerError::MaterialNotFound("abc".into()).status(),
            StatusCode::NOT_FOUND
        );

        let poisoned = ServerError::from(StoreError::LockPoisoned);
        assert_eq!(poisoned.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ServerError::Config("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_errors_display_transparently() {
        let err = ServerError::from(StoreError::NotFound(MaterialId::new(8)));
        assert_eq!(err.to_string(), "material not found: 8");
    }

    #[test]
    fn into_response_sets_status() {
        let response = ServerError::BadRequest("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
