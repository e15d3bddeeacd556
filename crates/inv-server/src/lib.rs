//! HTTP server for the inventory material service.
//!
//! Exposes create, list, read, update and delete over JSON, backed by a
//! [`MaterialStore`](inv_store::MaterialStore). Store errors map to 400, 404
//! and 409 responses with an `{"error": ...}` body.

pub mod config;
pub mod error;
pub mod handler;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use response::{DataResponse, ErrorResponse, HealthResponse, ListResponse, MessageResponse};
pub use router::build_router;
pub use server::InvServer;
pub use state::AppState;
