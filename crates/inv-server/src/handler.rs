use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::json;

use inv_types::{Material, MaterialDraft, MaterialId};

use crate::error::{ServerError, ServerResult};
use crate::response::{messages, DataResponse, HealthResponse, ListResponse, MessageResponse};
use crate::state::AppState;

/// Path ids are matched loosely; text that cannot be an id matches nothing.
fn parse_id(raw: String) -> ServerResult<MaterialId> {
    MaterialId::parse_loose(&raw).map_err(|_| ServerError::MaterialNotFound(raw))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    let count = state.store.count()?;
    Ok(Json(json!({
        "name": "inv-server",
        "version": env!("CARGO_PKG_VERSION"),
        "materials": count,
    })))
}

/// `POST /materials`
pub async fn create_material(
    State(state): State<AppState>,
    payload: Result<Json<MaterialDraft>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<DataResponse<Material>>)> {
    let Json(draft) = payload?;
    let material = state.store.create(draft)?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(messages::CREATED, material)),
    ))
}

/// `GET /materials`
pub async fn list_materials(State(state): State<AppState>) -> ServerResult<Json<ListResponse>> {
    let materials = state.store.list()?;
    Ok(Json(ListResponse {
        message: messages::LISTED.into(),
        materials,
    }))
}

/// `GET /materials/:id`
pub async fn get_material(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ServerResult<Json<DataResponse<Material>>> {
    let id = parse_id(raw)?;
    let material = state.store.get(id)?;
    Ok(Json(DataResponse::new(messages::FOUND, material)))
}

/// `PUT /materials/:id`
pub async fn update_material(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    payload: Result<Json<MaterialDraft>, JsonRejection>,
) -> ServerResult<Json<DataResponse<Material>>> {
    let id = parse_id(raw)?;
    // An unknown id is a 404 even when the body is malformed.
    state.store.get(id)?;
    let Json(draft) = payload?;
    let material = state.store.update(id, draft)?;
    Ok(Json(DataResponse::new(messages::UPDATED, material)))
}

/// `DELETE /materials/:id`
pub async fn delete_material(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> ServerResult<Json<MessageResponse>> {
    let id = parse_id(raw)?;
    state.store.delete(id)?;
    Ok(Json(MessageResponse {
        message: messages::DELETED.into(),
    }))
}
