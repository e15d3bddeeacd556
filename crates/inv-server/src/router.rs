use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// HTTP endpoint paths.
pub mod endpoints {
    pub const HEALTH: &str = "/health";
    pub const INFO: &str = "/info";
    pub const MATERIALS: &str = "/materials";
    pub const MATERIAL: &str = "/materials/:id";
}

/// Build the axum router with all material endpoints.
pub fn build_router(state: AppState, cors_permissive: bool) -> Router {
    let router = Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .route(
            endpoints::MATERIALS,
            get(handler::list_materials).post(handler::create_material),
        )
        .route(
            endpoints::MATERIAL,
            get(handler::get_material)
                .put(handler::update_material)
                .delete(handler::delete_material),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors_permissive {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
