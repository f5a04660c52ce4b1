use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::features;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(features::reference::routes::routes())
        .nest("/results", features::results::routes::routes());

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
