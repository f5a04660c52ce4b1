use axum::{Router, routing::post};

use super::handlers::add_result;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(add_result))
}
