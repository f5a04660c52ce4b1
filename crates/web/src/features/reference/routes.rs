use axum::{Router, routing::get};

use super::handlers::{get_form_options, list_events, list_skaters};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/skaters", get(list_skaters))
        .route("/events", get(list_events))
        .route("/form/options", get(get_form_options))
}
