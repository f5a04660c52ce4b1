use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    dto::reference::{EventOption, FormOptions, SkaterOption},
    services::reference_data,
};

use crate::error::WebError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/skaters",
    responses(
        (status = 200, description = "List all skaters", body = Vec<SkaterOption>)
    ),
    tag = "reference"
)]
pub async fn list_skaters(State(state): State<AppState>) -> Result<Response, WebError> {
    let skaters = reference_data::list_skater_options(state.store.as_ref()).await?;

    Ok(Json(skaters).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List the events of the configured competition", body = Vec<EventOption>)
    ),
    tag = "reference"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = reference_data::list_event_options(
        state.store.as_ref(),
        state.settings.competition_id,
    )
    .await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/form/options",
    responses(
        (status = 200, description = "Skater and event options for the entry form; a list that failed to load is empty", body = FormOptions)
    ),
    tag = "reference"
)]
pub async fn get_form_options(State(state): State<AppState>) -> Response {
    let options =
        reference_data::load_form_options(state.store.as_ref(), state.settings.competition_id)
            .await;

    Json(options).into_response()
}
