use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::result::{ResultAddedResponse, ResultFormData},
    services::{result_form::RESULT_ADDED, result_submission},
};

use crate::error::WebError;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = ResultFormData,
    responses(
        (status = 201, description = "Result added", body = ResultAddedResponse),
        (status = 400, description = "Validation failed, with one message per field"),
        (status = 422, description = "The skater or event could not be resolved"),
        (status = 500, description = "Error adding result")
    ),
    tag = "results"
)]
pub async fn add_result(
    State(state): State<AppState>,
    Json(form): Json<ResultFormData>,
) -> Result<Response, WebError> {
    let entry = form.validated()?;

    let result = result_submission::submit_result(state.store.as_ref(), &state.settings, &entry)
        .await
        .map_err(WebError::Submission)?;

    let response = ResultAddedResponse {
        message: RESULT_ADDED.to_string(),
        result,
    };

    Ok((StatusCode::CREATED, Json(response)).into_response())
}
