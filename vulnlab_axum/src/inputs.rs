//! Stored-input endpoints: the sanitization toggle and the submit / list /
//! clear operations behind the XSS demo.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Json as ExtractJson, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};

use vulnlab::{Flag, InputRecord, ToggleState, clear_inputs, list_inputs, submit_input};

use crate::error::IntoResponseError;

pub(super) fn router() -> Router<Arc<ToggleState>> {
    Router::new()
        .route("/", get(get_inputs).delete(clear_all_inputs))
        .route("/submit", post(submit))
        .route("/toggle-sanitization", post(toggle_sanitization))
}

/// Flip sanitization mode and return the new value
async fn toggle_sanitization(State(toggles): State<Arc<ToggleState>>) -> Json<Value> {
    let enabled = toggles.toggle(Flag::Sanitization);
    tracing::info!("Sanitization mode toggled: enabled={}", enabled);
    Json(json!({
        "enabled": enabled,
        "status": if enabled { "Sanitization enabled" } else { "Sanitization disabled" },
    }))
}

/// Request payload for storing a piece of content
///
/// `content` is required; a request without it fails JSON extraction
/// before reaching the store.
#[derive(serde::Deserialize)]
struct SubmitInputRequest {
    content: String,
}

/// Store submitted content, sanitized per the current flag
async fn submit(
    State(toggles): State<Arc<ToggleState>>,
    ExtractJson(payload): ExtractJson<SubmitInputRequest>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let flags = toggles.snapshot();

    submit_input(&payload.content, &flags)
        .await
        .into_response_error()?;

    Ok(Json(json!({ "message": "Input saved successfully" })))
}

/// List every stored input in submission order
async fn get_inputs() -> Result<Json<Vec<InputRecord>>, (StatusCode, String)> {
    let records = list_inputs().await.into_response_error()?;
    Ok(Json(records))
}

/// Remove every stored input
async fn clear_all_inputs() -> Result<Json<Value>, (StatusCode, String)> {
    clear_inputs().await.into_response_error()?;
    Ok(Json(json!({ "message": "All inputs cleared successfully" })))
}
