//! Access-control endpoints: the protection/admin toggles and the gated
//! user-data fetches.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};

use vulnlab::{Flag, ToggleState, User, get_all_user_data, get_user_data};

use crate::error::IntoResponseError;

pub(super) fn router() -> Router<Arc<ToggleState>> {
    Router::new()
        .route("/toggle-protection", post(toggle_protection))
        .route("/toggle-admin", post(toggle_admin))
        .route("/user-data", get(user_data))
        .route("/all-user-data", get(all_user_data))
}

/// Flip protection mode and return the new value
///
/// Idempotent negation: no request body, two calls restore the original
/// posture.
async fn toggle_protection(State(toggles): State<Arc<ToggleState>>) -> Json<Value> {
    let enabled = toggles.toggle(Flag::Protection);
    tracing::info!("Protection mode toggled: enabled={}", enabled);
    Json(json!({
        "enabled": enabled,
        "status": if enabled { "Protection enabled" } else { "Protection disabled" },
    }))
}

/// Flip admin mode and return the new value
async fn toggle_admin(State(toggles): State<Arc<ToggleState>>) -> Json<Value> {
    let active = toggles.toggle(Flag::Admin);
    tracing::info!("Admin mode toggled: active={}", active);
    Json(json!({
        "enabled": active,
        "status": if active { "Admin logged in" } else { "Admin logged out" },
    }))
}

#[derive(serde::Deserialize)]
struct UsernameQuery {
    username: Option<String>,
}

/// Fetch one user's record, gated by the decision engine
async fn user_data(
    State(toggles): State<Arc<ToggleState>>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<User>, (StatusCode, String)> {
    // One snapshot per request; a toggle racing this call is not observed
    // between lookup and decision
    let flags = toggles.snapshot();
    let username = query.username.unwrap_or_default();

    let user = get_user_data(&username, &flags)
        .await
        .into_response_error()?;
    Ok(Json(user))
}

/// Fetch every user's record, gated by the bulk rule
async fn all_user_data(
    State(toggles): State<Arc<ToggleState>>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let flags = toggles.snapshot();
    let username = query.username.unwrap_or_default();

    let users = get_all_user_data(&username, &flags)
        .await
        .into_response_error()?;
    Ok(Json(users))
}
