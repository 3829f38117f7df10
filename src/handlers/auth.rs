use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::error::ConsoleError;
use crate::router::ConsoleState;
use crate::session::Credentials;

/// POST /api/auth/login -> probe the repository, then install the session.
pub async fn login(
    State(state): State<ConsoleState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<Value>, ConsoleError> {
    info!(
        host = %credentials.host,
        database = %credentials.database,
        schema = %credentials.schema(),
        "testing repository connection"
    );

    if let Err(e) = state.sessions.test_connection(&credentials).await {
        warn!(error = %e, "login failed");
        return Err(e);
    }
    state.sessions.initialize(credentials).await;

    Ok(Json(json!({ "success": true })))
}

/// POST /api/auth/logout -> always succeeds, even with no active session.
pub async fn logout(State(state): State<ConsoleState>) -> Json<Value> {
    state.sessions.close().await;
    Json(json!({ "success": true }))
}

/// GET /api/auth/session -> connection status for the UI.
pub async fn session_status(State(state): State<ConsoleState>) -> Json<Value> {
    Json(json!({
        "connected": state.sessions.is_active().await,
        "schema": state.sessions.schema().await,
    }))
}
