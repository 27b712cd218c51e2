use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::state::{AppState, blocking};

/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited {} times!</p></body></html>",
        state.hits.get()
    ))
}

/// POST /admin/reset — wipe all users (and their chirps) and zero the hit
/// counter. Only allowed on the dev platform.
pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if !state.is_dev() {
        warn!(platform = %state.platform, "Reset refused outside dev platform");
        return Err(ApiError::Forbidden);
    }

    let db_state = state.clone();
    let deleted = blocking(move || db_state.db.delete_all_users()).await?;
    state.hits.reset();

    info!(deleted, "Reset hit counter and users");
    Ok("OK")
}
