use std::path::Path;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::{admin, chirps, health, metrics, users};

/// Build the full application: JSON API, admin pages, and the static file
/// tree under `/app`, which is the only part counted by the hit counter.
pub fn router(state: AppState, filepath_root: impl AsRef<Path>) -> Router {
    let api = Router::new()
        .route("/api/healthz", get(health::healthz))
        .route("/api/validate_chirp", post(chirps::validate_chirp))
        .route("/api/users", post(users::create_user))
        .route("/api/login", post(users::login))
        .route("/api/chirps", post(chirps::create_chirp).get(chirps::get_chirps))
        .route("/api/chirps/{chirp_id}", get(chirps::get_chirp))
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset))
        .with_state(state.clone());

    let files = Router::new()
        .nest_service("/app", ServeDir::new(filepath_root))
        .layer(middleware::from_fn_with_state(state, metrics::count_request));

    Router::new().merge(api).merge(files)
}
