use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use chirpy_types::api::{CreateUserRequest, LoginRequest, UserResponse};

use crate::error::ApiError;
use crate::state::{AppState, blocking};

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: CreateUserRequest = serde_json::from_slice(&body)?;

    let user = blocking(move || {
        let hashed = state.passwords.hash(&req.password)?;
        state.db.create_user(&req.email, &hashed)
    })
    .await?;

    info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /api/login
///
/// Returns the user record on success. An unknown email and a wrong password
/// produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: LoginRequest = serde_json::from_slice(&body)?;

    let user = blocking(move || {
        let Some(user) = state.db.get_user_by_email(&req.email)? else {
            return Ok(None);
        };

        let matches = state.passwords.verify(&req.password, &user.hashed_password);
        Ok(matches.then_some(user))
    })
    .await?
    .ok_or(ApiError::Unauthorized)?;

    Ok(Json(UserResponse::from(user)))
}
