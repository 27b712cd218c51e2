use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;
use uuid::Uuid;

use chirpy_types::api::{
    ChirpResponse, CreateChirpRequest, MAX_CHIRP_LENGTH, ValidateChirpRequest,
    ValidateChirpResponse,
};

use crate::error::ApiError;
use crate::moderation;
use crate::state::{AppState, blocking};

fn check_length(body: &str) -> Result<(), ApiError> {
    if body.chars().count() > MAX_CHIRP_LENGTH {
        return Err(ApiError::BadRequest("Chirp is too long"));
    }
    Ok(())
}

/// POST /api/validate_chirp — length check plus profanity masking, nothing stored.
pub async fn validate_chirp(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let req: ValidateChirpRequest = serde_json::from_slice(&body)?;
    check_length(&req.body)?;

    Ok(Json(ValidateChirpResponse {
        cleaned_body: moderation::mask(&req.body),
    }))
}

/// POST /api/chirps — the body is stored unmasked.
pub async fn create_chirp(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: CreateChirpRequest = serde_json::from_slice(&body)?;
    check_length(&req.body)?;

    // An unknown user_id fails the foreign key and surfaces as a 500.
    let chirp = blocking(move || state.db.create_chirp(&req.body, req.user_id)).await?;

    info!(chirp_id = %chirp.id, user_id = %chirp.user_id, "Chirp created");

    Ok((StatusCode::CREATED, Json(chirp)))
}

/// GET /api/chirps — every chirp, oldest first.
pub async fn get_chirps(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let chirps: Vec<ChirpResponse> = blocking(move || state.db.get_chirps()).await?;
    Ok(Json(chirps))
}

/// GET /api/chirps/{chirp_id}
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let chirp_id: Uuid = raw_id.parse().map_err(|_| ApiError::MalformedId(raw_id))?;

    let chirp = blocking(move || state.db.get_chirp(chirp_id))
        .await?
        .ok_or(ApiError::NotFound("Chirp not found"))?;

    Ok(Json(chirp))
}
