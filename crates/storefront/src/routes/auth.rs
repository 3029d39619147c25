//! Authentication route handlers.
//!
//! Login and registration both establish a session on success, so the
//! order endpoints can scope to the caller without any client-held token.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use tower_sessions::Session;

use recircuit_core::User;
use recircuit_core::api::{LoginRequest, RegisterRequest};

use crate::error::{AppError, Result};
use crate::middleware::{clear_current_user, set_current_user};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Handle login.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(request) = payload.map_err(|_| AppError::validation("Invalid request body"))?;

    let user = AuthService::new(state.storage()).login(&request.phone, &request.password)?;

    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(user))
}

/// Handle registration.
///
/// A successful registration logs the new account in immediately.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    payload: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(request) = payload.map_err(|_| AppError::validation("Invalid request body"))?;

    let name = if request.name.trim().is_empty() {
        None
    } else {
        Some(request.name.trim().to_owned())
    };

    let user =
        AuthService::new(state.storage()).register(&request.phone, &request.password, name)?;

    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, "New account registered");
    Ok(Json(user))
}

/// Handle logout.
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}
