//! Authentication handler implementations

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    extract::Json,
    middleware::auth::AuthenticatedUser,
    services::AuthService,
    state::AppState,
    utils::validation::validate_username,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{LoginResponse, UserResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    payload.validate()?;
    validate_username(&payload.username)?;

    let user = AuthService::register(
        state.db(),
        &payload.username,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Login with username/email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let (user, access_token, expires_in) = AuthService::login(
        state.db(),
        state.config(),
        &payload.identifier,
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse {
        user: user.into(),
        access_token,
        token_type: "Bearer",
        expires_in,
    }))
}

/// Current user profile
pub async fn me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UserResponse>> {
    let user = AuthService::get_user_by_id(state.db(), &auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(user.into()))
}
