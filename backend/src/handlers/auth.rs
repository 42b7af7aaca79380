//! HTTP handlers for account endpoints

use axum::{extract::State, http::StatusCode, Json};
use shared::models::User;

use crate::error::AppResult;
use crate::services::auth::{AuthService, AuthTokens, LoginInput, RegisterInput};
use crate::AppState;

/// Register a new account
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    tracing::info!("Creating a new user");
    let service = AuthService::new(state.db, &state.config);
    let user = service.register(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with username and password
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<Json<AuthTokens>> {
    let service = AuthService::new(state.db, &state.config);
    let tokens = service.login(input).await?;
    Ok(Json(tokens))
}
