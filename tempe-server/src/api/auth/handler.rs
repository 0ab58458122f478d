//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use shared::models::{LoginRequest, LoginResponse};

use crate::AppError;
use crate::auth::{CurrentUser, password};
use crate::core::ServerState;
use crate::db::repository::user;

/// Login handler
///
/// Every answer waits `login_delay_ms`. Unknown users and wrong passwords
/// share one error and one argon2 verification, so usernames cannot be
/// told apart by the reply or its timing.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = req.username.trim().to_string();

    let found = user::find_by_username(&state.pool, &username).await?;

    tokio::time::sleep(Duration::from_millis(state.config.login_delay_ms)).await;

    let found = match found {
        Some(u) => {
            let password_valid = password::verify_password(&req.password, &u.password_hash)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(username = %username, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }
            u
        }
        None => {
            password::verify_dummy(&req.password);
            tracing::warn!(username = %username, "Login failed - user not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(found.id, &found.username)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        user_id = found.id,
        username = %found.username,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        token,
        username: found.username,
    }))
}

/// The user behind the bearer token
pub async fn me(user: CurrentUser) -> Json<CurrentUser> {
    Json(user)
}
