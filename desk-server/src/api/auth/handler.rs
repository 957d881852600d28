//! Authentication Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::auth::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest};

use crate::auth::CurrentUser;
use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::core::ServerState;
use crate::security_log;
use crate::store::{NewUser, User};
use crate::utils::{AppError, AppResult, ValidJson};

fn issue(state: &ServerState, user: &User) -> AppResult<AuthResponse> {
    let token = state
        .get_jwt_service()
        .generate_token(user.id)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;
    Ok(AuthResponse {
        token,
        user: user.info(),
    })
}

/// Login handler
///
/// Unknown usernames and wrong passwords fail identically.
pub async fn login(
    State(state): State<ServerState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let username = req.username;

    let Some(user) = state.store.users().find_by_username(&username) else {
        security_log!("WARN", "login_failed", username = username, reason = "user_not_found");
        return Err(AppError::invalid_credentials());
    };

    let valid = verify_password_blocking(req.password, user.password_hash.clone()).await?;
    if !valid {
        security_log!("WARN", "login_failed", username = username, reason = "invalid_password");
        return Err(AppError::invalid_credentials());
    }

    let response = issue(&state, &user)?;
    tracing::info!(user_id = user.id, username = %user.username, "User logged in");
    Ok(Json(response))
}

/// Register handler
pub async fn register(
    State(state): State<ServerState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let users = state.store.users();

    // Cheap rejection before hashing; create() re-checks under the lock
    if users.find_by_username(&req.username).is_some() {
        security_log!("WARN", "register_failed", username = req.username, reason = "username_taken");
        return Err(AppError::username_exists());
    }
    if users.find_by_email(&req.email).is_some() {
        security_log!("WARN", "register_failed", username = req.username, reason = "email_taken");
        return Err(AppError::email_exists());
    }

    let password_hash = hash_password_blocking(req.password).await?;

    let user = users
        .create(NewUser {
            username: req.username,
            email: req.email,
            name: req.name,
            password_hash,
        })
        .map_err(AppError::from)?;

    let response = issue(&state, &user)?;
    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(response)))
}

/// Profile of the authenticated caller
pub async fn profile(user: CurrentUser) -> Json<ProfileResponse> {
    Json(ProfileResponse { user: user.into() })
}
