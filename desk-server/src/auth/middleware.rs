//! Authentication middleware
//!
//! Axum middleware guarding every protected `/api/` route.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Routes reachable without a token
const PUBLIC_API_ROUTES: &[&str] = &["/api/auth/login", "/api/auth/register", "/api/health"];

pub fn is_public_route(path: &str) -> bool {
    PUBLIC_API_ROUTES.contains(&path)
}

/// Require a logged-in user
///
/// Extracts the token from `Authorization: Bearer <token>`, verifies it,
/// resolves the user it names and inserts [`CurrentUser`] into the request
/// extensions.
///
/// # Skipped
///
/// - `OPTIONS *` (CORS preflight)
/// - non-`/api/` paths
/// - `/api/auth/login`, `/api/auth/register`, `/api/health`
///
/// # Errors
///
/// | Condition | Status | Message |
/// |-----------|--------|---------|
/// | no bearer token | 401 | Access token required |
/// | bad signature, malformed or expired | 403 | Invalid or expired token |
/// | user no longer exists | 403 | User not found |
pub async fn require_auth(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // Non-API routes fall through to a normal 404
    if !path.starts_with("/api/") || is_public_route(path) {
        return Ok(next.run(req).await);
    }

    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(JwtService::extract_from_header);

    let Some(token) = token else {
        security_log!("WARN", "auth_missing", uri = format!("{:?}", req.uri()));
        return Err(AppError::unauthorized());
    };

    let claims = match state.get_jwt_service().validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            security_log!(
                "WARN",
                "auth_failed",
                error = format!("{}", e),
                uri = format!("{:?}", req.uri())
            );
            return match e {
                JwtError::ExpiredToken => Err(AppError::token_expired()),
                _ => Err(AppError::invalid_token()),
            };
        }
    };

    let Some(user_id) = claims.user_id() else {
        security_log!("WARN", "auth_failed", error = "non-numeric subject", sub = claims.sub);
        return Err(AppError::invalid_token());
    };

    let Some(user) = state.store.users().find_by_id(user_id) else {
        security_log!("WARN", "auth_unknown_user", user_id = user_id);
        return Err(AppError::user_not_found());
    };

    let current = CurrentUser::from(&user);
    req.extensions_mut().insert(current.clone());
    let mut response = next.run(req).await;
    response.extensions_mut().insert(current);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes() {
        assert!(is_public_route("/api/auth/login"));
        assert!(is_public_route("/api/auth/register"));
        assert!(is_public_route("/api/health"));
        assert!(!is_public_route("/api/auth/profile"));
        assert!(!is_public_route("/api/clients"));
        assert!(!is_public_route("/api/auth/login/extra"));
    }
}
