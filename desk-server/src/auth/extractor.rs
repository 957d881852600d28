//! CurrentUser extractor

use axum::{extract::FromRequestParts, http::request::Parts};
use serde::Serialize;
use shared::auth::UserInfo;

use crate::AppError;
use crate::store::User;

/// Identity of the authenticated caller
///
/// Inserted by [`require_auth`](crate::auth::require_auth); never carries the
/// password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

impl From<CurrentUser> for UserInfo {
    fn from(user: CurrentUser) -> Self {
        UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            name: user.name,
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(AppError::unauthorized)
    }
}
