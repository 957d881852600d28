//! Authentication
//!
//! - [`JwtService`] - token issue and verification
//! - [`CurrentUser`] - caller identity injected by the middleware
//! - [`require_auth`] - the auth gateway middleware
//! - [`password`] - argon2 hashing

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use extractor::CurrentUser;
pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
