//! Shared types for the desk workspace
//!
//! Wire types used by both `desk-server` and `desk-client`: entity models,
//! request payloads, auth DTOs and the unified error type.

pub mod auth;
pub mod error;
pub mod models;
pub mod serde_helpers;

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse, FieldError};
pub use http;
