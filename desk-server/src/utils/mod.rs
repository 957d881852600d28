//! Utilities
//!
//! - [`AppError`] - application error type (from `shared::error`)
//! - [`validation`] - the validating JSON extractor
//! - [`logger`] - subscriber setup

pub mod logger;
pub mod validation;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode, ErrorResponse, FieldError};
pub use validation::ValidJson;

/// Parse an `:id` path segment; anything that is not a `u64` is a lookup miss
pub fn parse_id(raw: &str, resource: &str) -> AppResult<u64> {
    raw.parse().map_err(|_| AppError::not_found(resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7", "Client").unwrap(), 7);
        let err = parse_id("abc", "Client").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Client not found");
        assert!(parse_id("-1", "Invoice").is_err());
    }
}
