//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by range
//! - [`AppError`]: Error type with code, message and details
//! - [`ErrorResponse`]: JSON body returned for every failed request
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, FieldError};
//!
//! let err = AppError::new(ErrorCode::NotFound);
//! let err = AppError::not_found("Client");
//! let err = AppError::invalid_fields(
//!     "Invalid client data",
//!     vec![FieldError::new("email", "Invalid email")],
//! );
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorResponse, FieldError};
