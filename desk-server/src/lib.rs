//! Desk Server - invoicing, client records and customer enquiries over a
//! JSON API
//!
//! # Module layout
//!
//! ```text
//! desk-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── auth/          # JWT, argon2, auth gateway middleware
//! ├── store/         # in-memory record store
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # access log
//! └── utils/         # validation extractor, logger
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod middleware;
pub mod store;
pub mod utils;

pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, build_app};
pub use store::Store;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

// Security events, on their own target so they can be routed separately
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env` and install the global subscriber from `LOG_LEVEL` / `LOG_DIR`
pub fn setup_environment() {
    let _ = dotenv::dotenv();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty());
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
