//! Desk Client - typed async client for the desk JSON API
//!
//! ```ignore
//! use desk_client::{ClientConfig, DeskClient};
//!
//! let mut client = DeskClient::new(ClientConfig::new("http://localhost:5000"))?;
//! client.login("alice", "wonderland").await?;
//! let clients = client.list_clients().await?;
//! client.logout();
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;

pub use client::DeskClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};

// Re-export wire types so callers need not depend on `shared` directly
pub use shared::auth::{AuthResponse, LoginRequest, ProfileResponse, RegisterRequest, UserInfo};
pub use shared::models;
pub use shared::{AppError, ErrorCode};
