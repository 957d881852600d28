//! Data models
//!
//! Records as they travel over the API, plus their create and update
//! payloads. All IDs are `u64` assigned by the server.

pub mod client;
pub mod enquiry;
pub mod health;
pub mod invoice;
pub mod stats;

pub use client::*;
pub use enquiry::*;
pub use health::*;
pub use invoice::*;
pub use stats::*;
