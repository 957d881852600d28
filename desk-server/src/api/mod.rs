//! API routes
//!
//! - [`health`] - liveness (public)
//! - [`auth`] - login, register, profile
//! - [`clients`] - client records
//! - [`invoices`] - invoices
//! - [`enquiries`] - customer enquiries
//! - [`stats`] - dashboard figures

pub mod auth;
pub mod clients;
pub mod enquiries;
pub mod health;
pub mod invoices;
pub mod stats;

pub use crate::utils::{AppError, AppResult};
