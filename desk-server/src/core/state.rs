use std::sync::Arc;
use std::time::Instant;

use crate::auth::JwtService;
use crate::core::Config;
use crate::store::Store;

/// Server state - shared handles to every service
///
/// Cloned into each handler; all fields are cheap `Arc` clones.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | store | Arc<Store> | the in-memory record store |
/// | jwt_service | Arc<JwtService> | token issue and verification |
/// | started_at | Instant | process start, for uptime |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<Store>,
    pub jwt_service: Arc<JwtService>,
    pub started_at: Instant,
}

impl ServerState {
    /// Build state with an empty store
    pub fn new(config: Config) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        Self {
            config,
            store: Arc::new(Store::new()),
            jwt_service,
            started_at: Instant::now(),
        }
    }

    pub fn get_jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
