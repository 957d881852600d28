use crate::auth::JwtConfig;
use crate::core::ServerError;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 5000 | bind port |
/// | JWT_SECRET | random in development | HS256 signing secret |
/// | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
/// | ENVIRONMENT | development | development \| production |
/// | LOG_LEVEL | info | tracing filter directive |
/// | LOG_DIR | unset | daily-rolling log files |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | grace period after a shutdown signal |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 JWT_SECRET=... cargo run -p desk-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub jwt: JwtConfig,
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub shutdown_timeout_ms: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Fails only on an unusable JWT secret in production.
    pub fn from_env() -> Result<Self, ServerError> {
        let environment = env_or("ENVIRONMENT", "development");
        let is_production = environment == "production";
        let jwt = JwtConfig::from_env(is_production)
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            host: env_or("HTTP_HOST", "0.0.0.0"),
            http_port: env_parse("HTTP_PORT", 5000),
            jwt,
            environment,
            log_level: env_or("LOG_LEVEL", "info"),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10_000),
        })
    }

    /// Override the bind address
    ///
    /// Commonly used in tests
    pub fn with_overrides(mut self, host: impl Into<String>, http_port: u16) -> Self {
        self.host = host.into();
        self.http_port = http_port;
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Development defaults with a random JWT secret; reads no environment
impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            http_port: 5000,
            jwt: JwtConfig::ephemeral(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
            log_dir: None,
            shutdown_timeout_ms: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_development() {
        let config = Config::default();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert!(config.jwt.secret.len() >= crate::auth::jwt::MIN_SECRET_LEN);
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides("0.0.0.0", 8088);
        assert_eq!(config.bind_addr(), "0.0.0.0:8088");
    }
}
