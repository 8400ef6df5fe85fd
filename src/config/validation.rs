//! Semantic configuration checks.
//!
//! Serde already guarantees the config is well-formed TOML with the right
//! types; these checks catch values that parse but cannot work.

use std::net::SocketAddr;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a deserialized configuration. Collects every failure rather
/// than stopping at the first.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("not a valid socket address: {}", config.listener.bind_address),
        });
    }

    if config.templates.dir.is_empty() {
        errors.push(ValidationError {
            field: "templates.dir",
            message: "must not be empty".to_string(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError {
            field: "timeouts.request_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError {
            field: "limits.max_body_bytes",
            message: "must be greater than zero".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
