//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and header-value well-formedness
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue};

use crate::config::schema::RelayConfig;

/// A single semantic problem in the configuration.
#[derive(Debug)]
pub enum ValidationError {
    InvalidBindAddress(String),
    ZeroRequestTimeout,
    ZeroBodyLimit,
    InvalidAllowOrigin(String),
    InvalidAllowHeader(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address: {}", addr)
            }
            ValidationError::ZeroRequestTimeout => write!(f, "request timeout must be > 0"),
            ValidationError::ZeroBodyLimit => write!(f, "request body limit must be > 0"),
            ValidationError::InvalidAllowOrigin(origin) => {
                write!(f, "invalid allow-origin value: {}", origin)
            }
            ValidationError::InvalidAllowHeader(name) => {
                write!(f, "invalid allow-header name: {}", name)
            }
        }
    }
}

/// Check everything serde cannot.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.limits.max_request_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if HeaderValue::from_str(&config.cors.allow_origin).is_err() {
        errors.push(ValidationError::InvalidAllowOrigin(
            config.cors.allow_origin.clone(),
        ));
    }

    for name in &config.cors.extra_allow_headers {
        if name.parse::<HeaderName>().is_err() {
            errors.push(ValidationError::InvalidAllowHeader(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
