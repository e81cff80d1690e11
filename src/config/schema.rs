//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::relay::headers::{ALLOW_ANY_ORIGIN, BASELINE_ALLOW_HEADERS};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request size limits.
    pub limits: LimitsConfig,

    /// CORS header values injected on every response.
    pub cors: CorsConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
///
/// There is no separate outbound timeout; the whole-request timeout bounds
/// the outbound call too.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// End-to-end request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request size limits.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum inbound body size buffered for POST/PUT forwarding.
    /// Bodies are held fully in memory, so this bounds per-request memory.
    pub max_request_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_request_body_bytes: 10 * 1024 * 1024,
        }
    }
}

/// CORS header values.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Value for `Access-Control-Allow-Origin`.
    pub allow_origin: String,

    /// Extra header names appended to the baseline
    /// `Access-Control-Allow-Headers` list. Used for vendor auth headers a
    /// browser must be allowed to send cross-origin.
    pub extra_allow_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_origin: ALLOW_ANY_ORIGIN.to_string(),
            extra_allow_headers: Vec::new(),
        }
    }
}

impl CorsConfig {
    /// Full value for `Access-Control-Allow-Headers`: the baseline list plus
    /// any configured extras.
    pub fn allow_headers_value(&self) -> String {
        let mut value = BASELINE_ALLOW_HEADERS.to_string();
        for name in &self.extra_allow_headers {
            value.push_str(", ");
            value.push_str(name);
        }
        value
    }
}
