//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Response defaults applied by the result hook.
    pub response: ResponseConfig,

    /// Alias lists for the default matchers.
    pub matchers: MatcherConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Response defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponseConfig {
    /// Content type set on rendered responses that have a body but no
    /// `Content-Type` header.
    pub default_content_type: String,
}

impl ResponseConfig {
    pub const FALLBACK_CONTENT_TYPE: &'static str = "text/plain; charset=utf-8";
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            default_content_type: Self::FALLBACK_CONTENT_TYPE.to_string(),
        }
    }
}

/// Aliases installed alongside the default matchers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Extra names for the `right` matcher.
    pub right_aliases: Vec<String>,

    /// Extra names for the `left` matcher.
    pub left_aliases: Vec<String>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            right_aliases: vec!["value".to_string()],
            left_aliases: vec!["status".to_string()],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
