//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and header values
//! - Keep aliases from shadowing the built-in matcher keys
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::registry::MatcherKey;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("response.default_content_type: `{0}` is not a valid header value")]
    InvalidContentType(String),

    #[error("matchers: alias names must not be empty")]
    EmptyAlias,

    #[error("matchers: alias `{0}` would replace a built-in matcher")]
    ReservedAlias(String),

    #[error("matchers: alias `{0}` is listed more than once")]
    DuplicateAlias(String),
}

/// Check `config` and collect every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if HeaderValue::from_str(&config.response.default_content_type).is_err() {
        errors.push(ValidationError::InvalidContentType(
            config.response.default_content_type.clone(),
        ));
    }

    let mut seen = HashSet::new();
    let aliases = config
        .matchers
        .right_aliases
        .iter()
        .chain(&config.matchers.left_aliases);
    for alias in aliases {
        if alias.trim().is_empty() {
            errors.push(ValidationError::EmptyAlias);
        } else if MatcherKey::from(alias.clone()).is_canonical() {
            errors.push(ValidationError::ReservedAlias(alias.clone()));
        } else if !seen.insert(alias.as_str()) {
            errors.push(ValidationError::DuplicateAlias(alias.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
