use thiserror::Error;

use crate::outcome::Payload;
use crate::registry::MatcherKey;

/// Failure while rendering an outcome onto a response.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A matcher key was invoked that nothing is registered under.
    #[error("no matcher registered for `{0}`")]
    Unregistered(MatcherKey),

    /// The payload does not have the shape the matcher destructures.
    #[error("matcher `{matcher}` expected {expected}, got {found}")]
    Shape {
        matcher: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid header `{name}`: {reason}")]
    InvalidHeader { name: String, reason: String },
}

impl DispatchError {
    pub(crate) fn shape(matcher: &'static str, expected: &'static str, found: &Payload) -> Self {
        Self::Shape {
            matcher,
            expected,
            found: found.to_string(),
        }
    }

    pub(crate) fn header(name: &str, reason: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unregistered(_) => "unregistered",
            Self::Shape { .. } => "shape",
            Self::InvalidStatus(_) => "status",
            Self::InvalidHeader { .. } => "header",
        }
    }
}
