//! Handler return values.
//!
//! Handlers return `HandlerResult<O>`: either a plain body or an outcome for the
//! installed `Application` to render.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::outcome::{Attempt, IntoOutcome, Outcome};

/// Value returned by a route handler.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult<O> {
    /// Plain body, handled by the default path.
    Raw(String),
    /// Outcome rendered by the matcher registry.
    Outcome(O),
}

impl<O: Outcome> HandlerResult<O> {
    pub fn raw(body: impl Into<String>) -> Self {
        Self::Raw(body.into())
    }

    /// Normalize a compatible outcome-like value into `O`.
    pub fn outcome(value: impl IntoOutcome<O>) -> Self {
        Self::Outcome(value.into_outcome())
    }
}

impl<O> From<String> for HandlerResult<O> {
    fn from(body: String) -> Self {
        Self::Raw(body)
    }
}

impl<O> From<&str> for HandlerResult<O> {
    fn from(body: &str) -> Self {
        Self::Raw(body.to_string())
    }
}

impl From<Attempt> for HandlerResult<Attempt> {
    fn from(outcome: Attempt) -> Self {
        Self::Outcome(outcome)
    }
}

#[cfg(feature = "either")]
impl From<crate::outcome::Branch> for HandlerResult<crate::outcome::Branch> {
    fn from(outcome: crate::outcome::Branch) -> Self {
        Self::Outcome(outcome)
    }
}

/// Status of an outcome response before the result hook renders it.
pub(crate) const PLACEHOLDER_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

/// Outcome waiting in the response extensions for the result hook.
#[derive(Debug, Clone)]
pub(crate) struct PendingOutcome<O>(pub(crate) O);

impl<O> IntoResponse for HandlerResult<O>
where
    O: Clone + Send + Sync + 'static,
{
    fn into_response(self) -> Response {
        match self {
            Self::Raw(body) => body.into_response(),
            Self::Outcome(outcome) => {
                // Left as a 500 unless the result hook picks the outcome up, so a
                // router without `Application::install` cannot look successful.
                let mut response = PLACEHOLDER_STATUS.into_response();
                response.extensions_mut().insert(PendingOutcome(outcome));
                response
            }
        }
    }
}
