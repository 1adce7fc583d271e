//! Result hook.
//!
//! Runs after the handler. Responses carrying a `PendingOutcome` are rebuilt by
//! the application's matchers; everything else passes through untouched.
//! Headers and any status other than the placeholder 500 are kept.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::Application;
use crate::http::handler::{PendingOutcome, PLACEHOLDER_STATUS};
use crate::http::ResponseContext;
use crate::observability::metrics;
use crate::outcome::Outcome;

/// Middleware installed by `Application::install`.
pub async fn outcome_middleware<O>(
    State(app): State<Application<O>>,
    request: Request<Body>,
    next: Next,
) -> Response
where
    O: Outcome + Clone + Send + Sync + 'static,
{
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    let (mut parts, body) = response.into_parts();
    let Some(PendingOutcome(outcome)) = parts.extensions.remove::<PendingOutcome<O>>() else {
        return Response::from_parts(parts, body);
    };

    // A status set by the handler or an inner layer survives; only the
    // placeholder is reset before the matchers run.
    if parts.status == PLACEHOLDER_STATUS {
        parts.status = StatusCode::OK;
    }
    let mut context = ResponseContext::from_parts(parts);
    match app.render(&mut context, &outcome) {
        Ok(handled) => {
            if !handled {
                tracing::debug!(%method, %path, "Matcher declined the outcome");
            }
            context.apply_default_content_type(app.default_content_type());
            context.into_response()
        }
        Err(e) => {
            tracing::error!(%method, %path, error = %e, "Failed to render outcome");
            metrics::record_dispatch_error(&e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
