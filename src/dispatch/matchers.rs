//! Built-in matchers.
//!
//! Each matcher returns `Ok(true)` when it rendered the outcome and `Ok(false)`
//! when the outcome is not its variant.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

use super::{classify, DispatchError, Scope};
use crate::http::parse_status;
use crate::outcome::{Outcome, Payload};

static NO_BODY: Payload = Payload::Null;

/// Top-level entry point: classify and re-dispatch through the registry.
pub fn match_either<O: Outcome>(
    scope: &mut Scope<'_, O>,
    outcome: &O,
) -> Result<bool, DispatchError> {
    let key = classify(outcome);
    tracing::debug!(matcher = %key, "Dispatching outcome");
    scope.invoke(&key, outcome)
}

/// Write the positive payload as the body.
pub fn match_right<O: Outcome>(
    scope: &mut Scope<'_, O>,
    outcome: &O,
) -> Result<bool, DispatchError> {
    let Some(value) = outcome.positive() else {
        return Ok(false);
    };
    scope.response_mut().populate_body(value);
    Ok(true)
}

/// Destructure the negative payload as `(status, body)`.
///
/// A payload that is not an array is a bare status with no body.
pub fn match_left<O: Outcome>(
    scope: &mut Scope<'_, O>,
    outcome: &O,
) -> Result<bool, DispatchError> {
    let Some(value) = outcome.negative() else {
        return Ok(false);
    };
    let (status, body) = match value {
        Payload::Array(items) => match items.as_slice() {
            [status, body] => (status, body),
            _ => return Err(DispatchError::shape("left", "a [status, body] pair", value)),
        },
        status => (status, &NO_BODY),
    };

    let response = scope.response_mut();
    response.set_status(parse_status(status)?);
    response.populate_body(body);
    Ok(true)
}

/// Destructure the active payload as `(status, headers, body)`.
pub fn match_rack_either<O: Outcome>(
    scope: &mut Scope<'_, O>,
    outcome: &O,
) -> Result<bool, DispatchError> {
    let value = outcome.payload();
    let Payload::Array(items) = value else {
        return Err(DispatchError::shape("rack_either", "a [status, headers, body] triple", value));
    };
    let [status, headers, body] = items.as_slice() else {
        return Err(DispatchError::shape("rack_either", "a [status, headers, body] triple", value));
    };
    let Payload::Object(headers) = headers else {
        return Err(DispatchError::shape("rack_either", "a header mapping", headers));
    };

    let response = scope.response_mut();
    response.set_status(parse_status(status)?);
    for (name, value) in headers {
        merge_header(response.headers_mut(), name, value)?;
    }

    match body {
        // Rack bodies are sequences of string chunks.
        Payload::Array(chunks) if chunks.iter().all(Payload::is_string) => {
            let joined: String = chunks.iter().filter_map(Payload::as_str).collect();
            response.write_if_empty(joined);
        }
        other => {
            response.populate_body(other);
        }
    }
    Ok(true)
}

/// Overwrite `name` with `value`. Arrays set one header line per element; an
/// empty array removes the header.
fn merge_header(headers: &mut HeaderMap, name: &str, value: &Payload) -> Result<(), DispatchError> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| DispatchError::header(name, e))?;

    match value {
        Payload::Array(values) => {
            headers.remove(&header_name);
            for value in values {
                headers.append(header_name.clone(), header_value(name, value)?);
            }
        }
        single => {
            headers.insert(header_name, header_value(name, single)?);
        }
    }
    Ok(())
}

fn header_value(name: &str, value: &Payload) -> Result<HeaderValue, DispatchError> {
    let text = match value {
        Payload::String(text) => text.clone(),
        Payload::Number(number) => number.to_string(),
        Payload::Bool(flag) => flag.to_string(),
        other => return Err(DispatchError::header(name, format!("unsupported value {other}"))),
    };
    HeaderValue::from_str(&text).map_err(|e| DispatchError::header(name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ResponseContext;
    use crate::outcome::{failure, success, Attempt};
    use crate::registry::{MatcherKey, MatcherRegistry};
    use axum::http::{header, StatusCode};
    use serde_json::json;

    fn registry() -> MatcherRegistry<Attempt> {
        let mut registry = MatcherRegistry::new();
        registry.register(MatcherKey::RIGHT, &[MatcherKey::VALUE], match_right::<Attempt>);
        registry.register(MatcherKey::LEFT, &[MatcherKey::STATUS], match_left::<Attempt>);
        registry.register(MatcherKey::EITHER, &[], match_either::<Attempt>);
        registry.register(MatcherKey::RACK_EITHER, &[], match_rack_either::<Attempt>);
        registry
    }

    fn run(key: MatcherKey, outcome: Attempt) -> (Result<bool, DispatchError>, ResponseContext) {
        let registry = registry();
        let mut response = ResponseContext::new();
        let result = Scope::new(&registry, &mut response).invoke(&key, &outcome);
        (result, response)
    }

    #[test]
    fn test_right_writes_body_only() {
        let (result, response) = run(MatcherKey::EITHER, success("Alright"));
        assert!(result.unwrap());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"Alright");
        assert!(response.headers().is_empty());
    }

    #[test]
    fn test_right_skips_negative() {
        let (result, response) = run(MatcherKey::RIGHT, failure("unauthorized"));
        assert!(!result.unwrap());
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.is_empty());
    }

    #[test]
    fn test_left_skips_positive() {
        let (result, _) = run(MatcherKey::STATUS, success("fine"));
        assert!(!result.unwrap());
    }

    #[test]
    fn test_left_bare_status() {
        let (result, response) = run(MatcherKey::EITHER, failure("unauthorized"));
        assert!(result.unwrap());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.is_empty());
    }

    #[test]
    fn test_left_status_and_body() {
        let (result, response) = run(MatcherKey::EITHER, failure(json!([422, "bad input"])));
        assert!(result.unwrap());
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.body(), b"bad input");
    }

    #[test]
    fn test_left_wrong_arity_is_shape_error() {
        let (result, _) = run(MatcherKey::EITHER, failure(json!([400])));
        assert!(matches!(result, Err(DispatchError::Shape { matcher: "left", .. })));

        let (result, _) = run(MatcherKey::LEFT, failure(json!([400, "a", "b", "c"])));
        assert!(matches!(result, Err(DispatchError::Shape { .. })));
    }

    #[test]
    fn test_rack_triple_from_success() {
        let (result, response) = run(MatcherKey::EITHER, success(json!([200, {}, "OK"])));
        assert!(result.unwrap());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"OK");
    }

    #[test]
    fn test_rack_triple_from_failure() {
        let outcome = failure(json!(["found", {"Location": "/x"}, null]));
        let (result, response) = run(MatcherKey::EITHER, outcome);
        assert!(result.unwrap());
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/x");
        assert!(response.is_empty());
    }

    #[test]
    fn test_rack_headers_later_entries_overwrite() {
        let outcome = success(json!([
            201,
            {"X-Trace": "first", "x-trace": "second", "X-Count": 3, "Vary": ["Accept", "Origin"]},
            ["chunk-", "two"]
        ]));
        let (result, response) = run(MatcherKey::EITHER, outcome);
        assert!(result.unwrap());
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()["x-trace"], "second");
        assert_eq!(response.headers()["x-count"], "3");
        let vary: Vec<_> = response.headers().get_all(header::VARY).iter().collect();
        assert_eq!(vary, ["Accept", "Origin"]);
        assert_eq!(response.body(), b"chunk-two");
    }

    #[test]
    fn test_rack_headers_must_be_a_mapping() {
        let (result, _) = run(MatcherKey::EITHER, success(json!([200, "nope", "OK"])));
        assert!(matches!(result, Err(DispatchError::Shape { matcher: "rack_either", .. })));
    }

    #[test]
    fn test_rack_invalid_header_value() {
        let (result, _) = run(MatcherKey::EITHER, success(json!([200, {"X-Bad": {"a": 1}}, "OK"])));
        assert!(matches!(result, Err(DispatchError::InvalidHeader { .. })));
    }

    #[test]
    fn test_rack_direct_call_requires_triple() {
        let (result, _) = run(MatcherKey::RACK_EITHER, success("not a triple"));
        assert!(matches!(result, Err(DispatchError::Shape { .. })));
    }

    fn run_on_written(key: MatcherKey, outcome: Attempt) -> ResponseContext {
        let registry = registry();
        let mut response = ResponseContext::new();
        response.write("already written");
        let handled = Scope::new(&registry, &mut response)
            .invoke(&key, &outcome)
            .unwrap();
        assert!(handled);
        response
    }

    #[test]
    fn test_left_keeps_written_body_but_sets_status() {
        let response = run_on_written(MatcherKey::EITHER, failure(json!([503, "overwritten?"])));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.body(), b"already written");
    }

    #[test]
    fn test_right_keeps_written_body() {
        let response = run_on_written(MatcherKey::RIGHT, success("overwritten?"));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), b"already written");
    }

    #[test]
    fn test_rack_chunks_keep_written_body() {
        let outcome = success(json!([202, {"X-Trace": "kept"}, ["over", "written?"]]));
        let response = run_on_written(MatcherKey::RACK_EITHER, outcome);
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.headers()["x-trace"], "kept");
        assert_eq!(response.body(), b"already written");
    }

    #[test]
    fn test_invalid_status_propagates() {
        let (result, _) = run(MatcherKey::EITHER, failure(json!(["nonsense", null])));
        assert!(matches!(result, Err(DispatchError::InvalidStatus(_))));
    }
}
