//! In-flight response state that matchers mutate.
//!
//! # Responsibilities
//! - Hold status, headers and body while a handler result is being rendered
//! - Offer the idempotent body write used by every matcher
//! - Convert back into an axum `Response`
//!
//! # Design Decisions
//! - Body is buffered; outcome bodies are small rendered values, never streams
//! - `populate_body` writes only while the body is empty, so a second writer is a no-op
//! - Status and header mutations are never guarded

use axum::{
    body::Body,
    http::{header, response::Parts, Extensions, HeaderMap, HeaderValue, StatusCode},
    response::Response,
};

use crate::outcome::Payload;

/// Mutable response owned by a single request.
#[derive(Debug, Default)]
pub struct ResponseContext {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    extensions: Extensions,
}

impl ResponseContext {
    /// Create an empty `200 OK` response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the parts of a response produced further down the stack.
    /// The body is assumed to be empty.
    pub fn from_parts(parts: Parts) -> Self {
        Self {
            status: parts.status,
            headers: parts.headers,
            body: Vec::new(),
            extensions: parts.extensions,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// True while nothing has been written to the body.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Append raw bytes to the body unconditionally.
    pub fn write(&mut self, bytes: impl AsRef<[u8]>) {
        self.body.extend_from_slice(bytes.as_ref());
    }

    /// Write `bytes` only if the body is still empty.
    ///
    /// Returns whether the write happened.
    pub fn write_if_empty(&mut self, bytes: impl AsRef<[u8]>) -> bool {
        if !self.is_empty() {
            return false;
        }
        self.write(bytes);
        true
    }

    /// Render a payload and write it as the body if the body is empty.
    ///
    /// Strings are written verbatim, `null` writes nothing, anything else is
    /// written as compact JSON.
    pub fn populate_body(&mut self, body: &Payload) -> bool {
        match render_body(body) {
            Some(bytes) => self.write_if_empty(bytes),
            None => false,
        }
    }

    /// Set `Content-Type` when a body exists and no handler chose one.
    pub fn apply_default_content_type(&mut self, content_type: &HeaderValue) {
        if !self.is_empty() && !self.headers.contains_key(header::CONTENT_TYPE) {
            self.headers.insert(header::CONTENT_TYPE, content_type.clone());
        }
    }

    pub fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        *response.extensions_mut() = self.extensions;
        response
    }
}

/// Render a body payload to bytes. `None` means "nothing to write".
pub fn render_body(body: &Payload) -> Option<Vec<u8>> {
    match body {
        Payload::Null => None,
        Payload::String(text) => Some(text.clone().into_bytes()),
        other => Some(other.to_string().into_bytes()),
    }
}
