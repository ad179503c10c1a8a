//! Request snapshot handed to handlers.

use axum::body::Bytes;
use axum::http::{HeaderMap, Method};

/// Per-request view of the inbound HTTP message.
///
/// Constructed from the request parts once the body has been read,
/// discarded after the handler returns.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            method,
            path: path.into(),
            headers,
            body,
        }
    }

    /// Look up a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}
