//! Response descriptors produced by handlers.
//!
//! # Responsibilities
//! - Carry status, content type, and body from handler to transport
//! - Serialize JSON payloads via serde
//! - Provide the default 404 response for unmatched routes

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

/// Status, content type, and body produced by a handler.
///
/// Consumed by the transport layer when building the wire response,
/// discarded after transmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDescriptor {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl ResponseDescriptor {
    /// 200 response with an HTML body.
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: TEXT_HTML,
            body: body.into(),
        }
    }

    /// 200 response with a JSON body serialized from `value`.
    pub fn json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        Self::status_json(StatusCode::OK, value)
    }

    /// JSON response with an explicit status code.
    pub fn status_json<T: Serialize>(
        status: StatusCode,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            status,
            content_type: APPLICATION_JSON,
            body: serde_json::to_string(value)?,
        })
    }

    /// Default response for requests no route matched.
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            content_type: TEXT_PLAIN,
            body: "No matching route found".to_string(),
        }
    }
}

impl IntoResponse for ResponseDescriptor {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}
