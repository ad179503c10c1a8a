//! Route records and handler types.

use std::fmt;
use std::sync::Arc;

use axum::http::Method;
use thiserror::Error;

use crate::http::{RequestDescriptor, ResponseDescriptor};

/// Errors a handler can surface.
///
/// Never serialized onto the wire. The transport layer converts any
/// handler error into a generic 500 response.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Response payload could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Handler-specific failure.
    #[error("{0}")]
    Other(String),
}

/// A unit of logic that consumes a request and produces a response.
///
/// Handlers are synchronous and return immediately; any interleaving of
/// in-flight requests happens in the async transport, outside the table.
pub type Handler =
    Arc<dyn Fn(&RequestDescriptor) -> Result<ResponseDescriptor, HandlerError> + Send + Sync>;

/// An immutable binding from an HTTP method and literal path to a handler.
///
/// Created at registration time, never mutated, lives for the process
/// lifetime inside the dispatcher.
#[derive(Clone)]
pub struct Route {
    pub method: Method,
    pub path: String,
    pub handler: Handler,
}

impl Route {
    /// Exact match on method AND path. Case-sensitive paths, no prefixes.
    pub fn matches(&self, method: &Method, path: &str) -> bool {
        self.method == *method && self.path == path
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
