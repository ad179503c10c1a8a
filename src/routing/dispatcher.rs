//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store registered routes in order
//! - Find the first route matching an incoming request
//! - Invoke its handler, or produce the default 404 response
//!
//! # Design Decisions
//! - Linear scan in registration order; first match wins
//! - O(n) lookup is fine for the route counts involved
//! - Duplicate (method, path) pairs are not rejected: the first
//!   registration shadows later ones, matching the transport-level
//!   behavior where a conflict only surfaces at port binding
//! - At most one handler runs per request

use std::sync::Arc;

use axum::http::Method;

use crate::http::{RequestDescriptor, ResponseDescriptor};
use crate::routing::route::{HandlerError, Route};

/// Ordered table of method + path → handler bindings.
///
/// Populated once before serving begins, then read-only.
#[derive(Default)]
pub struct Dispatcher {
    routes: Vec<Route>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Append a route to the table.
    pub fn register<F>(&mut self, method: Method, path: impl Into<String>, handler: F)
    where
        F: Fn(&RequestDescriptor) -> Result<ResponseDescriptor, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        let route = Route {
            method,
            path: path.into(),
            handler: Arc::new(handler),
        };
        tracing::debug!(method = %route.method, path = %route.path, "Route registered");
        self.routes.push(route);
    }

    pub fn get<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(&RequestDescriptor) -> Result<ResponseDescriptor, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.register(Method::GET, path, handler);
    }

    pub fn post<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(&RequestDescriptor) -> Result<ResponseDescriptor, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.register(Method::POST, path, handler);
    }

    pub fn put<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(&RequestDescriptor) -> Result<ResponseDescriptor, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.register(Method::PUT, path, handler);
    }

    pub fn delete<F>(&mut self, path: impl Into<String>, handler: F)
    where
        F: Fn(&RequestDescriptor) -> Result<ResponseDescriptor, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.register(Method::DELETE, path, handler);
    }

    /// Dispatch a request to the first matching route.
    ///
    /// No match yields the default 404 response. A handler error is
    /// returned as-is for the transport layer to report.
    pub fn dispatch(
        &self,
        request: &RequestDescriptor,
    ) -> Result<ResponseDescriptor, HandlerError> {
        match self
            .routes
            .iter()
            .find(|route| route.matches(&request.method, &request.path))
        {
            Some(route) => (route.handler)(request),
            None => Ok(ResponseDescriptor::not_found()),
        }
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::{HeaderMap, StatusCode};

    fn request(method: Method, path: &str) -> RequestDescriptor {
        RequestDescriptor::new(method, path, HeaderMap::new(), Bytes::new())
    }

    #[test]
    fn test_first_registered_wins() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.get("/dup", |_req| Ok(ResponseDescriptor::html("first")));
        dispatcher.get("/dup", |_req| Ok(ResponseDescriptor::html("second")));

        let response = dispatcher.dispatch(&request(Method::GET, "/dup")).unwrap();
        assert_eq!(response.body, "first");
    }

    #[test]
    fn test_method_mismatch_falls_through() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.post("/only-post", |_req| Ok(ResponseDescriptor::html("posted")));

        let response = dispatcher
            .dispatch(&request(Method::GET, "/only-post"))
            .unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);

        let response = dispatcher
            .dispatch(&request(Method::POST, "/only-post"))
            .unwrap();
        assert_eq!(response.status, StatusCode::OK);
    }

    #[test]
    fn test_unregistered_path_returns_default() {
        let dispatcher = Dispatcher::new();

        let response = dispatcher
            .dispatch(&request(Method::GET, "/missing"))
            .unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, "No matching route found");
    }

    #[test]
    fn test_path_match_is_exact_not_prefix() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.get("/api", |_req| Ok(ResponseDescriptor::html("api")));

        let response = dispatcher
            .dispatch(&request(Method::GET, "/api/v1"))
            .unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);

        let response = dispatcher.dispatch(&request(Method::GET, "/api")).unwrap();
        assert_eq!(response.status, StatusCode::OK);
    }

    #[test]
    fn test_handler_error_propagates() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.get("/boom", |_req| {
            Err(HandlerError::Other("handler exploded".into()))
        });

        let result = dispatcher.dispatch(&request(Method::GET, "/boom"));
        assert!(result.is_err());
    }

    #[test]
    fn test_handler_sees_request_descriptor() {
        let mut dispatcher = Dispatcher::new();
        dispatcher.post("/echo-path", |req| {
            Ok(ResponseDescriptor::html(req.path.clone()))
        });

        let response = dispatcher
            .dispatch(&request(Method::POST, "/echo-path"))
            .unwrap();
        assert_eq!(response.body, "/echo-path");
    }
}
