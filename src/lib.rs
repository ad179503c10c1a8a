//! Declarative HTTP route table over an Axum transport.
//!
//! The crate is built around one reusable component: a [`routing::Dispatcher`]
//! holding an ordered collection of (method, path) → handler bindings. The
//! table is populated once at startup and consulted read-only per request.

pub mod app;
pub mod config;
pub mod http;
pub mod observability;
pub mod routing;

pub use config::ServerConfig;
pub use http::{HttpServer, RequestDescriptor, ResponseDescriptor};
pub use routing::Dispatcher;
