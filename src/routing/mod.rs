//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path, headers, body)
//!     → dispatcher.rs (linear scan over registered routes)
//!     → route.rs (exact method + path comparison)
//!     → Invoke handler, or produce the default 404 response
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable at runtime (shared via Arc, no locks)
//! - Exact string match on method and path, no patterns or prefixes
//! - Deterministic: first registered match wins, duplicates allowed
//! - Handler errors propagate to the transport layer, never rendered inline

pub mod dispatcher;
pub mod route;

pub use dispatcher::Dispatcher;
pub use route::{Handler, HandlerError, Route};
