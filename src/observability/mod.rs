//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - Log level configurable via config, `RUST_LOG` wins when set
//! - Request method, path, and status logged on the dispatch path

pub mod logging;

pub use logging::init_tracing;
