//! HTTP transport subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all handler)
//!     → request.rs (snapshot method, path, headers, body)
//!     → [routing layer picks the handler]
//!     → response.rs (status + content type + body → wire response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::RequestDescriptor;
pub use response::ResponseDescriptor;
pub use server::HttpServer;
