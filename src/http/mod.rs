//! HTTP hosting subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request → Event conversion)
//!     → handlers::dispatch (method + path lookup)
//!     → server.rs (GatewayResponse → HTTP response)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - The server is a thin bridge: every request is converted into the
//!   gateway Event envelope the handlers consume, so handler behavior is
//!   identical under any hosting layer
//! - Request ID added as early as possible for tracing

pub mod request_id;
pub mod server;

pub use request_id::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
