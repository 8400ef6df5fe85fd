//! Request handlers and dispatch.
//!
//! # Data Flow
//! ```text
//! Event (method, path, headers, body)
//!     → dispatch (method + path lookup)
//!     → home.rs    GET  /        → form page
//!     → submit.rs  POST /submit  → client metadata + device label
//!     → fallback               → 404
//! ```
//!
//! # Design Decisions
//! - Handlers never fail: every path produces a GatewayResponse
//! - Shared state is immutable after startup and cheap to clone

pub mod home;
pub mod submit;
pub mod templates;

use std::sync::Arc;

use crate::event::{Event, GatewayResponse};

/// Immutable state shared by all handlers, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    /// The rendered form page, read from disk at startup.
    pub form_html: Arc<str>,
}

impl AppContext {
    pub fn new(form_html: String) -> Self {
        Self {
            form_html: form_html.into(),
        }
    }
}

/// Route an event to its handler. Unmatched routes get a 404.
pub fn dispatch(ctx: &AppContext, event: &Event) -> GatewayResponse {
    match event.route() {
        ("GET", "/") => home::handle_home(ctx),
        ("POST", "/submit") => submit::handle_submit(event),
        (method, path) => {
            tracing::debug!(method, path, "no handler for route");
            GatewayResponse::text(404, "Not Found")
        }
    }
}
