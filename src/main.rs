//! Form Gateway
//!
//! A small HTTP gateway service that serves a static HTML form, accepts
//! form submissions, and classifies submitting devices from their
//! User-Agent header.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                 FORM GATEWAY                 │
//!                     │                                              │
//!   Client Request    │  ┌──────┐    ┌─────────┐    ┌────────────┐  │
//!   ──────────────────┼─▶│ http │───▶│  event  │───▶│  handlers  │  │
//!                     │  │bridge│    │envelope │    │  dispatch  │  │
//!                     │  └──────┘    └─────────┘    └─────┬──────┘  │
//!                     │                                   │         │
//!                     │              ┌──────────┐   ┌─────▼──────┐  │
//!   Client Response   │              │  device  │◀──│ home/submit│  │
//!   ◀─────────────────┼──────────────│classifier│   │  handlers  │  │
//!                     │              └──────────┘   └────────────┘  │
//!                     │                                              │
//!                     │  ┌────────────────────────────────────────┐ │
//!                     │  │  config   ·  templates   ·   tracing   │ │
//!                     │  └────────────────────────────────────────┘ │
//!                     └──────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use form_gateway::config::{load_config, GatewayConfig};
use form_gateway::handlers::{templates, AppContext};
use form_gateway::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "form_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("form-gateway v0.1.0 starting");

    // Load configuration (defaults unless GATEWAY_CONFIG points at a file)
    let config = match std::env::var_os("GATEWAY_CONFIG") {
        Some(path) => load_config(Path::new(&path))?,
        None => GatewayConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        template_dir = %config.templates.dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Load the form template once; a missing template is fatal at startup
    let form_html = templates::load_form_template(Path::new(&config.templates.dir))?;
    let ctx = AppContext::new(form_html);

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(&config, ctx);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
