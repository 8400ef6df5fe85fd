//! Handler for POST /submit — form submissions.

use serde::Serialize;

use crate::device::parse_phone_model;
use crate::event::{extract_ip, header_str, lower_headers, read_body, Event, GatewayResponse};

/// Acknowledgment returned to the submitting client.
#[derive(Debug, Serialize)]
pub struct SubmitAck {
    /// Device label inferred from the User-Agent header.
    pub device: String,
    /// Client IP, when one could be determined.
    pub client_ip: Option<String>,
    /// Decoded body size in bytes.
    pub received_bytes: usize,
}

/// Process a form submission: decode the body, resolve the client IP, and
/// classify the submitting device. Never fails; missing metadata degrades
/// to defaults.
pub fn handle_submit(event: &Event) -> GatewayResponse {
    let headers = lower_headers(event.headers.as_ref());
    let user_agent = header_str(&headers, "user-agent");

    let device = parse_phone_model(user_agent);
    let client_ip = extract_ip(event);
    let body = read_body(event);

    tracing::info!(
        device = %device,
        client_ip = client_ip.as_deref().unwrap_or("unknown"),
        received_bytes = body.len(),
        "form submission received"
    );

    GatewayResponse::json(
        200,
        &SubmitAck {
            device,
            client_ip,
            received_bytes: body.len(),
        },
    )
}
