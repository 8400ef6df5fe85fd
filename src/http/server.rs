//! HTTP server setup and the request ↔ envelope bridge.
//!
//! # Responsibilities
//! - Create the Axum router with a single fallback handler
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Convert each inbound request into a gateway Event
//! - Convert the handler's GatewayResponse back into an HTTP response
//!
//! # Design Decisions
//! - Bodies that are not valid UTF-8 travel base64-encoded with the
//!   `isBase64Encoded` flag set, matching the gateway's binary transport
//! - The peer address is recorded under `requestContext.identity.sourceIp`
//!   so IP extraction has its fallback tier even without proxies in front

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{
        header::{HeaderName, HeaderValue},
        Request, StatusCode,
    },
    response::Response,
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::event::{Event, GatewayResponse};
use crate::handlers::{self, AppContext};
use crate::http::request_id::RequestIdLayer;

/// State injected into the gateway handler.
#[derive(Clone)]
struct ServerState {
    ctx: AppContext,
    max_body_bytes: usize,
}

/// HTTP server hosting the gateway handlers.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and handler
    /// context.
    pub fn new(config: &GatewayConfig, ctx: AppContext) -> Self {
        let state = ServerState {
            ctx,
            max_body_bytes: config.limits.max_body_bytes,
        };

        let router = Router::new()
            .fallback(gateway_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
    }
}

async fn gateway_handler(
    State(state): State<ServerState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    req: Request<Body>,
) -> Response {
    let event = event_from_request(req, peer, state.max_body_bytes).await;
    let response = handlers::dispatch(&state.ctx, &event);
    into_http_response(response)
}

/// Convert an HTTP request into the gateway Event envelope.
async fn event_from_request(req: Request<Body>, peer: SocketAddr, max_body_bytes: usize) -> Event {
    let (parts, body) = req.into_parts();

    // Repeated header names collapse to the last value, like the gateway's
    // single-value header map.
    let mut headers = Map::new();
    for (name, value) in &parts.headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        headers.insert(name.as_str().to_string(), Value::String(value));
    }

    // An unreadable or over-limit body degrades to empty.
    let bytes = axum::body::to_bytes(body, max_body_bytes)
        .await
        .unwrap_or_default();
    let (body, is_base64_encoded) = if bytes.is_empty() {
        (None, false)
    } else {
        match std::str::from_utf8(&bytes) {
            Ok(text) => (Some(text.to_string()), false),
            Err(_) => (Some(STANDARD.encode(&bytes)), true),
        }
    };

    Event {
        headers: Some(headers),
        body,
        is_base64_encoded,
        request_context: json!({"identity": {"sourceIp": peer.ip().to_string()}}),
        http_method: Some(parts.method.as_str().to_string()),
        path: Some(parts.uri.path().to_string()),
    }
}

/// Convert a GatewayResponse back into an HTTP response. Headers that are
/// not valid HTTP are skipped rather than failing the whole response.
fn into_http_response(response: GatewayResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut out = Response::new(Body::from(response.body));
    *out.status_mut() = status;
    for (name, value) in &response.headers {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            out.headers_mut().insert(name, value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer() -> SocketAddr {
        "10.0.0.7:54321".parse().unwrap()
    }

    #[tokio::test]
    async fn test_event_from_request_text_body() {
        let req = Request::builder()
            .method("POST")
            .uri("http://localhost/submit?ignored=1")
            .header("User-Agent", "curl/7.64.1")
            .body(Body::from("name=alice"))
            .unwrap();

        let event = event_from_request(req, peer(), 1024).await;

        assert_eq!(event.route(), ("POST", "/submit"));
        assert!(!event.is_base64_encoded);
        assert_eq!(event.body.as_deref(), Some("name=alice"));
        assert_eq!(
            event.request_context.pointer("/identity/sourceIp"),
            Some(&Value::String("10.0.0.7".to_string()))
        );
    }

    #[tokio::test]
    async fn test_event_from_request_binary_body_is_base64() {
        let req = Request::builder()
            .method("POST")
            .uri("/submit")
            .body(Body::from(vec![0xFF, 0x00, 0x7F]))
            .unwrap();

        let event = event_from_request(req, peer(), 1024).await;

        assert!(event.is_base64_encoded);
        let decoded = STANDARD.decode(event.body.unwrap()).unwrap();
        assert_eq!(decoded, vec![0xFF, 0x00, 0x7F]);
    }

    #[tokio::test]
    async fn test_event_from_request_empty_body_is_absent() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let event = event_from_request(req, peer(), 1024).await;

        assert!(event.body.is_none());
        assert!(!event.is_base64_encoded);
    }

    #[test]
    fn test_into_http_response_maps_status_and_headers() {
        let resp = into_http_response(GatewayResponse::text(404, "nope"));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_into_http_response_invalid_status_degrades_to_500() {
        let resp = into_http_response(GatewayResponse::new(42));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
