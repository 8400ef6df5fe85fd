//! Request and response envelope types.
//!
//! These mirror the JSON shapes exchanged with the hosting gateway: the
//! request side (`Event`) is deserialized permissively with every field
//! optional, the response side (`GatewayResponse`) serializes to the
//! `statusCode`/`headers`/`body` triple the gateway expects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound request envelope delivered by the hosting gateway.
///
/// All fields are optional; a completely empty JSON object is a valid
/// (if useless) event. Handlers must cope with any of these being absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    /// Header name → value mapping, key case arbitrary.
    pub headers: Option<Map<String, Value>>,

    /// Raw request body, possibly base64-encoded (see `is_base64_encoded`).
    pub body: Option<String>,

    /// True when `body` carries base64-encoded bytes.
    pub is_base64_encoded: bool,

    /// Gateway request metadata (`identity.sourceIp` lives in here).
    /// Kept untyped so a missing or oddly-shaped context is a lookup miss,
    /// not a deserialization failure.
    pub request_context: Value,

    /// HTTP method, used for dispatch.
    pub http_method: Option<String>,

    /// Request path, used for dispatch.
    pub path: Option<String>,
}

impl Event {
    /// Method and path as dispatchable strings (empty when absent).
    pub fn route(&self) -> (&str, &str) {
        (
            self.http_method.as_deref().unwrap_or(""),
            self.path.as_deref().unwrap_or(""),
        )
    }
}

/// Outbound response envelope returned to the hosting gateway.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl GatewayResponse {
    /// Empty response with the given status and no headers.
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
        }
    }

    /// Add a response header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the response body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// 200 HTML page, marked uncacheable so clients always see the
    /// current form.
    pub fn html(body: impl Into<String>) -> Self {
        Self::new(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .header("Cache-Control", "no-cache, no-store, must-revalidate")
            .body(body)
    }

    /// Plain text response.
    pub fn text(status_code: u16, body: impl Into<String>) -> Self {
        Self::new(status_code)
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body)
    }

    /// JSON response. Serialization of handler-built values cannot fail;
    /// a 500 with an empty body is the degraded fallback if it ever does.
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self::new(status_code)
                .header("Content-Type", "application/json")
                .body(body),
            Err(_) => Self::new(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_deserializes_gateway_shape() {
        let event: Event = serde_json::from_value(json!({
            "httpMethod": "POST",
            "path": "/submit",
            "headers": {"User-Agent": "curl/7.64.1"},
            "body": "aGVsbG8=",
            "isBase64Encoded": true,
            "requestContext": {"identity": {"sourceIp": "9.9.9.9"}}
        }))
        .unwrap();

        assert_eq!(event.route(), ("POST", "/submit"));
        assert!(event.is_base64_encoded);
        assert_eq!(event.body.as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn test_event_tolerates_empty_object() {
        let event: Event = serde_json::from_value(json!({})).unwrap();
        assert_eq!(event.route(), ("", ""));
        assert!(event.headers.is_none());
        assert!(!event.is_base64_encoded);
        assert!(event.request_context.is_null());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let resp = GatewayResponse::text(404, "not found");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["headers"]["Content-Type"], "text/plain; charset=utf-8");
        assert_eq!(json["body"], "not found");
    }

    #[test]
    fn test_html_response_is_uncacheable() {
        let resp = GatewayResponse::html("<html></html>");
        assert_eq!(resp.status_code, 200);
        assert_eq!(
            resp.headers.get("Cache-Control").map(String::as_str),
            Some("no-cache, no-store, must-revalidate")
        );
    }
}
