//! Client IP and request body extraction.
//!
//! # Responsibilities
//! - Resolve the client IP: forwarded-for chain first, gateway source IP
//!   as the fallback
//! - Decode the request body, transparently handling base64-encoded
//!   transport
//!
//! # Design Decisions
//! - Both operations are total: malformed input degrades to `None` or an
//!   empty string, never an error the handler has to route around
//! - The x-forwarded-for chain lists the client first; later entries are
//!   proxies and are ignored

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;

use crate::event::envelope::Event;
use crate::event::headers::{header_str, lower_headers};

/// Extract the client IP address from the gateway event.
///
/// Priority: first non-empty entry of `x-forwarded-for`, then
/// `requestContext.identity.sourceIp`, then `None`. A forwarded-for header
/// whose first segment trims to nothing falls through to the source IP.
pub fn extract_ip(event: &Event) -> Option<String> {
    let headers = lower_headers(event.headers.as_ref());
    if let Some(chain) = header_str(&headers, "x-forwarded-for") {
        let first = chain.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    // Missing nesting or a non-string value is a miss, not a fault.
    event
        .request_context
        .pointer("/identity/sourceIp")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Read and decode the request body.
///
/// When the event flags the body as base64, decode it and interpret the
/// bytes as UTF-8 with replacement characters for invalid sequences.
/// Structurally invalid base64 degrades to an empty string. Always returns
/// a value.
pub fn read_body(event: &Event) -> String {
    let body = event.body.as_deref().unwrap_or("");
    if event.is_base64_encoded && !body.is_empty() {
        return match STANDARD.decode(body) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => String::new(),
        };
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> Event {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_ip_from_forwarded_for_first_entry() {
        let event = event(json!({
            "headers": {"X-Forwarded-For": "1.2.3.4, 5.6.7.8"}
        }));
        assert_eq!(extract_ip(&event).as_deref(), Some("1.2.3.4"));
    }

    #[test]
    fn test_ip_forwarded_for_is_trimmed() {
        let event = event(json!({
            "headers": {"x-forwarded-for": "  9.8.7.6 , 5.6.7.8"}
        }));
        assert_eq!(extract_ip(&event).as_deref(), Some("9.8.7.6"));
    }

    #[test]
    fn test_ip_falls_back_to_source_ip() {
        let event = event(json!({
            "requestContext": {"identity": {"sourceIp": "9.9.9.9"}}
        }));
        assert_eq!(extract_ip(&event).as_deref(), Some("9.9.9.9"));
    }

    #[test]
    fn test_ip_blank_forwarded_for_falls_back() {
        let event = event(json!({
            "headers": {"x-forwarded-for": " , 5.6.7.8"},
            "requestContext": {"identity": {"sourceIp": "9.9.9.9"}}
        }));
        assert_eq!(extract_ip(&event).as_deref(), Some("9.9.9.9"));
    }

    #[test]
    fn test_ip_absent_when_no_source() {
        assert_eq!(extract_ip(&event(json!({}))), None);
    }

    #[test]
    fn test_ip_malformed_request_context_is_a_miss() {
        let event = event(json!({"requestContext": {"identity": "not-an-object"}}));
        assert_eq!(extract_ip(&event), None);

        let event2 = self::event(json!({"requestContext": 42}));
        assert_eq!(extract_ip(&event2), None);
    }

    #[test]
    fn test_body_plain_passthrough() {
        let event = event(json!({"body": "name=alice"}));
        assert_eq!(read_body(&event), "name=alice");
    }

    #[test]
    fn test_body_absent_is_empty() {
        assert_eq!(read_body(&event(json!({}))), "");
    }

    #[test]
    fn test_body_base64_decoded() {
        let event = event(json!({"body": "aGVsbG8=", "isBase64Encoded": true}));
        assert_eq!(read_body(&event), "hello");
    }

    #[test]
    fn test_body_invalid_base64_degrades_to_empty() {
        let event = event(json!({"body": "!!not base64!!", "isBase64Encoded": true}));
        assert_eq!(read_body(&event), "");
    }

    #[test]
    fn test_body_invalid_utf8_gets_replacement_chars() {
        // 0xFF is never valid UTF-8
        let encoded = STANDARD.encode([0x68, 0x69, 0xFF]);
        let event = event(json!({"body": encoded, "isBase64Encoded": true}));
        assert_eq!(read_body(&event), "hi\u{FFFD}");
    }

    #[test]
    fn test_body_flag_without_body_is_empty() {
        let event = event(json!({"isBase64Encoded": true}));
        assert_eq!(read_body(&event), "");
    }
}
