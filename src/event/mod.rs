//! Gateway event envelope and client metadata extraction.
//!
//! # Data Flow
//! ```text
//! Inbound gateway event (JSON-shaped)
//!     → envelope.rs (deserialize into Event)
//!     → headers.rs (lowercase header keys for case-insensitive lookup)
//!     → extract.rs (client IP from forwarded chain, body decode)
//!     → handlers consume the extracted values
//!     → envelope.rs (GatewayResponse back to the hosting layer)
//! ```
//!
//! # Design Decisions
//! - Every extraction operation is total: missing or malformed fields
//!   degrade to a default, they never surface an error
//! - `requestContext` stays a loosely-typed JSON value so odd shapes
//!   degrade to "not found" instead of failing deserialization
//! - Header values keep their original type; only keys are normalized

pub mod envelope;
pub mod extract;
pub mod headers;

pub use envelope::{Event, GatewayResponse};
pub use extract::{extract_ip, read_body};
pub use headers::{header_str, lower_headers};
