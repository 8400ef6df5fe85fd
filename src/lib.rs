//! Form gateway service library.

pub mod config;
pub mod device;
pub mod event;
pub mod handlers;
pub mod http;

pub use config::GatewayConfig;
pub use device::parse_phone_model;
pub use event::{Event, GatewayResponse};
pub use handlers::AppContext;
pub use http::HttpServer;
