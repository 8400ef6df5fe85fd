//! Device classification from User-Agent strings.
//!
//! # Design Decisions
//! - Heuristic substring matching only; no User-Agent database and no
//!   attempt at spec-compliant parsing
//! - Fixed check order: iOS literals, Android model capture, then an
//!   ordered brand-token scan, then generic fallbacks
//! - Pure and total: any input (including none) maps to a non-empty label

pub mod classifier;

pub use classifier::parse_phone_model;
