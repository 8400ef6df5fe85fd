//! Heuristic User-Agent → device model classifier.
//!
//! # Responsibilities
//! - Detect iOS devices by literal token
//! - Extract Android model names from the standard comment format
//!   (`Android <version>; <model> Build/...`)
//! - Fall back to a fixed, ordered list of brand tokens for User-Agents
//!   that omit the standard Android comment
//!
//! # Design Decisions
//! - First matching rule wins; rules are checked in a fixed order
//! - The brand list is an ordered slice, not a map: when several tokens
//!   are present, the earliest-listed one decides the branch, regardless
//!   of where each token sits in the string
//! - Brand snippets are clipped to a 32-character window before delimiter
//!   truncation; longer model names get cut short and that is accepted

use std::sync::OnceLock;

use regex::Regex;

/// Standard Android comment: `Android <version>; <model>` where neither
/// part may contain `;` or `)`. Malformed strings without the trailing
/// delimiter fail this match and fall through to the brand scan.
fn android_model_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Android [^;\)]*;\s*([^;\)]+)").expect("android model pattern"))
}

/// Brand tokens checked when the standard Android comment is absent.
/// Order matters: first listed token found anywhere in the string wins.
const BRAND_TOKENS: [&str; 9] = [
    "Pixel", "Nexus", "Huawei", "HUAWEI", "OnePlus", "SM-", "M200", "Redmi", "Mi ",
];

/// Width of the snippet taken from a brand-token hit, in characters.
const BRAND_WINDOW_CHARS: usize = 32;

/// Classify a User-Agent string into a device model label.
///
/// Returns a specific model when one can be extracted, otherwise one of
/// the generic labels `iPhone`, `iPad`, `Mobile`, or `Unknown`. Matching
/// is case-sensitive throughout.
pub fn parse_phone_model(user_agent: Option<&str>) -> String {
    let ua = match user_agent {
        Some(ua) if !ua.is_empty() => ua,
        _ => return "Unknown".to_string(),
    };

    if ua.contains("iPhone") {
        return "iPhone".to_string();
    }
    if ua.contains("iPad") {
        return "iPad".to_string();
    }

    if let Some(captures) = android_model_re().captures(ua) {
        let model = captures[1].trim();
        let model = model.split(" Build").next().unwrap_or(model).trim();
        return model.to_string();
    }

    for token in BRAND_TOKENS {
        if let Some(start) = ua.find(token) {
            return clip_brand_snippet(&ua[start..]);
        }
    }

    "Mobile".to_string()
}

/// Take a window of up to [`BRAND_WINDOW_CHARS`] characters, then truncate
/// at the first `;`, then at the first `)`. Both cuts always apply, in
/// that order. The window is measured in characters so a multi-byte
/// code point is never split.
fn clip_brand_snippet(tail: &str) -> String {
    let end = tail
        .char_indices()
        .nth(BRAND_WINDOW_CHARS)
        .map(|(idx, _)| idx)
        .unwrap_or(tail.len());
    let snippet = &tail[..end];
    let snippet = snippet.split(';').next().unwrap_or(snippet);
    let snippet = snippet.split(')').next().unwrap_or(snippet);
    snippet.to_string()
}
