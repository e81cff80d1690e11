//! Header exclusion sets and CORS constants.
//!
//! # Responsibilities
//! - Define which inbound headers never reach the target
//! - Define which target headers never reach the caller
//! - Hold the process-wide CORS and cache-control header values
//!
//! # Design Decisions
//! - Exclusion sets are constant slices checked by exact name; the `http`
//!   crate normalizes header names to lowercase, so the entries are the
//!   lowercase forms
//! - Filtering is a pure function over a `HeaderMap`; repeated keys collapse
//!   to the latest value

use axum::http::{HeaderMap, HeaderName};

/// Inbound headers the outbound transport computes itself. Setting these
/// manually would conflict with the client's own framing.
pub const EXCLUDED_INBOUND: [&str; 13] = [
    "accept",
    "connection",
    "content-length",
    "content-type",
    "date",
    "expect",
    "host",
    "if-modified-since",
    "range",
    "referer",
    "transfer-encoding",
    "user-agent",
    "proxy-connection",
];

/// Target response headers whose framing/encoding no longer matches the
/// relayed, decoded bytes. The caller-facing transport recomputes them.
pub const EXCLUDED_OUTBOUND: [&str; 3] = ["content-length", "transfer-encoding", "content-encoding"];

/// Value for `Access-Control-Allow-Origin` unless overridden by config.
pub const ALLOW_ANY_ORIGIN: &str = "*";

/// Baseline value for `Access-Control-Allow-Headers`. Deployments may append
/// vendor-specific headers via config.
pub const BASELINE_ALLOW_HEADERS: &str = "Origin, X-Requested-With, Content-Type, Accept";

/// Every relayed response is marked non-cacheable.
pub const NO_STORE: &str = "no-store, no-cache, max-age=0";

/// Responses vary per request (the target URL lives in the query string).
pub const VARY_ALL: &str = "*";

/// Whether an inbound header must not be copied onto the outbound request.
pub fn is_excluded_inbound(name: &HeaderName) -> bool {
    EXCLUDED_INBOUND.contains(&name.as_str())
}

/// Whether a target response header must not be copied back to the caller.
pub fn is_excluded_outbound(name: &HeaderName) -> bool {
    EXCLUDED_OUTBOUND.contains(&name.as_str())
}

/// Copy every header not in the inbound exclusion set.
pub fn filter_inbound(headers: &HeaderMap) -> HeaderMap {
    filter(headers, is_excluded_inbound)
}

/// Copy every header not in the outbound exclusion set.
pub fn filter_outbound(headers: &HeaderMap) -> HeaderMap {
    filter(headers, is_excluded_outbound)
}

fn filter(headers: &HeaderMap, excluded: fn(&HeaderName) -> bool) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if !excluded(name) {
            // insert (not append): the latest value for a repeated key wins
            out.insert(name.clone(), value.clone());
        }
    }
    out
}
