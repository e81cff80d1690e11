//! Request translation: inbound request → outbound request.
//!
//! # Responsibilities
//! - Extract and validate the target URL from the query string
//! - Apply the inbound header exclusion policy
//! - Decide whether the inbound body is forwarded
//!
//! # Design Decisions
//! - Pure construction: nothing here performs I/O, so the whole translation
//!   is unit-testable without a server
//! - Method is copied verbatim, no normalization
//! - Bodies are forwarded only for POST and PUT, fully buffered; the client
//!   sets the outbound content-length from the buffered bytes

use axum::body::Bytes;
use axum::http::{HeaderMap, Method};
use url::Url;

use crate::relay::error::RelayError;
use crate::relay::headers::filter_inbound;

/// An outbound request ready to issue, derived 1:1 from the inbound request.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub target: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// Extract the `url` parameter from a raw query string.
///
/// Missing or empty values are a caller error; so is anything that does not
/// parse as an absolute URL. No outbound resource is allocated before this
/// check passes.
pub fn target_from_query(query: Option<&str>) -> Result<Url, RelayError> {
    let raw = query
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(key, _)| key == "url")
                .map(|(_, value)| value.into_owned())
        })
        .filter(|value| !value.is_empty())
        .ok_or(RelayError::MissingTarget)?;

    Ok(Url::parse(&raw)?)
}

/// Whether the inbound body is forwarded for this method.
pub fn forwards_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT)
}

/// Build the outbound request from the inbound parts.
pub fn build_outbound(
    method: &Method,
    headers: &HeaderMap,
    target: Url,
    body: Option<Bytes>,
) -> OutboundRequest {
    OutboundRequest {
        method: method.clone(),
        target,
        headers: filter_inbound(headers),
        body,
    }
}
