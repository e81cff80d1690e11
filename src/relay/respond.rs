//! Response relaying: outbound response → caller-facing response.
//!
//! # Responsibilities
//! - Reverse the target's content-encoding (gzip, deflate)
//! - Classify the body: streamed binary vs buffered, charset-decoded text
//! - Apply the outbound header exclusion policy
//! - Preserve the target's status code verbatim
//!
//! # Design Decisions
//! - The stream/buffer split is an explicit two-variant type selected once
//!   per response, so memory behavior is visible at the type level
//! - Binary bodies are never fully buffered: a large download relays at
//!   constant memory
//! - The target's status is relayed even for 4xx/5xx; the relay interprets
//!   nothing

use std::io;
use std::pin::Pin;

use async_compression::tokio::bufread::{DeflateDecoder, GzipDecoder};
use axum::body::Body;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::TryStreamExt;
use mime::Mime;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_util::io::{ReaderStream, StreamReader};

use crate::relay::error::RelayError;
use crate::relay::headers::filter_outbound;

/// Content-encoding the relay knows how to reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentCoding {
    Identity,
    Gzip,
    Deflate,
}

impl ContentCoding {
    /// Read the coding from a response header map. Anything other than gzip
    /// or deflate passes through untouched.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers
            .get(header::CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
        else {
            return ContentCoding::Identity;
        };
        if value.eq_ignore_ascii_case("gzip") {
            ContentCoding::Gzip
        } else if value.eq_ignore_ascii_case("deflate") {
            ContentCoding::Deflate
        } else {
            ContentCoding::Identity
        }
    }
}

/// Charset label from the response content-type, if one is declared.
pub fn declared_charset(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::CONTENT_TYPE)?.to_str().ok()?;
    let mime: Mime = value.parse().ok()?;
    mime.get_param(mime::CHARSET)
        .map(|charset| charset.as_str().to_string())
}

/// The relayed body, selected once per response.
pub enum RelayBody {
    /// No charset declared: opaque bytes streamed through without buffering.
    Streamed(Body),
    /// Charset declared: the whole body, decoded to a string.
    Text(String),
}

/// Status, filtered headers, and body sent back to the original caller.
///
/// The CORS and cache-control headers are not set here; the router's
/// response-header layers inject them on every code path.
pub struct RelayedResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: RelayBody,
}

type DecodedReader = Pin<Box<dyn AsyncRead + Send>>;

/// Consume the target's response and produce the caller-facing one.
///
/// A decode failure on the buffered text path surfaces as an error; on the
/// streamed path it aborts the stream mid-body. Neither is retried.
pub async fn relay_response(upstream: reqwest::Response) -> Result<RelayedResponse, RelayError> {
    let status = upstream.status();
    let headers = filter_outbound(upstream.headers());
    let coding = ContentCoding::from_headers(upstream.headers());
    let charset = declared_charset(upstream.headers());

    tracing::debug!(status = %status, coding = ?coding, charset = ?charset, "relaying upstream response");

    let raw = StreamReader::new(upstream.bytes_stream().map_err(io::Error::other));
    let decoded: DecodedReader = match coding {
        ContentCoding::Gzip => Box::pin(GzipDecoder::new(raw)),
        ContentCoding::Deflate => Box::pin(DeflateDecoder::new(raw)),
        ContentCoding::Identity => Box::pin(raw),
    };

    let body = match charset {
        Some(label) => RelayBody::Text(read_text(decoded, &label).await?),
        None => RelayBody::Streamed(Body::from_stream(ReaderStream::new(decoded))),
    };

    Ok(RelayedResponse {
        status,
        headers,
        body,
    })
}

/// Buffer the decoded stream and decode it with the declared charset.
/// Unknown labels fall back to UTF-8.
async fn read_text(mut reader: DecodedReader, label: &str) -> Result<String, RelayError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .await
        .map_err(RelayError::Decode)?;

    let encoding = encoding_rs::Encoding::for_label(label.as_bytes()).unwrap_or(encoding_rs::UTF_8);
    let (text, _, _) = encoding.decode(&bytes);
    Ok(text.into_owned())
}

impl IntoResponse for RelayedResponse {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            RelayBody::Streamed(body) => Response::new(body),
            RelayBody::Text(text) => Response::new(Body::from(text)),
        };
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}
