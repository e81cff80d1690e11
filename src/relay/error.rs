//! Relay error taxonomy and status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Everything that can fail while relaying a single request.
///
/// Target error *statuses* are not errors here: a 404 from the target is
/// relayed verbatim. These variants cover the cases where the relay itself
/// cannot produce a target response.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The `url` query parameter is missing or empty.
    #[error("missing url query parameter")]
    MissingTarget,

    /// The `url` query parameter is not an absolute URL.
    #[error("invalid target url: {0}")]
    InvalidTarget(#[from] url::ParseError),

    /// Reading the inbound request body failed: over the configured limit,
    /// or the caller went away mid-upload.
    #[error("failed to read request body: {0}")]
    BodyRead(axum::Error),

    /// The outbound request could not be completed (connect failure,
    /// transport error). Never retried.
    #[error("upstream request failed: {0}")]
    Upstream(reqwest::Error),

    /// The target declared a content-encoding its body did not honor, or the
    /// buffered read of the body failed.
    #[error("failed to decode upstream body: {0}")]
    Decode(std::io::Error),
}

impl RelayError {
    /// Caller-facing status for each failure class.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingTarget | RelayError::InvalidTarget(_) => StatusCode::BAD_REQUEST,
            RelayError::BodyRead(err) if is_over_limit(err) => StatusCode::PAYLOAD_TOO_LARGE,
            RelayError::BodyRead(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream(_) | RelayError::Decode(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Whether a body-read failure was the configured length limit, as opposed
/// to a transport failure such as the caller aborting mid-upload.
fn is_over_limit(err: &axum::Error) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        if inner.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        source = inner.source();
    }
    false
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "relay failed");
        } else {
            tracing::debug!(error = %self, status = %status, "rejecting request");
        }
        (status, self.to_string()).into_response()
    }
}
