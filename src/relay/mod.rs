//! Relay core subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → translate.rs (filter headers, buffer body, build outbound request)
//!     → [reqwest issues the outbound request]
//!     → respond.rs (decode content-encoding, classify body, filter headers)
//!     → RelayedResponse sent to the caller
//! ```
//!
//! # Design Decisions
//! - Header filtering is a pure set-difference over constant exclusion sets
//! - Binary bodies stream through; text bodies are fully buffered and
//!   charset-decoded
//! - No retries anywhere: one failed step fails the whole request

pub mod error;
pub mod headers;
pub mod respond;
pub mod translate;

pub use error::RelayError;
pub use respond::{RelayBody, RelayedResponse};
pub use translate::OutboundRequest;
