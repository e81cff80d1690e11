//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, CORS/cache header injection, preflight)
//!     → relay::translate (filter headers, buffer body)
//!     → [reqwest issues the outbound request]
//!     → relay::respond (decode, classify, filter)
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::MakeRelayRequestId;
pub use server::HttpServer;
