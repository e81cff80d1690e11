//! CORS relay.
//!
//! A single-endpoint HTTP relay that lets browser-side JavaScript reach
//! cross-origin APIs through a trusted intermediary. The relay reissues the
//! inbound request against a caller-specified target URL (`?url=...`) and
//! relays the target's response back with permissive CORS headers injected.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 CORS RELAY                    │
//!                    │                                               │
//!  Browser Request   │  ┌─────────┐   ┌───────────┐                 │
//!  ──────────────────┼─▶│  http   │──▶│  relay::  │──── outbound ───┼──▶ Target
//!                    │  │ server  │   │ translate │     request     │
//!                    │  └─────────┘   └───────────┘                 │
//!                    │       │                                       │
//!                    │       │ OPTIONS → 204 (preflight, no target) │
//!                    │       ▼                                       │
//!  Browser Response  │  ┌─────────┐   ┌───────────┐                 │
//!  ◀─────────────────┼──│ CORS +  │◀──│  relay::  │◀─── target ─────┼─── Target
//!                    │  │no-cache │   │  respond  │     response    │
//!                    │  └─────────┘   └───────────┘                 │
//!                    │                                               │
//!                    │  config (TOML) · tracing · lifecycle          │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The relay keeps no state across requests and never retries: every request
//! is a one-shot, fail-fast pass-through.

// Core subsystems
pub mod config;
pub mod http;
pub mod relay;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
