//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the single relay endpoint
//! - Inject CORS and no-cache headers on every code path
//! - Short-circuit OPTIONS preflight without contacting the target
//! - Wire up middleware (tracing, timeout, request ID)
//! - Drive translate → outbound call → respond for everything else

use std::time::Duration;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{LimitsConfig, RelayConfig};
use crate::http::request::MakeRelayRequestId;
use crate::relay::headers::{NO_STORE, VARY_ALL};
use crate::relay::{respond, translate, RelayError};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client. Cloned per request; shares a connection pool.
    pub client: reqwest::Client,
    pub limits: LimitsConfig,
}

/// HTTP server hosting the relay endpoint.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given (validated) configuration.
    pub fn new(config: RelayConfig) -> Self {
        let state = AppState {
            client: reqwest::Client::new(),
            limits: config.limits,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The response-header layers are added last (outermost), so the CORS
    /// and cache-control headers land on every response: preflight, relayed
    /// success, relay errors, and timeouts.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let allow_origin = HeaderValue::from_str(&config.cors.allow_origin)
            .expect("allow_origin checked by config validation");
        let allow_headers = HeaderValue::from_str(&config.cors.allow_headers_value())
            .expect("allow_headers checked by config validation");

        Router::new()
            .route("/", any(relay_handler))
            .route("/{*path}", any(relay_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRelayRequestId))
            .layer(TraceLayer::new_for_http())
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                allow_origin,
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                allow_headers,
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::CACHE_CONTROL,
                HeaderValue::from_static(NO_STORE),
            ))
            .layer(SetResponseHeaderLayer::overriding(
                header::VARY,
                HeaderValue::from_static(VARY_ALL),
            ))
    }

    /// Run the server until Ctrl+C or an explicit shutdown trigger.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "relay server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("shutdown signal received");
                    }
                    _ = shutdown.recv() => {
                        tracing::info!("shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("relay server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// The single relay endpoint.
///
/// OPTIONS short-circuits here; everything else is translated, issued
/// against the target, and relayed back.
async fn relay_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Result<Response, RelayError> {
    if request.method() == Method::OPTIONS {
        tracing::debug!("preflight answered locally");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let target = translate::target_from_query(request.uri().query())?;

    let (parts, body) = request.into_parts();
    let body_bytes = if translate::forwards_body(&parts.method) {
        let bytes = axum::body::to_bytes(body, state.limits.max_request_body_bytes)
            .await
            .map_err(RelayError::BodyRead)?;
        Some(bytes)
    } else {
        None
    };

    let outbound = translate::build_outbound(&parts.method, &parts.headers, target, body_bytes);

    tracing::debug!(
        method = %outbound.method,
        target = %outbound.target,
        forwarded_headers = outbound.headers.len(),
        "forwarding request"
    );

    let mut builder = state
        .client
        .request(outbound.method, outbound.target)
        .headers(outbound.headers);
    if let Some(bytes) = outbound.body {
        builder = builder.body(bytes);
    }

    let upstream = builder.send().await.map_err(RelayError::Upstream)?;
    let relayed = respond::relay_response(upstream).await?;
    Ok(relayed.into_response())
}
