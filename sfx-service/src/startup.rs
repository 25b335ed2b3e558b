//! Application startup and lifecycle management.

use crate::config::SfxConfig;
use crate::handlers::{describe_sound, health_check};
use crate::services::providers::TextProvider;
use crate::services::providers::pollinations::{PollinationsConfig, PollinationsTextProvider};
use axum::{Router, body::Body, http::Request, routing::get};
use service_core::error::AppError;
use service_core::middleware::{REQUEST_ID_HEADER, request_id_middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state. The handler itself is stateless; this is the
/// config plus the provider holding one pooled HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: SfxConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: SfxConfig) -> Result<Self, AppError> {
        let provider_config = PollinationsConfig {
            url: config.upstream.url.clone(),
            model: config.upstream.model.clone(),
            timeout: Duration::from_secs(config.upstream.timeout_secs),
        };
        let text_provider: Arc<dyn TextProvider> =
            Arc::new(PollinationsTextProvider::new(provider_config));

        tracing::info!(
            endpoint = %config.upstream.url,
            model = %config.upstream.model,
            "Initialized Pollinations text provider"
        );

        Self::with_provider(config, text_provider).await
    }

    /// Build the application with a caller-supplied provider.
    pub async fn with_provider(
        config: SfxConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            text_provider,
        };

        // Bind listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, router(self.state)).await
    }
}

/// Build the service router.
///
/// The API is public, keyless, and stateless, so CORS is wide open.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check).post(describe_sound))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
