//! Application startup and lifecycle management.

use crate::config::ScriptConfig;
use crate::handlers::generate::{generate_ideas_handler, generate_script_handler};
use crate::handlers::health::health_check;
use crate::services::providers::gemini::{GeminiConfig, GeminiProvider};
use crate::services::providers::groq::{GroqConfig, GroqProvider};
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ScriptConfig,
    pub idea_provider: Arc<dyn TextProvider>,
    pub script_provider: Arc<dyn TextProvider>,
}

/// Build the router: static frontend plus the two generation endpoints.
pub fn build_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.static_dir);
    let index = ServeFile::new(static_dir.join("index.html"));

    Router::new()
        .route_service("/", index)
        .nest_service("/static", ServeDir::new(static_dir))
        .route("/health", get(health_check))
        .route("/generate-ideas", post(generate_ideas_handler))
        .route("/generate-script", post(generate_script_handler))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with providers constructed from configuration.
    pub async fn build(config: ScriptConfig) -> Result<Self, AppError> {
        let idea_provider: Arc<dyn TextProvider> = Arc::new(GeminiProvider::new(GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.idea_model.clone(),
        }));

        let script_provider: Arc<dyn TextProvider> = Arc::new(GroqProvider::new(GroqConfig {
            api_key: config.groq.api_key.clone(),
            model: config.models.script_model.clone(),
        }));

        tracing::info!(
            idea_model = %config.models.idea_model,
            script_model = %config.models.script_model,
            "Initialized text providers"
        );

        Self::with_providers(config, idea_provider, script_provider).await
    }

    /// Build the application with explicitly injected providers.
    ///
    /// Binds the listener immediately; port 0 selects a random port, which
    /// integration tests rely on.
    pub async fn with_providers(
        config: ScriptConfig,
        idea_provider: Arc<dyn TextProvider>,
        script_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let addr: SocketAddr = format!("{}:{}", config.common.host, config.common.port)
            .parse()
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid listen address: {}", e)))?;

        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let state = AppState {
            config,
            idea_provider,
            script_provider,
        };

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
        tracing::info!("script-service listening on port {}", self.port);
        axum::serve(self.listener, build_router(self.state)).await
    }
}
