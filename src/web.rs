//! HTTP server: static content plus the push channel

use crate::channel;
use crate::config::VillagePulseConfig;
use crate::weather::{OpenWeatherClient, TemperatureProvider};
use anyhow::{Context, Result};
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Server context handed to request handlers.
///
/// Holds only immutable shared collaborators, so concurrent requests have no
/// state to corrupt.
#[derive(Clone)]
pub struct AppState {
    /// Environmental data source for location updates
    pub environment: Arc<dyn TemperatureProvider>,
}

impl AppState {
    /// Build the server context from configuration.
    pub fn from_config(config: &VillagePulseConfig) -> Result<Self> {
        if config.weather.api_key.is_none() {
            warn!("No weather API key configured; environmental lookups will use fallback values");
        }

        let client = OpenWeatherClient::new(config.weather.clone())?;
        Ok(Self {
            environment: Arc::new(client),
        })
    }
}

/// Build the application router.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(channel::ws_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the server until the listener fails.
pub async fn run(config: VillagePulseConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let app = router(state, &config.server.static_dir);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Web server running at http://{}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .with_context(|| "Server terminated unexpectedly")?;

    Ok(())
}
