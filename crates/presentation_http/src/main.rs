//! WeatherWell HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use ai_core::OpenAiInferenceEngine;
use application::{AdvisorService, CompletionPort, UserStore};
use infrastructure::{AppConfig, CompletionAdapter, MemoryUserStore};
use integration_weather::{OpenWeatherClient, WeatherProvider};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weatherwell_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("WeatherWell v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.inference.default_model,
        "Configuration loaded"
    );

    // Initialize outbound clients
    let weather_client = OpenWeatherClient::new(config.weather.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?;
    let inference_engine = OpenAiInferenceEngine::new(config.inference.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize completion engine: {e}"))?;

    let weather: Arc<dyn WeatherProvider> = Arc::new(weather_client);
    let completion: Arc<dyn CompletionPort> =
        Arc::new(CompletionAdapter::new(Arc::new(inference_engine)));
    let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());

    // Initialize services
    let advisor = AdvisorService::new(Arc::clone(&completion));

    let state = AppState {
        weather,
        advisor: Arc::new(advisor),
        user_store,
        config: Arc::new(config.clone()),
    };

    // Build router with middleware (first added = outermost)
    let app = routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
