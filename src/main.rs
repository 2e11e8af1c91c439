// ConstructBot - HTTP server entry point

use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use constructbot::adapters::ai::{primary_source, secondary_source};
use constructbot::adapters::http::{build_app, ChatAppState};
use constructbot::adapters::memory::{InMemoryConversationRepository, InMemoryPreferenceStore};
use constructbot::application::ChatOrchestrator;
use constructbot::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    info!("Starting ConstructBot server");

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!(
        environment = ?config.server.environment,
        primary = config.ai.has_primary(),
        secondary = config.ai.has_gemini(),
        "Configuration loaded successfully"
    );

    let primary = primary_source(&config.ai)?;
    let secondary = secondary_source(&config.ai)?;
    let orchestrator = ChatOrchestrator::new(primary, secondary)
        .with_step_timeout(Some(config.ai.timeout()))
        .with_deadline(Some(config.reply_deadline()));

    let state = ChatAppState::new(
        Arc::new(orchestrator),
        Arc::new(InMemoryConversationRepository::new()),
        Arc::new(InMemoryPreferenceStore::new()),
    )
    .with_verbose_errors(config.features.verbose_errors);

    let app = build_app(state, &config);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over `server.log_level`; production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install terminate handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
