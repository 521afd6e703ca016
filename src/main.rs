//! IRCTC IVR - call-flow responder for a telephony provider
//!
//! Answers voice webhooks with TwiML: greets the caller, gathers DTMF
//! digits, and reads back PNR status and train schedules.

mod api;
mod config;
mod records;
mod runtime;
mod session;
mod state_machine;
mod twiml;

use api::{create_router, AppState};
use config::IvrConfig;
use records::StaticRecords;
use runtime::{spawn_session_sweeper, CallRuntime};
use session::SessionStore;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twiml::TwimlRenderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "irctc_ivr=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = IvrConfig::from_env()?;
    tracing::info!(
        ttl_secs = config.session_ttl.as_secs(),
        sweep_secs = config.sweep_interval.map(|d| d.as_secs()),
        voice = %config.voice,
        "Configuration loaded"
    );

    // Session store, shared by every request
    let sessions = Arc::new(SessionStore::new(config.session_ttl));
    let shutdown = CancellationToken::new();
    let sweeper = config
        .sweep_interval
        .map(|interval| spawn_session_sweeper(Arc::clone(&sessions), interval, shutdown.clone()));

    // Create application state
    let runtime = CallRuntime::new(
        sessions,
        Arc::new(StaticRecords),
        config.gather_timeout_secs,
    );
    let state = AppState::new(runtime, TwimlRenderer::new(config.voice.clone()));

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("IRCTC IVR server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown.clone()))
        .await?;

    shutdown.cancel();
    if let Some(sweeper) = sweeper {
        sweeper.await?;
    }

    Ok(())
}

/// Resolve on Ctrl-C, or when shutdown was requested elsewhere
async fn shutdown_signal(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
        }
        () = shutdown.cancelled() => {}
    }
    tracing::info!("Shutting down");
}
