//! Router assembly and server lifecycle

use crate::{api, config::ServerConfig, state::AppState};
use axum::{routing::get, Router};
use registry_storage::SqliteUserGateway;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router with every route nested under `/api`
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route("/users/:id", get(api::users::get_user));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Connect storage, bind the listener and serve until CTRL+C or SIGTERM
///
/// The storage pool is acquired before binding and closed after the last
/// in-flight request completes.
pub async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting User Registry server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let gateway = SqliteUserGateway::connect(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    tracing::info!("Database connected");

    let app = create_router(AppState::new(Arc::new(gateway.clone())));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    gateway.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Wait for CTRL+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install CTRL+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received CTRL+C, initiating graceful shutdown");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
