use anyhow::Context;
use dotenvy::dotenv;
use tokio::signal;
use tracing::info;

use schoople::router::init_router;
use schoople::state::init_app_state;
use schoople_config::ServerConfig;
use schoople_observability::{init_metrics_router, init_tracing, shutdown_tracer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state(&server_config).await?;

    let mut app = init_router(state);
    if let Some(metrics) = init_metrics_router() {
        app = app.merge(metrics);
    }

    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(%address, "Server running");
    info!("Swagger UI available at http://{address}/swagger-ui");
    info!("Scalar UI available at http://{address}/scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracer().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    info!("Shutting down");
}
