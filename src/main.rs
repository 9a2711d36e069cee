use anyhow::Context;
use dotenvy::dotenv;
use rentwise::logging::init_tracing;
use rentwise::router::init_router;
use rentwise::state::init_app_state;
use rentwise_config::{CorsConfig, JwtConfig, ServerConfig};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server_config = ServerConfig::from_env()?;
    let _log_guard = init_tracing(&server_config.log_dir)
        .with_context(|| format!("Failed to create log directory {}", server_config.log_dir))?;

    // Refuse to start without a signing secret.
    let jwt_config = JwtConfig::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "Invalid JWT configuration");
    })?;
    let cors_config = CorsConfig::from_env();

    let state = init_app_state(&server_config, &jwt_config, cors_config).await?;
    let app = init_router(state);

    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!(
        %address,
        environment = ?server_config.environment,
        store = ?server_config.store_backend,
        "Server running"
    );
    info!("Swagger UI available at http://{address}/swagger-ui");
    info!("Scalar UI available at http://{address}/scalar");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
