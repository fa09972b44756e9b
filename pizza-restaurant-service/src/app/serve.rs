use pizza_restaurant_service::{
    database_url,
    db::{create_pool, run_migrations},
    handlers::{app, AppState},
};
use tokio::signal;
use tracing::{info, warn};

pub async fn main(bind: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let database_url = database_url();
    let pool = create_pool(&database_url)?;
    run_migrations(&pool)?;
    info!("Using database {}", database_url);

    let router = app(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Pizza restaurants API listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {e}");
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
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
