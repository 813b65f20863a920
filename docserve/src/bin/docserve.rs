use std::sync::Arc;

use clap::Parser;
use docserve::{
    app::build_app,
    config::Config,
    logging,
    sample::{model::SampleModel, service::SampleService},
};
use docserve_core::connection::ConnectionProvider;
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Values already in the environment take precedence over `.env`
    let dotenv = dotenvy::dotenv();
    let config = Config::parse();
    logging::init()?;

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let builder = config.store_builder();
    tracing::debug!(backend = builder.kind(), database = %config.database, "Using document store");

    let provider = Arc::new(ConnectionProvider::new(builder));

    // Refuse to serve without a store
    if provider.get_connection().await.is_err() {
        std::process::exit(1);
    }

    let service = Arc::new(SampleService::new(SampleModel::new(Arc::clone(&provider))));
    let app = build_app(service);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {addr}: {e}"))?;

    tracing::info!(outcome = "success", "Server started on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    provider.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server gracefully");
}
