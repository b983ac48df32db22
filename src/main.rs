use std::net::Ipv4Addr;

use tracing_subscriber::EnvFilter;

use techcorp::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let store = match startup::build_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Startup error: {e}");
            std::process::exit(1);
        }
    };

    let app = router::routes(AppState { store });

    let listener = match tokio::net::TcpListener::bind((Ipv4Addr::UNSPECIFIED, config.port)).await
    {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind port {}: {e}", config.port);
            std::process::exit(1);
        }
    };

    tracing::info!(port = config.port, "starting server");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("failed to install Ctrl+C handler; running without graceful shutdown");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
