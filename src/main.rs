mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "comissao-admin failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = config::Config::from_env()?;
    let addr = config.socket_addr();
    tracing::info!(upstream = %config.upstream_api_url, "forwarding /api");

    let state = state::AppState::new(config)?;
    let app = routes::app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "comissao-admin listening");
    axum::serve(listener, app).await?;
    Ok(())
}
