use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moskal_auth_server::{app, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moskal_auth_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        auth_api_url = %config.auth_api_url,
        static_dir = %config.static_dir.display(),
        public_api_base_url = %config.public_api_base_url,
        login_url = %config.login_url,
        upstream_timeout_seconds = config.upstream_timeout_seconds,
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let state = AppState::new(config)?;

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
