use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pointcontrol_backend::{app, config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointcontrol_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        api_base_url = %config.api_base_url,
        cookie_secure = config.cookie_secure,
        "Loaded configuration from environment/.env"
    );

    let addr = config.bind_addr;
    let app = app(AppState::new(config));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
