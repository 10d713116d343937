//! Mockapi server binary

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mockapi::api::{create_router, AppState};
use mockapi::config::{AppConfig, LogFormat};
use mockapi::fixture::Fixture;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config)?;

    let fixtures = config.fixtures.to_store();
    for fixture in Fixture::ALL {
        let path = fixtures.path(fixture);
        if path.exists() {
            tracing::info!(fixture = fixture.name(), path = %path.display(), "Fixture resolved");
        } else {
            tracing::warn!(
                fixture = fixture.name(),
                path = %path.display(),
                "Fixture file not found; requests will be served an empty object",
            );
        }
    }

    let router = create_router(AppState::new(fixtures));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("mockapi=info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format {
        LogFormat::Json => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        LogFormat::Text => {
            registry.with(tracing_subscriber::fmt::layer()).init();
        }
    }

    Ok(())
}
