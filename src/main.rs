use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rigaudchat::{
    cli::{Cli, Command},
    config::Config,
    routes,
    state::AppState,
    terminal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    cli.apply(&mut config);

    match cli.command {
        Command::Serve { .. } => serve(&config).await,
        Command::Chat { phone } => Ok(terminal::run_chat(&config, phone).await?),
        Command::Summary { identifier, via, raw } => {
            Ok(terminal::run_summary(&config, via.into(), &identifier, raw).await?)
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(config)?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .route("/", axum::routing::get(|| async { "RigaudChat relay" }))
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        bind = %config.bind_addr,
        backend = %config.backend_url,
        "RigaudChat relay running"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
