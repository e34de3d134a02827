//! Storefront Server - Headless Daemon
//!
//! A pure Rust HTTP server that:
//! - Proxies `/api/search` to the hosted search index (CORS, API key injection)
//! - Exposes query normalization on `/api/normalize`
//! - Serves the built storefront UI as static files with SPA fallback
//!
//! Access via: http://localhost:3000

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod cli;
mod config;
mod router;
mod server_utils;
mod state;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&cli.log_level)
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::resolve(&cli)?;

    match cli.command.clone().unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Normalize { query } => {
            let normalizer = state::build_normalizer(config.server.wordlist.as_deref());
            println!("{}", normalizer.normalize(&query.join(" ")));
            Ok(())
        },
        Commands::Suggest { prefix, limit } => {
            for name in storefront_core::client::suggest(&prefix, limit) {
                println!("{}", name);
            }
            Ok(())
        },
    }
}

async fn serve(config: storefront_types::AppConfig) -> Result<()> {
    let addr = server_utils::bind_address(&config.server)?;

    info!("🚀 Storefront Server starting on {}...", addr);
    let state = AppState::new(config)?;
    info!("✅ Application state initialized");

    let static_dir = state.config().server.static_dir.clone();
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("🔎 Search proxy at http://{}/api/search", addr);
    match static_dir {
        Some(dir) => info!("📊 WebUI from {} at http://{}/", dir, addr),
        None => info!("📊 No static dir configured, WebUI disabled"),
    }

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
