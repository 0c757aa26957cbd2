use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use marquee_core::ReleaseParser;
use marquee_server::{create_router, AppContext, ServerConfig, TmdbLookup};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();
    let parser = ReleaseParser::with_defaults().context("failed to build release parser")?;
    let mut ctx = AppContext::new(parser).with_separator(config.label_separator);

    match config.tmdb_api_key() {
        Some(key) => {
            let lookup = TmdbLookup::new(key, config.tmdb_language.clone(), config.lookup_timeout())
                .context("failed to build TMDB client")?;
            ctx = ctx.with_lookup(Arc::new(lookup), config.lookup_timeout());
            info!("TMDB year backfill enabled");
        }
        None => info!("no TMDB API key configured, year backfill disabled"),
    }

    let app = create_router(ctx);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    info!("Starting server on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
}
