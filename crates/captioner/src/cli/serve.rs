//! The `captioner serve` command: run the web UI and JSON API.

use anyhow::Context;
use captioner_core::{Captioner, Config};
use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::server::{self, AppState};

/// Arguments for the `serve` command.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Only allow paths inside this directory (overrides server.allowed_root)
    #[arg(long)]
    pub allowed_root: Option<PathBuf>,

    /// Frontend directory (overrides server.static_dir)
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

/// Execute the serve command.
pub async fn execute(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(root) = args.allowed_root {
        config.server.allowed_root = Some(root);
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = dir;
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;
    let static_dir = config.static_dir();

    let captioner = Captioner::new(config)?;
    match captioner.guard().root() {
        Some(root) => tracing::info!("Paths restricted to {}", root.display()),
        None => tracing::warn!(
            "No allowed_root configured: any readable path on this machine can be scanned and served"
        ),
    }

    let state = AppState {
        captioner: Arc::new(captioner),
    };
    let app = server::create_router(state, Some(static_dir.as_path()));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Captioner listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
