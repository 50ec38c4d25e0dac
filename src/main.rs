use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use teacherbot_proxy::{router, Container, ProxyConfig};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ProxyConfig::from_env().context("invalid configuration")?;

    match cli.command {
        Commands::Serve { port, public } => {
            let mut config = config;
            if let Some(port) = port {
                config = config.with_port(port);
            }
            if public {
                config = config.public();
            }
            serve(config).await
        }
    }
}

async fn serve(config: ProxyConfig) -> Result<()> {
    let bind_addr = config.bind_addr;
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail");
    }

    let container = Arc::new(Container::new(config));
    let app = router(container);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    info!("teacherbot-proxy listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod cli_tests {
    use super::*;

    #[test]
    fn serve_accepts_port_and_public() {
        let cli = Cli::try_parse_from(["teacherbot-proxy", "serve", "--port", "8080", "--public"])
            .expect("valid arguments");
        match cli.command {
            Commands::Serve { port, public } => {
                assert_eq!(port, Some(8080));
                assert!(public);
            }
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["teacherbot-proxy"]).is_err());
    }
}
