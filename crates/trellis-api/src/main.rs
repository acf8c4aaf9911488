//! Trellis REST API entry point.
//!
//! Binary name: `trellis`
//!
//! Parses CLI arguments, loads settings (any failure aborts startup), sets
//! up tracing, then dispatches to the requested command.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use trellis_observe::tracing_setup::{init_tracing, shutdown_tracing};
use trellis_types::config::Settings;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need settings
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "trellis", &mut std::io::stdout());
        return Ok(());
    }

    let settings = trellis_infra::config::load_settings(cli.config.as_deref())
        .context("failed to load settings")?;

    let filter = match cli.verbose {
        0 => settings.tracing_directive()?,
        1 => "debug",
        _ => "trace",
    };
    init_tracing(filter, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = match cli.command {
        Commands::Serve { port, host } => serve(settings, host, port).await,
        Commands::Config => cli::config::show_config(&settings, cli.json),
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

/// Open the database, build the router and serve until Ctrl+C / SIGTERM.
async fn serve(mut settings: Settings, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        settings.host = host;
    }
    if let Some(port) = port {
        settings.port = port;
    }

    let state = AppState::init(settings).await?;
    let settings = state.settings.clone();

    if state.gate.is_enabled() {
        tracing::info!(keys = state.gate.key_count(), "API key authentication enabled");
        if state.gate.key_count() == 0 {
            tracing::warn!("authentication is enabled but no API keys are configured; every protected request will be rejected");
        }
    } else {
        tracing::warn!("API key authentication is disabled; protected endpoints are open");
    }

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    println!(
        "  {} Trellis API listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    if settings.enable_swagger {
        println!(
            "  {} OpenAPI document at {}",
            console::style("📖").bold(),
            console::style(format!("http://{addr}/docs")).cyan()
        );
    }
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let db = state.db.clone();
    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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

    tracing::info!("shutdown signal received");
}
