//! GCT Chat CLI and health server entry point.
//!
//! Binary name: `gctchat`
//!
//! Parses CLI arguments, initializes tracing and application state, then
//! dispatches to the chat loop, the username commands, or the health server.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use gctchat_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let options = TracingOptions::from_verbosity(cli.verbose, cli.quiet)
        .with_json(cli.log_json)
        .with_otel(cli.otel);
    init_tracing(&options).map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "gctchat", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;

    let result = match cli.command {
        Commands::Chat { ephemeral } => {
            cli::chat::loop_runner::run_chat_loop(&state, ephemeral, cli.quiet).await
        }
        Commands::Username { action, json } => {
            cli::username::handle_username_command(&state, action, json, cli.quiet)
        }
        Commands::Serve { port, host } => serve(state, host, port, cli.quiet).await,
        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

/// Run the health server until Ctrl+C or SIGTERM.
async fn serve(
    mut state: AppState,
    host: Option<String>,
    port: Option<u16>,
    quiet: bool,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        state.config.server.host = host;
    }
    if let Some(port) = port {
        state.config.server.port = port;
    }

    let addr = state.config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, "health server listening");
    if !quiet {
        println!(
            "  {} GCT Chat health server listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}/healthz")).cyan()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    axum::serve(listener, http::router::build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
