//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `prerank` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::process;

use prerank::app::{render_table, AppState, Controller, Status};
use prerank::config::{Cli, Command, Config};
use prerank::initialization::init_logger_with;
use prerank::proxy::start_proxy_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    if dotenvy::dotenv().is_err() {
        // If .env not found in current dir, try next to the executable
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = Config::from(cli.opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(config, cli.command).await {
        eprintln!("prerank error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(config: Config, command: Command) -> Result<()> {
    let state = AppState::new();

    match command {
        Command::Competitors => {
            let controller = Controller::from_config(config)?;
            let (state, status) = controller.load_competitors(state).await;
            report(&status)?;
            println!("{}", render_table(&state.ranked_rows()));
        }
        Command::Events => {
            let controller = Controller::from_config(config)?;
            let (state, status) = controller.load_events(state).await;
            report(&status)?;
            for event in &state.events {
                println!("{:<8} {}", event.code.code(), event.display_name);
            }
        }
        Command::Rank { event } => {
            let controller = Controller::from_config(config)?;
            let (state, status) = controller.load_competitors(state).await;
            report(&status)?;
            let (state, status) = controller.load_ranking(state, Some(event)).await;
            report(&status)?;
            println!("{}", render_table(&state.ranked_rows()));
        }
        Command::Serve(opt) => start_proxy_server(&config, &opt).await?,
    }
    Ok(())
}

/// Prints a status line to stderr; error statuses end the command.
fn report(status: &Status) -> Result<()> {
    eprintln!("{}", status.colored());
    if status.is_error() {
        bail!("{}", status.text);
    }
    Ok(())
}
