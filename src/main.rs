//! Tic-tac-toe CLI
//!
//! Plays one game between two players on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_patterns::{GameConfig, Symbol, parse_script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut game = config.build_game()?;
    let mut stdout = std::io::stdout();
    let outcome = game.play(&mut stdout)?;

    info!(%outcome, plies = game.history().len(), "Finished");
    Ok(())
}

/// Merges defaults, the optional config file and command-line overrides.
#[instrument(skip(cli), fields(config_path = ?cli.config))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            GameConfig::default()
        }
    };

    config.override_dimensions(cli.rows, cli.cols);

    if let Some(script) = &cli.first_script {
        let moves = parse_script(script).context("Invalid --first-script")?;
        config.override_script(Symbol::X, moves);
    }
    if let Some(script) = &cli.second_script {
        let moves = parse_script(script).context("Invalid --second-script")?;
        config.override_script(Symbol::O, moves);
    }

    config.validate()?;
    Ok(config)
}
