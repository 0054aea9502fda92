//! Command-line interface for tictactoe_patterns.

use clap::Parser;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_patterns")]
#[command(about = "Play tic-tac-toe on a configurable board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Board rows (overrides the config file)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Board columns (overrides the config file)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Moves for X instead of typing them, e.g. "0,0 1,1 2,2"
    #[arg(long)]
    pub first_script: Option<String>,

    /// Moves for O instead of typing them, e.g. "0,1 0,2"
    #[arg(long)]
    pub second_script: Option<String>,
}
