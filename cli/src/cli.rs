use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "duelchess", version, about = "Two-player chess in the terminal")]
pub struct Cli {
    /// YAML file with display settings.
    #[arg(long, global = true, env = "DUELCHESS_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play interactively, one square per line (`e2` or `6 4`).
    Play,
    /// Activate the given squares in order on a fresh game and print the result.
    Replay {
        /// Squares to activate, e.g. `e2 e4`.
        #[arg(required = true)]
        squares: Vec<String>,
    },
}
