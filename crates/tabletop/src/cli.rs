//! Command-line interface for tabletop.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tabletop_games::GameKind;
use tabletop_search::SearchAlgorithm;

/// Tabletop - two-agent board games with minimax AI players
#[derive(Parser, Debug)]
#[command(name = "tabletop")]
#[command(about = "Play Tic-Tac-Toe or Othello against search-based AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Report format for the benchmark
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One JSON document
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game; human seats read cell indices from stdin
    Play {
        /// Arena config file; without one a human plays the AI
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Game to play (tic-tac-toe, othello)
        #[arg(short, long)]
        game: Option<GameKind>,

        /// Search depth for AI seats
        #[arg(short, long)]
        depth: Option<u32>,

        /// Search algorithm for AI seats (minimax, alpha-beta)
        #[arg(short, long)]
        algorithm: Option<SearchAlgorithm>,
    },

    /// Time AI move requests at increasing depths
    Bench {
        /// Game to benchmark
        #[arg(short, long, default_value = "othello")]
        game: GameKind,

        /// Search algorithm
        #[arg(short, long, default_value = "alpha-beta")]
        algorithm: SearchAlgorithm,

        /// Depths to time
        #[arg(short, long, value_delimiter = ',', default_values_t = tabletop::DEFAULT_DEPTHS)]
        depths: Vec<u32>,

        /// Searches per depth
        #[arg(short, long, default_value_t = tabletop::DEFAULT_RUNS)]
        runs: u32,

        /// Per-search time cap in milliseconds
        #[arg(long)]
        budget_ms: Option<u64>,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}
