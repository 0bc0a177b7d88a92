//! Tabletop - two-agent board game arena.
//!
//! Seats AI, heuristic, human or remote players at a Tic-Tac-Toe or
//! Othello board and drives the game to its end.
//!
//! # Architecture
//!
//! - **Players**: the [`Player`] capability; AI players delegate to
//!   [`tabletop_search`], humans read from a [`MoveSlot`]
//! - **Driver**: offline turn loop that applies returned moves and emits
//!   [`GameEvent`]s
//! - **Online**: [`OnlineHelper`] mirrors a server-run match, forcing
//!   reported moves and results into the model
//! - **Config**: TOML arena set-up ([`ArenaConfig`])
//! - **Bench**: latency per search depth ([`run_benchmark`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bench;
mod config;
mod driver;
mod error;
mod online;
mod players;

pub use bench::{
    BenchConfig, BenchReport, DEFAULT_DEPTHS, DEFAULT_RUNS, DepthTiming, run_benchmark,
};
pub use config::{
    ArenaConfig, ConfigError, MAX_USERNAME_LEN, PlayerConfig, PlayerKind, Roster,
    validate_username,
};
pub use driver::{Driver, GameEvent};
pub use error::{DriverError, OnlineError, PlayerError};
pub use online::{ClientCommand, OnlineHelper, ServerEvent, Tally};
pub use players::{
    AiPlayer, HeuristicPlayer, HumanPlayer, MoveSlot, MoveSubmitter, Player, RemotePlayer,
    move_slot,
};
