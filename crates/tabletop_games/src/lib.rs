//! Board and rules for two-player perfect-information games.
//!
//! # Architecture
//!
//! - **Board**: fixed-size cell grid with row-major flat indexing
//! - **Rules**: per-game move generation, captures and state classification
//!   ([`TicTacToe`], [`Othello`]), dispatched through the closed [`GameKind`]
//! - **Position**: `Copy` snapshot of board and side to move, cloned freely
//!   by search
//! - **GameModel**: the live game with seats and authoritative overrides
//!
//! # Example
//!
//! ```
//! use tabletop_games::{GameKind, GameModel, GameState, PlayerId};
//!
//! let mut game = GameModel::new(GameKind::TicTacToe, ["alice".into(), "bob".into()])?;
//! game.play(4)?;
//! assert_eq!(game.current_player(), PlayerId::Two);
//! assert_eq!(game.state()?, GameState::Playing);
//! # Ok::<(), tabletop_games::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod model;
mod othello;
mod position;
mod rules;
mod tictactoe;
mod types;

pub use board::{Board, MAX_CELLS, MAX_SIZE};
pub use error::{GameError, MoveRejection};
pub use model::{GameModel, Seat};
pub use othello::Othello;
pub use position::{Position, ScoreWeights, depth_factor};
pub use rules::{GameKind, MoveList, Rules};
pub use tictactoe::TicTacToe;
pub use types::{GameState, PlayerId};
