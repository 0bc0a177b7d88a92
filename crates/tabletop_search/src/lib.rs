//! Adversarial tree search over [`tabletop_games::Position`].
//!
//! # Strategies
//!
//! - **Minimax**: full-width search to a fixed depth
//! - **Alpha-beta**: the same search with an `(alpha, beta)` window; returns
//!   the same move and value as minimax while visiting fewer nodes
//! - **Heuristic**: one-ply baseline with no look-ahead
//!
//! Leaves are scored from the requester's point of view with
//! [`Position::score_with`](tabletop_games::Position::score_with), so a win
//! found nearer the root outweighs one found deeper.
//!
//! # Example
//!
//! ```
//! use tabletop_games::{GameKind, PlayerId, Position};
//! use tabletop_search::{SearchAlgorithm, SearchEngine};
//!
//! let root = Position::new(GameKind::TicTacToe)?;
//! let engine = SearchEngine::new(SearchAlgorithm::AlphaBeta);
//! let chosen = engine.best_move(&root, PlayerId::One, 2)?;
//! assert!(chosen.is_some());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod algorithm;
mod engine;
mod error;
mod heuristic;
mod limits;
mod stats;
mod tree;

pub use algorithm::SearchAlgorithm;
pub use engine::{SearchEngine, SearchOutcome};
pub use error::{AbortReason, SearchError};
pub use heuristic::heuristic_move;
pub use limits::{CancelToken, SearchLimits};
pub use stats::SearchStats;
