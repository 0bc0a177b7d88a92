//! The rules capability shared by every supported game.
//!
//! Each game is a zero-sized rule set operating on a [`Board`]; the closed
//! set of games is [`GameKind`], which dispatches to the concrete rules.

use super::board::Board;
use super::error::GameError;
use super::othello::Othello;
use super::tictactoe::TicTacToe;
use super::types::{GameState, PlayerId};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Legal moves of one player, as ascending cell indices.
///
/// Inline capacity covers every tic-tac-toe position and nearly every
/// othello one, so move generation does not allocate on the search path.
pub type MoveList = SmallVec<[usize; 32]>;

/// Per-game rules over a board.
pub trait Rules {
    /// Human-readable game name.
    fn name(&self) -> &'static str;

    /// Side length of the board this game is played on.
    fn board_size(&self) -> usize;

    /// The starting position.
    fn initial_board(&self) -> Result<Board, GameError>;

    /// Every legal placement for `player`, in ascending index order.
    fn valid_moves(&self, board: &Board, player: PlayerId) -> MoveList;

    /// Returns true if `player` may place on `index`.
    fn is_valid_move(&self, board: &Board, index: usize, player: PlayerId) -> bool;

    /// Returns true if `player` has at least one legal placement.
    fn has_valid_moves(&self, board: &Board, player: PlayerId) -> bool {
        !self.valid_moves(board, player).is_empty()
    }

    /// Validates and applies a placement, including any captures.
    ///
    /// On error the board is left untouched.
    fn apply_move(&self, board: &mut Board, index: usize, player: PlayerId)
    -> Result<(), GameError>;

    /// Applies a placement without legality checks.
    ///
    /// Used for authoritative moves from a remote server. Captures are still
    /// resolved so the local board mirrors the server's.
    fn place_unchecked(&self, board: &mut Board, index: usize, player: PlayerId)
    -> Result<(), GameError>;

    /// Derives the game state from the board alone.
    fn classify(&self, board: &Board) -> Result<GameState, GameError>;

    /// Positional advantage of `player` in `[-1.0, 1.0]` for non-decisive
    /// positions.
    fn positional(&self, board: &Board, player: PlayerId) -> f64;
}

/// The closed set of supported games.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum GameKind {
    /// Three in a row on a 3x3 board.
    #[strum(to_string = "tic-tac-toe", serialize = "tictactoe")]
    TicTacToe,
    /// Disc flipping on an 8x8 board.
    #[strum(to_string = "othello", serialize = "reversi")]
    Othello,
}

macro_rules! impl_rules_dispatch {
    ($($variant:ident => $rules:expr),* $(,)?) => {
        impl Rules for GameKind {
            fn name(&self) -> &'static str {
                match self {
                    $(GameKind::$variant => $rules.name(),)*
                }
            }

            fn board_size(&self) -> usize {
                match self {
                    $(GameKind::$variant => $rules.board_size(),)*
                }
            }

            fn initial_board(&self) -> Result<Board, GameError> {
                match self {
                    $(GameKind::$variant => $rules.initial_board(),)*
                }
            }

            fn valid_moves(&self, board: &Board, player: PlayerId) -> MoveList {
                match self {
                    $(GameKind::$variant => $rules.valid_moves(board, player),)*
                }
            }

            fn is_valid_move(&self, board: &Board, index: usize, player: PlayerId) -> bool {
                match self {
                    $(GameKind::$variant => $rules.is_valid_move(board, index, player),)*
                }
            }

            fn has_valid_moves(&self, board: &Board, player: PlayerId) -> bool {
                match self {
                    $(GameKind::$variant => $rules.has_valid_moves(board, player),)*
                }
            }

            fn apply_move(
                &self,
                board: &mut Board,
                index: usize,
                player: PlayerId,
            ) -> Result<(), GameError> {
                match self {
                    $(GameKind::$variant => $rules.apply_move(board, index, player),)*
                }
            }

            fn place_unchecked(
                &self,
                board: &mut Board,
                index: usize,
                player: PlayerId,
            ) -> Result<(), GameError> {
                match self {
                    $(GameKind::$variant => $rules.place_unchecked(board, index, player),)*
                }
            }

            fn classify(&self, board: &Board) -> Result<GameState, GameError> {
                match self {
                    $(GameKind::$variant => $rules.classify(board),)*
                }
            }

            fn positional(&self, board: &Board, player: PlayerId) -> f64 {
                match self {
                    $(GameKind::$variant => $rules.positional(board, player),)*
                }
            }
        }
    };
}

impl_rules_dispatch!(TicTacToe => TicTacToe, Othello => Othello);
