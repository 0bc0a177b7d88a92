//! Value-type game position used for simulation.

use super::board::Board;
use super::error::{GameError, MoveRejection};
use super::rules::{GameKind, MoveList, Rules};
use super::types::{GameState, PlayerId};
use serde::{Deserialize, Serialize};

/// Magnitudes used by [`Position::score`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Value of a decided game, positive for the evaluating player's win.
    pub win: f64,
    /// Largest positional bonus in an undecided or drawn position.
    pub positional: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            win: 80.0,
            positional: 40.0,
        }
    }
}

/// Scale applied to a score found with `depth` plies of budget left out of
/// `max_depth`.
///
/// Strictly increasing in `depth`, so an outcome reached closer to the root
/// outweighs the same outcome reached deeper. The `+ 1` keeps horizon
/// leaves (`depth == 0`) above zero. Computed in `f64` so `u32::MAX` is a
/// valid budget.
pub fn depth_factor(depth: u32, max_depth: u32) -> f64 {
    (f64::from(depth.min(max_depth)) + 1.0) / (f64::from(max_depth) + 1.0)
}

/// Board, game and side to move. `Copy`, so cloning never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    game: GameKind,
    board: Board,
    to_move: PlayerId,
}

impl Position {
    /// Starting position of `game` with player one to move.
    pub fn new(game: GameKind) -> Result<Self, GameError> {
        Ok(Self {
            game,
            board: game.initial_board()?,
            to_move: PlayerId::One,
        })
    }

    /// Position from an arbitrary board.
    pub fn from_parts(game: GameKind, board: Board, to_move: PlayerId) -> Result<Self, GameError> {
        if board.size() != game.board_size() {
            return Err(GameError::UnsupportedBoardSize(board.size()));
        }
        Ok(Self {
            game,
            board,
            to_move,
        })
    }

    /// The game being played.
    pub fn game(&self) -> GameKind {
        self.game
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Hands the turn to `player`.
    pub fn set_to_move(&mut self, player: PlayerId) {
        self.to_move = player;
    }

    /// Legal moves for `player`.
    pub fn valid_moves(&self, player: PlayerId) -> MoveList {
        self.game.valid_moves(&self.board, player)
    }

    /// Returns true if `player` has at least one legal move.
    pub fn has_valid_moves(&self, player: PlayerId) -> bool {
        self.game.has_valid_moves(&self.board, player)
    }

    /// Returns true if the side to move may play `index`.
    pub fn is_valid_move(&self, index: usize) -> bool {
        self.game.is_valid_move(&self.board, index, self.to_move)
    }

    /// Validates and applies `index` for `player` without touching the turn.
    pub fn apply_move(&mut self, index: usize, player: PlayerId) -> Result<(), GameError> {
        self.game.apply_move(&mut self.board, index, player)
    }

    /// Plays `index` for the side to move and passes the turn.
    pub fn play(&mut self, index: usize) -> Result<(), GameError> {
        if self.state()?.is_terminal() {
            return Err(GameError::invalid_move(index, MoveRejection::GameOver));
        }
        self.apply_move(index, self.to_move)?;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Passes the turn without placing.
    pub fn pass(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// State derived from the board.
    pub fn state(&self) -> Result<GameState, GameError> {
        self.game.classify(&self.board)
    }

    /// Heuristic value of this position for `player`, using the default
    /// weights. See [`Position::score_with`].
    pub fn score(&self, player: PlayerId, depth: u32, max_depth: u32) -> Result<f64, GameError> {
        self.score_with(&ScoreWeights::default(), player, depth, max_depth)
    }

    /// Heuristic value of this position for `player`.
    ///
    /// `depth` is the number of plies of budget still left below this
    /// position, so a search root has `depth == max_depth`. Decided games
    /// score `±weights.win`, anything else the game's positional bonus
    /// times `weights.positional`; both are scaled by [`depth_factor`].
    pub fn score_with(
        &self,
        weights: &ScoreWeights,
        player: PlayerId,
        depth: u32,
        max_depth: u32,
    ) -> Result<f64, GameError> {
        let factor = depth_factor(depth, max_depth);
        let value = match self.state()? {
            GameState::Playing | GameState::Draw => {
                weights.positional * self.game.positional(&self.board, player)
            }
            state @ (GameState::PlayerOneWon | GameState::PlayerTwoWon) => {
                if state.winner() == Some(player) {
                    weights.win
                } else {
                    -weights.win
                }
            }
        };
        Ok(value * factor)
    }
}
