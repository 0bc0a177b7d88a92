//! Tic-tac-toe rules.

use super::board::Board;
use super::error::{GameError, MoveRejection};
use super::rules::{MoveList, Rules};
use super::types::{GameState, PlayerId};

const SIZE: usize = 3;
const CENTER: usize = 4;

/// Winning lines as flat indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Three in a row on a 3x3 board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicTacToe;

impl TicTacToe {
    /// Returns true if `player` holds a complete line.
    pub fn has_won(board: &Board, player: PlayerId) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| board.get(i) == Some(player)))
    }

    fn check_bounds(board: &Board) -> Result<(), GameError> {
        if board.size() == SIZE {
            Ok(())
        } else {
            Err(GameError::CorruptState(format!(
                "tic-tac-toe needs a 3x3 board, got {0}x{0}",
                board.size()
            )))
        }
    }
}

impl Rules for TicTacToe {
    fn name(&self) -> &'static str {
        "Tic-Tac-Toe"
    }

    fn board_size(&self) -> usize {
        SIZE
    }

    fn initial_board(&self) -> Result<Board, GameError> {
        Board::new(SIZE)
    }

    fn valid_moves(&self, board: &Board, _player: PlayerId) -> MoveList {
        board.empty_cells().collect()
    }

    fn is_valid_move(&self, board: &Board, index: usize, _player: PlayerId) -> bool {
        board.is_empty(index)
    }

    fn apply_move(
        &self,
        board: &mut Board,
        index: usize,
        player: PlayerId,
    ) -> Result<(), GameError> {
        if !board.contains(index) {
            return Err(GameError::invalid_move(index, MoveRejection::OutOfBounds));
        }
        if !board.is_empty(index) {
            return Err(GameError::invalid_move(index, MoveRejection::Occupied));
        }
        board.set(index, player)
    }

    fn place_unchecked(
        &self,
        board: &mut Board,
        index: usize,
        player: PlayerId,
    ) -> Result<(), GameError> {
        board.set(index, player)
    }

    fn classify(&self, board: &Board) -> Result<GameState, GameError> {
        Self::check_bounds(board)?;
        let one = Self::has_won(board, PlayerId::One);
        let two = Self::has_won(board, PlayerId::Two);
        match (one, two) {
            (true, true) => Err(GameError::CorruptState(
                "both players hold a winning line".to_string(),
            )),
            (true, false) => Ok(GameState::PlayerOneWon),
            (false, true) => Ok(GameState::PlayerTwoWon),
            (false, false) if board.is_full() => Ok(GameState::Draw),
            (false, false) => Ok(GameState::Playing),
        }
    }

    fn positional(&self, board: &Board, player: PlayerId) -> f64 {
        if board.get(CENTER) == Some(player) {
            1.0
        } else {
            0.0
        }
    }
}
