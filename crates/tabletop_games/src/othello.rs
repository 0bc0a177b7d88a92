//! Othello (Reversi) rules.
//!
//! A placement is legal when it brackets at least one contiguous run of
//! opponent discs between the new disc and another disc of the mover, in
//! any of the eight directions. Every bracketed run flips. A player with no
//! legal placement passes; the game ends when neither player can place.

use super::board::Board;
use super::error::{GameError, MoveRejection};
use super::rules::{MoveList, Rules};
use super::types::{GameState, PlayerId};

const SIZE: usize = 8;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Static square weights: corners are stable, squares next to them give
/// corners away.
const SQUARE_WEIGHTS: [i32; SIZE * SIZE] = [
    100, -20, 10,  5,  5, 10, -20, 100,
    -20, -50, -2, -2, -2, -2, -50, -20,
     10,  -2, -1, -1, -1, -1,  -2,  10,
      5,  -2, -1, -1, -1, -1,  -2,   5,
      5,  -2, -1, -1, -1, -1,  -2,   5,
     10,  -2, -1, -1, -1, -1,  -2,  10,
    -20, -50, -2, -2, -2, -2, -50, -20,
    100, -20, 10,  5,  5, 10, -20, 100,
];

/// Disc flipping on an 8x8 board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Othello;

impl Othello {
    /// Length of the opponent run that a disc at `index` would capture in
    /// direction `(dr, dc)`. Zero when the run is not closed by one of
    /// `player`'s discs.
    fn run_length(board: &Board, index: usize, player: PlayerId, (dr, dc): (isize, isize)) -> usize {
        let size = board.size() as isize;
        let (row, col) = board.coords(index);
        let opponent = player.opponent();
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        let mut length = 0;

        while r >= 0 && r < size && c >= 0 && c < size {
            match board.get_at(r as usize, c as usize) {
                Some(owner) if owner == opponent => length += 1,
                Some(_) => return length,
                None => return 0,
            }
            r += dr;
            c += dc;
        }
        0
    }

    /// Total number of discs captured by placing at `index`.
    pub fn captures(board: &Board, index: usize, player: PlayerId) -> usize {
        if !board.is_empty(index) {
            return 0;
        }
        DIRECTIONS
            .iter()
            .map(|&dir| Self::run_length(board, index, player, dir))
            .sum()
    }

    fn place_and_flip(board: &mut Board, index: usize, player: PlayerId) -> Result<(), GameError> {
        let runs = DIRECTIONS.map(|dir| Self::run_length(board, index, player, dir));
        board.set(index, player)?;

        let (row, col) = board.coords(index);
        for ((dr, dc), length) in DIRECTIONS.into_iter().zip(runs) {
            for step in 1..=length as isize {
                let r = (row as isize + dr * step) as usize;
                let c = (col as isize + dc * step) as usize;
                let target = board.index_of(r, c);
                board.set(target, player)?;
            }
        }
        Ok(())
    }

    fn check_bounds(board: &Board) -> Result<(), GameError> {
        if board.size() == SIZE {
            Ok(())
        } else {
            Err(GameError::CorruptState(format!(
                "othello needs an 8x8 board, got {0}x{0}",
                board.size()
            )))
        }
    }
}

impl Rules for Othello {
    fn name(&self) -> &'static str {
        "Othello"
    }

    fn board_size(&self) -> usize {
        SIZE
    }

    fn initial_board(&self) -> Result<Board, GameError> {
        let mut board = Board::new(SIZE)?;
        let center = SIZE / 2;
        board.set(board.index_of(center - 1, center - 1), PlayerId::Two)?;
        board.set(board.index_of(center - 1, center), PlayerId::One)?;
        board.set(board.index_of(center, center - 1), PlayerId::One)?;
        board.set(board.index_of(center, center), PlayerId::Two)?;
        Ok(board)
    }

    fn valid_moves(&self, board: &Board, player: PlayerId) -> MoveList {
        board
            .empty_cells()
            .filter(|&index| self.is_valid_move(board, index, player))
            .collect()
    }

    fn is_valid_move(&self, board: &Board, index: usize, player: PlayerId) -> bool {
        board.is_empty(index)
            && DIRECTIONS
                .iter()
                .any(|&dir| Self::run_length(board, index, player, dir) > 0)
    }

    fn has_valid_moves(&self, board: &Board, player: PlayerId) -> bool {
        board
            .empty_cells()
            .any(|index| self.is_valid_move(board, index, player))
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
        if !self.is_valid_move(board, index, player) {
            return Err(GameError::invalid_move(index, MoveRejection::NoCapture));
        }
        Self::place_and_flip(board, index, player)
    }

    fn place_unchecked(
        &self,
        board: &mut Board,
        index: usize,
        player: PlayerId,
    ) -> Result<(), GameError> {
        if !board.contains(index) {
            return Err(GameError::OutOfBounds {
                index,
                cell_count: board.cell_count(),
            });
        }
        Self::place_and_flip(board, index, player)
    }

    fn classify(&self, board: &Board) -> Result<GameState, GameError> {
        Self::check_bounds(board)?;
        if self.has_valid_moves(board, PlayerId::One) || self.has_valid_moves(board, PlayerId::Two)
        {
            return Ok(GameState::Playing);
        }

        let one = board.count(PlayerId::One);
        let two = board.count(PlayerId::Two);
        Ok(match one.cmp(&two) {
            std::cmp::Ordering::Greater => GameState::PlayerOneWon,
            std::cmp::Ordering::Less => GameState::PlayerTwoWon,
            std::cmp::Ordering::Equal => GameState::Draw,
        })
    }

    fn positional(&self, board: &Board, player: PlayerId) -> f64 {
        let mut own = 0;
        let mut theirs = 0;
        let mut total = 0;
        for (index, weight) in SQUARE_WEIGHTS.iter().enumerate().take(board.cell_count()) {
            match board.get(index) {
                Some(owner) if owner == player => own += weight,
                Some(_) => theirs += weight,
                None => continue,
            }
            total += weight.abs();
        }
        if total == 0 {
            0.0
        } else {
            f64::from(own - theirs) / f64::from(total)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> usize {
        row * SIZE + col
    }

    #[test]
    fn test_initial_position() {
        let board = Othello.initial_board().unwrap();
        assert_eq!(board.count(PlayerId::One), 2);
        assert_eq!(board.count(PlayerId::Two), 2);
        assert_eq!(board.get_at(3, 4), Some(PlayerId::One));
        assert_eq!(board.get_at(3, 3), Some(PlayerId::Two));
    }

    #[test]
    fn test_opening_moves() {
        let board = Othello.initial_board().unwrap();
        let moves = Othello.valid_moves(&board, PlayerId::One);
        assert_eq!(moves.as_slice(), &[at(2, 3), at(3, 2), at(4, 5), at(5, 4)]);
    }

    #[test]
    fn test_apply_flips_bracketed_disc() {
        let mut board = Othello.initial_board().unwrap();
        Othello.apply_move(&mut board, at(2, 3), PlayerId::One).unwrap();
        assert_eq!(board.get_at(3, 3), Some(PlayerId::One));
        assert_eq!(board.count(PlayerId::One), 4);
        assert_eq!(board.count(PlayerId::Two), 1);
    }

    #[test]
    fn test_no_capture_rejected() {
        let mut board = Othello.initial_board().unwrap();
        let before = board;
        let result = Othello.apply_move(&mut board, at(0, 0), PlayerId::One);
        assert_eq!(
            result,
            Err(GameError::invalid_move(at(0, 0), MoveRejection::NoCapture))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_run_broken_by_empty_does_not_flip() {
        let mut board = Board::new(SIZE).unwrap();
        // X . O O _ : a gap before the mover's disc closes nothing
        board.set(at(0, 0), PlayerId::One).unwrap();
        board.set(at(0, 2), PlayerId::Two).unwrap();
        board.set(at(0, 3), PlayerId::Two).unwrap();
        assert_eq!(Othello::captures(&board, at(0, 4), PlayerId::One), 0);
        assert!(!Othello.is_valid_move(&board, at(0, 4), PlayerId::One));
    }

    #[test]
    fn test_run_reaching_edge_does_not_flip() {
        let mut board = Board::new(SIZE).unwrap();
        board.set(at(0, 6), PlayerId::Two).unwrap();
        board.set(at(0, 7), PlayerId::Two).unwrap();
        assert_eq!(Othello::captures(&board, at(0, 5), PlayerId::One), 0);
    }

    #[test]
    fn test_full_board_majority_wins() {
        let mut board = Board::new(SIZE).unwrap();
        for index in 0..board.cell_count() {
            let owner = if index < 33 { PlayerId::One } else { PlayerId::Two };
            board.set(index, owner).unwrap();
        }
        assert_eq!(Othello.classify(&board), Ok(GameState::PlayerOneWon));
    }

    #[test]
    fn test_blocked_equal_count_is_draw() {
        let mut board = Board::new(SIZE).unwrap();
        board.set(at(0, 0), PlayerId::One).unwrap();
        board.set(at(7, 7), PlayerId::Two).unwrap();
        assert_eq!(Othello.classify(&board), Ok(GameState::Draw));
    }

    #[test]
    fn test_corner_is_worth_more_than_x_square() {
        let mut corner = Board::new(SIZE).unwrap();
        corner.set(at(0, 0), PlayerId::One).unwrap();
        corner.set(at(1, 1), PlayerId::Two).unwrap();
        assert!(Othello.positional(&corner, PlayerId::One) > 0.0);
        assert!(Othello.positional(&corner, PlayerId::Two) < 0.0);
    }
}
