//! Fixed-size square cell grid.
//!
//! The board owns no game semantics. Cells are addressed either by a flat
//! index or by `(row, col)`; the mapping is row-major:
//! `index = row * size + col`.

use super::error::GameError;
use super::types::PlayerId;
use tracing::instrument;

/// Largest supported board side.
pub const MAX_SIZE: usize = 8;

/// Capacity of the cell storage.
pub const MAX_CELLS: usize = MAX_SIZE * MAX_SIZE;

/// Square board of up to 8x8 cells.
///
/// Storage is an inline array, so cloning is a plain copy with no heap
/// allocation. Cells beyond `cell_count()` are never read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    size: u8,
    cells: [Option<PlayerId>; MAX_CELLS],
}

impl Board {
    /// Creates an empty `size` x `size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 || size > MAX_SIZE {
            return Err(GameError::UnsupportedBoardSize(size));
        }
        Ok(Self {
            size: size as u8,
            cells: [None; MAX_CELLS],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.size() * self.size()
    }

    /// Returns true if `index` addresses a cell.
    pub fn contains(&self, index: usize) -> bool {
        index < self.cell_count()
    }

    /// Flat index of `(row, col)`.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size() + col
    }

    /// `(row, col)` of a flat index.
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index / self.size(), index % self.size())
    }

    /// Returns the owner of a cell, `None` when empty.
    ///
    /// # Panics
    ///
    /// Panics if `index >= cell_count()`. Use [`Board::checked_get`] for
    /// untrusted indices.
    pub fn get(&self, index: usize) -> Option<PlayerId> {
        assert!(
            self.contains(index),
            "cell {index} out of bounds for {} cells",
            self.cell_count()
        );
        self.cells[index]
    }

    /// Returns the owner of `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates fall outside the board.
    pub fn get_at(&self, row: usize, col: usize) -> Option<PlayerId> {
        assert!(row < self.size() && col < self.size(), "({row}, {col}) out of bounds");
        self.cells[self.index_of(row, col)]
    }

    /// Bounds-checked variant of [`Board::get`].
    pub fn checked_get(&self, index: usize) -> Result<Option<PlayerId>, GameError> {
        if self.contains(index) {
            Ok(self.cells[index])
        } else {
            Err(GameError::OutOfBounds {
                index,
                cell_count: self.cell_count(),
            })
        }
    }

    /// Places `player` on a cell, overwriting whatever was there.
    ///
    /// This does not check legality; that is the rules' job.
    pub fn set(&mut self, index: usize, player: PlayerId) -> Result<(), GameError> {
        if !self.contains(index) {
            return Err(GameError::OutOfBounds {
                index,
                cell_count: self.cell_count(),
            });
        }
        self.cells[index] = Some(player);
        Ok(())
    }

    /// Returns true if the cell exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        self.contains(index) && self.cells[index].is_none()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.occupied().all(|cell| cell.is_some())
    }

    /// Number of cells owned by `player`.
    pub fn count(&self, player: PlayerId) -> usize {
        self.occupied().filter(|cell| *cell == Some(player)).count()
    }

    /// Indices of all empty cells, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cell_count()).filter(|&i| self.cells[i].is_none())
    }

    /// Snapshot of the cells as integers (0 empty, 1 or 2 owned).
    pub fn cells(&self) -> Vec<u8> {
        self.occupied()
            .map(|cell| cell.map_or(0, PlayerId::as_u8))
            .collect()
    }

    fn occupied(&self) -> impl Iterator<Item = Option<PlayerId>> + '_ {
        self.cells[..self.cell_count()].iter().copied()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let width = (self.cell_count() - 1).to_string().len();
        for row in 0..size {
            for col in 0..size {
                let index = self.index_of(row, col);
                let symbol = match self.cells[index] {
                    None => index.to_string(),
                    Some(PlayerId::One) => "X".to_string(),
                    Some(PlayerId::Two) => "O".to_string(),
                };
                write!(f, "{symbol:>width$}")?;
                if col + 1 < size {
                    write!(f, " ")?;
                }
            }
            if row + 1 < size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3).unwrap();
        assert_eq!(board.size(), 3);
        assert_eq!(board.cell_count(), 9);
        assert_eq!(board.cells(), vec![0; 9]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_rejects_unsupported_sizes() {
        assert_eq!(Board::new(0), Err(GameError::UnsupportedBoardSize(0)));
        assert_eq!(Board::new(9), Err(GameError::UnsupportedBoardSize(9)));
    }

    #[test]
    fn test_row_major_mapping() {
        let mut board = Board::new(8).unwrap();
        board.set(board.index_of(2, 5), PlayerId::Two).unwrap();
        assert_eq!(board.index_of(2, 5), 21);
        assert_eq!(board.coords(21), (2, 5));
        assert_eq!(board.get(21), Some(PlayerId::Two));
        assert_eq!(board.get_at(2, 5), Some(PlayerId::Two));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        let result = board.set(9, PlayerId::One);
        assert_eq!(
            result,
            Err(GameError::OutOfBounds {
                index: 9,
                cell_count: 9
            })
        );
        assert!(board.checked_get(9).is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::new(3).unwrap();
        let mut copy = original;
        copy.set(4, PlayerId::One).unwrap();
        assert_eq!(original.get(4), None);
        assert_eq!(copy.get(4), Some(PlayerId::One));
    }

    #[test]
    fn test_count_and_full() {
        let mut board = Board::new(1).unwrap();
        assert_eq!(board.count(PlayerId::One), 0);
        board.set(0, PlayerId::One).unwrap();
        assert_eq!(board.count(PlayerId::One), 1);
        assert!(board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3).unwrap();
        board.set(0, PlayerId::One).unwrap();
        board.set(4, PlayerId::Two).unwrap();
        assert_eq!(board.to_string(), "X 1 2\n3 O 5\n6 7 8");
    }
}
