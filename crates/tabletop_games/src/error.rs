//! Game error types.

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The index lies outside the board.
    #[display("outside the board")]
    OutOfBounds,
    /// The cell already holds a piece.
    #[display("cell is occupied")]
    Occupied,
    /// The placement captures nothing.
    #[display("captures no opponent pieces")]
    NoCapture,
    /// The game is already decided.
    #[display("game is over")]
    GameOver,
}

/// Error raised by board and game-model operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A move failed validation; the board was not touched.
    #[display("Invalid move {index}: {reason}")]
    InvalidMove {
        /// The rejected cell index.
        index: usize,
        /// Why it was rejected.
        reason: MoveRejection,
    },

    /// A raw board access addressed a cell that does not exist.
    #[display("Cell {index} is out of bounds (board has {cell_count} cells)")]
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// Number of cells on the board.
        cell_count: usize,
    },

    /// The board content cannot arise from legal play.
    #[display("Corrupt game state: {}", _0)]
    CorruptState(String),

    /// Boards are square with a side between 1 and 8.
    #[display("Unsupported board size {}", _0)]
    UnsupportedBoardSize(usize),

    /// No seat is registered under this username.
    #[display("Unknown player: {}", _0)]
    UnknownPlayer(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Shorthand for an [`GameError::InvalidMove`].
    pub fn invalid_move(index: usize, reason: MoveRejection) -> Self {
        GameError::InvalidMove { index, reason }
    }
}
