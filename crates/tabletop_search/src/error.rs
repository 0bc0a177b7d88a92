//! Search error types.

use tabletop_games::GameError;

/// Why a search stopped before finishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AbortReason {
    /// The wall-clock deadline passed.
    #[display("deadline exceeded")]
    DeadlineExceeded,
    /// The caller raised the cancellation flag.
    #[display("cancelled")]
    Cancelled,
}

/// Error returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The search was stopped; no move is returned.
    #[display("Search aborted: {}", _0)]
    Aborted(AbortReason),

    /// A search needs at least one ply.
    #[display("Search depth must be at least 1")]
    ZeroDepth,

    /// A position in the tree could not be evaluated.
    #[display("Search failed: {}", _0)]
    Game(GameError),
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Game(e) => Some(e),
            SearchError::Aborted(_) | SearchError::ZeroDepth => None,
        }
    }
}

impl From<GameError> for SearchError {
    fn from(err: GameError) -> Self {
        SearchError::Game(err)
    }
}
