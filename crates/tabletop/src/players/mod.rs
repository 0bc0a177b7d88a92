//! Player trait and implementations.

mod ai;
mod heuristic;
mod human;
mod remote;

pub use ai::AiPlayer;
pub use heuristic::HeuristicPlayer;
pub use human::{HumanPlayer, MoveSlot, MoveSubmitter, move_slot};
pub use remote::RemotePlayer;

use crate::error::PlayerError;
use tabletop_games::GameModel;

/// Trait for players that can supply moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move for the side to move in `game`.
    ///
    /// Never mutates the game; the caller applies the returned index.
    /// `None` means the player has no legal move and passes.
    async fn get_move(&mut self, game: &GameModel) -> Result<Option<usize>, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True when this seat's moves are pushed by a server instead of
    /// being requested.
    fn is_remote(&self) -> bool {
        false
    }
}
