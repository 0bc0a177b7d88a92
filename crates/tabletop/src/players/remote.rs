//! Placeholder seat for an opponent on the server.

use super::Player;
use crate::error::PlayerError;
use tabletop_games::GameModel;

/// A network opponent. Its moves are pushed into the game by the
/// [`OnlineHelper`](crate::OnlineHelper), so asking it for one is an error.
#[derive(Debug, Clone)]
pub struct RemotePlayer {
    name: String,
}

impl RemotePlayer {
    /// Creates a remote seat.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl Player for RemotePlayer {
    async fn get_move(&mut self, _game: &GameModel) -> Result<Option<usize>, PlayerError> {
        Err(PlayerError::RemoteSeat(self.name.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_remote(&self) -> bool {
        true
    }
}
