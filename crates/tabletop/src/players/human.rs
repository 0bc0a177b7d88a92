//! Human player fed through a pending-move slot.

use super::Player;
use crate::error::PlayerError;
use tabletop_games::GameModel;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

/// Creates a connected submitter/slot pair.
///
/// The slot holds at most one pending move. A later submission replaces
/// an earlier one that has not been read yet.
pub fn move_slot() -> (MoveSubmitter, MoveSlot) {
    let (tx, rx) = watch::channel(None);
    (MoveSubmitter { tx }, MoveSlot { rx })
}

/// Write side of the slot, held by whatever captures input.
#[derive(Debug)]
pub struct MoveSubmitter {
    tx: watch::Sender<Option<usize>>,
}

impl MoveSubmitter {
    /// Offers `index` as the next move. Returns false if the player is gone.
    pub fn submit(&self, index: usize) -> bool {
        self.tx.send(Some(index)).is_ok()
    }
}

/// Read side of the slot, owned by the [`HumanPlayer`].
#[derive(Debug)]
pub struct MoveSlot {
    rx: watch::Receiver<Option<usize>>,
}

impl MoveSlot {
    /// Waits for the next submitted move.
    pub async fn next(&mut self) -> Result<usize, PlayerError> {
        loop {
            self.rx
                .changed()
                .await
                .map_err(|_| PlayerError::InputClosed)?;
            if let Some(index) = *self.rx.borrow_and_update() {
                return Ok(index);
            }
        }
    }
}

/// Player whose moves come from a person.
#[derive(Debug)]
pub struct HumanPlayer {
    name: String,
    slot: MoveSlot,
}

impl HumanPlayer {
    /// Creates a human player reading from `slot`.
    pub fn new(name: impl Into<String>, slot: MoveSlot) -> Self {
        Self {
            name: name.into(),
            slot,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    #[instrument(skip(self, game), fields(player = %self.name))]
    async fn get_move(&mut self, game: &GameModel) -> Result<Option<usize>, PlayerError> {
        if game.state()?.is_terminal() || !game.has_valid_moves(game.current_player()) {
            return Ok(None);
        }
        loop {
            let index = self.slot.next().await?;
            if game.is_valid_move(index) {
                debug!(index, "Human move accepted");
                return Ok(Some(index));
            }
            warn!(index, "Ignoring invalid move");
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
