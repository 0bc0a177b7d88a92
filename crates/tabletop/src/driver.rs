//! Offline game orchestration between two local players.

use crate::error::DriverError;
use crate::players::Player;
use tabletop_games::{GameKind, GameModel, GameState, PlayerId};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from the driver to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A player is computing or waiting for a move.
    Thinking {
        /// Username of the player to move.
        player: String,
    },
    /// A move was applied.
    MoveMade {
        /// Username of the mover.
        player: String,
        /// Cell index played.
        index: usize,
        /// Board after the move, rendered as text.
        board: String,
    },
    /// A player had no legal move and passed.
    Passed {
        /// Username of the passing player.
        player: String,
    },
    /// The game ended.
    GameOver {
        /// Final state.
        state: GameState,
        /// Username of the winner, if any.
        winner: Option<String>,
    },
}

/// Runs a game between two local players, applying each returned move to
/// the live model.
pub struct Driver {
    game: GameModel,
    players: [Box<dyn Player>; 2],
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Driver {
    /// Seats `players` in order (first moves first) for a new `game`.
    ///
    /// Remote players are rejected: their moves only arrive through the
    /// online helper.
    #[instrument(skip(players, event_tx), fields(game = %game))]
    pub fn new(
        game: GameKind,
        players: [Box<dyn Player>; 2],
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Result<Self, DriverError> {
        if let Some(remote) = players.iter().find(|p| p.is_remote()) {
            return Err(DriverError::RemoteSeat(remote.name().to_string()));
        }
        let usernames = [players[0].name().to_string(), players[1].name().to_string()];
        let game = GameModel::new(game, usernames)?;
        Ok(Self {
            game,
            players,
            event_tx,
        })
    }

    /// Read-only view of the live game.
    pub fn game(&self) -> &GameModel {
        &self.game
    }

    /// Plays until the game is decided and returns the final state.
    #[instrument(skip(self), fields(game = %self.game.game()))]
    pub async fn run(&mut self) -> Result<GameState, DriverError> {
        info!("Starting game");
        loop {
            if let Some(state) = self.step().await? {
                return Ok(state);
            }
        }
    }

    /// Plays one turn. Returns the final state once the game is over.
    pub async fn step(&mut self) -> Result<Option<GameState>, DriverError> {
        let state = self.game.state()?;
        if state.is_terminal() {
            let winner = state
                .winner()
                .map(|id| self.game.player(id).username().to_string());
            info!(%state, ?winner, "Game over");
            self.emit(GameEvent::GameOver { state, winner });
            return Ok(Some(state));
        }

        let id = self.game.current_player();
        let name = self.players[id.seat()].name().to_string();
        self.emit(GameEvent::Thinking {
            player: name.clone(),
        });

        debug!(player = %name, "Waiting for move");
        let chosen = self.players[id.seat()].get_move(&self.game).await?;
        match chosen {
            Some(index) => {
                self.game.play(index)?;
                self.emit(GameEvent::MoveMade {
                    player: name,
                    index,
                    board: self.game.board().to_string(),
                });
            }
            None => self.pass(id, name)?,
        }
        Ok(None)
    }

    fn pass(&mut self, id: PlayerId, name: String) -> Result<(), DriverError> {
        if self.game.has_valid_moves(id) {
            return Err(DriverError::NoMove(name));
        }
        debug!(player = %name, "No legal move, passing");
        self.game.pass();
        self.emit(GameEvent::Passed { player: name });
        Ok(())
    }

    fn emit(&self, event: GameEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("Event receiver dropped");
        }
    }
}
