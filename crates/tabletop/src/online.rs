//! Mirrors a server-driven match in a local [`GameModel`].
//!
//! The server is authoritative: reported moves are forced into the model
//! without validation and results pin the game state. The local player is
//! only asked for a move when the server says it is our turn.

use crate::error::OnlineError;
use crate::players::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tabletop_games::{GameKind, GameModel, GameState};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Event received from the game server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServerEvent {
    /// A match was assigned.
    Match {
        /// Game to play.
        game: GameKind,
        /// Opponent's username.
        opponent: String,
        /// Username of the player who moves first.
        player_to_move: String,
    },
    /// The local player should move now.
    YourTurn,
    /// A move was played by either side.
    Move {
        /// Username of the mover.
        player: String,
        /// Cell index played.
        index: usize,
    },
    /// The local player won.
    Win,
    /// The local player lost.
    Loss,
    /// The match was drawn.
    Draw,
    /// The server rejected something.
    Error {
        /// Server-supplied description.
        message: String,
    },
}

impl ServerEvent {
    /// True for the result events that close a match.
    pub fn ends_match(&self) -> bool {
        matches!(self, ServerEvent::Win | ServerEvent::Loss | ServerEvent::Draw)
    }
}

/// Command sent to the game server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "index", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientCommand {
    /// Play a cell.
    Move(usize),
    /// Give up the current match.
    Forfeit,
}

/// Results accumulated across matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Tally {
    /// Matches won.
    wins: u32,
    /// Matches lost.
    losses: u32,
    /// Matches drawn.
    draws: u32,
}

/// Follows matches for one local player.
pub struct OnlineHelper {
    username: String,
    player: Box<dyn Player>,
    game: Option<GameModel>,
    tally: Tally,
}

impl OnlineHelper {
    /// Creates a helper for `player`, known to the server by its name.
    pub fn new(player: Box<dyn Player>) -> Self {
        Self {
            username: player.name().to_string(),
            player,
            game: None,
            tally: Tally::default(),
        }
    }

    /// The game mirrored from the current or last match.
    pub fn game(&self) -> Option<&GameModel> {
        self.game.as_ref()
    }

    /// Results so far.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Applies one server event, returning the command to send back if any.
    #[instrument(skip(self), fields(username = %self.username))]
    pub async fn handle(
        &mut self,
        event: ServerEvent,
    ) -> Result<Option<ClientCommand>, OnlineError> {
        match event {
            ServerEvent::Match {
                game,
                opponent,
                player_to_move,
            } => {
                let second = if player_to_move == opponent {
                    self.username.clone()
                } else {
                    opponent.clone()
                };
                info!(%game, %opponent, first = %player_to_move, "Match started");
                self.game = Some(GameModel::new(game, [player_to_move, second])?);
                Ok(None)
            }
            ServerEvent::Move { player, index } => {
                let game = self.game.as_mut().ok_or(OnlineError::NoMatch)?;
                let id = game.player_by_username(&player)?.id();
                game.force_move(index, id)?;
                debug!(%player, index, "Move mirrored");
                Ok(None)
            }
            ServerEvent::YourTurn => {
                let game = self.game.as_mut().ok_or(OnlineError::NoMatch)?;
                let local = game.player_by_username(&self.username)?.id();
                game.set_current_player(local);
                match self.player.get_move(game).await? {
                    Some(index) => Ok(Some(ClientCommand::Move(index))),
                    None => {
                        warn!("Asked to move without a legal move, forfeiting");
                        Ok(Some(ClientCommand::Forfeit))
                    }
                }
            }
            ServerEvent::Win => self.finish(Outcome::Win),
            ServerEvent::Loss => self.finish(Outcome::Loss),
            ServerEvent::Draw => self.finish(Outcome::Draw),
            ServerEvent::Error { message } => {
                warn!(%message, "Server error");
                Ok(None)
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Option<ClientCommand>, OnlineError> {
        let game = self.game.as_mut().ok_or(OnlineError::NoMatch)?;
        let local = game.player_by_username(&self.username)?.id();
        let state = match outcome {
            Outcome::Win => {
                self.tally.wins += 1;
                GameState::won_by(local)
            }
            Outcome::Loss => {
                self.tally.losses += 1;
                GameState::won_by(local.opponent())
            }
            Outcome::Draw => {
                self.tally.draws += 1;
                GameState::Draw
            }
        };
        game.set_authoritative_state(state);
        info!(%state, opponent = %game.opponent(local).username(), tally = ?self.tally, "Match finished");
        Ok(None)
    }

    /// Consumes server events until the stream ends, sending any commands
    /// back. Returns the final tally.
    ///
    /// Events keep arriving while the local player is choosing a move. A
    /// match result abandons the pending move; other events wait until the
    /// move is sent.
    pub async fn run(
        mut self,
        mut events: mpsc::Receiver<ServerEvent>,
        commands: mpsc::Sender<ClientCommand>,
    ) -> Result<Tally, OnlineError> {
        let mut backlog = VecDeque::new();
        let mut open = true;
        loop {
            let event = match backlog.pop_front() {
                Some(event) => event,
                None if open => match events.recv().await {
                    Some(event) => event,
                    None => break,
                },
                None => break,
            };

            let command = if event == ServerEvent::YourTurn && !open {
                debug!("Stream closed, skipping turn");
                None
            } else if event == ServerEvent::YourTurn {
                let turn = self.handle(event);
                tokio::pin!(turn);
                loop {
                    tokio::select! {
                        command = &mut turn => break command?,
                        next = events.recv(), if open => match next {
                            Some(next) if next.ends_match() => {
                                debug!(event = ?next, "Match ended during our turn");
                                backlog.push_back(next);
                                break None;
                            }
                            Some(next) => backlog.push_back(next),
                            None => {
                                open = false;
                                break None;
                            }
                        },
                    }
                }
            } else {
                self.handle(event).await?
            };

            if let Some(command) = command {
                commands
                    .send(command)
                    .await
                    .map_err(|_| OnlineError::Closed)?;
            }
        }
        info!(tally = ?self.tally, "Server stream ended");
        Ok(self.tally)
    }
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Win,
    Loss,
    Draw,
}
