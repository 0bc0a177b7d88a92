//! The live game: position, seats and any authoritative override.

use super::board::Board;
use super::error::{GameError, MoveRejection};
use super::position::Position;
use super::rules::{GameKind, MoveList, Rules};
use super::types::{GameState, PlayerId};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// A registered participant: stable id plus username.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{username} ({id})")]
pub struct Seat {
    id: PlayerId,
    username: String,
}

impl Seat {
    /// The seat's id (1 or 2).
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The seat's username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// A game in progress between two seats.
///
/// Cloning copies the position by value and shares the seat list, so a
/// clone is cheap and mutating it never affects the original.
#[derive(Debug, Clone, PartialEq)]
pub struct GameModel {
    position: Position,
    seats: Arc<[Seat; 2]>,
    authoritative_state: Option<GameState>,
}

impl GameModel {
    /// Sets up `game` for two players. The first username gets id 1 and
    /// moves first.
    #[instrument(skip(usernames), fields(game = %game))]
    pub fn new(game: GameKind, usernames: [String; 2]) -> Result<Self, GameError> {
        let [first, second] = usernames;
        let seats = [
            Seat {
                id: PlayerId::One,
                username: first,
            },
            Seat {
                id: PlayerId::Two,
                username: second,
            },
        ];
        info!(player_one = %seats[0], player_two = %seats[1], "Initializing game");
        Ok(Self {
            position: Position::new(game)?,
            seats: Arc::new(seats),
            authoritative_state: None,
        })
    }

    /// Replaces the position, keeping the seats. Useful for set-ups and
    /// tests that start mid-game.
    pub fn with_position(mut self, position: Position) -> Result<Self, GameError> {
        if position.game() != self.game() {
            return Err(GameError::CorruptState(format!(
                "position is {} but the model plays {}",
                position.game(),
                self.game()
            )));
        }
        self.position = position;
        Ok(self)
    }

    /// The game being played.
    pub fn game(&self) -> GameKind {
        self.position.game()
    }

    /// Human-readable game name.
    pub fn name(&self) -> &'static str {
        self.game().name()
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    /// Cell snapshot for renderers (0 empty, 1 or 2 owned).
    pub fn cells(&self) -> Vec<u8> {
        self.board().cells()
    }

    /// Copy of the current position, for search.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Id of the player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.position.to_move()
    }

    /// Seat of the player whose turn it is.
    pub fn current_seat(&self) -> &Seat {
        self.player(self.current_player())
    }

    /// Hands the turn to `player`.
    #[instrument(skip(self))]
    pub fn set_current_player(&mut self, player: PlayerId) {
        self.position.set_to_move(player);
    }

    /// Seat registered under `id`.
    pub fn player(&self, id: PlayerId) -> &Seat {
        &self.seats[id.seat()]
    }

    /// Both seats in id order.
    pub fn players(&self) -> &[Seat; 2] {
        &self.seats
    }

    /// Seat registered under `username`.
    pub fn player_by_username(&self, username: &str) -> Result<&Seat, GameError> {
        self.seats
            .iter()
            .find(|seat| seat.username == username)
            .ok_or_else(|| GameError::UnknownPlayer(username.to_string()))
    }

    /// Seat opposing `id`.
    pub fn opponent(&self, id: PlayerId) -> &Seat {
        self.player(id.opponent())
    }

    /// Legal moves for `player`.
    pub fn valid_moves(&self, player: PlayerId) -> MoveList {
        self.position.valid_moves(player)
    }

    /// Returns true if `player` has any legal move.
    pub fn has_valid_moves(&self, player: PlayerId) -> bool {
        self.position.has_valid_moves(player)
    }

    /// Returns true if the current player may play `index`.
    pub fn is_valid_move(&self, index: usize) -> bool {
        self.position.is_valid_move(index)
    }

    /// Validates and applies a move for `player` without advancing the turn.
    #[instrument(skip(self), fields(game = %self.game()))]
    pub fn apply_move(&mut self, index: usize, player: PlayerId) -> Result<(), GameError> {
        if self.state()?.is_terminal() {
            return Err(GameError::invalid_move(index, MoveRejection::GameOver));
        }
        self.position.apply_move(index, player).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })
    }

    /// Plays `index` for the current player and advances the turn.
    #[instrument(skip(self), fields(game = %self.game(), player = %self.current_player()))]
    pub fn play(&mut self, index: usize) -> Result<(), GameError> {
        let player = self.current_player();
        self.apply_move(index, player)?;
        self.position.pass();
        debug!(next = %self.current_player(), "Move applied");
        Ok(())
    }

    /// Skips the current player's turn.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn pass(&mut self) {
        self.position.pass();
    }

    /// Applies a move reported by a remote authority.
    ///
    /// Legality is not re-checked; the remote side is the source of truth.
    /// The turn passes to `player`'s opponent.
    #[instrument(skip(self), fields(game = %self.game()))]
    pub fn force_move(&mut self, index: usize, player: PlayerId) -> Result<(), GameError> {
        let game = self.game();
        game.place_unchecked(self.position.board_mut(), index, player)?;
        self.position.set_to_move(player.opponent());
        Ok(())
    }

    /// Pins the game state, overriding whatever the board says.
    #[instrument(skip(self))]
    pub fn set_authoritative_state(&mut self, state: GameState) {
        info!(%state, "Authoritative state received");
        self.authoritative_state = Some(state);
    }

    /// The pinned state, if any.
    pub fn authoritative_state(&self) -> Option<GameState> {
        self.authoritative_state
    }

    /// Current state: the authoritative override if present, otherwise
    /// derived from the board.
    pub fn state(&self) -> Result<GameState, GameError> {
        match self.authoritative_state {
            Some(state) => Ok(state),
            None => self.position.state(),
        }
    }

    /// Heuristic value for `player`. See [`Position::score`].
    pub fn score(&self, player: PlayerId, depth: u32, max_depth: u32) -> Result<f64, GameError> {
        self.position.score(player, depth, max_depth)
    }
}

impl std::fmt::Display for GameModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}: {} vs {}", self.name(), self.seats[0], self.seats[1])?;
        write!(f, "{}", self.board())
    }
}
