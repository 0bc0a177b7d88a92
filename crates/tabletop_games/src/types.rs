//! Core domain types shared by every game.

use serde::{Deserialize, Serialize};

/// Identity of one of the two seats in a game.
///
/// The numeric value matches the board's cell encoding: `1` for the
/// player who moves first, `2` for the other one. `0` is reserved for
/// empty cells and never names a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// The player who moves first.
    One,
    /// The player who moves second.
    Two,
}

impl PlayerId {
    /// Both seats in turn order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Returns the opponent.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Returns the cell value used for this player (1 or 2).
    pub fn as_u8(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Returns the zero-based seat index (0 or 1).
    pub fn seat(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Parses a cell value. Only `1` and `2` name players.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Classification of a game position.
///
/// `Playing` is the only non-terminal state; once a game leaves it there
/// are no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Moves remain to be played.
    #[strum(serialize = "playing")]
    Playing,
    /// Player one won.
    #[strum(serialize = "player one won")]
    PlayerOneWon,
    /// Player two won.
    #[strum(serialize = "player two won")]
    PlayerTwoWon,
    /// Nobody won.
    #[strum(serialize = "draw")]
    Draw,
}

impl GameState {
    /// The state in which `player` has won.
    pub fn won_by(player: PlayerId) -> Self {
        match player {
            PlayerId::One => GameState::PlayerOneWon,
            PlayerId::Two => GameState::PlayerTwoWon,
        }
    }

    /// Returns true for every state except `Playing`.
    pub fn is_terminal(self) -> bool {
        self != GameState::Playing
    }

    /// Returns the winner, if the game ended with one.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameState::PlayerOneWon => Some(PlayerId::One),
            GameState::PlayerTwoWon => Some(PlayerId::Two),
            GameState::Playing | GameState::Draw => None,
        }
    }
}
