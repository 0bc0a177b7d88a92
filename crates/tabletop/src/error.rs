//! Error types for players, the driver and the online helper.

use tabletop_games::GameError;
use tabletop_search::SearchError;

/// Failure while a player produces a move.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum PlayerError {
    /// The search behind an AI player failed.
    #[display("Search failed: {}", _0)]
    Search(SearchError),

    /// The game could not be read.
    #[display("Game error: {}", _0)]
    Game(GameError),

    /// The human input source hung up.
    #[display("Move input closed")]
    InputClosed,

    /// Moves for this seat are pushed by the network, not pulled.
    #[display("Player {} is remote; its moves arrive from the server", _0)]
    RemoteSeat(String),

    /// A background search task panicked or was cancelled.
    #[display("Search task failed: {}", _0)]
    Task(String),
}

impl std::error::Error for PlayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlayerError::Search(e) => Some(e),
            PlayerError::Game(e) => Some(e),
            PlayerError::InputClosed | PlayerError::RemoteSeat(_) | PlayerError::Task(_) => None,
        }
    }
}

impl From<SearchError> for PlayerError {
    fn from(err: SearchError) -> Self {
        PlayerError::Search(err)
    }
}

impl From<GameError> for PlayerError {
    fn from(err: GameError) -> Self {
        PlayerError::Game(err)
    }
}

/// Failure while the offline driver runs a game.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum DriverError {
    /// The live game rejected a move or could not be classified.
    #[display("Game error: {}", _0)]
    Game(GameError),

    /// A player failed to produce a move.
    #[display("Player error: {}", _0)]
    Player(PlayerError),

    /// The offline driver cannot seat a remote player.
    #[display("Player {} is remote and cannot be driven offline", _0)]
    RemoteSeat(String),

    /// A player declined to move while holding legal moves.
    #[display("Player {} returned no move but has legal moves", _0)]
    NoMove(String),
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Game(e) => Some(e),
            DriverError::Player(e) => Some(e),
            DriverError::RemoteSeat(_) | DriverError::NoMove(_) => None,
        }
    }
}

impl From<GameError> for DriverError {
    fn from(err: GameError) -> Self {
        DriverError::Game(err)
    }
}

impl From<PlayerError> for DriverError {
    fn from(err: PlayerError) -> Self {
        DriverError::Player(err)
    }
}

/// Failure while following a server-driven match.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum OnlineError {
    /// A server event could not be applied to the game.
    #[display("Game error: {}", _0)]
    Game(GameError),

    /// The local player failed to produce a move.
    #[display("Player error: {}", _0)]
    Player(PlayerError),

    /// A game event arrived before any match started.
    #[display("No match in progress")]
    NoMatch,

    /// The command channel to the server is gone.
    #[display("Server connection closed")]
    Closed,
}

impl std::error::Error for OnlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OnlineError::Game(e) => Some(e),
            OnlineError::Player(e) => Some(e),
            OnlineError::NoMatch | OnlineError::Closed => None,
        }
    }
}

impl From<GameError> for OnlineError {
    fn from(err: GameError) -> Self {
        OnlineError::Game(err)
    }
}

impl From<PlayerError> for OnlineError {
    fn from(err: PlayerError) -> Self {
        OnlineError::Player(err)
    }
}
