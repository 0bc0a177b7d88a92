//! Arena configuration: which game, who plays, and how the AI searches.

use crate::players::{
    AiPlayer, HeuristicPlayer, HumanPlayer, MoveSubmitter, Player, move_slot,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tabletop_games::{GameKind, ScoreWeights};
use tabletop_search::{SearchAlgorithm, SearchEngine};
use tracing::{debug, info, instrument};

/// Longest accepted username.
pub const MAX_USERNAME_LEN: usize = 16;

/// How a seat chooses its moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerKind {
    /// Tree search.
    Ai,
    /// One-ply baseline.
    Heuristic,
    /// Moves typed by a person.
    Human,
}

/// One seat in the arena.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct PlayerConfig {
    /// Username, also shown in events.
    name: String,

    /// Move source.
    kind: PlayerKind,

    /// Search depth in plies (AI only).
    #[serde(default = "default_depth")]
    depth: u32,

    /// Search strategy (AI only).
    #[serde(default)]
    algorithm: SearchAlgorithm,

    /// Optional per-move time cap in milliseconds (AI only).
    #[serde(default)]
    #[new(default)]
    time_budget_ms: Option<u64>,
}

fn default_depth() -> u32 {
    9
}

/// A complete arena set-up.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Game to play.
    game: GameKind,

    /// Exactly two seats, first moves first.
    players: Vec<PlayerConfig>,

    /// Score magnitudes used by every search.
    #[serde(default)]
    weights: ScoreWeights,
}

/// Players built from a config, plus input handles for human seats.
pub struct Roster {
    /// Seated players in turn order.
    pub players: [Box<dyn Player>; 2],
    /// Input handle for each seat that is human.
    pub submitters: [Option<MoveSubmitter>; 2],
}

impl ArenaConfig {
    /// A human against an alpha-beta AI at the default depth.
    pub fn quick(game: GameKind) -> Self {
        Self {
            game,
            players: vec![
                PlayerConfig::new(
                    "player".to_string(),
                    PlayerKind::Human,
                    default_depth(),
                    SearchAlgorithm::default(),
                ),
                PlayerConfig::new(
                    "computer".to_string(),
                    PlayerKind::Ai,
                    default_depth(),
                    SearchAlgorithm::default(),
                ),
            ],
            weights: ScoreWeights::default(),
        }
    }

    /// Loads and validates a TOML config file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::parse(&content)?;
        info!(game = %config.game, "Config loaded successfully");
        Ok(config)
    }

    /// The config at `path` if one is given, otherwise [`Self::quick`].
    /// A `game` override replaces whatever the source chose.
    pub fn load_or_quick(
        path: Option<&Path>,
        game: Option<GameKind>,
    ) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let config = Self::from_file(path)?;
                Ok(match game {
                    Some(game) => config.with_game(game),
                    None => config,
                })
            }
            None => Ok(Self::quick(game.unwrap_or(GameKind::TicTacToe))),
        }
    }

    /// Parses and validates TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks seat count, usernames and depths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != 2 {
            return Err(ConfigError::new(format!(
                "Expected exactly 2 players, found {}",
                self.players.len()
            )));
        }
        let mut seen = HashSet::new();
        for player in &self.players {
            validate_username(&player.name)?;
            if !seen.insert(player.name.as_str()) {
                return Err(ConfigError::new(format!(
                    "Duplicate username: {}",
                    player.name
                )));
            }
            if player.depth == 0 {
                return Err(ConfigError::new(format!(
                    "Player {} has depth 0; depth must be at least 1",
                    player.name
                )));
            }
        }
        Ok(())
    }

    /// Replaces the game.
    pub fn with_game(mut self, game: GameKind) -> Self {
        self.game = game;
        self
    }

    /// Sets the depth of every AI seat.
    pub fn with_depth(mut self, depth: u32) -> Self {
        for player in self.ai_seats() {
            player.depth = depth;
        }
        self
    }

    /// Sets the algorithm of every AI seat.
    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        for player in self.ai_seats() {
            player.algorithm = algorithm;
        }
        self
    }

    fn ai_seats(&mut self) -> impl Iterator<Item = &mut PlayerConfig> {
        self.players
            .iter_mut()
            .filter(|p| p.kind == PlayerKind::Ai)
    }

    /// Builds the two players, with a move slot for each human seat.
    #[instrument(skip(self), fields(game = %self.game))]
    pub fn build_players(&self) -> Result<Roster, ConfigError> {
        self.validate()?;
        let mut players = Vec::with_capacity(2);
        let mut submitters = [None, None];
        for (seat, config) in self.players.iter().enumerate() {
            let player: Box<dyn Player> = match config.kind {
                PlayerKind::Ai => {
                    let engine = SearchEngine::new(config.algorithm).with_weights(self.weights);
                    let mut ai = AiPlayer::new(config.name.clone(), engine, config.depth);
                    if let Some(ms) = config.time_budget_ms {
                        ai = ai.with_time_budget(Duration::from_millis(ms));
                    }
                    Box::new(ai)
                }
                PlayerKind::Heuristic => Box::new(
                    HeuristicPlayer::new(config.name.clone()).with_weights(self.weights),
                ),
                PlayerKind::Human => {
                    let (submitter, slot) = move_slot();
                    submitters[seat] = Some(submitter);
                    Box::new(HumanPlayer::new(config.name.clone(), slot))
                }
            };
            debug!(name = %config.name, kind = %config.kind, "Seat built");
            players.push(player);
        }
        let players: [Box<dyn Player>; 2] = players
            .try_into()
            .map_err(|_| ConfigError::new("Expected exactly 2 players".to_string()))?;
        Ok(Roster {
            players,
            submitters,
        })
    }
}

/// Accepts a letter followed by up to 15 letters or digits.
pub fn validate_username(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
        && name.len() <= MAX_USERNAME_LEN;
    if valid {
        Ok(())
    } else {
        Err(ConfigError::new(format!(
            "Invalid username {:?}: use a letter then letters or digits, at most {} characters",
            name, MAX_USERNAME_LEN
        )))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
