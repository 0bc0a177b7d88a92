//! Baseline player with no look-ahead.

use super::Player;
use crate::error::PlayerError;
use tabletop_games::{GameModel, ScoreWeights};
use tabletop_search::heuristic_move;
use tracing::debug;

/// Picks the best-scoring immediate move. Fast and weak; used as a
/// benchmark opponent.
#[derive(Debug, Clone)]
pub struct HeuristicPlayer {
    name: String,
    weights: ScoreWeights,
}

impl HeuristicPlayer {
    /// Creates a heuristic player with the default weights.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weights: ScoreWeights::default(),
        }
    }

    /// Replaces the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }
}

#[async_trait::async_trait]
impl Player for HeuristicPlayer {
    async fn get_move(&mut self, game: &GameModel) -> Result<Option<usize>, PlayerError> {
        let chosen = heuristic_move(&game.position(), game.current_player(), &self.weights)?;
        debug!(player = %self.name, ?chosen, "Heuristic chose move");
        Ok(chosen)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
