//! Search-backed AI player.

use super::Player;
use crate::error::PlayerError;
use std::time::Duration;
use tabletop_games::GameModel;
use tabletop_search::{SearchEngine, SearchLimits};
use tracing::{debug, info, instrument};

/// AI that picks moves with minimax or alpha-beta search.
///
/// With a time budget the player deepens iteratively up to `depth` and
/// keeps the deepest finished answer; without one it searches `depth`
/// plies exactly once.
#[derive(Debug, Clone, derive_new::new)]
pub struct AiPlayer {
    #[new(into)]
    name: String,
    engine: SearchEngine,
    depth: u32,
    #[new(default)]
    time_budget: Option<Duration>,
}

impl AiPlayer {
    /// Caps each move at `budget` of wall-clock time.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Configured search depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The engine used for each move.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }
}

#[async_trait::async_trait]
impl Player for AiPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, depth = self.depth, algorithm = %self.engine.algorithm()))]
    async fn get_move(&mut self, game: &GameModel) -> Result<Option<usize>, PlayerError> {
        let root = game.position();
        let requester = game.current_player();
        let engine = self.engine;
        let limits = match self.time_budget {
            Some(budget) => SearchLimits::depth(self.depth).with_budget(budget),
            None => SearchLimits::depth(self.depth),
        };
        let deepen = self.time_budget.is_some();

        debug!("AI searching");
        let outcome = tokio::task::spawn_blocking(move || {
            if deepen {
                engine.search_iterative(&root, requester, &limits)
            } else {
                engine.search(&root, requester, &limits)
            }
        })
        .await
        .map_err(|e| PlayerError::Task(e.to_string()))??;

        info!(
            chosen = ?outcome.best_move(),
            reached_depth = outcome.depth(),
            nodes = outcome.stats().nodes(),
            "AI chose move"
        );
        Ok(outcome.best_move())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
