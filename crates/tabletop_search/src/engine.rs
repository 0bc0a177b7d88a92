//! Public search entry points.

use super::algorithm::SearchAlgorithm;
use super::error::SearchError;
use super::limits::SearchLimits;
use super::stats::SearchStats;
use super::tree::Walker;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tabletop_games::{PlayerId, Position, ScoreWeights};
use tracing::{debug, instrument};

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    best: Option<(usize, f64)>,
    depth: u32,
    stats: SearchStats,
}

impl SearchOutcome {
    /// The chosen move, or `None` when the requester had no legal move.
    pub fn best_move(&self) -> Option<usize> {
        self.best.map(|(index, _)| index)
    }

    /// Value of the chosen move from the requester's point of view.
    pub fn value(&self) -> Option<f64> {
        self.best.map(|(_, value)| value)
    }

    /// Depth of the deepest completed search.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Counters for the search (summed over iterations when deepening).
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// A configured search strategy.
///
/// The engine only reads the position it is given; every explored state is
/// a private copy dropped before the call returns.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchEngine {
    algorithm: SearchAlgorithm,
    #[serde(default)]
    weights: ScoreWeights,
}

impl SearchEngine {
    /// Engine running `algorithm` with the default score weights.
    pub fn new(algorithm: SearchAlgorithm) -> Self {
        Self {
            algorithm,
            weights: ScoreWeights::default(),
        }
    }

    /// Replaces the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// The selected algorithm.
    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    /// The score weights.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Best move for `requester` looking exactly `max_depth` plies ahead.
    ///
    /// Returns `Ok(None)` when `requester` has no legal move or the game is
    /// already decided. Ties go to the first move in board order.
    pub fn best_move(
        &self,
        root: &Position,
        requester: PlayerId,
        max_depth: u32,
    ) -> Result<Option<usize>, SearchError> {
        Ok(self
            .search(root, requester, &SearchLimits::depth(max_depth))?
            .best_move())
    }

    /// Runs one search to `limits.max_depth()` plies.
    #[instrument(
        skip(self, root, limits),
        fields(
            algorithm = %self.algorithm,
            game = %root.game(),
            %requester,
            max_depth = *limits.max_depth()
        )
    )]
    pub fn search(
        &self,
        root: &Position,
        requester: PlayerId,
        limits: &SearchLimits,
    ) -> Result<SearchOutcome, SearchError> {
        let max_depth = *limits.max_depth();
        if max_depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        limits.check()?;
        let started = Instant::now();

        let mut walker = Walker::new(requester, &self.weights, limits);
        let mut best: Option<(usize, f64)> = None;

        if !root.state()?.is_terminal() {
            let mut root = *root;
            root.set_to_move(requester);
            let mut alpha = f64::NEG_INFINITY;
            for &index in &root.valid_moves(requester) {
                let child = Walker::child(&root, index)?;
                let value = match self.algorithm {
                    SearchAlgorithm::Minimax => walker.minimax(&child, 1)?,
                    SearchAlgorithm::AlphaBeta => {
                        walker.alpha_beta(&child, 1, alpha, f64::INFINITY)?
                    }
                };
                if best.is_none_or(|(_, current)| value > current) {
                    best = Some((index, value));
                    alpha = alpha.max(value);
                }
            }
        }

        let mut stats = walker.into_stats();
        stats.set_elapsed(started.elapsed());
        debug!(
            best_move = ?best.map(|(index, _)| index),
            value = ?best.map(|(_, value)| value),
            nodes = stats.nodes(),
            leaves = stats.leaves(),
            cutoffs = stats.cutoffs(),
            elapsed_ms = stats.elapsed().as_millis() as u64,
            "Search complete"
        );

        Ok(SearchOutcome {
            best,
            depth: max_depth,
            stats,
        })
    }

    /// Iterative deepening from one ply up to `limits.max_depth()`.
    ///
    /// Keeps the result of the deepest iteration that finished. If the
    /// deadline or cancellation hits before depth 1 completes, the abort is
    /// returned as an error.
    #[instrument(
        skip(self, root, limits),
        fields(algorithm = %self.algorithm, %requester, max_depth = *limits.max_depth())
    )]
    pub fn search_iterative(
        &self,
        root: &Position,
        requester: PlayerId,
        limits: &SearchLimits,
    ) -> Result<SearchOutcome, SearchError> {
        let max_depth = *limits.max_depth();
        if max_depth == 0 {
            return Err(SearchError::ZeroDepth);
        }

        let mut total = SearchStats::default();
        let mut completed: Option<SearchOutcome> = None;
        for depth in 1..=max_depth {
            let iteration = limits.clone().with_max_depth(depth);
            match self.search(root, requester, &iteration) {
                Ok(outcome) => {
                    total.absorb(outcome.stats());
                    let exhausted = outcome.best.is_none();
                    completed = Some(outcome);
                    if exhausted {
                        break;
                    }
                }
                Err(SearchError::Aborted(reason)) if completed.is_some() => {
                    debug!(depth, %reason, "Deepening stopped");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        match completed {
            Some(outcome) => Ok(SearchOutcome {
                stats: total,
                ..outcome
            }),
            // Unreachable for max_depth >= 1: depth 1 either completes or errors.
            None => Err(SearchError::ZeroDepth),
        }
    }
}
