//! Recursive minimax and alpha-beta over `Position` copies.
//!
//! Each child is a stack copy of its parent with one move applied, so the
//! walk never allocates per node beyond the move list.

use super::error::SearchError;
use super::limits::SearchLimits;
use super::stats::SearchStats;
use tabletop_games::{PlayerId, Position, ScoreWeights};

/// Limits are polled once per this many nodes.
const CHECK_INTERVAL: u64 = 1024;

/// State shared by every node of one search.
pub(crate) struct Walker<'a> {
    requester: PlayerId,
    max_depth: u32,
    weights: &'a ScoreWeights,
    limits: &'a SearchLimits,
    stats: SearchStats,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(
        requester: PlayerId,
        weights: &'a ScoreWeights,
        limits: &'a SearchLimits,
    ) -> Self {
        Self {
            requester,
            max_depth: *limits.max_depth(),
            weights,
            limits,
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn into_stats(self) -> SearchStats {
        self.stats
    }

    /// Copy of `position` after the side to move plays `index`.
    pub(crate) fn child(position: &Position, index: usize) -> Result<Position, SearchError> {
        let mut child = *position;
        child.apply_move(index, position.to_move())?;
        child.pass();
        Ok(child)
    }

    fn enter(&mut self) -> Result<(), SearchError> {
        if self.stats.record_node() % CHECK_INTERVAL == 0 {
            self.limits.check()?;
        }
        Ok(())
    }

    /// Score of `position` if it is terminal or sits on the horizon.
    fn leaf_value(&mut self, position: &Position, ply: u32) -> Result<Option<f64>, SearchError> {
        if ply < self.max_depth && !position.state()?.is_terminal() {
            return Ok(None);
        }
        self.stats.record_leaf();
        let remaining = self.max_depth.saturating_sub(ply);
        let value = position.score_with(self.weights, self.requester, remaining, self.max_depth)?;
        Ok(Some(value))
    }

    /// Minimax value of `position`, reached `ply` plies below the root.
    pub(crate) fn minimax(&mut self, position: &Position, ply: u32) -> Result<f64, SearchError> {
        self.enter()?;
        if let Some(value) = self.leaf_value(position, ply)? {
            return Ok(value);
        }

        let mover = position.to_move();
        let moves = position.valid_moves(mover);
        if moves.is_empty() {
            let mut child = *position;
            child.pass();
            return self.minimax(&child, ply + 1);
        }

        let maximizing = mover == self.requester;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for &index in &moves {
            let child = Self::child(position, index)?;
            let value = self.minimax(&child, ply + 1)?;
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        Ok(best)
    }

    /// Fail-soft alpha-beta value of `position` within `(alpha, beta)`.
    pub(crate) fn alpha_beta(
        &mut self,
        position: &Position,
        ply: u32,
        mut alpha: f64,
        mut beta: f64,
    ) -> Result<f64, SearchError> {
        self.enter()?;
        if let Some(value) = self.leaf_value(position, ply)? {
            return Ok(value);
        }

        let mover = position.to_move();
        let moves = position.valid_moves(mover);
        if moves.is_empty() {
            let mut child = *position;
            child.pass();
            return self.alpha_beta(&child, ply + 1, alpha, beta);
        }

        if mover == self.requester {
            let mut value = f64::NEG_INFINITY;
            for &index in &moves {
                let child = Self::child(position, index)?;
                value = value.max(self.alpha_beta(&child, ply + 1, alpha, beta)?);
                alpha = alpha.max(value);
                if alpha >= beta {
                    self.stats.record_cutoff();
                    break;
                }
            }
            Ok(value)
        } else {
            let mut value = f64::INFINITY;
            for &index in &moves {
                let child = Self::child(position, index)?;
                value = value.min(self.alpha_beta(&child, ply + 1, alpha, beta)?);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.record_cutoff();
                    break;
                }
            }
            Ok(value)
        }
    }
}
