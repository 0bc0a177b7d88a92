//! Search latency benchmark.
//!
//! Times repeated move requests from the opening position at each depth,
//! alongside the one-ply heuristic as a baseline.

use derive_getters::Getters;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use tabletop_games::{GameKind, PlayerId, Position, ScoreWeights};
use tabletop_search::{SearchAlgorithm, SearchEngine, SearchError, SearchLimits, heuristic_move};
use tracing::{debug, info, instrument};

/// Depths timed when none are given.
pub const DEFAULT_DEPTHS: [u32; 3] = [4, 8, 16];

/// Runs per depth when not given.
pub const DEFAULT_RUNS: u32 = 50;

/// What to benchmark.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct BenchConfig {
    /// Game whose opening position is searched.
    game: GameKind,
    /// Strategy under test.
    algorithm: SearchAlgorithm,
    /// Depths timed, in order.
    depths: Vec<u32>,
    /// Searches per depth.
    runs: u32,
    /// Score magnitudes.
    weights: ScoreWeights,
    /// Optional cap per search.
    time_budget: Option<Duration>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            game: GameKind::Othello,
            algorithm: SearchAlgorithm::AlphaBeta,
            depths: DEFAULT_DEPTHS.to_vec(),
            runs: DEFAULT_RUNS,
            weights: ScoreWeights::default(),
            time_budget: None,
        }
    }
}

impl BenchConfig {
    /// Replaces the game.
    pub fn with_game(mut self, game: GameKind) -> Self {
        self.game = game;
        self
    }

    /// Replaces the algorithm.
    pub fn with_algorithm(mut self, algorithm: SearchAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Replaces the depth list.
    pub fn with_depths(mut self, depths: Vec<u32>) -> Self {
        self.depths = depths;
        self
    }

    /// Replaces the number of runs per depth (at least one).
    pub fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs.max(1);
        self
    }

    /// Caps each search; deepening then stops at the last finished depth.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

/// Averages for one depth.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct DepthTiming {
    /// Requested depth.
    depth: u32,
    /// Deepest depth actually finished (below `depth` only under a budget).
    reached_depth: u32,
    /// Number of timed searches.
    runs: u32,
    /// Mean wall-clock milliseconds per search.
    average_ms: f64,
    /// Positions visited per search.
    nodes: u64,
}

/// Full benchmark result.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct BenchReport {
    /// Game benchmarked.
    game: GameKind,
    /// Strategy benchmarked.
    algorithm: SearchAlgorithm,
    /// Mean milliseconds for one heuristic move.
    baseline_ms: f64,
    /// One entry per requested depth.
    timings: Vec<DepthTiming>,
}

/// Times `config.runs` move requests at each depth.
#[instrument(skip(config), fields(game = %config.game, algorithm = %config.algorithm))]
pub fn run_benchmark(config: &BenchConfig) -> Result<BenchReport, SearchError> {
    info!(depths = ?config.depths, runs = config.runs, "Starting benchmark");
    let root = Position::new(config.game)?;
    let engine = SearchEngine::new(config.algorithm).with_weights(config.weights);
    let runs = config.runs.max(1);

    let started = Instant::now();
    for _ in 0..runs {
        heuristic_move(&root, PlayerId::One, &config.weights)?;
    }
    let baseline_ms = average_ms(started.elapsed(), runs);

    let mut timings = Vec::with_capacity(config.depths.len());
    for &depth in &config.depths {
        let mut total = Duration::ZERO;
        let mut nodes = 0;
        let mut reached_depth = depth;
        for run in 0..runs {
            let limits = SearchLimits::depth(depth);
            let outcome = match config.time_budget {
                Some(budget) => {
                    engine.search_iterative(&root, PlayerId::One, &limits.with_budget(budget))?
                }
                None => engine.search(&root, PlayerId::One, &limits)?,
            };
            total += *outcome.stats().elapsed();
            nodes = *outcome.stats().nodes();
            reached_depth = outcome.depth();
            debug!(depth, run, nodes, "Run complete");
        }
        let timing = DepthTiming {
            depth,
            reached_depth,
            runs,
            average_ms: average_ms(total, runs),
            nodes,
        };
        info!(depth, average_ms = timing.average_ms, nodes, "Depth complete");
        timings.push(timing);
    }

    Ok(BenchReport {
        game: config.game,
        algorithm: config.algorithm,
        baseline_ms,
        timings,
    })
}

fn average_ms(total: Duration, runs: u32) -> f64 {
    total.as_secs_f64() * 1000.0 / f64::from(runs)
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} with {}", self.game, self.algorithm)?;
        writeln!(f, "Heuristic baseline took {:.3} milliseconds on average", self.baseline_ms)?;
        for timing in &self.timings {
            write!(
                f,
                "Running with depth {} took {:.3} milliseconds on average ({} nodes)",
                timing.depth, timing.average_ms, timing.nodes
            )?;
            if timing.reached_depth < timing.depth {
                write!(f, " [budget stopped at depth {}]", timing.reached_depth)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
