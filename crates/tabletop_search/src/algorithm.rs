//! Strategy selector.

use serde::{Deserialize, Serialize};

/// Which tree search an AI player runs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SearchAlgorithm {
    /// Full-width minimax.
    Minimax,
    /// Minimax with an alpha-beta window.
    #[default]
    #[strum(to_string = "alpha-beta", serialize = "alphabeta")]
    AlphaBeta,
}
