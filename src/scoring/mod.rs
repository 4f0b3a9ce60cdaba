//! Scoring: placements, round scores, totals and the leaderboard.
//!
//! Nothing here is stored. Every value is recomputed from a `GameState`
//! snapshot, so derived scores can never go stale.

pub mod engine;
pub mod standing;

pub use engine::ScoreEngine;
pub use standing::{RoundSummary, Standing};
