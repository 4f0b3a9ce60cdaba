//! Core game types: teams, rounds, game state, edits, configuration.
//!
//! This module holds the raw inputs of a game. Everything derived from them
//! (placements, scores, rankings) lives in `scoring`.

pub mod team;
pub mod round;
pub mod config;
pub mod update;
pub mod state;

pub use team::{TeamId, TeamMap};
pub use round::{RoundId, RoundRecord};
pub use config::{
    ScoringConfig, PLACEMENT_POINTS, ROUND_COEFFICIENTS, ROUND_COUNT, STORAGE_KEY, TEAM_COUNT,
    TEAM_NAMES,
};
pub use update::{normalize_time, parse_time, RoundUpdate};
pub use state::GameState;
