//! # bank-heist
//!
//! Scorekeeping for the "Bank Heist of Hypotheses" team quiz.
//!
//! Three teams play five rounds. In each round a team may answer correctly,
//! answer under blitz, and record a completion time. Finishers are ranked by
//! time for placement points, which are scaled by the round coefficient into
//! round scores and summed into a leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Derived, never stored**: scores and placements are recomputed from
//!    `GameState` on every query, so they cannot go stale.
//!
//! 2. **One owner**: `GameStateStore` is the only writer of the state and of
//!    its durable copy. Every mutation writes through.
//!
//! 3. **Typed edits**: a `RoundUpdate` carries a payload of the field's own
//!    type; there is no string field selector.
//!
//! ## Modules
//!
//! - `core`: Team and round IDs, round records, game state, edits, config
//! - `scoring`: `ScoreEngine` and the leaderboard
//! - `store`: Storage backends and `GameStateStore`
//! - `error`: Error types

pub mod core;
pub mod error;
pub mod scoring;
pub mod store;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameState, RoundId, RoundRecord, RoundUpdate, ScoringConfig, TeamId, TeamMap,
    ROUND_COUNT, TEAM_COUNT,
};

pub use crate::error::{CorruptState, IndexError, StoreError};

pub use crate::scoring::{RoundSummary, ScoreEngine, Standing};

pub use crate::store::{FileStorage, GameStateStore, LoadOutcome, MemoryStorage, Storage};
