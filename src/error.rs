//! Error types.
//!
//! - `StoreError`: durable storage failed (I/O or encoding). Propagated.
//! - `CorruptState`: a persisted snapshot could not be trusted. Never
//!   propagated out of `load`; reported through `LoadOutcome::Recovered`.
//! - `IndexError`: a round or team index from outside the crate was out of
//!   range. Returned by the checked `TryFrom<usize>` conversions.

use std::path::PathBuf;

use thiserror::Error;

/// Failure reading or writing the durable slot.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O failed at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode game state")]
    Encode {
        #[from]
        source: serde_json::Error,
    },
}

/// Reason a persisted snapshot was discarded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorruptState {
    #[error("snapshot is not valid game state: {0}")]
    Malformed(String),
    #[error("snapshot has {found} rounds, expected {expected}")]
    RoundCount { found: usize, expected: usize },
    #[error("round {round} team {team} has invalid time {value}")]
    InvalidTime { round: usize, team: usize, value: f64 },
}

/// Round or team index outside the fixed game shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    #[error("round index {0} is out of range")]
    Round(usize),
    #[error("team index {0} is out of range")]
    Team(usize),
}
