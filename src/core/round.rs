//! Rounds and per-round team records.

use serde::{Deserialize, Serialize};

use super::config::ROUND_COUNT;
use super::team::{TeamId, TeamMap};
use crate::error::IndexError;

/// Round identifier.
///
/// Round indices are 0-based: the first round is `RoundId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct RoundId(u8);

impl RoundId {
    /// Create a round ID.
    ///
    /// Panics if `index >= ROUND_COUNT`. Use `RoundId::try_from` for indices
    /// that come from user input.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        assert!(index < ROUND_COUNT, "round index out of range");
        Self(index as u8)
    }

    /// Get the raw round index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every round in play order.
    pub fn all() -> impl Iterator<Item = RoundId> {
        (0..ROUND_COUNT as u8).map(RoundId)
    }
}

impl TryFrom<usize> for RoundId {
    type Error = IndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < ROUND_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(IndexError::Round(index))
        }
    }
}

impl From<RoundId> for usize {
    fn from(id: RoundId) -> Self {
        id.index()
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round {}", self.0 + 1)
    }
}

/// Raw inputs for one round: one entry per team in each field.
///
/// A time of `0.0` means the team did not finish, or no time was recorded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Team answered correctly.
    pub correct: TeamMap<bool>,

    /// Team answered under the blitz bonus.
    pub blitz: TeamMap<bool>,

    /// Completion time in seconds.
    pub times: TeamMap<f64>,
}

impl RoundRecord {
    /// Did the team answer correctly?
    #[must_use]
    pub fn is_correct(&self, team: TeamId) -> bool {
        self.correct[team]
    }

    /// Did the team answer under blitz?
    #[must_use]
    pub fn is_blitz(&self, team: TeamId) -> bool {
        self.blitz[team]
    }

    /// The team's completion time in seconds.
    #[must_use]
    pub fn time(&self, team: TeamId) -> f64 {
        self.times[team]
    }

    /// Did the team record a finishing time?
    #[must_use]
    pub fn finished(&self, team: TeamId) -> bool {
        self.times[team] > 0.0
    }
}
