//! Derived views handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{RoundId, TeamId, TeamMap};

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based rank. Teams with equal scores still get distinct positions.
    pub position: usize,

    /// The team this row describes.
    pub team: TeamId,

    /// Team display name.
    pub name: String,

    /// Total score across all rounds.
    pub score: u32,
}

/// Everything shown for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: RoundId,

    /// The round's score multiplier.
    pub coefficient: u32,

    /// Placement points per team (0 = did not place).
    pub placement: TeamMap<u32>,

    /// Round score per team.
    pub scores: TeamMap<u32>,
}

impl RoundSummary {
    /// Placement points for a team, or `None` if the team did not place.
    #[must_use]
    pub fn placed(&self, team: TeamId) -> Option<u32> {
        Some(self.placement[team]).filter(|&p| p > 0)
    }
}
