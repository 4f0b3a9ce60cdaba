//! Game configuration.
//!
//! The game shape is fixed: `TEAM_COUNT` teams play `ROUND_COUNT` rounds.
//! What can be configured is the scoring tables layered on top of that
//! shape, via `ScoringConfig`:
//! - Team display names
//! - Per-round coefficients
//! - Placement points by finishing rank
//! - Blitz multiplier
//! - Durable storage key

use serde::{Deserialize, Serialize};

use super::round::RoundId;
use super::team::{TeamId, TeamMap};

/// Number of competing teams.
pub const TEAM_COUNT: usize = 3;

/// Number of rounds in a game.
pub const ROUND_COUNT: usize = 5;

/// Default team display names, in team order.
pub const TEAM_NAMES: [&str; TEAM_COUNT] = ["Team Alpha", "Team Bravo", "Team Charlie"];

/// Default score multiplier per round. Later rounds are worth more.
pub const ROUND_COEFFICIENTS: [u32; ROUND_COUNT] = [1, 1, 2, 2, 3];

/// Default points for finishing 1st, 2nd and 3rd by time.
pub const PLACEMENT_POINTS: [u32; TEAM_COUNT] = [100, 75, 50];

/// Default durable storage key.
pub const STORAGE_KEY: &str = "bankHeist";

/// Scoring tables and storage settings.
///
/// `Default` reproduces the live game's rules. The blitz multiplier defaults
/// to 1, which makes the blitz flag score-neutral.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Display name per team.
    pub team_names: TeamMap<String>,

    /// Score multiplier per round.
    pub round_coefficients: [u32; ROUND_COUNT],

    /// Points by finishing rank (index 0 = fastest).
    pub placement_points: [u32; TEAM_COUNT],

    /// Multiplier applied to a round score when the team's blitz flag is set.
    pub blitz_multiplier: u32,

    /// Key of the durable slot holding the game state.
    pub storage_key: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            team_names: TeamMap::new(|t| TEAM_NAMES[t.index()].to_string()),
            round_coefficients: ROUND_COEFFICIENTS,
            placement_points: PLACEMENT_POINTS,
            blitz_multiplier: 1,
            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl ScoringConfig {
    /// Set the team display names.
    #[must_use]
    pub fn with_team_names(mut self, names: [&str; TEAM_COUNT]) -> Self {
        self.team_names = TeamMap::new(|t| names[t.index()].to_string());
        self
    }

    /// Set the blitz multiplier.
    #[must_use]
    pub fn with_blitz_multiplier(mut self, multiplier: u32) -> Self {
        self.blitz_multiplier = multiplier;
        self
    }

    /// Set the durable storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Get a team's display name.
    #[must_use]
    pub fn team_name(&self, team: TeamId) -> &str {
        &self.team_names[team]
    }

    /// Get a round's coefficient.
    #[must_use]
    pub fn coefficient(&self, round: RoundId) -> u32 {
        self.round_coefficients[round.index()]
    }

    /// Get the points for a 0-based finishing rank. Ranks past the table get 0.
    #[must_use]
    pub fn points_for_rank(&self, rank: usize) -> u32 {
        self.placement_points.get(rank).copied().unwrap_or(0)
    }

    /// Human-readable description of the scoring rules.
    ///
    /// Adjacent rounds with the same coefficient are grouped, e.g.
    /// "Rounds 1-2: x1".
    #[must_use]
    pub fn rules_summary(&self) -> String {
        let mut lines = vec![
            "Score = correct answer x round coefficient x placement points x blitz".to_string(),
            String::new(),
            "Round coefficients:".to_string(),
        ];

        let mut start = 0;
        for end in 1..=ROUND_COUNT {
            if end < ROUND_COUNT && self.round_coefficients[end] == self.round_coefficients[start] {
                continue;
            }
            let label = if end - start == 1 {
                format!("Round {}", start + 1)
            } else {
                format!("Rounds {}-{}", start + 1, end)
            };
            lines.push(format!("  {}: x{}", label, self.round_coefficients[start]));
            start = end;
        }

        lines.push(String::new());
        lines.push("Placement points:".to_string());
        for (rank, points) in self.placement_points.iter().enumerate() {
            lines.push(format!("  Place {}: {} points", rank + 1, points));
        }

        if self.blitz_multiplier != 1 {
            lines.push(String::new());
            lines.push(format!("Blitz answers: x{}", self.blitz_multiplier));
        }

        lines.join("\n")
    }
}
