//! Score derivation.
//!
//! `ScoreEngine` turns a `GameState` into placements, round scores, totals
//! and a leaderboard. It holds only the scoring tables; every call reads the
//! state it is given and returns a fresh value.
//!
//! ## Round score
//!
//! `correct (0|1) x round coefficient x placement points x blitz multiplier`
//!
//! With the default tables the blitz multiplier is 1 whether or not the
//! blitz flag is set.
//!
//! ## Ties
//!
//! - Equal completion times: the team with the lower index takes the better
//!   placement.
//! - Equal total scores: the team with the lower index is listed first.
//!
//! Both follow from stable sorting over team order.
//!
//! Scores saturate at `u32::MAX` rather than wrapping when a configured
//! table or multiplier is very large.

use smallvec::SmallVec;

use super::standing::{RoundSummary, Standing};
use crate::core::{GameState, RoundId, RoundRecord, ScoringConfig, TeamId, TeamMap, TEAM_COUNT};

/// Derives placements and scores from game state.
#[derive(Clone, Debug, Default)]
pub struct ScoreEngine {
    config: ScoringConfig,
}

impl ScoreEngine {
    /// Create an engine with the given scoring tables.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Get the scoring tables.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Placement points per team for one round.
    ///
    /// Teams without a positive time are not ranked and get 0. The rest are
    /// ranked fastest first and paid from the placement table.
    #[must_use]
    pub fn placement_points(&self, round: &RoundRecord) -> TeamMap<u32> {
        let mut finishers: SmallVec<[(TeamId, f64); TEAM_COUNT]> = round
            .times
            .iter()
            .filter(|(_, &time)| time > 0.0)
            .map(|(team, &time)| (team, time))
            .collect();

        // Stable: equal times keep team order.
        finishers.sort_by(|a, b| a.1.total_cmp(&b.1));

        let mut points = TeamMap::with_value(0);
        for (rank, (team, _)) in finishers.iter().enumerate() {
            points[*team] = self.config.points_for_rank(rank);
        }
        points
    }

    /// A team's score for one round.
    #[must_use]
    pub fn round_score(&self, state: &GameState, round: RoundId, team: TeamId) -> u32 {
        let record = state.round(round);
        self.score_in(record, round, team, &self.placement_points(record))
    }

    /// A team's score summed over every round.
    #[must_use]
    pub fn total_score(&self, state: &GameState, team: TeamId) -> u32 {
        RoundId::all()
            .map(|round| self.round_score(state, round, team))
            .fold(0, u32::saturating_add)
    }

    /// Total score of every team.
    #[must_use]
    pub fn totals(&self, state: &GameState) -> TeamMap<u32> {
        TeamMap::new(|team| self.total_score(state, team))
    }

    /// Teams ranked by total score, highest first.
    #[must_use]
    pub fn leaderboard(&self, state: &GameState) -> Vec<Standing> {
        let totals = self.totals(state);

        let mut ranked: Vec<(TeamId, u32)> = totals.iter().map(|(team, &score)| (team, score)).collect();
        // Stable: equal scores keep team order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .enumerate()
            .map(|(i, (team, score))| Standing {
                position: i + 1,
                team,
                name: self.config.team_name(team).to_string(),
                score,
            })
            .collect()
    }

    /// Coefficient, placements and scores for one round.
    #[must_use]
    pub fn round_summary(&self, state: &GameState, round: RoundId) -> RoundSummary {
        let record = state.round(round);
        let placement = self.placement_points(record);
        let scores = TeamMap::new(|team| self.score_in(record, round, team, &placement));

        RoundSummary {
            round,
            coefficient: self.config.coefficient(round),
            placement,
            scores,
        }
    }

    fn score_in(&self, record: &RoundRecord, round: RoundId, team: TeamId, placement: &TeamMap<u32>) -> u32 {
        if !record.is_correct(team) {
            return 0;
        }

        let blitz = if record.is_blitz(team) {
            self.config.blitz_multiplier
        } else {
            1
        };

        self.config
            .coefficient(round)
            .saturating_mul(placement[team])
            .saturating_mul(blitz)
    }
}
