//! Game state: the raw inputs of every round.
//!
//! `GameState` is the single source of truth. Scores and placements are
//! never stored here; they are derived on demand by `ScoreEngine`.
//!
//! ## Shape
//!
//! Always exactly `ROUND_COUNT` rounds of `TEAM_COUNT` teams. The per-team
//! arrays are fixed-size, and every decode path (`GameState::from_json` or
//! any other serde deserializer) checks the round count and the times.
//!
//! ## Updates
//!
//! `with_update` returns a new state and leaves the original untouched.
//! Rounds live in an `im::Vector`, so the new state shares every unchanged
//! round with the old one.

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use super::config::ROUND_COUNT;
use super::round::{RoundId, RoundRecord};
use super::team::TeamId;
use super::update::RoundUpdate;
use crate::error::CorruptState;

/// All raw round inputs for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    rounds: Vector<RoundRecord>,
}

/// Wire form of `GameState`, before shape validation.
#[derive(Deserialize)]
struct RawGameState {
    rounds: Vector<RoundRecord>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = CorruptState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self { rounds: raw.rounds };
        state.validate()?;
        Ok(state)
    }
}

impl GameState {
    /// Create a blank game: nobody correct, no blitz, no times.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rounds: (0..ROUND_COUNT).map(|_| RoundRecord::default()).collect(),
        }
    }

    /// Get a round's record.
    #[must_use]
    pub fn round(&self, round: RoundId) -> &RoundRecord {
        &self.rounds[round.index()]
    }

    /// Iterate over (RoundId, &RoundRecord) pairs in play order.
    pub fn rounds(&self) -> impl Iterator<Item = (RoundId, &RoundRecord)> {
        RoundId::all().zip(self.rounds.iter())
    }

    /// Return a copy of this state with one cell replaced.
    #[must_use]
    pub fn with_update(&self, round: RoundId, update: RoundUpdate) -> Self {
        let mut record = self.round(round).clone();
        update.apply_to(&mut record);
        debug!("{}: {:?}", round, update);

        Self {
            rounds: self.rounds.update(round.index(), record),
        }
    }

    /// True if no cell differs from a blank game.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.rounds.iter().all(|r| *r == RoundRecord::default())
    }

    /// Encode as the JSON snapshot format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a JSON snapshot, rejecting anything that is not a valid game.
    pub fn from_json(json: &str) -> Result<Self, CorruptState> {
        let raw: RawGameState =
            serde_json::from_str(json).map_err(|e| CorruptState::Malformed(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Check the round count and that every time is a storable value.
    pub fn validate(&self) -> Result<(), CorruptState> {
        if self.rounds.len() != ROUND_COUNT {
            return Err(CorruptState::RoundCount {
                found: self.rounds.len(),
                expected: ROUND_COUNT,
            });
        }

        for (round, record) in self.rounds() {
            for team in TeamId::all() {
                let value = record.time(team);
                if !value.is_finite() || value < 0.0 {
                    return Err(CorruptState::InvalidTime {
                        round: round.index(),
                        team: team.index(),
                        value,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
