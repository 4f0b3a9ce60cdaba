//! Field-level edits to a round.
//!
//! Each variant names the field it changes and carries a payload of that
//! field's type, so an edit can never put a time into a boolean field.

use serde::{Deserialize, Serialize};

use super::round::RoundRecord;
use super::team::TeamId;

/// A single-cell edit within one round.
///
/// ```
/// use bank_heist::core::{RoundRecord, RoundUpdate, TeamId};
///
/// let mut record = RoundRecord::default();
/// RoundUpdate::SetTime { team: TeamId::new(1), seconds: 42.0 }.apply_to(&mut record);
/// assert_eq!(record.time(TeamId::new(1)), 42.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundUpdate {
    /// Mark the team's answer correct or not.
    SetCorrect { team: TeamId, value: bool },
    /// Mark the team's answer as given under blitz or not.
    SetBlitz { team: TeamId, value: bool },
    /// Record the team's completion time. Normalized with `normalize_time`.
    SetTime { team: TeamId, seconds: f64 },
}

impl RoundUpdate {
    /// The team whose cell this edit changes.
    #[must_use]
    pub fn team(&self) -> TeamId {
        match *self {
            RoundUpdate::SetCorrect { team, .. }
            | RoundUpdate::SetBlitz { team, .. }
            | RoundUpdate::SetTime { team, .. } => team,
        }
    }

    /// Write this edit into a round record.
    pub fn apply_to(&self, record: &mut RoundRecord) {
        match *self {
            RoundUpdate::SetCorrect { team, value } => record.correct[team] = value,
            RoundUpdate::SetBlitz { team, value } => record.blitz[team] = value,
            RoundUpdate::SetTime { team, seconds } => record.times[team] = normalize_time(seconds),
        }
    }
}

/// Clamp a completion time to a storable value.
///
/// Negative, NaN and infinite times become `0.0` ("not recorded").
#[must_use]
pub fn normalize_time(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}

/// Parse a completion time typed by a user.
///
/// Reads the longest leading number and ignores whatever follows it, so
/// `"12.5s"` is 12.5. Input that does not start with a number is treated as
/// "not recorded" (`0.0`).
#[must_use]
pub fn parse_time(input: &str) -> f64 {
    let input = input.trim_start();
    let numeric = input
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(input.len());

    (1..=numeric)
        .rev()
        .find_map(|end| input[..end].parse::<f64>().ok())
        .map_or(0.0, normalize_time)
}
