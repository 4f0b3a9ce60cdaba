//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Type-safe team identifier for the fixed roster of `TEAM_COUNT` teams.
//!
//! ## TeamMap
//!
//! Per-team storage backed by a fixed-size array, indexed by `TeamId`.
//! Serializes as a plain `TEAM_COUNT`-element sequence.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::TEAM_COUNT;
use crate::error::IndexError;

/// Team identifier.
///
/// Team indices are 0-based: the first team is `TeamId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct TeamId(u8);

impl TeamId {
    /// Create a team ID.
    ///
    /// Panics if `index >= TEAM_COUNT`. Use `TeamId::try_from` for indices
    /// that come from user input.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        assert!(index < TEAM_COUNT, "team index out of range");
        Self(index as u8)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every team in index order.
    ///
    /// ```
    /// use bank_heist::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all().collect();
    /// assert_eq!(teams.len(), 3);
    /// assert_eq!(teams[2], TeamId::new(2));
    /// ```
    pub fn all() -> impl Iterator<Item = TeamId> {
        (0..TEAM_COUNT as u8).map(TeamId)
    }
}

impl TryFrom<usize> for TeamId {
    type Error = IndexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < TEAM_COUNT {
            Ok(Self(index as u8))
        } else {
            Err(IndexError::Team(index))
        }
    }
}

impl From<TeamId> for usize {
    fn from(id: TeamId) -> Self {
        id.index()
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Per-team values, one slot per team.
///
/// ```
/// use bank_heist::core::{TeamId, TeamMap};
///
/// let mut times: TeamMap<f64> = TeamMap::with_value(0.0);
/// times[TeamId::new(1)] = 12.5;
/// assert_eq!(times[TeamId::new(1)], 12.5);
/// assert_eq!(times[TeamId::new(0)], 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamMap<T> {
    data: [T; TEAM_COUNT],
}

impl<T> TeamMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(TeamId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(TeamId(i as u8))),
        }
    }

    /// Create a map with every slot set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map from values in team order.
    pub const fn from_array(data: [T; TEAM_COUNT]) -> Self {
        Self { data }
    }

    /// Get a team's value.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's value.
    pub fn get_mut(&mut self, team: TeamId) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (TeamId, &T) pairs in team order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (TeamId(i as u8), v))
    }

    /// Values in team order.
    #[must_use]
    pub fn as_array(&self) -> &[T; TEAM_COUNT] {
        &self.data
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<TeamId> for TeamMap<T> {
    fn index_mut(&mut self, team: TeamId) -> &mut Self::Output {
        self.get_mut(team)
    }
}
