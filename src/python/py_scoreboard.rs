//! Scoreboard bindings for Python.

use std::path::PathBuf;

use pyo3::prelude::*;

use crate::core::{RoundId, RoundUpdate, ScoringConfig, TeamId};
use crate::scoring::ScoreEngine;
use crate::store::{FileStorage, GameStateStore, LoadOutcome};

use super::py_core::{cell, PyStanding};

/// A game backed by a directory on disk.
///
/// Every setter persists immediately. Scores are computed on read.
#[pyclass(name = "Scoreboard")]
pub struct PyScoreboard {
    store: GameStateStore<FileStorage>,
    engine: ScoreEngine,
    outcome: LoadOutcome,
}

#[pymethods]
impl PyScoreboard {
    /// Open (or start) the game saved in `data_dir`.
    ///
    /// # Arguments
    /// - data_dir: Directory holding the save file
    /// - blitz_multiplier: Score multiplier for blitz answers (1 = no effect)
    #[new]
    #[pyo3(signature = (data_dir, blitz_multiplier = 1))]
    fn new(data_dir: PathBuf, blitz_multiplier: u32) -> PyResult<Self> {
        let config = ScoringConfig::default().with_blitz_multiplier(blitz_multiplier);
        let (store, outcome) =
            GameStateStore::open(FileStorage::new(data_dir), config.storage_key.clone())?;

        Ok(Self {
            store,
            engine: ScoreEngine::new(config),
            outcome,
        })
    }

    /// How the game was loaded: "fresh", "restored" or "recovered: <reason>".
    #[getter]
    fn load_outcome(&self) -> String {
        match &self.outcome {
            LoadOutcome::Fresh => "fresh".to_string(),
            LoadOutcome::Restored => "restored".to_string(),
            LoadOutcome::Recovered(reason) => format!("recovered: {reason}"),
        }
    }

    /// Team display names in team order.
    #[getter]
    fn team_names(&self) -> Vec<String> {
        TeamId::all()
            .map(|t| self.engine.config().team_name(t).to_string())
            .collect()
    }

    fn set_correct(&mut self, round: usize, team: usize, value: bool) -> PyResult<()> {
        let (round, team) = cell(round, team)?;
        self.store.update_field(round, RoundUpdate::SetCorrect { team, value })?;
        Ok(())
    }

    fn set_blitz(&mut self, round: usize, team: usize, value: bool) -> PyResult<()> {
        let (round, team) = cell(round, team)?;
        self.store.update_field(round, RoundUpdate::SetBlitz { team, value })?;
        Ok(())
    }

    /// Record a completion time. Negative or non-finite values clear it.
    fn set_time(&mut self, round: usize, team: usize, seconds: f64) -> PyResult<()> {
        let (round, team) = cell(round, team)?;
        self.store.update_field(round, RoundUpdate::SetTime { team, seconds })?;
        Ok(())
    }

    /// Discard every result. Confirm with the user before calling.
    fn reset(&mut self) -> PyResult<()> {
        self.store.reset()?;
        Ok(())
    }

    fn placement_points(&self, round: usize) -> PyResult<Vec<u32>> {
        let round = RoundId::try_from(round)?;
        let points = self.engine.placement_points(self.store.state().round(round));
        Ok(points.as_array().to_vec())
    }

    fn round_score(&self, round: usize, team: usize) -> PyResult<u32> {
        let (round, team) = cell(round, team)?;
        Ok(self.engine.round_score(self.store.state(), round, team))
    }

    fn total_score(&self, team: usize) -> PyResult<u32> {
        let team = TeamId::try_from(team)?;
        Ok(self.engine.total_score(self.store.state(), team))
    }

    /// Teams ranked by total score, highest first.
    fn leaderboard(&self) -> Vec<PyStanding> {
        self.engine
            .leaderboard(self.store.state())
            .into_iter()
            .map(PyStanding)
            .collect()
    }

    /// Text describing the scoring rules.
    fn rules(&self) -> String {
        self.engine.config().rules_summary()
    }

    fn __repr__(&self) -> String {
        format!("Scoreboard(dir={:?})", self.store.storage().dir())
    }
}
