//! Core type bindings for Python.

use pyo3::exceptions::{PyIOError, PyIndexError};
use pyo3::prelude::*;

use crate::core::{RoundId, TeamId};
use crate::error::{IndexError, StoreError};
use crate::scoring::Standing;

impl From<IndexError> for PyErr {
    fn from(err: IndexError) -> Self {
        PyIndexError::new_err(err.to_string())
    }
}

impl From<StoreError> for PyErr {
    fn from(err: StoreError) -> Self {
        PyIOError::new_err(err.to_string())
    }
}

/// Convert Python-side indices, raising `IndexError` when out of range.
pub(crate) fn cell(round: usize, team: usize) -> PyResult<(RoundId, TeamId)> {
    Ok((RoundId::try_from(round)?, TeamId::try_from(team)?))
}

/// Python wrapper for a leaderboard row.
#[pyclass(name = "Standing", frozen)]
#[derive(Clone, Debug)]
pub struct PyStanding(pub Standing);

#[pymethods]
impl PyStanding {
    /// 1-based rank.
    #[getter]
    fn position(&self) -> usize {
        self.0.position
    }

    /// Team index (0-based).
    #[getter]
    fn team(&self) -> usize {
        self.0.team.index()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    fn __repr__(&self) -> String {
        format!("Standing(#{} {:?}, score={})", self.0.position, self.0.name, self.0.score)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
