//! Python bindings for the bank-heist scoring engine.
//!
//! Lets a Python presentation layer drive a saved game.
//!
//! # Quick Start
//!
//! ```python
//! import bank_heist
//!
//! board = bank_heist.Scoreboard("./save")
//! board.set_correct(0, 1, True)
//! board.set_time(0, 1, 42.0)
//!
//! for row in board.leaderboard():
//!     print(row.position, row.name, row.score)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_scoreboard;

pub use py_core::*;
pub use py_scoreboard::*;

/// bank_heist: scorekeeping for the Bank Heist of Hypotheses quiz.
#[pymodule]
fn bank_heist(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScoreboard>()?;
    m.add_class::<PyStanding>()?;

    m.add("TEAM_COUNT", crate::core::TEAM_COUNT)?;
    m.add("ROUND_COUNT", crate::core::ROUND_COUNT)?;
    m.add("ROUND_COEFFICIENTS", crate::core::ROUND_COEFFICIENTS.to_vec())?;
    m.add("PLACEMENT_POINTS", crate::core::PLACEMENT_POINTS.to_vec())?;

    Ok(())
}
