//! Python bindings for the trend-guess engine.
//!
//! Lets a Python front end (a notebook, a plotting app) own rendering
//! while the game rules stay in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import trend_guess as tg
//!
//! game = tg.TrendGame()                # embedded temperature series
//! years, values = game.visible_numpy() # plot these
//!
//! outcome = game.submit_guess("increase")
//! print(outcome.feedback, game.score)
//!
//! summary = tg.evaluate(sessions=200, seed=1)
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::GameError;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> PyErr {
        match err {
            GameError::InvalidGuess(_)
            | GameError::UnknownStrategy(_)
            | GameError::DatasetTooShort { .. }
            | GameError::YearsNotIncreasing { .. }
            | GameError::NonFiniteValue { .. }
            | GameError::InvalidWalk { .. } => PyValueError::new_err(err.to_string()),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// trend_guess: guess whether the next yearly value rises or falls.
///
/// This module provides:
/// - TrendGame: one session over the embedded or a synthetic dataset
/// - GuessOutcome: feedback for one guess
/// - evaluate: scripted strategies played over many synthetic datasets
#[pymodule]
fn trend_guess(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGuessOutcome>()?;
    m.add_class::<PyStrategySummary>()?;
    m.add_class::<PyTrendGame>()?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;

    Ok(())
}
