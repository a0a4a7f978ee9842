//! Result type bindings for Python.

use pyo3::prelude::*;

use crate::autoplay::StrategySummary;
use crate::rules::GuessOutcome;

/// Python wrapper for GuessOutcome.
#[pyclass(name = "GuessOutcome")]
#[derive(Clone, Debug)]
pub struct PyGuessOutcome(pub GuessOutcome);

#[pymethods]
impl PyGuessOutcome {
    /// "Increase" or "Decrease".
    #[getter]
    fn guess(&self) -> &'static str {
        self.0.guess.as_str()
    }

    #[getter]
    fn correct(&self) -> bool {
        self.0.correct
    }

    /// The actual trend ("Decrease" on exact ties).
    #[getter]
    fn actual(&self) -> &'static str {
        self.0.actual.as_str()
    }

    /// The revealed (year, value) point.
    #[getter]
    fn revealed(&self) -> (i32, f64) {
        (self.0.revealed.year, self.0.revealed.value)
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    #[getter]
    fn position(&self) -> usize {
        self.0.position
    }

    #[getter]
    fn finished(&self) -> bool {
        self.0.finished
    }

    #[getter]
    fn feedback(&self) -> String {
        self.0.feedback.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "GuessOutcome(guess={}, correct={}, score={})",
            self.0.guess, self.0.correct, self.0.score
        )
    }
}

/// Python wrapper for StrategySummary.
#[pyclass(name = "StrategySummary")]
#[derive(Clone, Debug)]
pub struct PyStrategySummary(pub StrategySummary);

#[pymethods]
impl PyStrategySummary {
    #[getter]
    fn strategy(&self) -> &'static str {
        self.0.strategy.name()
    }

    #[getter]
    fn sessions(&self) -> usize {
        self.0.sessions
    }

    #[getter]
    fn guesses(&self) -> usize {
        self.0.guesses
    }

    #[getter]
    fn correct(&self) -> usize {
        self.0.correct
    }

    #[getter]
    fn accuracy(&self) -> f64 {
        self.0.accuracy()
    }

    fn __repr__(&self) -> String {
        format!(
            "StrategySummary({}, accuracy={:.3}, sessions={})",
            self.0.strategy,
            self.0.accuracy(),
            self.0.sessions
        )
    }
}
