//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::autoplay::{self, AutoplayConfig, StrategyKind};
use crate::core::RandomWalkConfig;
use crate::games::trend::TrendGameBuilder;
use crate::session::Session;

use super::py_core::{PyGuessOutcome, PyStrategySummary};

/// Python wrapper for one game session.
#[pyclass(name = "TrendGame")]
pub struct PyTrendGame {
    session: Session,
}

#[pymethods]
impl PyTrendGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: play a synthetic random walk from this seed instead of the
    ///   embedded temperature series
    /// - points: number of points in the synthetic series
    #[new]
    #[pyo3(signature = (seed = None, points = None))]
    fn new(seed: Option<u64>, points: Option<usize>) -> PyResult<Self> {
        let builder = match (seed, points) {
            (None, None) => TrendGameBuilder::new(),
            (seed, points) => {
                let mut walk = RandomWalkConfig::default().with_seed(seed.unwrap_or(42));
                if let Some(points) = points {
                    walk = walk.with_points(points);
                }
                TrendGameBuilder::new().random_walk(walk)
            }
        };
        Ok(Self {
            session: Session::start(builder)?,
        })
    }

    /// Visible points as a list of (year, value).
    fn visible_points(&self) -> Vec<(i32, f64)> {
        self.session
            .visible_points()
            .map(|p| (p.year, p.value))
            .collect()
    }

    /// Visible points as numpy arrays (years, values).
    fn visible_numpy<'py>(
        &self,
        py: Python<'py>,
    ) -> (Bound<'py, PyArray1<i32>>, Bound<'py, PyArray1<f64>>) {
        let (years, values): (Vec<i32>, Vec<f64>) =
            self.session.visible_points().map(|p| (p.year, p.value)).unzip();
        (
            PyArray1::from_vec_bound(py, years),
            PyArray1::from_vec_bound(py, values),
        )
    }

    /// Guess "increase" or "decrease".
    ///
    /// Raises ValueError for any other input and RuntimeError once the
    /// game is finished.
    fn submit_guess(&mut self, direction: &str) -> PyResult<PyGuessOutcome> {
        Ok(PyGuessOutcome(self.session.submit_raw(direction)?))
    }

    /// Start over on the same dataset.
    fn reset(&mut self) {
        self.session.reset();
    }

    #[getter]
    fn score(&self) -> u32 {
        self.session.state().score()
    }

    #[getter]
    fn position(&self) -> usize {
        self.session.state().position()
    }

    #[getter]
    fn finished(&self) -> bool {
        self.session.is_finished()
    }

    /// (title, x axis label, y axis label) for plotting.
    #[getter]
    fn labels(&self) -> (String, String, String) {
        let labels = self.session.game().labels();
        (labels.title.clone(), labels.x_axis.clone(), labels.y_axis.clone())
    }

    /// Serialize the session to bytes.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        Ok(self.session.snapshot()?)
    }

    /// Rebuild a session from `snapshot()` bytes.
    #[staticmethod]
    fn restore(data: Vec<u8>) -> PyResult<Self> {
        Ok(Self {
            session: Session::restore(&data)?,
        })
    }

    fn __repr__(&self) -> String {
        let state = self.session.state();
        format!(
            "TrendGame(position={}/{}, score={}, status={})",
            state.position(),
            state.last_index(),
            state.score(),
            if state.is_finished() { "finished" } else { "playing" }
        )
    }
}

/// Play every strategy (or the named ones) over synthetic datasets.
#[pyfunction]
#[pyo3(signature = (sessions = 100, seed = 0, strategies = None))]
pub fn evaluate(
    sessions: usize,
    seed: u64,
    strategies: Option<Vec<String>>,
) -> PyResult<Vec<PyStrategySummary>> {
    let kinds = match strategies {
        Some(names) => names
            .iter()
            .map(|name| name.parse::<StrategyKind>())
            .collect::<Result<Vec<_>, _>>()?,
        None => StrategyKind::ALL.to_vec(),
    };
    let config = AutoplayConfig::new().with_sessions(sessions).with_seed(seed);
    let summaries = autoplay::evaluate(&config, &kinds)?;
    Ok(summaries.into_iter().map(PyStrategySummary).collect())
}
