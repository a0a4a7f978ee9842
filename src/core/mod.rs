//! Core game types: dataset, directions, state, RNG, configuration.
//!
//! Everything here is independent of how a session is driven (CLI,
//! Python, autoplay). The rules engine in `rules` is the only writer of
//! `GameState`.

pub mod config;
pub mod dataset;
pub mod rng;
pub mod state;
pub mod trend;

pub use config::{ChartLabels, DatasetSource, GameConfig, RandomWalkConfig};
pub use dataset::{DataPoint, Dataset};
pub use rng::GameRng;
pub use state::{GameState, GuessRecord, Phase};
pub use trend::Direction;
