//! Game implementations built on the rules engine.

pub mod trend;
