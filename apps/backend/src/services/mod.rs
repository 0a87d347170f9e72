//! Service layer: orchestrates domain operations over the registry.

pub mod games;

pub use games::{GameService, RollOutcome};
