//! Domain layer: pure bowling scoring types and helpers.

pub mod rolls;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use rolls::{next_open_frame, record_roll, RollResult, RollSlot};
pub use rules::{valid_pin_range, FRAMES_PER_GAME, MAX_GAME_SCORE, MAX_PINS, TENTH_FRAME};
pub use scoring::recalculate_scores;
pub use snapshot::{FrameSnapshot, GameSnapshot, PlayerSnapshot};
pub use state::{Frame, Game, GameId, Player, PlayerId};
