use crate::domain::rules::{valid_pin_range, MAX_PINS};
use crate::domain::scoring::recalculate_scores;
use crate::domain::state::{Frame, Player};
use crate::errors::domain::{DomainError, ValidationKind};

/// Which slot within a frame a roll landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollSlot {
    First,
    Second,
    Third,
}

/// Result of recording a roll, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollResult {
    /// Frame the roll landed in (1-based).
    pub frame_number: u8,
    /// Slot within that frame that was filled.
    pub slot: RollSlot,
    /// Whether this roll completed the player's tenth frame.
    pub player_finished: bool,
}

/// Index of the next frame accepting a roll, or `None` once the player
/// has finished.
///
/// Frames 1-9 are scanned in order; a strike closes a frame immediately
/// even though its score still depends on future rolls. The tenth frame
/// is returned until its completion rule is met.
pub fn next_open_frame(frames: &[Frame]) -> Option<usize> {
    frames.iter().position(|f| !f.is_complete())
}

/// Record one roll for a player: locate the open frame, validate and
/// apply the pinfall, then recompute every frame's cumulative score.
pub fn record_roll(player: &mut Player, pins: u8) -> Result<RollResult, DomainError> {
    if !valid_pin_range().contains(&pins) {
        return Err(DomainError::validation(
            ValidationKind::OutOfRangeRoll,
            format!("Pin count must be between 0 and {MAX_PINS}, got {pins}"),
        ));
    }

    let Some(idx) = next_open_frame(&player.frames) else {
        return Err(DomainError::validation(
            ValidationKind::PlayerAlreadyFinished,
            "Tenth frame is already complete",
        ));
    };

    let slot = apply_roll(&mut player.frames[idx], pins)?;
    recalculate_scores(&mut player.frames);

    Ok(RollResult {
        frame_number: player.frames[idx].number,
        slot,
        player_finished: player.is_finished(),
    })
}

/// Validate `pins` against a single frame and fill the open slot.
///
/// No slot is written on a rejected roll. `pins` must already be within
/// 0..=10; frame-level limits are enforced here.
pub fn apply_roll(frame: &mut Frame, pins: u8) -> Result<RollSlot, DomainError> {
    if frame.is_tenth() {
        return apply_tenth_frame_roll(frame, pins);
    }

    match (frame.roll1, frame.roll2) {
        (None, _) => {
            frame.roll1 = Some(pins);
            Ok(RollSlot::First)
        }
        (Some(r1), None) => {
            if r1 == MAX_PINS {
                return Err(DomainError::validation(
                    ValidationKind::FrameAlreadyComplete,
                    format!("Frame {} is already complete by strike", frame.number),
                ));
            }
            if r1 + pins > MAX_PINS {
                return Err(DomainError::validation(
                    ValidationKind::FrameTotalExceeded,
                    format!("Frame {} total would exceed {MAX_PINS} pins", frame.number),
                ));
            }
            frame.roll2 = Some(pins);
            Ok(RollSlot::Second)
        }
        (Some(_), Some(_)) => Err(DomainError::validation(
            ValidationKind::FrameAlreadyComplete,
            format!("Frame {} is already complete", frame.number),
        )),
    }
}

fn apply_tenth_frame_roll(frame: &mut Frame, pins: u8) -> Result<RollSlot, DomainError> {
    match (frame.roll1, frame.roll2, frame.roll3) {
        (None, _, _) => {
            frame.roll1 = Some(pins);
            Ok(RollSlot::First)
        }
        (Some(r1), None, _) => {
            // A strike on roll1 resets the rack; any second roll is legal.
            if r1 != MAX_PINS && r1 + pins > MAX_PINS {
                return Err(DomainError::validation(
                    ValidationKind::FrameTotalExceeded,
                    format!("Tenth frame total would exceed {MAX_PINS} pins"),
                ));
            }
            frame.roll2 = Some(pins);
            Ok(RollSlot::Second)
        }
        (Some(r1), Some(r2), None) => {
            if r1 != MAX_PINS && r1 + r2 != MAX_PINS {
                return Err(DomainError::validation(
                    ValidationKind::ThirdRollNotEarned,
                    "Third roll requires a strike or spare in the tenth frame",
                ));
            }
            // After a strike, roll2 bowls a fresh rack; unless roll2 also
            // struck, roll3 is limited to the pins roll2 left standing.
            if r1 == MAX_PINS && r2 != MAX_PINS && r2 + pins > MAX_PINS {
                return Err(DomainError::validation(
                    ValidationKind::FrameTotalExceeded,
                    format!("Tenth frame bonus total would exceed {MAX_PINS} pins"),
                ));
            }
            frame.roll3 = Some(pins);
            Ok(RollSlot::Third)
        }
        (Some(_), Some(_), Some(_)) => Err(DomainError::validation(
            ValidationKind::FrameAlreadyComplete,
            "Tenth frame is already complete",
        )),
    }
}
