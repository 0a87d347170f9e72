//! Helpers for building scorecards in domain tests.

use crate::domain::rolls::{next_open_frame, record_roll};
use crate::domain::rules::MAX_PINS;
use crate::domain::state::{Frame, Player};

pub fn make_player() -> Player {
    Player::new(1, "Test Bowler")
}

/// Bowl a sequence of pinfalls, panicking on any rejection.
pub fn bowl_all(player: &mut Player, rolls: &[u8]) {
    for &pins in rolls {
        record_roll(player, pins)
            .unwrap_or_else(|e| panic!("roll of {pins} unexpectedly rejected: {e}"));
    }
}

/// Twelve strikes: a 300 game.
pub fn perfect_game_rolls() -> Vec<u8> {
    vec![MAX_PINS; 12]
}

/// 5-5 spare in every frame plus the tenth-frame bonus roll: a 150 game.
pub fn all_spares_rolls() -> Vec<u8> {
    vec![5; 21]
}

/// Pins still standing for the player's next roll.
pub fn standing_pins(frame: &Frame) -> u8 {
    match (frame.roll1, frame.roll2) {
        (None, _) => MAX_PINS,
        (Some(r1), None) => {
            // A tenth-frame strike resets the rack for roll2.
            if frame.is_tenth() && r1 == MAX_PINS {
                MAX_PINS
            } else {
                MAX_PINS - r1
            }
        }
        // Only reachable for an earned tenth-frame third roll.
        (Some(r1), Some(r2)) => {
            if r1 == MAX_PINS && r2 != MAX_PINS {
                MAX_PINS - r2
            } else {
                MAX_PINS
            }
        }
    }
}

/// Map an arbitrary byte onto a pinfall that is legal for the player's
/// current frame state. Panics if the player is already finished.
pub fn legal_pinfall(player: &Player, raw: u8) -> u8 {
    let idx = next_open_frame(&player.frames).expect("player already finished");
    let standing = standing_pins(&player.frames[idx]);
    raw % (standing + 1)
}
