//! In-memory bowling game simulator.
//!
//! Drives complete games through the scoring engine roll by roll; every
//! generated pinfall passes the same validation real callers go through.

use backend::domain::rolls::{next_open_frame, record_roll};
use backend::domain::rules::MAX_PINS;
use backend::domain::state::{Frame, Player};
use backend::errors::domain::DomainError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::RollStyle;

// -----------------------------------------------------------------------------
// Local helper (file-scoped)
//
// Backend keeps its equivalent standing-pins helper test-only; we keep a
// local copy rather than have the library export it for us.
// -----------------------------------------------------------------------------

fn standing_pins(frame: &Frame) -> u8 {
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

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Final score per lane.
    pub final_scores: Vec<u16>,
    /// Strike frames per lane.
    pub strikes: Vec<u32>,
    /// Spare frames per lane.
    pub spares: Vec<u32>,
    /// Rolls bowled across all lanes.
    pub total_rolls: u32,
}

/// Deterministic per-seed game simulator.
pub struct Simulator {
    rng: StdRng,
}

impl Simulator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Simulate one complete game with one lane per style.
    pub fn run_game(&mut self, styles: &[RollStyle]) -> Result<GameResult, DomainError> {
        let mut players: Vec<Player> = styles
            .iter()
            .enumerate()
            .map(|(i, style)| Player::new(i as i64 + 1, format!("{}-{}", style.name(), i + 1)))
            .collect();

        let mut total_rolls = 0u32;

        // Lane rotation: each player bowls until their current frame
        // closes, then the next lane is up.
        for _round in 0..10 {
            for (player, style) in players.iter_mut().zip(styles) {
                total_rolls += bowl_frame(&mut self.rng, player, *style)?;
            }
        }

        let final_scores = players
            .iter()
            .map(|p| p.total_score().unwrap_or(0))
            .collect();
        let strikes = players
            .iter()
            .map(|p| p.frames.iter().filter(|f| f.is_strike()).count() as u32)
            .collect();
        let spares = players
            .iter()
            .map(|p| p.frames.iter().filter(|f| f.is_spare()).count() as u32)
            .collect();

        Ok(GameResult {
            final_scores,
            strikes,
            spares,
            total_rolls,
        })
    }
}

/// Bowl one player's current frame to completion. No-op if finished.
fn bowl_frame(rng: &mut StdRng, player: &mut Player, style: RollStyle) -> Result<u32, DomainError> {
    let Some(start) = next_open_frame(&player.frames) else {
        return Ok(0);
    };
    let mut rolls = 0u32;
    while next_open_frame(&player.frames) == Some(start) {
        let pins = pick_pinfall(rng, style, &player.frames[start]);
        record_roll(player, pins)?;
        rolls += 1;
    }
    Ok(rolls)
}

fn pick_pinfall(rng: &mut StdRng, style: RollStyle, frame: &Frame) -> u8 {
    let standing = standing_pins(frame);
    let (strike_odds, conversion_odds) = match style {
        RollStyle::Random => return rng.random_range(0..=standing),
        RollStyle::House => (0.2, 0.45),
        RollStyle::Pro => (0.6, 0.8),
    };
    if standing == MAX_PINS && rng.random_bool(strike_odds) {
        return MAX_PINS;
    }
    if standing < MAX_PINS && rng.random_bool(conversion_odds) {
        return standing;
    }
    rng.random_range(0..=standing)
}
