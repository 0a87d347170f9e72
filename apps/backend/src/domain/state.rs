use time::OffsetDateTime;

use crate::domain::rules::{FRAMES_PER_GAME, MAX_PINS, TENTH_FRAME};

pub type GameId = i64;
pub type PlayerId = i64;

/// One frame on a player's scorecard.
///
/// Roll slots are write-once: a set slot is never overwritten. `roll3` is
/// only meaningful for the tenth frame. `score` is the cumulative total
/// through this frame, unset while bonus rolls are still outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame number, 1..=10.
    pub number: u8,
    pub roll1: Option<u8>,
    pub roll2: Option<u8>,
    pub roll3: Option<u8>,
    /// Cumulative score through this frame, once determinable.
    pub score: Option<u16>,
}

impl Frame {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            roll1: None,
            roll2: None,
            roll3: None,
            score: None,
        }
    }

    pub fn is_tenth(&self) -> bool {
        self.number == TENTH_FRAME
    }

    pub fn is_strike(&self) -> bool {
        self.roll1 == Some(MAX_PINS)
    }

    pub fn is_spare(&self) -> bool {
        match (self.roll1, self.roll2) {
            (Some(r1), Some(r2)) => r1 != MAX_PINS && r1 + r2 == MAX_PINS,
            _ => false,
        }
    }

    /// Recorded rolls in bowling order.
    pub fn rolls(&self) -> impl Iterator<Item = u8> {
        [self.roll1, self.roll2, self.roll3].into_iter().flatten()
    }

    /// Whether this frame accepts no further rolls.
    ///
    /// Frames 1-9 close on a strike or after two rolls. The tenth frame
    /// closes after two rolls of an open frame, or after the third roll
    /// once a strike or spare earned it.
    pub fn is_complete(&self) -> bool {
        if !self.is_tenth() {
            return self.is_strike() || (self.roll1.is_some() && self.roll2.is_some());
        }
        match (self.roll1, self.roll2) {
            (Some(r1), Some(r2)) => {
                if r1 == MAX_PINS || r1 + r2 == MAX_PINS {
                    self.roll3.is_some()
                } else {
                    true
                }
            }
            _ => false,
        }
    }
}

/// A player and their ten-frame scorecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Exactly ten frames, numbered 1..=10 at creation.
    pub frames: Vec<Frame>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            frames: (1..=FRAMES_PER_GAME).map(Frame::new).collect(),
        }
    }

    /// A player is finished once their tenth frame is complete.
    pub fn is_finished(&self) -> bool {
        self.frames.last().is_some_and(Frame::is_complete)
    }

    /// Latest determinable cumulative score, if any frame has scored yet.
    pub fn total_score(&self) -> Option<u16> {
        self.frames.iter().rev().find_map(|f| f.score)
    }
}

/// A game of one or more players bowling in parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    /// Set once every player's tenth frame is complete.
    pub finished: bool,
    pub players: Vec<Player>,
    pub created_at: OffsetDateTime,
}

impl Game {
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn all_finished(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(Player::is_finished)
    }
}
