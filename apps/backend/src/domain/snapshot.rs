//! Public snapshot API for observing game state without exposing internals.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::state::{Frame, Game, GameId, Player, PlayerId};

/// One frame as relayed to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub number: u8,
    pub roll1: Option<u8>,
    pub roll2: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll3: Option<u8>,
    /// Cumulative score through this frame; absent while pending.
    pub score: Option<u16>,
}

impl FrameSnapshot {
    fn of_frame(frame: &Frame) -> Self {
        Self {
            number: frame.number,
            roll1: frame.roll1,
            roll2: frame.roll2,
            roll3: frame.roll3,
            score: frame.score,
        }
    }
}

/// One player's scorecard as relayed to clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub frames: Vec<FrameSnapshot>,
    /// Latest determinable cumulative score.
    pub total: Option<u16>,
    pub finished: bool,
}

impl PlayerSnapshot {
    fn of_player(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            frames: player.frames.iter().map(FrameSnapshot::of_frame).collect(),
            total: player.total_score(),
            finished: player.is_finished(),
        }
    }
}

/// Top-level game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: GameId,
    pub finished: bool,
    pub created_at: OffsetDateTime,
    pub players: Vec<PlayerSnapshot>,
}

impl GameSnapshot {
    pub fn of_game(game: &Game) -> Self {
        Self {
            id: game.id,
            finished: game.finished,
            created_at: game.created_at,
            players: game.players.iter().map(PlayerSnapshot::of_player).collect(),
        }
    }
}
