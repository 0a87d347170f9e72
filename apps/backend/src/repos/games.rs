//! In-memory game registry.
//!
//! Stands where a durable store would: callers load a full game value,
//! mutate it through the domain layer, and commit the whole game back.
//! The engine itself never touches the registry. The lock serializes
//! commits in-process; cross-process coordination is a caller concern.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::domain::state::{Game, GameId, Player};
use crate::errors::domain::{DomainError, NotFoundKind};

pub struct GameRegistry {
    games: RwLock<HashMap<GameId, Game>>,
    next_game_id: AtomicI64,
    next_player_id: AtomicI64,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_game_id: AtomicI64::new(1),
            next_player_id: AtomicI64::new(1),
        }
    }

    /// Create and store a game with one player per display name.
    pub fn create(&self, names: Vec<String>) -> Game {
        let id = self.next_game_id.fetch_add(1, Ordering::Relaxed);
        let players = names
            .into_iter()
            .map(|name| Player::new(self.next_player_id.fetch_add(1, Ordering::Relaxed), name))
            .collect();
        let game = Game {
            id,
            finished: false,
            players,
            created_at: OffsetDateTime::now_utc(),
        };
        self.games.write().insert(id, game.clone());
        game
    }

    /// Value snapshot of a stored game.
    pub fn get(&self, game_id: GameId) -> Option<Game> {
        self.games.read().get(&game_id).cloned()
    }

    /// Replace a stored game with a mutated copy.
    pub fn update(&self, game: Game) -> Result<(), DomainError> {
        let mut games = self.games.write();
        match games.get_mut(&game.id) {
            Some(slot) => {
                *slot = game;
                Ok(())
            }
            None => Err(DomainError::not_found(
                NotFoundKind::Game,
                format!("Game {} does not exist", game.id),
            )),
        }
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}
