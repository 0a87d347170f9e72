//! Game lifecycle and roll orchestration.
//!
//! The service is the caller the scoring engine is written for: it loads a
//! fresh game value from the registry, drives the pure domain operations,
//! re-derives the game-level finished flag, and commits the mutation. A
//! rejected roll commits nothing.

use tracing::{debug, info};

use crate::domain::rolls;
use crate::domain::rules::{valid_pin_range, MAX_PINS};
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{Game, GameId, PlayerId};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::games::GameRegistry;

/// Outcome of a successfully recorded roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    /// Frame the roll landed in (1-based).
    pub frame_number: u8,
    pub player_finished: bool,
    pub game_finished: bool,
    /// Full game state after the roll, scores recomputed.
    pub game: GameSnapshot,
}

/// Game domain service over the in-memory registry.
pub struct GameService {
    registry: GameRegistry,
}

impl GameService {
    pub fn new() -> Self {
        Self {
            registry: GameRegistry::new(),
        }
    }

    /// Create a game with one player per display name.
    pub fn create_game(&self, names: Vec<String>) -> Result<GameSnapshot, AppError> {
        if names.is_empty() {
            return Err(
                DomainError::validation_other("A game needs at least one player").into(),
            );
        }
        let game = self.registry.create(names);
        info!(game_id = game.id, players = game.players.len(), "Created game");
        Ok(GameSnapshot::of_game(&game))
    }

    /// Snapshot of a game by id.
    pub fn game(&self, game_id: GameId) -> Result<GameSnapshot, AppError> {
        let game = self.require_game(game_id)?;
        Ok(GameSnapshot::of_game(&game))
    }

    /// Record one roll for a player.
    ///
    /// Loads the game, locates the player's open frame, validates and
    /// applies the pinfall, recomputes all cumulative scores, re-derives
    /// the finished flags, and commits. On any rejection the stored game
    /// is left unchanged.
    pub fn record_roll(
        &self,
        game_id: GameId,
        player_id: PlayerId,
        pins: u8,
    ) -> Result<RollOutcome, AppError> {
        debug!(game_id, player_id, pins, "Recording roll");

        if !valid_pin_range().contains(&pins) {
            return Err(DomainError::validation(
                ValidationKind::OutOfRangeRoll,
                format!("Pin count must be between 0 and {MAX_PINS}, got {pins}"),
            )
            .into());
        }

        let mut game = self.require_game(game_id)?;
        let player = game.player_mut(player_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Player,
                format!("Player {player_id} is not in game {game_id}"),
            )
        })?;

        let result = rolls::record_roll(player, pins)?;
        game.finished = game.all_finished();

        let game_finished = game.finished;
        let snapshot = GameSnapshot::of_game(&game);
        self.registry.update(game)?;

        debug!(
            game_id,
            player_id,
            frame = result.frame_number,
            "Recorded roll"
        );
        if game_finished {
            info!(game_id, "Game finished");
        }

        Ok(RollOutcome {
            frame_number: result.frame_number,
            player_finished: result.player_finished,
            game_finished,
            game: snapshot,
        })
    }

    fn require_game(&self, game_id: GameId) -> Result<Game, AppError> {
        self.registry.get(game_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("Game {game_id} does not exist"))
                .into()
        })
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}
