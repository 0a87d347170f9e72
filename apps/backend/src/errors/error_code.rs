//! Error codes for the bowling backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in caller-facing responses.

use core::fmt;

/// Centralized error codes for the bowling backend API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that callers
/// translate into user-facing responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Roll validation
    /// Pin count outside 0..=10
    RollOutOfRange,
    /// Frame has no open roll slot
    FrameAlreadyComplete,
    /// Frame pinfall would exceed 10 pins
    FrameTotalExceeded,
    /// Third roll in the tenth frame without a strike or spare
    ThirdRollNotEarned,
    /// Player's tenth frame is already complete
    PlayerAlreadyFinished,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Game not found
    GameNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Internal
    /// General internal error
    Internal,
}

impl ErrorCode {
    /// Canonical string form of this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::RollOutOfRange => "ROLL_OUT_OF_RANGE",
            ErrorCode::FrameAlreadyComplete => "FRAME_ALREADY_COMPLETE",
            ErrorCode::FrameTotalExceeded => "FRAME_TOTAL_EXCEEDED",
            ErrorCode::ThirdRollNotEarned => "THIRD_ROLL_NOT_EARNED",
            ErrorCode::PlayerAlreadyFinished => "PLAYER_ALREADY_FINISHED",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
