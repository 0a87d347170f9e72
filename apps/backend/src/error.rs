use thiserror::Error;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::errors::error_code::ErrorCode;

/// Caller-facing error for the service layer.
///
/// Every variant carries a stable [`ErrorCode`]; callers translate code plus
/// detail into whatever user-facing shape their transport needs.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } | AppError::NotFound { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    /// Human-readable detail for this error.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Internal { detail } => detail,
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => AppError::Validation {
                code: validation_code(&kind),
                detail,
            },
            DomainError::NotFound(kind, detail) => AppError::NotFound {
                code: not_found_code(&kind),
                detail,
            },
        }
    }
}

fn validation_code(kind: &ValidationKind) -> ErrorCode {
    match kind {
        ValidationKind::OutOfRangeRoll => ErrorCode::RollOutOfRange,
        ValidationKind::FrameAlreadyComplete => ErrorCode::FrameAlreadyComplete,
        ValidationKind::FrameTotalExceeded => ErrorCode::FrameTotalExceeded,
        ValidationKind::ThirdRollNotEarned => ErrorCode::ThirdRollNotEarned,
        ValidationKind::PlayerAlreadyFinished => ErrorCode::PlayerAlreadyFinished,
        _ => ErrorCode::ValidationError,
    }
}

fn not_found_code(kind: &NotFoundKind) -> ErrorCode {
    match kind {
        NotFoundKind::Game => ErrorCode::GameNotFound,
        NotFoundKind::Player => ErrorCode::PlayerNotFound,
        _ => ErrorCode::NotFound,
    }
}
