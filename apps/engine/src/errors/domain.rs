//! Domain-level error type returned by every engine operation.
//!
//! All variants describe caller or programmer mistakes. Nothing here is
//! transient, so there is no retry classification: callers surface the
//! error and fix the input.

use thiserror::Error;

use super::error_code::ErrorCode;
use crate::domain::cards_types::Card;
use crate::domain::seats::Seat;

/// Which part of a deal's configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigKind {
    /// A deal needs exactly four players.
    PlayerCount,
    /// Bidder seat outside 0..=3.
    BidderSeat,
    /// Trump is queried or played against before it was chosen.
    TrumpUnset,
    /// Trump may only be chosen once per deal.
    TrumpAlreadySet,
    /// A config value (rule set name, seed, deck split) could not be used.
    InvalidValue,
}

/// Central engine error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("configuration error ({0:?}): {1}")]
    Configuration(ConfigKind, String),
    #[error("illegal state: {0}")]
    IllegalState(String),
    #[error("illegal move: seat {seat} may not play {card}")]
    IllegalMove { seat: Seat, card: Card },
    #[error("player not found: {0}")]
    PlayerNotFound(String),
    #[error("invalid suit code: {0:?}")]
    InvalidSuitCode(String),
    #[error("parse card: {0}")]
    ParseCard(String),
    #[error("card not in hand: {0}")]
    CardNotInHand(Card),
}

impl DomainError {
    pub fn config(kind: ConfigKind, detail: impl Into<String>) -> Self {
        Self::Configuration(kind, detail.into())
    }

    pub fn illegal_state(detail: impl Into<String>) -> Self {
        Self::IllegalState(detail.into())
    }

    pub fn illegal_move(seat: Seat, card: Card) -> Self {
        Self::IllegalMove { seat, card }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::Configuration(ConfigKind::PlayerCount, _) => ErrorCode::InvalidPlayerCount,
            DomainError::Configuration(ConfigKind::BidderSeat, _) => ErrorCode::InvalidBidderSeat,
            DomainError::Configuration(ConfigKind::TrumpUnset, _) => ErrorCode::TrumpUnset,
            DomainError::Configuration(ConfigKind::TrumpAlreadySet, _) => {
                ErrorCode::TrumpAlreadySet
            }
            DomainError::Configuration(ConfigKind::InvalidValue, _) => ErrorCode::ConfigError,
            DomainError::IllegalState(_) => ErrorCode::IllegalState,
            DomainError::IllegalMove { .. } => ErrorCode::IllegalMove,
            DomainError::PlayerNotFound(_) => ErrorCode::PlayerNotFound,
            DomainError::InvalidSuitCode(_) => ErrorCode::InvalidSuitCode,
            DomainError::ParseCard(_) => ErrorCode::ParseCard,
            DomainError::CardNotInHand(_) => ErrorCode::CardNotInHand,
        }
    }
}
