//! Error codes for the trick engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE. Outer layers (simulator output,
//! a future RPC surface) report these strings instead of matching on
//! `DomainError` variants.

use core::fmt;

/// Centralized error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Deal configuration
    /// Deal built with other than four players
    InvalidPlayerCount,
    /// Bidder seat outside 0..=3
    InvalidBidderSeat,
    /// Trump suit not chosen yet
    TrumpUnset,
    /// Trump suit chosen twice
    TrumpAlreadySet,
    /// Other configuration problem
    ConfigError,

    // Play validation
    /// Acting seat already played this trick, or the deal is over
    IllegalState,
    /// Card outside the legal set
    IllegalMove,
    /// Card missing from the hand it was removed from
    CardNotInHand,

    // Lookups and parsing
    /// Teammate lookup for an unseated player
    PlayerNotFound,
    /// Suit code other than C, H, D, S
    InvalidSuitCode,
    /// Card token could not be parsed
    ParseCard,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidBidderSeat => "INVALID_BIDDER_SEAT",
            Self::TrumpUnset => "TRUMP_UNSET",
            Self::TrumpAlreadySet => "TRUMP_ALREADY_SET",
            Self::ConfigError => "CONFIG_ERROR",

            Self::IllegalState => "ILLEGAL_STATE",
            Self::IllegalMove => "ILLEGAL_MOVE",
            Self::CardNotInHand => "CARD_NOT_IN_HAND",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::InvalidSuitCode => "INVALID_SUIT_CODE",
            Self::ParseCard => "PARSE_CARD",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
