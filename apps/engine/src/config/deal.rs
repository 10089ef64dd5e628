//! Deal configuration.
//!
//! A `DealConfig` can come from JSON (e.g. a stored table setting) or from
//! the environment. Unknown JSON fields are ignored.

use std::env;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::cards_types::Suit;
use crate::domain::rules::RuleSet;
use crate::domain::seats::{is_valid_seat, Seat};
use crate::errors::domain::{ConfigKind, DomainError};

/// Settings for one deal.
///
/// # Example JSON Config
///
/// ```json
/// {"rules": "AMSTERDAM", "bidder": 2, "trump": "H", "seed": 12345}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DealConfig {
    pub rules: RuleSet,
    /// Seat that chose trump and leads the first trick.
    pub bidder: Seat,
    /// `None` until the bidding collaborator has picked a suit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trump: Option<Suit>,
    /// Shuffle seed; `None` means the caller picks one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl DealConfig {
    /// Parse from optional JSON. Missing fields take their defaults.
    pub fn from_json(config: Option<&JsonValue>) -> Result<Self, DomainError> {
        let parsed = match config {
            Some(json) => serde_json::from_value::<DealConfig>(json.clone()).map_err(|e| {
                DomainError::config(ConfigKind::InvalidValue, format!("deal config: {e}"))
            })?,
            None => Self::default(),
        };
        parsed.validate()?;
        Ok(parsed)
    }

    /// Read `KLAVERJAS_RULES`, `KLAVERJAS_BIDDER`, `KLAVERJAS_TRUMP` (suit
    /// code) and `KLAVERJAS_SEED`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rules) = lookup("KLAVERJAS_RULES") {
            config.rules = rules.parse()?;
        }
        if let Some(bidder) = lookup("KLAVERJAS_BIDDER") {
            config.bidder = bidder.trim().parse().map_err(|_| {
                DomainError::config(
                    ConfigKind::BidderSeat,
                    format!("KLAVERJAS_BIDDER must be a seat number, got: '{bidder}'"),
                )
            })?;
        }
        if let Some(trump) = lookup("KLAVERJAS_TRUMP") {
            config.trump = Some(Suit::from_code(trump.trim())?);
        }
        if let Some(seed) = lookup("KLAVERJAS_SEED") {
            config.seed = Some(seed.trim().parse().map_err(|_| {
                DomainError::config(
                    ConfigKind::InvalidValue,
                    format!("KLAVERJAS_SEED must be an unsigned integer, got: '{seed}'"),
                )
            })?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if !is_valid_seat(self.bidder) {
            return Err(DomainError::config(
                ConfigKind::BidderSeat,
                format!("invalid bidder index: {}", self.bidder),
            ));
        }
        Ok(())
    }
}
