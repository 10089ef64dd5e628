use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{ConfigKind, DomainError};

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 8;
pub const TRICKS_PER_DEAL: usize = 8;
pub const DECK_SIZE: usize = PLAYERS * HAND_SIZE;

/// The two regional rule sets. They differ only in the overtrump duty.
///
/// - Rotterdam: overtrumping is mandatory whenever possible, even over
///   following suit.
/// - Amsterdam: the duty is waived while the player's teammate is winning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleSet {
    #[default]
    Rotterdam,
    Amsterdam,
}

impl RuleSet {
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleSet::Rotterdam => "ROTTERDAM",
            RuleSet::Amsterdam => "AMSTERDAM",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleSet {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rotterdam" => Ok(RuleSet::Rotterdam),
            "amsterdam" => Ok(RuleSet::Amsterdam),
            _ => Err(DomainError::config(
                ConfigKind::InvalidValue,
                format!("unknown rule set: {s}"),
            )),
        }
    }
}
