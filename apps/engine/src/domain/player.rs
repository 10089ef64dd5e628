use rand::Rng;

use super::hand::Hand;
use super::names::generate_name;

/// A seated player: a display name plus the cards currently held.
///
/// Two players are equal when both name and hand match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self {
            name: name.into(),
            hand,
        }
    }

    /// Player with an empty hand.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Hand::new())
    }

    /// Player with an empty hand and a generated name.
    pub fn with_random_name<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::named(generate_name(rng))
    }
}
