//! A player's hand: an unordered set of distinct cards.

use std::collections::BTreeSet;

use super::cards_types::{Card, Suit};
use crate::errors::domain::DomainError;

/// Set of cards held by one player.
///
/// Backed by a `BTreeSet` so iteration is stable (suit, then rank) for
/// display and deterministic simulation; the ordering carries no game meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: BTreeSet<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. Returns `false` if it was already held.
    pub fn insert(&mut self, card: Card) -> bool {
        self.cards.insert(card)
    }

    /// Remove exactly one card by value.
    pub fn remove(&mut self, card: Card) -> Result<(), DomainError> {
        if self.cards.remove(&card) {
            Ok(())
        } else {
            Err(DomainError::CardNotInHand(card))
        }
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn cards_of(&self, suit: Suit) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied().filter(move |c| c.suit == suit)
    }

    pub fn as_set(&self) -> &BTreeSet<Card> {
        &self.cards
    }

    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::collections::btree_set::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
