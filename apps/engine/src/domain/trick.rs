//! One exchange of four cards, one per seat.

use super::cards_logic::{compare_cards, CardOrdering};
use super::cards_types::{Card, Suit};
use super::rules::PLAYERS;
use super::seats::{nth_from, Seat};
use crate::errors::domain::DomainError;

/// Per-seat record of the cards played into one trick.
///
/// Slots are indexed by seat, not by play order, so the leader's card sits
/// at `slots[leader]` whichever seat that is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    leader: Seat,
    slots: [Option<Card>; PLAYERS],
    ended: bool,
}

impl Trick {
    pub fn new(leader: Seat) -> Self {
        debug_assert!((leader as usize) < PLAYERS, "leader seat out of range");
        Self {
            leader,
            slots: [None; PLAYERS],
            ended: false,
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn slot(&self, seat: Seat) -> Option<Card> {
        self.slots.get(seat as usize).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<Card>; PLAYERS] {
        &self.slots
    }

    /// Suit of the leader's card; `None` until the leader has played.
    pub fn led_suit(&self) -> Option<Suit> {
        self.slot(self.leader).map(|c| c.suit)
    }

    pub fn cards_played(&self) -> u8 {
        self.slots.iter().filter(|s| s.is_some()).count() as u8
    }

    /// Seat whose turn it is: leader plus cards played, modulo 4.
    pub fn player_to_act(&self) -> Seat {
        nth_from(self.leader, self.cards_played())
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Plays in the order they were made, starting with the leader.
    pub fn plays(&self) -> Vec<(Seat, Card)> {
        (0..PLAYERS as u8)
            .map(|n| nth_from(self.leader, n))
            .filter_map(|seat| self.slot(seat).map(|card| (seat, card)))
            .collect()
    }

    /// Seat currently holding the best card, or `None` before anything is
    /// played. Works on partial tricks.
    pub fn winning_slot(&self, trump: Suit) -> Option<Seat> {
        let led = self.led_suit();
        let mut best: Option<(Seat, Card)> = None;
        for (seat, card) in self.plays() {
            best = match best {
                Some((_, best_card))
                    if compare_cards(best_card, card, led, trump) != CardOrdering::SecondWins =>
                {
                    best
                }
                _ => Some((seat, card)),
            };
        }
        best.map(|(seat, _)| seat)
    }

    pub fn winning_card(&self, trump: Suit) -> Option<Card> {
        self.winning_slot(trump).and_then(|seat| self.slot(seat))
    }

    /// Record `card` for the acting seat. The slot must be empty.
    pub(crate) fn place(&mut self, card: Card) -> Result<Seat, DomainError> {
        let seat = self.player_to_act();
        if self.ended || self.slots[seat as usize].is_some() {
            return Err(DomainError::illegal_state(format!(
                "seat {seat} already played a card this trick"
            )));
        }
        self.slots[seat as usize] = Some(card);
        if self.is_complete() {
            self.ended = true;
        }
        Ok(seat)
    }
}
