//! Deterministic shuffling and dealing of the piquet deck.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::cards_types::{full_deck, Card};
use super::hand::Hand;
use super::player::Player;
use super::rules::{HAND_SIZE, PLAYERS};
use crate::errors::domain::{ConfigKind, DomainError};

/// Full deck permuted by a keyed shuffle. The same seed always yields the
/// same order.
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// Deal a freshly shuffled deck into four hands of eight.
///
/// Cards are handed out in contiguous blocks: seat 0 gets the first eight
/// cards of the shuffled deck, seat 1 the next eight, and so on.
pub fn deal_hands(seed: u64) -> [Hand; PLAYERS] {
    let deck = shuffled_deck(seed);
    let mut hands: [Hand; PLAYERS] = Default::default();
    for (hand, chunk) in hands.iter_mut().zip(deck.chunks(HAND_SIZE)) {
        hand.extend(chunk.iter().copied());
    }
    hands
}

/// Deal `cards` among `players` in seat order, adding to whatever they
/// already hold.
pub fn deal_cards(cards: &[Card], players: &mut [Player]) -> Result<(), DomainError> {
    if players.is_empty() || cards.len() % players.len() != 0 {
        return Err(DomainError::config(
            ConfigKind::InvalidValue,
            format!(
                "cannot evenly deal {} cards among {} players",
                cards.len(),
                players.len()
            ),
        ));
    }

    let hand_size = cards.len() / players.len();
    for (player, chunk) in players.iter_mut().zip(cards.chunks(hand_size)) {
        player.hand.extend(chunk.iter().copied());
    }
    Ok(())
}

/// Shuffle with `seed` and deal the whole deck to `players`.
pub fn deal_to_players(players: &mut [Player], seed: u64) -> Result<(), DomainError> {
    deal_cards(&shuffled_deck(seed), players)
}
