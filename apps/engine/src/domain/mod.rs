//! Domain layer: cards, hands, tricks and the rules that govern them.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deal;
pub mod dealing;
pub mod hand;
pub mod legality;
pub mod names;
pub mod player;
pub mod rules;
pub mod seats;
pub mod seed_derivation;
pub mod trick;

#[cfg(test)]
mod tests_deal;
#[cfg(test)]
mod tests_props_legality;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, compare_cards, hand_has_suit, CardOrdering};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{full_deck, Card, Rank, Suit};
pub use deal::{Deal, PlayOutcome};
pub use dealing::{deal_cards, deal_hands, deal_to_players, shuffled_deck};
pub use hand::Hand;
pub use legality::{legal_cards, LegalityInput};
pub use player::Player;
pub use rules::{RuleSet, DECK_SIZE, HAND_SIZE, PLAYERS, TRICKS_PER_DEAL};
pub use seats::{next_seat, teammate_seat, Seat};
pub use seed_derivation::{derive_deal_seed, derive_player_seed};
pub use trick::Trick;
