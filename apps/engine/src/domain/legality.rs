//! Which cards the acting seat may legally play.
//!
//! Everything here is pure: the caller supplies the hand and the trick
//! context, and gets back a subset of the hand.

use std::collections::BTreeSet;

use super::cards_logic::card_beats;
use super::cards_types::{Card, Suit};
use super::hand::Hand;
use super::rules::RuleSet;
use super::seats::{teammate_seat, Seat};
use super::trick::Trick;

/// Everything `legal_cards` needs to know about the trick in progress.
#[derive(Debug, Clone, Copy)]
pub struct LegalityInput<'a> {
    pub hand: &'a Hand,
    pub seat: Seat,
    pub led: Option<Suit>,
    pub trump: Suit,
    pub rules: RuleSet,
    /// Seat and card currently winning the trick, if any card was played.
    pub winning: Option<(Seat, Card)>,
}

impl<'a> LegalityInput<'a> {
    /// Build the input for whoever is to act in `trick`.
    pub fn for_trick(trick: &Trick, hand: &'a Hand, trump: Suit, rules: RuleSet) -> Self {
        let winning = trick
            .winning_slot(trump)
            .and_then(|seat| trick.slot(seat).map(|card| (seat, card)));
        Self {
            hand,
            seat: trick.player_to_act(),
            led: trick.led_suit(),
            trump,
            rules,
            winning,
        }
    }

    fn teammate_winning(&self) -> bool {
        self.winning
            .is_some_and(|(seat, _)| seat == teammate_seat(self.seat))
    }
}

/// The hand split by what each card can do in the current trick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandPartition {
    /// Cards of the led suit.
    pub follow: BTreeSet<Card>,
    /// Trumps that would beat the current winning card (all trumps if
    /// nothing has been played).
    pub higher_trumps: BTreeSet<Card>,
    /// Cards in neither the led suit nor trump.
    pub plain: BTreeSet<Card>,
}

impl HandPartition {
    pub fn of(hand: &Hand, led: Suit, trump: Suit, winning_card: Option<Card>) -> Self {
        let mut parts = HandPartition::default();
        for &card in hand {
            if card.suit == trump {
                let higher = winning_card.map_or(true, |w| card_beats(card, w, Some(led), trump));
                if higher {
                    parts.higher_trumps.insert(card);
                    continue;
                }
            }
            if card.suit == led {
                parts.follow.insert(card);
            } else if card.suit != trump {
                parts.plain.insert(card);
            }
        }
        parts
    }

    fn higher_or_plain(&self) -> BTreeSet<Card> {
        self.higher_trumps.union(&self.plain).copied().collect()
    }
}

/// How strongly a player holding a higher trump is bound to play it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertrumpDuty {
    /// Must overtrump, even when able to follow suit.
    Mandatory,
    /// Must follow suit if possible; overtrump only when void.
    FollowFirst,
    /// Teammate holds the trick: overtrumping and discarding are both allowed.
    Waived,
}

/// The overtrump duty under `rules`.
///
/// This is the only place the two rule sets diverge.
pub fn overtrump_duty(rules: RuleSet, teammate_winning: bool) -> OvertrumpDuty {
    match rules {
        RuleSet::Rotterdam => OvertrumpDuty::Mandatory,
        RuleSet::Amsterdam if teammate_winning => OvertrumpDuty::Waived,
        RuleSet::Amsterdam => OvertrumpDuty::FollowFirst,
    }
}

/// Compute the set of cards the acting seat may play.
pub fn legal_cards(input: &LegalityInput<'_>) -> BTreeSet<Card> {
    let hand = input.hand;
    let Some(led) = input.led else {
        return hand.as_set().clone();
    };

    let trump = input.trump;
    let parts = HandPartition::of(hand, led, trump, input.winning.map(|(_, card)| card));
    let duty = overtrump_duty(input.rules, input.teammate_winning());

    if led == trump {
        // Trump led: overtrump when possible, otherwise follow with a lower trump.
        if !parts.higher_trumps.is_empty() {
            return parts.higher_trumps;
        }
        if !parts.follow.is_empty() {
            return parts.follow;
        }
    } else if !parts.follow.is_empty() {
        if parts.higher_trumps.is_empty() {
            return parts.follow;
        }
        return match duty {
            OvertrumpDuty::Mandatory => parts.higher_trumps,
            OvertrumpDuty::Waived => parts.higher_or_plain(),
            OvertrumpDuty::FollowFirst => parts.follow,
        };
    }

    // Cannot follow suit.
    if duty == OvertrumpDuty::Waived {
        let free = parts.higher_or_plain();
        if !free.is_empty() {
            return free;
        }
    }
    if !parts.higher_trumps.is_empty() {
        return parts.higher_trumps;
    }
    if !parts.plain.is_empty() {
        return parts.plain;
    }
    // Only lower trumps left.
    hand.as_set().clone()
}
