//! Card game logic: rank priority tables and comparing card strength
//! within a trick.

use super::cards_types::{Card, Rank, Suit};

/// Priority of a rank in a non-trump suit. Higher wins.
///
/// 7 < 8 < 9 < J < Q < K < 10 < A
pub const fn plain_order(rank: Rank) -> u8 {
    match rank {
        Rank::Seven => 0,
        Rank::Eight => 1,
        Rank::Nine => 2,
        Rank::Jack => 3,
        Rank::Queen => 4,
        Rank::King => 5,
        Rank::Ten => 6,
        Rank::Ace => 7,
    }
}

/// Priority of a rank in the trump suit. Higher wins.
///
/// 7 < 8 < Q < K < 10 < A < 9 < J
pub const fn trump_order(rank: Rank) -> u8 {
    match rank {
        Rank::Seven => 0,
        Rank::Eight => 1,
        Rank::Queen => 2,
        Rank::King => 3,
        Rank::Ten => 4,
        Rank::Ace => 5,
        Rank::Nine => 6,
        Rank::Jack => 7,
    }
}

/// Outcome of comparing two cards in the context of a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOrdering {
    FirstWins,
    SecondWins,
    /// Neither card can affect the other's standing (e.g. two discards).
    Incomparable,
}

impl CardOrdering {
    /// Numeric encoding: -1 first wins, 1 second wins, 0 incomparable.
    pub const fn as_i8(self) -> i8 {
        match self {
            CardOrdering::FirstWins => -1,
            CardOrdering::SecondWins => 1,
            CardOrdering::Incomparable => 0,
        }
    }

    pub const fn reverse(self) -> Self {
        match self {
            CardOrdering::FirstWins => CardOrdering::SecondWins,
            CardOrdering::SecondWins => CardOrdering::FirstWins,
            CardOrdering::Incomparable => CardOrdering::Incomparable,
        }
    }

    fn by_priority(a: u8, b: u8) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => CardOrdering::FirstWins,
            std::cmp::Ordering::Less => CardOrdering::SecondWins,
            std::cmp::Ordering::Equal => CardOrdering::Incomparable,
        }
    }
}

pub fn hand_has_suit<'a, I>(hand: I, suit: Suit) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    hand.into_iter().any(|c| c.suit == suit)
}

/// Compare two cards given the led suit (if any card was led yet) and trump.
///
/// Same suit: trump order in the trump suit, plain order in the led suit (or
/// when nothing is led), incomparable in any other suit. Different suits: a
/// trump always wins, otherwise a led-suit card wins, otherwise incomparable.
pub fn compare_cards(a: Card, b: Card, led: Option<Suit>, trump: Suit) -> CardOrdering {
    if a.suit == b.suit {
        if a.suit == trump {
            return CardOrdering::by_priority(trump_order(a.rank), trump_order(b.rank));
        }
        if led.is_some_and(|l| l != a.suit) {
            return CardOrdering::Incomparable;
        }
        return CardOrdering::by_priority(plain_order(a.rank), plain_order(b.rank));
    }

    if a.suit == trump {
        return CardOrdering::FirstWins;
    }
    if b.suit == trump {
        return CardOrdering::SecondWins;
    }

    match led {
        Some(l) if a.suit == l => CardOrdering::FirstWins,
        Some(l) if b.suit == l => CardOrdering::SecondWins,
        _ => CardOrdering::Incomparable,
    }
}

/// True when `a` strictly beats `b`.
pub fn card_beats(a: Card, b: Card, led: Option<Suit>, trump: Suit) -> bool {
    compare_cards(a, b, led, trump) == CardOrdering::FirstWins
}
