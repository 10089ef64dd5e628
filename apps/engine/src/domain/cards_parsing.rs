//! Card parsing from string representations (e.g., "JS", "7C") and the
//! single-letter suit codes used by bidding front ends.

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::DomainError;

impl Suit {
    /// Single uppercase letter identifying this suit.
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
        }
    }

    /// Look up a suit by its code. Only `C`, `H`, `D` and `S` are accepted;
    /// lowercase and multi-character input are rejected.
    pub fn from_code(code: &str) -> Result<Suit, DomainError> {
        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Suit::try_from(ch),
            _ => Err(DomainError::InvalidSuitCode(code.to_string())),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "CLUBS",
            Suit::Hearts => "HEARTS",
            Suit::Diamonds => "DIAMONDS",
            Suit::Spades => "SPADES",
        }
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl TryFrom<char> for Suit {
    type Error = DomainError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'C' => Ok(Suit::Clubs),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'S' => Ok(Suit::Spades),
            _ => Err(DomainError::InvalidSuitCode(ch.to_string())),
        }
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::from_code(s)
    }
}

impl Rank {
    pub const fn token(self) -> char {
        match self {
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_token(ch: char) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.token() == ch)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
            Rank::Jack => "JACK",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
            Rank::Ace => "ACE",
        }
    }

    pub fn from_name(name: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.name() == name)
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || DomainError::ParseCard(s.to_string());
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_err());
        };
        let rank = Rank::from_token(rank_ch).ok_or_else(parse_err)?;
        let suit = Suit::try_from(suit_ch).map_err(|_| parse_err())?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "7C") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
