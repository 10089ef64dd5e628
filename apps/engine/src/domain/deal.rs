//! A deal: four seated players, one trump suit and up to eight tricks.

use std::collections::BTreeSet;

use tracing::{debug, info};

use super::cards_types::{Card, Suit};
use super::legality::{legal_cards, LegalityInput};
use super::player::Player;
use super::rules::{RuleSet, PLAYERS};
use super::seats::{is_valid_seat, teammate_seat, Seat};
use super::trick::Trick;
use crate::config::DealConfig;
use crate::errors::domain::{ConfigKind, DomainError};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Seat that played.
    pub seat: Seat,
    pub card: Card,
    /// Whether this card was the fourth of its trick.
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// Leader of the newly opened trick, if one was opened.
    pub next_leader: Option<Seat>,
    /// True once the last trick of the deal has been played.
    pub deal_finished: bool,
}

/// One round of eight tricks.
///
/// Owns the players (in seating order) and every trick played so far. The
/// first trick is opened at construction, led by the bidder.
#[derive(Debug, Clone)]
pub struct Deal {
    players: [Player; PLAYERS],
    bidder: Seat,
    trump: Option<Suit>,
    rules: RuleSet,
    tricks: Vec<Trick>,
}

impl Deal {
    pub fn new(
        players: Vec<Player>,
        bidder: Seat,
        trump: Option<Suit>,
        rules: RuleSet,
    ) -> Result<Self, DomainError> {
        let count = players.len();
        let players: [Player; PLAYERS] = players.try_into().map_err(|_| {
            DomainError::config(
                ConfigKind::PlayerCount,
                format!("invalid amount of players: {count}"),
            )
        })?;
        if !is_valid_seat(bidder) {
            return Err(DomainError::config(
                ConfigKind::BidderSeat,
                format!("invalid bidder index: {bidder}"),
            ));
        }

        debug!(bidder, rules = %rules, trump = ?trump, "Opening deal");
        Ok(Self {
            players,
            bidder,
            trump,
            rules,
            tricks: vec![Trick::new(bidder)],
        })
    }

    pub fn from_config(players: Vec<Player>, config: &DealConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Self::new(players, config.bidder, config.trump, config.rules)
    }

    /// Fix the trump suit. Allowed exactly once per deal.
    pub fn set_trump(&mut self, suit: Suit) -> Result<(), DomainError> {
        if let Some(existing) = self.trump {
            return Err(DomainError::config(
                ConfigKind::TrumpAlreadySet,
                format!("trump already set to {existing}"),
            ));
        }
        info!(trump = %suit, bidder = self.bidder, "Setting trump");
        self.trump = Some(suit);
        Ok(())
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn require_trump(&self) -> Result<Suit, DomainError> {
        self.trump.ok_or_else(|| {
            DomainError::config(ConfigKind::TrumpUnset, "trump suit has not been chosen")
        })
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn bidder(&self) -> Seat {
        self.bidder
    }

    pub fn players(&self) -> &[Player; PLAYERS] {
        &self.players
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat as usize)
    }

    /// All tricks so far, oldest first. The last one may still be open.
    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    /// The trick being played, or `None` once the deal is over.
    pub fn current_trick(&self) -> Option<&Trick> {
        self.tricks.last().filter(|t| !t.has_ended())
    }

    /// The most recent trick, open or not.
    pub fn last_trick(&self) -> Option<&Trick> {
        self.tricks.last()
    }

    /// A deal ends when its last trick closed without a successor.
    pub fn is_finished(&self) -> bool {
        self.current_trick().is_none()
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.current_trick().and_then(Trick::led_suit)
    }

    pub fn player_to_act(&self) -> Option<Seat> {
        self.current_trick().map(Trick::player_to_act)
    }

    /// Seat winning the most recent trick so far.
    pub fn winning_slot(&self) -> Result<Option<Seat>, DomainError> {
        let trump = self.require_trump()?;
        Ok(self.last_trick().and_then(|t| t.winning_slot(trump)))
    }

    pub fn winning_card(&self) -> Result<Option<Card>, DomainError> {
        let trump = self.require_trump()?;
        Ok(self.last_trick().and_then(|t| t.winning_card(trump)))
    }

    /// Legal cards for the seat to act. Empty once the deal is over.
    pub fn legal_cards(&self) -> Result<BTreeSet<Card>, DomainError> {
        let trump = self.require_trump()?;
        let Some(trick) = self.current_trick() else {
            return Ok(BTreeSet::new());
        };
        let hand = &self.players[trick.player_to_act() as usize].hand;
        Ok(legal_cards(&LegalityInput::for_trick(
            trick, hand, trump, self.rules,
        )))
    }

    /// Play `card` for the seat whose turn it is.
    ///
    /// All checks run before anything is mutated: on error the deal is
    /// unchanged.
    pub fn play(&mut self, card: Card) -> Result<PlayOutcome, DomainError> {
        let trump = self.require_trump()?;
        let Some(trick) = self.current_trick() else {
            return Err(DomainError::illegal_state("deal has already finished"));
        };

        let seat = trick.player_to_act();
        if trick.slot(seat).is_some() {
            return Err(DomainError::illegal_state(format!(
                "seat {seat} already played a card this trick"
            )));
        }

        let hand = &self.players[seat as usize].hand;
        let legal = legal_cards(&LegalityInput::for_trick(trick, hand, trump, self.rules));
        if !legal.contains(&card) {
            return Err(DomainError::illegal_move(seat, card));
        }

        self.players[seat as usize].hand.remove(card)?;
        let trick_no = self.tricks.len();
        let trick = self
            .tricks
            .last_mut()
            .ok_or_else(|| DomainError::illegal_state("deal has no trick"))?;
        trick.place(card)?;
        debug!(trick_no, seat, card = %card, "Card played");

        let mut outcome = PlayOutcome {
            seat,
            card,
            trick_completed: false,
            trick_winner: None,
            next_leader: None,
            deal_finished: false,
        };

        if !trick.has_ended() {
            return Ok(outcome);
        }

        let winner = trick
            .winning_slot(trump)
            .ok_or_else(|| DomainError::illegal_state("completed trick has no winner"))?;
        outcome.trick_completed = true;
        outcome.trick_winner = Some(winner);
        info!(trick_no, winner, "Trick complete");

        if self.players[winner as usize].hand.is_empty() {
            outcome.deal_finished = true;
            info!(tricks_won = ?self.tricks_won(), "Deal complete");
        } else {
            self.tricks.push(Trick::new(winner));
            outcome.next_leader = Some(winner);
        }

        Ok(outcome)
    }

    /// Teammate seat of `player`, who must be seated in this deal.
    pub fn teammate_index(&self, player: &Player) -> Result<Seat, DomainError> {
        self.players
            .iter()
            .position(|p| p == player)
            .map(|seat| teammate_seat(seat as Seat))
            .ok_or_else(|| {
                DomainError::PlayerNotFound(format!(
                    "player {} is not seated in this deal",
                    player.name
                ))
            })
    }

    /// Completed tricks won per seat.
    pub fn tricks_won(&self) -> [u8; PLAYERS] {
        let mut won = [0u8; PLAYERS];
        let Some(trump) = self.trump else {
            return won;
        };
        for trick in self.tricks.iter().filter(|t| t.has_ended()) {
            if let Some(seat) = trick.winning_slot(trump) {
                won[seat as usize] += 1;
            }
        }
        won
    }
}
