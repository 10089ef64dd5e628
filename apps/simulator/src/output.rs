//! JSON-lines output of per-deal summaries.

use std::io::{self, Write};

use klaverjas_engine::domain::{Card, RuleSet, Seat, Suit, Trick, PLAYERS};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickLog {
    pub leader: Seat,
    pub winner: Seat,
    /// Cards in play order, starting with the leader's.
    pub cards: Vec<Card>,
}

impl TrickLog {
    pub fn from_trick(trick: &Trick, trump: Suit) -> Option<Self> {
        Some(Self {
            leader: trick.leader(),
            winner: trick.winning_slot(trump)?,
            cards: trick.plays().into_iter().map(|(_, card)| card).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealSummary {
    pub deal_no: u32,
    pub seed: u64,
    pub rules: RuleSet,
    pub trump: Suit,
    pub bidder: Seat,
    pub players: Vec<String>,
    pub tricks_won: [u8; PLAYERS],
    /// Seats 0 and 2 against seats 1 and 3.
    pub team_tricks: [u8; 2],
    pub tricks: Vec<TrickLog>,
}

/// Writes one JSON object per line.
pub struct SummaryWriter<W: Write> {
    out: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write(&mut self, summary: &DealSummary) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, summary)?;
        self.out.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
