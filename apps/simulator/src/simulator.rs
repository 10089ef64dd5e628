//! Seeded random play of whole deals.

use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use klaverjas_engine::domain::{
    deal_to_players, derive_deal_seed, derive_player_seed, Deal, Player, Suit, PLAYERS,
};
use klaverjas_engine::{DealConfig, DomainError};

use crate::output::{DealSummary, TrickLog};

pub struct Simulator {
    base_seed: u64,
    config: DealConfig,
}

impl Simulator {
    pub fn new(base_seed: u64, config: DealConfig) -> Self {
        Self { base_seed, config }
    }

    /// Play deal `deal_no` to the end. The same base seed and deal number
    /// always produce the same deal.
    pub fn run_deal(&self, deal_no: u32) -> Result<DealSummary, DomainError> {
        let seed = derive_deal_seed(self.base_seed, deal_no);
        let mut table_rng = ChaCha8Rng::seed_from_u64(seed);

        let mut players: Vec<Player> = (0..PLAYERS)
            .map(|_| Player::with_random_name(&mut table_rng))
            .collect();
        deal_to_players(&mut players, seed)?;

        let mut config = self.config.clone();
        let trump = match config.trump.take() {
            Some(suit) => suit,
            None => *Suit::ALL
                .choose(&mut table_rng)
                .ok_or_else(|| DomainError::illegal_state("no suits to choose trump from"))?,
        };
        let mut deal = Deal::from_config(players, &config)?;
        deal.set_trump(trump)?;

        let mut seat_rngs: Vec<ChaCha8Rng> = (0..PLAYERS as u8)
            .map(|seat| ChaCha8Rng::seed_from_u64(derive_player_seed(self.base_seed, deal_no, seat)))
            .collect();

        while let Some(seat) = deal.player_to_act() {
            let legal: Vec<_> = deal.legal_cards()?.into_iter().collect();
            let hand = &deal.players()[seat as usize].hand;
            if legal.is_empty() || legal.iter().any(|c| !hand.contains(c)) {
                return Err(DomainError::illegal_state(format!(
                    "seat {seat} got legal set {legal:?} for hand {:?}",
                    hand.to_vec()
                )));
            }
            let card = *legal
                .choose(&mut seat_rngs[seat as usize])
                .ok_or_else(|| DomainError::illegal_state("empty legal set"))?;
            deal.play(card)?;
        }

        let tricks: Vec<TrickLog> = deal
            .tricks()
            .iter()
            .filter_map(|t| TrickLog::from_trick(t, trump))
            .collect();
        let tricks_won = deal.tricks_won();
        debug!(deal_no, seed, ?tricks_won, "Deal simulated");

        Ok(DealSummary {
            deal_no,
            seed,
            rules: deal.rules(),
            trump,
            bidder: deal.bidder(),
            players: deal.players().iter().map(|p| p.name.clone()).collect(),
            tricks_won,
            team_tricks: [
                tricks_won[0] + tricks_won[2],
                tricks_won[1] + tricks_won[3],
            ],
            tricks,
        })
    }
}
