//! RNG seed derivation utilities for deterministic simulation.
//!
//! One base seed fans out into independent seeds per deal (the shuffle) and
//! per deal + seat (a simulated player's choices).

/// Derive the shuffle seed for the `deal_no`-th deal of a session.
pub fn derive_deal_seed(base_seed: u64, deal_no: u32) -> u64 {
    // Different multiplier from the player seed to keep the streams apart
    base_seed
        .wrapping_add((deal_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2)
}

/// Derive the choice seed for one seat within one deal.
pub fn derive_player_seed(base_seed: u64, deal_no: u32, seat: u8) -> u64 {
    base_seed
        .wrapping_add((deal_no as u64).wrapping_mul(10_000))
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1)
}
