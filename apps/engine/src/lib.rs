#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Trick-play engine for Klaverjas.
//!
//! Card ordering, trick winners and move legality under the Rotterdam and
//! Amsterdam rule sets, plus a `Deal` that drives eight tricks to the end.

pub mod config;
pub mod domain;
pub mod errors;
pub mod telemetry;

// Re-exports for public API
pub use config::DealConfig;
pub use domain::{
    card_beats, compare_cards, legal_cards, Card, CardOrdering, Deal, Hand, PlayOutcome, Player,
    Rank, RuleSet, Seat, Suit, Trick,
};
pub use errors::{ConfigKind, DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
