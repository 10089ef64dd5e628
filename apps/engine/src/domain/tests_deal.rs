use proptest::prelude::*;

use crate::config::DealConfig;
use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::deal::Deal;
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::domain::rules::{RuleSet, TRICKS_PER_DEAL};
use crate::domain::{test_gens, test_prelude, Card, Suit};
use crate::errors::domain::{ConfigKind, DomainError};

fn c(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

fn hand(tokens: &[&str]) -> Hand {
    try_parse_cards(tokens)
        .expect("hardcoded valid card tokens")
        .into_iter()
        .collect()
}

fn seated(hands: [&[&str]; 4]) -> Vec<Player> {
    hands
        .iter()
        .enumerate()
        .map(|(i, tokens)| Player::new(format!("p{i}"), hand(tokens)))
        .collect()
}

fn empty_players(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::named(format!("p{i}"))).collect()
}

#[test]
fn deal_requires_four_players() {
    for n in [0, 3, 5] {
        let err = Deal::new(empty_players(n), 0, Some(Suit::Hearts), RuleSet::Rotterdam).unwrap_err();
        assert!(
            matches!(err, DomainError::Configuration(ConfigKind::PlayerCount, _)),
            "{n} players gave {err:?}"
        );
    }
}

#[test]
fn deal_rejects_bad_bidder() {
    let err = Deal::new(empty_players(4), 4, None, RuleSet::Rotterdam).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Configuration(ConfigKind::BidderSeat, _)
    ));
}

#[test]
fn bidder_leads_first_trick() {
    for bidder in 0..4 {
        let deal = Deal::new(empty_players(4), bidder, Some(Suit::Clubs), RuleSet::Rotterdam).unwrap();
        assert_eq!(deal.tricks().len(), 1);
        assert_eq!(deal.player_to_act(), Some(bidder));
        assert_eq!(deal.led_suit(), None);
    }
}

#[test]
fn from_config_uses_all_settings() {
    let config = DealConfig {
        rules: RuleSet::Amsterdam,
        bidder: 3,
        trump: Some(Suit::Spades),
        seed: None,
    };
    let deal = Deal::from_config(empty_players(4), &config).unwrap();
    assert_eq!(deal.rules(), RuleSet::Amsterdam);
    assert_eq!(deal.bidder(), 3);
    assert_eq!(deal.trump(), Some(Suit::Spades));
}

#[test]
fn unset_trump_fails_fast() {
    let mut deal = Deal::new(
        seated([&["AS"], &["7S"], &["8S"], &["9S"]]),
        0,
        None,
        RuleSet::Rotterdam,
    )
    .unwrap();
    for err in [
        deal.legal_cards().unwrap_err(),
        deal.play(c("AS")).unwrap_err(),
        deal.winning_slot().unwrap_err(),
    ] {
        assert!(matches!(
            err,
            DomainError::Configuration(ConfigKind::TrumpUnset, _)
        ));
    }
    assert_eq!(deal.players()[0].hand.len(), 1);

    deal.set_trump(Suit::Diamonds).unwrap();
    assert_eq!(deal.legal_cards().unwrap().len(), 1);
    let err = deal.set_trump(Suit::Hearts).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Configuration(ConfigKind::TrumpAlreadySet, _)
    ));
    assert_eq!(deal.trump(), Some(Suit::Diamonds));
}

#[test]
fn void_player_must_trump_scenario() {
    // Trump hearts, spade jack led; seat 1 holds only hearts Q, A and diamond A.
    let mut deal = Deal::new(
        seated([&["JS", "7C", "8C"], &["QH", "AH", "AD"], &["7S", "8S", "9S"], &["TS", "KS", "QS"]]),
        0,
        Some(Suit::Hearts),
        RuleSet::Rotterdam,
    )
    .unwrap();
    deal.play(c("JS")).unwrap();
    let legal = deal.legal_cards().unwrap();
    assert_eq!(legal, [c("QH"), c("AH")].into_iter().collect());
}

#[test]
fn illegal_move_leaves_state_untouched() {
    let mut deal = Deal::new(
        seated([&["JS", "7C"], &["QH", "AD"], &["7S", "8D"], &["TS", "9D"]]),
        0,
        Some(Suit::Hearts),
        RuleSet::Rotterdam,
    )
    .unwrap();
    deal.play(c("JS")).unwrap();

    // Diamond ace is held but not legal; king of clubs is not even held.
    for card in [c("AD"), c("KC")] {
        let err = deal.play(card).unwrap_err();
        assert_eq!(err, DomainError::illegal_move(1, card));
    }
    assert_eq!(deal.players()[1].hand.len(), 2);
    assert_eq!(deal.player_to_act(), Some(1));
    assert_eq!(deal.current_trick().unwrap().cards_played(), 1);
}

#[test]
fn play_removes_card_fills_slot_and_advances_turn() {
    let mut deal = Deal::new(
        seated([&["9D", "7C"], &["AD", "8C"], &["7D", "9C"], &["KD", "TC"]]),
        2,
        Some(Suit::Spades),
        RuleSet::Amsterdam,
    )
    .unwrap();

    let outcome = deal.play(c("7D")).unwrap();
    assert_eq!(outcome.seat, 2);
    assert!(!outcome.trick_completed);
    assert!(!deal.players()[2].hand.contains(&c("7D")));
    assert_eq!(deal.current_trick().unwrap().slot(2), Some(c("7D")));
    assert_eq!(deal.player_to_act(), Some(3));
    assert_eq!(deal.led_suit(), Some(Suit::Diamonds));
}

#[test]
fn trick_winner_leads_next_trick() {
    let mut deal = Deal::new(
        seated([&["JS", "7C"], &["TS", "8C"], &["KS", "9C"], &["7D", "TC"]]),
        0,
        Some(Suit::Hearts),
        RuleSet::Rotterdam,
    )
    .unwrap();
    for token in ["JS", "TS", "KS"] {
        deal.play(c(token)).unwrap();
    }
    let outcome = deal.play(c("7D")).unwrap();
    assert!(outcome.trick_completed);
    assert_eq!(outcome.trick_winner, Some(1));
    assert_eq!(outcome.next_leader, Some(1));
    assert!(!outcome.deal_finished);
    assert_eq!(deal.tricks().len(), 2);
    assert!(deal.tricks()[0].has_ended());
    assert_eq!(deal.tricks()[0].winning_card(Suit::Hearts), Some(c("TS")));
    assert_eq!(deal.player_to_act(), Some(1));
    assert_eq!(deal.tricks_won(), [0, 1, 0, 0]);
}

#[test]
fn last_trick_ends_the_deal() {
    let mut deal = Deal::new(
        seated([&["7C"], &["8C"], &["9C"], &["TC"]]),
        0,
        Some(Suit::Hearts),
        RuleSet::Rotterdam,
    )
    .unwrap();
    for token in ["7C", "8C", "9C"] {
        deal.play(c(token)).unwrap();
    }
    let outcome = deal.play(c("TC")).unwrap();
    assert!(outcome.deal_finished);
    assert_eq!(outcome.next_leader, None);
    assert!(deal.is_finished());
    assert_eq!(deal.tricks().len(), 1);
    assert_eq!(deal.player_to_act(), None);
    assert!(deal.legal_cards().unwrap().is_empty());
    assert_eq!(deal.winning_slot().unwrap(), Some(3));

    let err = deal.play(c("TC")).unwrap_err();
    assert!(matches!(err, DomainError::IllegalState(_)));
}

#[test]
fn teammate_lookup() {
    let players: Vec<Player> = ["1", "2", "3", "4"].into_iter().map(Player::named).collect();
    let deal = Deal::new(players, 0, None, RuleSet::Rotterdam).unwrap();
    assert_eq!(deal.teammate_index(&Player::named("1")).unwrap(), 2);
    assert_eq!(deal.teammate_index(&Player::named("2")).unwrap(), 3);
    assert_eq!(deal.teammate_index(&Player::named("3")).unwrap(), 0);
    assert_eq!(deal.teammate_index(&Player::named("4")).unwrap(), 1);

    let err = deal.teammate_index(&Player::named("5")).unwrap_err();
    assert!(matches!(err, DomainError::PlayerNotFound(_)));
}

#[test]
fn amsterdam_partner_may_discard_in_live_deal() {
    // Seat 0 leads the spade ace and is winning; seat 1 plays low; seat 2
    // (partner of 0) is void in spades and may keep its trump.
    let mut deal = Deal::new(
        seated([&["AS", "7C"], &["7S", "8C"], &["9H", "AD"], &["KS", "TC"]]),
        0,
        Some(Suit::Hearts),
        RuleSet::Amsterdam,
    )
    .unwrap();
    deal.play(c("AS")).unwrap();
    deal.play(c("7S")).unwrap();
    assert_eq!(
        deal.legal_cards().unwrap(),
        [c("9H"), c("AD")].into_iter().collect()
    );
    deal.play(c("AD")).unwrap();
    assert_eq!(deal.winning_slot().unwrap(), Some(0));
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: any deal played with legal cards runs exactly eight tricks,
    /// each opened by the previous winner, and empties every hand.
    #[test]
    fn prop_legal_play_completes_deal(
        hands in test_gens::four_full_hands(),
        bidder in test_gens::seat(),
        trump in test_gens::suit(),
        rules in test_gens::rule_set(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 32),
    ) {
        let players: Vec<Player> = hands
            .into_iter()
            .enumerate()
            .map(|(i, h)| Player::new(format!("p{i}"), h))
            .collect();
        let mut deal = Deal::new(players, bidder, Some(trump), rules).unwrap();

        for pick in &picks {
            let seat = deal.player_to_act().unwrap();
            let legal: Vec<Card> = deal.legal_cards().unwrap().into_iter().collect();
            prop_assert!(!legal.is_empty());
            let hand = &deal.players()[seat as usize].hand;
            prop_assert!(legal.iter().all(|c| hand.contains(c)));
            let outcome = deal.play(*pick.get(&legal)).unwrap();
            prop_assert_eq!(outcome.seat, seat);
        }

        prop_assert!(deal.is_finished());
        prop_assert_eq!(deal.tricks().len(), TRICKS_PER_DEAL);
        prop_assert!(deal.players().iter().all(|p| p.hand.is_empty()));
        for pair in deal.tricks().windows(2) {
            prop_assert_eq!(pair[0].winning_slot(trump), Some(pair[1].leader()));
        }
    }
}
