/// Property-based tests for follow-suit and overtrump legality rules
use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::cards_logic::card_beats;
use crate::domain::hand::Hand;
use crate::domain::legality::{legal_cards, LegalityInput};
use crate::domain::rules::RuleSet;
use crate::domain::seats::{teammate_seat, Seat};
use crate::domain::trick::Trick;
use crate::domain::{test_gens, test_prelude, Card, Rank, Suit};

fn trick_from(leader: Seat, played: &[Card]) -> Trick {
    let mut trick = Trick::new(leader);
    for &card in played {
        trick.place(card).expect("partial trick has free slots");
    }
    trick
}

/// Independent split of the hand, written without HandPartition.
fn oracle_sets(
    hand: &Hand,
    led: Suit,
    trump: Suit,
    winning: Card,
) -> (BTreeSet<Card>, BTreeSet<Card>, BTreeSet<Card>) {
    let higher: BTreeSet<Card> = hand
        .iter()
        .copied()
        .filter(|c| c.suit == trump && card_beats(*c, winning, Some(led), trump))
        .collect();
    let follow: BTreeSet<Card> = hand
        .iter()
        .copied()
        .filter(|c| c.suit == led && !higher.contains(c))
        .collect();
    let plain: BTreeSet<Card> = hand
        .iter()
        .copied()
        .filter(|c| c.suit != led && c.suit != trump)
        .collect();
    (follow, higher, plain)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: legal plays are a non-empty subset of the hand
    #[test]
    fn prop_legal_subset_of_hand(
        (hand, played) in test_gens::hand_and_partial_trick(),
        leader in test_gens::seat(),
        trump in test_gens::suit(),
        rules in test_gens::rule_set(),
    ) {
        let trick = trick_from(leader, &played);
        let legal = legal_cards(&LegalityInput::for_trick(&trick, &hand, trump, rules));
        prop_assert!(!legal.is_empty(), "a non-empty hand always has a legal card");
        for card in &legal {
            prop_assert!(hand.contains(card), "legal card {} not in hand", card);
        }
    }

    /// Property: leading is unconstrained
    #[test]
    fn prop_leading_allows_whole_hand(
        hand in test_gens::hand(),
        leader in test_gens::seat(),
        trump in test_gens::suit(),
        rules in test_gens::rule_set(),
    ) {
        let trick = Trick::new(leader);
        let legal = legal_cards(&LegalityInput::for_trick(&trick, &hand, trump, rules));
        prop_assert_eq!(&legal, hand.as_set());
    }

    /// Property: must follow suit when holding it, unless an overtrump rule applies
    #[test]
    fn prop_follow_suit_when_possible(
        (hand, played) in test_gens::hand_and_partial_trick(),
        leader in test_gens::seat(),
        trump in test_gens::suit(),
        rules in test_gens::rule_set(),
    ) {
        let led = played[0].suit;
        prop_assume!(led != trump);
        let trick = trick_from(leader, &played);
        let winning = trick.winning_card(trump).expect("cards were played");
        let (follow, higher, _) = oracle_sets(&hand, led, trump, winning);
        prop_assume!(!follow.is_empty());

        let seat = trick.player_to_act();
        let teammate_winning = trick.winning_slot(trump) == Some(teammate_seat(seat));
        let legal = legal_cards(&LegalityInput::for_trick(&trick, &hand, trump, rules));

        if higher.is_empty() || (rules == RuleSet::Amsterdam && !teammate_winning) {
            prop_assert_eq!(legal, follow);
        }
    }

    /// Property: Rotterdam forces overtrump even over following suit
    #[test]
    fn prop_rotterdam_forces_overtrump(
        (hand, played) in test_gens::hand_and_partial_trick(),
        leader in test_gens::seat(),
        trump in test_gens::suit(),
    ) {
        let led = played[0].suit;
        prop_assume!(led != trump);
        let trick = trick_from(leader, &played);
        let winning = trick.winning_card(trump).expect("cards were played");
        let (_, higher, _) = oracle_sets(&hand, led, trump, winning);
        prop_assume!(!higher.is_empty());

        let legal = legal_cards(&LegalityInput::for_trick(&trick, &hand, trump, RuleSet::Rotterdam));
        prop_assert_eq!(legal, higher);
    }

    /// Property: Amsterdam waives overtrump while the teammate is winning
    #[test]
    fn prop_amsterdam_teammate_exemption(
        (hand, played) in test_gens::hand_and_partial_trick(),
        leader in test_gens::seat(),
        trump in test_gens::suit(),
    ) {
        let led = played[0].suit;
        prop_assume!(led != trump);
        let trick = trick_from(leader, &played);
        let seat = trick.player_to_act();
        prop_assume!(trick.winning_slot(trump) == Some(teammate_seat(seat)));
        let winning = trick.winning_card(trump).expect("cards were played");
        let (follow, higher, plain) = oracle_sets(&hand, led, trump, winning);
        prop_assume!(!higher.is_empty() || (follow.is_empty() && !plain.is_empty()));

        let legal = legal_cards(&LegalityInput::for_trick(&trick, &hand, trump, RuleSet::Amsterdam));
        let expected: BTreeSet<Card> = higher.union(&plain).copied().collect();
        prop_assert_eq!(legal, expected);
    }

    /// Property: a void player holding only trumps below the winning trump may play anything
    #[test]
    fn prop_only_low_trumps_means_whole_hand(
        (led, trump) in (test_gens::suit(), test_gens::suit()).prop_filter("led differs from trump", |(l, t)| l != t),
        led_rank in test_gens::rank(),
        low_ranks in proptest::sample::subsequence(
            vec![Rank::Seven, Rank::Eight, Rank::Queen, Rank::King, Rank::Ten, Rank::Ace, Rank::Nine],
            1..=6,
        ),
        leader in test_gens::seat(),
        rules in test_gens::rule_set(),
    ) {
        // Second seat trumps with the jack, the highest trump there is.
        let played = [Card::new(led, led_rank), Card::new(trump, Rank::Jack)];
        let trick = trick_from(leader, &played);
        let hand: Hand = low_ranks.into_iter().map(|r| Card::new(trump, r)).collect();

        let legal = legal_cards(&LegalityInput::for_trick(&trick, &hand, trump, rules));
        prop_assert_eq!(&legal, hand.as_set());
    }
}
