//! Property tests for the deck, the evaluator and round transitions.

use bjtable::{
    Card, DECK_SIZE, Rank, Round, RoundOptions, RoundState, Seat, build_deck, evaluate,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone, Copy)]
enum Action {
    Deal,
    HitPlayer,
    HitDealer,
    Reset,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::Deal),
        4 => Just(Action::HitPlayer),
        4 => Just(Action::HitDealer),
        1 => Just(Action::Reset),
    ]
}

/// A random subset of the deck paired with a reordering of itself.
fn arb_hand_and_permutation() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    prop::sample::subsequence(build_deck().cards().to_vec(), 0..=12)
        .prop_flat_map(|cards| (Just(cards.clone()), Just(cards).prop_shuffle()))
}

fn hard_total(cards: &[Card]) -> u16 {
    cards
        .iter()
        .map(|card| match card.rank {
            Rank::Ace => 1,
            rank => u16::from(rank.value()),
        })
        .sum()
}

proptest! {
    #[test]
    fn shuffle_keeps_every_card(seed in any::<u64>()) {
        let deck = build_deck();
        let shuffled = deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(shuffled.len(), DECK_SIZE);
        prop_assert!(shuffled.verify_complete().is_ok());

        let mut sorted = shuffled.cards().to_vec();
        sorted.sort_by_key(|card| card.index());
        prop_assert_eq!(sorted.as_slice(), deck.cards());
    }

    #[test]
    fn evaluation_ignores_card_order((cards, permuted) in arb_hand_and_permutation()) {
        prop_assert_eq!(evaluate(&cards), evaluate(&permuted));
        prop_assert_eq!(evaluate(&cards), evaluate(&cards));
    }

    #[test]
    fn aces_count_high_only_when_safe((cards, _) in arb_hand_and_permutation()) {
        let value = evaluate(&cards);
        let hard = hard_total(&cards);
        let has_ace = cards.iter().any(|card| card.is_ace());

        if has_ace && hard + 10 <= 21 {
            prop_assert_eq!(value, hard + 10);
        } else {
            prop_assert_eq!(value, hard);
        }
    }

    #[test]
    fn deal_splits_one_shuffle(seed in any::<u64>()) {
        let mut round = Round::new(RoundOptions::default(), seed);
        round.deal().unwrap();

        prop_assert_eq!(round.player_hand().len(), 2);
        prop_assert_eq!(round.dealer_hand().len(), 2);
        prop_assert_eq!(round.remaining_cards(), 48);
        prop_assert!(round.verify_accounting().is_ok());
    }

    #[test]
    fn actions_preserve_card_accounting(
        seed in any::<u64>(),
        actions in prop::collection::vec(arb_action(), 0..40),
    ) {
        let mut round = Round::new(RoundOptions::default(), seed);

        for action in actions {
            let before = round.clone();
            match action {
                Action::Deal => round.deal().unwrap(),
                Action::HitPlayer => {
                    let allowed = before.can_hit(Seat::Player);
                    let hit = round.hit_player();
                    prop_assert_eq!(hit.is_some(), allowed);
                    if allowed {
                        prop_assert_eq!(round.player_hand().len(), before.player_hand().len() + 1);
                        prop_assert_eq!(round.remaining_cards(), before.remaining_cards() - 1);
                    } else {
                        prop_assert_eq!(round.player_hand(), before.player_hand());
                        prop_assert_eq!(round.deck(), before.deck());
                    }
                }
                Action::HitDealer => {
                    let allowed = before.can_hit(Seat::Dealer);
                    let hit = round.hit_dealer();
                    prop_assert_eq!(hit.is_some(), allowed);
                    if allowed {
                        prop_assert_eq!(round.dealer_hand().len(), before.dealer_hand().len() + 1);
                        prop_assert_eq!(round.remaining_cards(), before.remaining_cards() - 1);
                    } else {
                        prop_assert_eq!(round.dealer_hand(), before.dealer_hand());
                        prop_assert_eq!(round.deck(), before.deck());
                    }
                }
                Action::Reset => round.reset(),
            }

            prop_assert!(round.verify_accounting().is_ok());
            if round.state() == RoundState::Idle {
                prop_assert!(round.player_hand().is_empty());
                prop_assert!(round.dealer_hand().is_empty());
                prop_assert_eq!(round.remaining_cards(), DECK_SIZE);
            }
        }
    }
}
