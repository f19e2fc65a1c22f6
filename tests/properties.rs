//! Property tests for hand scoring, shuffling, payouts and whole sessions.

use std::collections::HashSet;

use bjround::{
    BasicBot, Bet, BotSettings, Card, CardSource, DECK_SIZE, Deck, DeckError, Hand, NullObserver,
    Rank, RoundResult, Session, StandardPayout, Suit, bot_bet,
};
use proptest::prelude::*;

fn arb_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len())
        .prop_map(|(suit, rank)| Card::new(Suit::ALL[suit], Rank::ALL[rank]))
}

fn arb_result() -> impl Strategy<Value = RoundResult> {
    prop_oneof![
        Just(RoundResult::PlayerWin),
        Just(RoundResult::DealerWin),
        Just(RoundResult::Push),
    ]
}

/// Best total counting at most one ace as 11.
fn reference_value(cards: &[Card]) -> u8 {
    let low: u8 = cards
        .iter()
        .map(|card| if card.is_ace() { 1 } else { card.value() })
        .sum();
    if cards.iter().any(|card| card.is_ace()) && low + 10 <= 21 {
        low + 10
    } else {
        low
    }
}

proptest! {
    #[test]
    fn hand_value_is_best_total(cards in prop::collection::vec(arb_card(), 0..12)) {
        let mut hand = Hand::new();
        for &card in &cards {
            hand.add_card(card);
        }

        let value = hand.value();
        prop_assert_eq!(value, reference_value(&cards));
        prop_assert_eq!(hand.is_bust(), value > 21);
        prop_assert_eq!(hand.value(), value);
        prop_assert_eq!(hand.len(), cards.len());
    }

    #[test]
    fn shuffled_deck_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::new(seed);
        let mut seen = HashSet::new();
        for _ in 0..DECK_SIZE {
            prop_assert!(seen.insert(deck.draw().unwrap()));
        }

        prop_assert_eq!(seen.len(), DECK_SIZE);
        prop_assert_eq!(deck.count(), 0);
        prop_assert_eq!(deck.draw(), Err(DeckError::Empty));
    }

    #[test]
    fn payout_magnitude_matches_stake(
        amount in 1usize..1_000_000,
        result in arb_result(),
        doubled in any::<bool>(),
    ) {
        let bet = Bet::new(amount).unwrap();
        let net = StandardPayout::net_change(bet, result, doubled);
        let stake = if doubled { amount * 2 } else { amount };

        match result {
            RoundResult::PlayerWin => prop_assert_eq!(net.unsigned_abs(), stake),
            RoundResult::DealerWin => {
                prop_assert!(net < 0);
                prop_assert_eq!(net.unsigned_abs(), stake);
            }
            RoundResult::Push => prop_assert_eq!(net, 0),
        }
        prop_assert!(net >= 0 || result == RoundResult::DealerWin);
    }

    #[test]
    fn sessions_conserve_money(seed in any::<u64>(), rounds in 1usize..15) {
        let mut session = Session::default().with_seed(seed);
        for (name, settings) in [
            ("Careful", BotSettings::conservative()),
            ("Steady", BotSettings::standard()),
            ("Bold", BotSettings::aggressive()),
        ] {
            session.join(name, 100, BasicBot::new(settings)).unwrap();
        }

        let mut expected_total: isize = 300;
        for _ in 0..rounds {
            if !session.can_continue() {
                break;
            }
            let report = session
                .play_round(|player| bot_bet(player.bankroll().balance()), NullObserver)
                .unwrap();
            expected_total += report.settlements.iter().map(|s| s.net).sum::<isize>();

            for settlement in &report.settlements {
                prop_assert!(settlement.net.unsigned_abs() <= settlement.bet * 2);
                if settlement.player_value > 21 {
                    prop_assert_eq!(settlement.result, RoundResult::DealerWin);
                }
            }
            for player in session.players() {
                prop_assert!(player.hands().len() <= 2);
            }
        }

        let total: usize = session
            .players()
            .iter()
            .map(|player| player.bankroll().balance())
            .sum();
        prop_assert_eq!(total as isize, expected_total);
    }
}
