//! Three bots play a seeded session until they go broke or the round cap is hit.
//!
//! Run with `RUST_LOG=debug` to see the engine's own logging.

use std::env;

use bjround::{
    BasicBot, BotSettings, Card, GameObserver, Player, PlayerHand, Session, TableOptions, bot_bet,
};

const MAX_ROUNDS: u32 = 25;

/// Prints the table as it plays.
struct TablePrinter;

impl GameObserver for TablePrinter {
    fn on_dealer_dealt(&mut self, up_card: Card, _hole_card: Card) {
        println!("  Dealer shows {up_card}");
    }

    fn on_player_dealt(&mut self, player: &Player, hand: &PlayerHand, card: Card) {
        if hand.hand().len() == 2 {
            println!(
                "  {} is dealt {card} ({})",
                player.name(),
                hand.hand().value()
            );
        }
    }

    fn on_player_decision(&mut self, player: &Player, _hand: &PlayerHand, decision: &str) {
        println!("  {} chooses {decision}", player.name());
    }

    fn on_player_card_drawn(&mut self, player: &Player, hand: &PlayerHand, card: Card) {
        let note = if hand.hand().is_bust() { ", bust" } else { "" };
        println!(
            "  {} draws {card} ({}{note})",
            player.name(),
            hand.hand().value()
        );
    }

    fn on_dealer_card_drawn(&mut self, card: Card, dealer_value: u8) {
        println!("  Dealer draws {card} ({dealer_value})");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let mut session = Session::default()
        .with_seed(seed)
        .with_options(TableOptions::default());
    for (name, settings) in [
        ("Careful", BotSettings::conservative()),
        ("Steady", BotSettings::standard()),
        ("Bold", BotSettings::aggressive()),
    ] {
        if let Err(err) = session.join(name, 100, BasicBot::new(settings)) {
            eprintln!("Could not seat {name}: {err}");
            return;
        }
    }

    println!("Bot session, seed {seed}");

    while session.can_continue() && session.rounds_played() < MAX_ROUNDS {
        println!("Round {}", session.rounds_played() + 1);
        let report = match session
            .play_round(|player| bot_bet(player.bankroll().balance()), TablePrinter)
        {
            Ok(report) => report,
            Err(err) => {
                eprintln!("Round failed: {err}");
                break;
            }
        };

        println!("  Dealer finishes on {}", report.dealer_value);
        for settlement in &report.settlements {
            let name = session
                .player(settlement.key.player)
                .map_or("?", Player::name);
            println!(
                "  {name}: {} with {}, {:+}",
                settlement.result, settlement.player_value, settlement.net
            );
        }
    }

    println!("After {} rounds:", session.rounds_played());
    for player in session.players() {
        println!("  {}: {}", player.name(), player.bankroll().balance());
    }
}
