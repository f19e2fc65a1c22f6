use bjround::{
    BasicBot, BetError, BotSettings, NullObserver, Player, PlayerError, PlayerId, RoundReport,
    Session, SessionError, bot_bet,
};

fn by_balance(player: &Player) -> usize {
    bot_bet(player.bankroll().balance())
}

fn bot_table(seed: u64) -> Session {
    let mut session = Session::default().with_seed(seed);
    session
        .join("Careful", 100, BasicBot::new(BotSettings::conservative()))
        .unwrap();
    session
        .join("Steady", 100, BasicBot::new(BotSettings::standard()))
        .unwrap();
    session
        .join("Bold", 100, BasicBot::new(BotSettings::aggressive()))
        .unwrap();
    session
}

fn play(session: &mut Session, rounds: usize) -> Vec<RoundReport> {
    (0..rounds)
        .map(|_| session.play_round(by_balance, NullObserver).unwrap())
        .collect()
}

#[test]
fn join_assigns_sequential_ids() {
    let mut session = Session::default();
    assert_eq!(session.join("A", 10, BasicBot::default()), Ok(PlayerId(0)));
    assert_eq!(session.join("B", 10, BasicBot::default()), Ok(PlayerId(1)));
    assert_eq!(
        session.join("", 10, BasicBot::default()),
        Err(PlayerError::EmptyName)
    );

    assert_eq!(session.players().len(), 2);
    assert_eq!(session.player(PlayerId(1)).unwrap().name(), "B");
    assert_eq!(session.rounds_played(), 0);
}

#[test]
fn seeded_sessions_replay_identically() {
    let mut first = bot_table(2024);
    let mut second = bot_table(2024);

    assert_eq!(play(&mut first, 5), play(&mut second, 5));

    for (a, b) in first.players().iter().zip(second.players()) {
        assert_eq!(a.bankroll(), b.bankroll());
    }
}

#[test]
fn balances_follow_reported_settlements() {
    let mut session = bot_table(11);

    for round in 1..=20 {
        if !session.can_continue() {
            break;
        }
        let before: Vec<usize> = session
            .players()
            .iter()
            .map(|player| player.bankroll().balance())
            .collect();

        let report = session.play_round(by_balance, NullObserver).unwrap();
        assert_eq!(report.round, round);
        assert_eq!(session.rounds_played(), round);
        assert!(report.dealer_value >= 17);

        for (player, start) in session.players().iter().zip(before) {
            let expected = start.checked_add_signed(report.net_for(player.id())).unwrap();
            assert_eq!(player.bankroll().balance(), expected);
        }

        for settlement in &report.settlements {
            assert_eq!(report.result_for(settlement.key), Some(settlement.result));
        }
    }
}

#[test]
fn broke_players_sit_out() {
    let mut session = Session::default().with_seed(3);
    let broke = session.join("Broke", 0, BasicBot::default()).unwrap();
    let solvent = session.join("Solvent", 50, BasicBot::default()).unwrap();

    let report = session
        .play_round(
            |player| {
                assert_ne!(player.id(), broke, "broke players are not asked to bet");
                5
            },
            NullObserver,
        )
        .unwrap();

    assert!(
        report
            .settlements
            .iter()
            .all(|settlement| settlement.key.player == solvent)
    );
    assert!(session.player(broke).unwrap().hands().is_empty());
    assert_eq!(report.net_for(broke), 0);
}

#[test]
fn session_without_money_cannot_play() {
    let mut empty = Session::default();
    assert!(!empty.can_continue());
    assert!(matches!(
        empty.play_round(by_balance, NullObserver),
        Err(SessionError::NoPlayers)
    ));

    let mut broke = Session::default();
    broke.join("Broke", 0, BasicBot::default()).unwrap();
    assert!(matches!(
        broke.play_round(by_balance, NullObserver),
        Err(SessionError::NoPlayers)
    ));
}

#[test]
fn bad_wagers_are_rejected() {
    let mut session = Session::default().with_seed(8);
    session.join("Ada", 20, BasicBot::default()).unwrap();

    assert!(matches!(
        session.play_round(|_| 0, NullObserver),
        Err(SessionError::Bet(BetError::ZeroBet))
    ));
    assert!(matches!(
        session.play_round(|_| 21, NullObserver),
        Err(SessionError::Bet(BetError::InsufficientFunds))
    ));
    assert_eq!(session.rounds_played(), 0);
    assert_eq!(session.players()[0].bankroll().balance(), 20);
}

#[test]
fn bot_bet_is_a_tenth_with_a_floor() {
    assert_eq!(bot_bet(1000), 100);
    assert_eq!(bot_bet(19), 1);
    assert_eq!(bot_bet(1), 1);
}

#[test]
fn join_stops_when_ids_run_out() {
    let mut session = Session::default();
    for seat in 0..=u8::MAX {
        assert_eq!(
            session.join(format!("Seat {seat}"), 10, BasicBot::default()),
            Ok(PlayerId(seat))
        );
    }

    assert_eq!(
        session.join("Latecomer", 10, BasicBot::default()),
        Err(PlayerError::TableFull)
    );
    assert_eq!(session.players().len(), 256);
}
