//! Structured events emitted by the engine, captured with the test layer.

use fifty_cli::logging::TestLogSubscriber;
use fifty_engine::cards::{full_deck, Card};
use fifty_engine::engine::{Engine, Layout, SeatLayout};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

fn capture<F: FnOnce()>(f: F) -> TestLogSubscriber {
    let subscriber = TestLogSubscriber::new();
    let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
    tracing::subscriber::with_default(registry, f);
    subscriber
}

fn c(s: &str) -> Card {
    s.parse().unwrap()
}

#[test]
fn start_logs_the_setup() {
    let logs = capture(|| {
        let mut engine = Engine::new(Some(42));
        engine.start(2).unwrap();
    });
    let started = logs.with_message("game started");
    assert_eq!(started.len(), 1);
    assert_eq!(started[0].level, Level::INFO);
    assert_eq!(started[0].target, "fifty_engine::engine");
    assert_eq!(started[0].field("opponents"), Some("2"));
    assert_eq!(started[0].field("seed"), Some("42"));
    assert!(started[0].field("opening_card").is_some());
}

#[test]
fn elimination_and_game_over_are_logged() {
    let logs = capture(|| {
        let layout = Layout {
            seats: vec![
                SeatLayout::human("Player 1", vec![c("2h")]),
                SeatLayout::ai("CPU 1", vec![c("10c"), c("8d")]),
            ],
            table: vec![c("5s")],
            sum: 45,
            turn: 1,
        };
        let mut engine = Engine::from_layout(1, layout).unwrap();
        assert!(!engine.check_current_player_can_move());
    });

    let eliminated = logs.with_message("player eliminated");
    assert_eq!(eliminated.len(), 1);
    assert_eq!(eliminated[0].field("player"), Some("CPU 1"));
    assert_eq!(eliminated[0].field("returned_cards"), Some("2"));

    let over = logs.with_message("game over");
    assert_eq!(over.len(), 1);
    assert_eq!(over[0].field("winner"), Some("Player 1"));
}

#[test]
fn recycling_is_logged() {
    let logs = capture(|| {
        let human = vec![c("2h"), c("3h")];
        let cpu = vec![c("2c")];
        let table: Vec<Card> = full_deck()
            .into_iter()
            .filter(|card| !human.contains(card) && !cpu.contains(card))
            .collect();
        let layout = Layout {
            seats: vec![
                SeatLayout::human("Player 1", human),
                SeatLayout::ai("CPU 1", cpu),
            ],
            table,
            sum: 0,
            turn: 0,
        };
        let mut engine = Engine::from_layout(1, layout).unwrap();
        engine.play_card(c("2h")).unwrap();
    });

    let recycled = logs.with_message("deck exhausted, table recycled");
    assert_eq!(recycled.len(), 1);
    assert_eq!(recycled[0].field("recycled"), Some("49"));
    assert_eq!(recycled[0].field("last_card"), Some("2h"));
    assert!(logs.with_message("card played").len() == 1);
}

#[test]
fn empty_draw_is_a_warning() {
    let logs = capture(|| {
        let cpu = vec![c("2c")];
        let human: Vec<Card> = full_deck().into_iter().filter(|k| !cpu.contains(k)).collect();
        let layout = Layout {
            seats: vec![
                SeatLayout::human("Player 1", human),
                SeatLayout::ai("CPU 1", cpu),
            ],
            table: Vec::new(),
            sum: 0,
            turn: 0,
        };
        let mut engine = Engine::from_layout(1, layout).unwrap();
        engine.play_card(c("2h")).unwrap();
    });
    let warnings: Vec<_> = logs
        .entries()
        .into_iter()
        .filter(|e| e.level == Level::WARN)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("player"), Some("Player 1"));
}
