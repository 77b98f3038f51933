//! Shared fixtures for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use word_bomb::core::{GameMode, SessionConfig};
use word_bomb::engine::TurnEngine;
use word_bomb::session::{GameSession, Notification};
use word_bomb::timers::ManualClock;
use word_bomb::words::{Category, WordDeck};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once. Level from `TEST_LOG`, then `RUST_LOG`,
/// otherwise `warn`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn catalog() -> Vec<Category> {
    vec![
        Category::new("animals", "Animals", "🦁")
            .with_word("giraffe", 1)
            .with_word("octopus", 2)
            .with_word("platypus", 3),
        Category::new("jobs", "Jobs", "🧑‍🔧")
            .with_word("baker", 1)
            .with_word("pilot", 1),
        Category::new("void", "Void", ""),
    ]
}

/// Seat names `p0`, `p1`, ... in seating order.
pub fn names(players: usize) -> Vec<String> {
    (0..players).map(|i| format!("p{}", i)).collect()
}

/// Initialized engine with names seated and the animal words loaded.
pub fn engine(players: usize, mode: GameMode) -> TurnEngine<WordDeck> {
    init_logging();
    let mut engine = TurnEngine::new(WordDeck::new(catalog(), 11));
    engine.initialize_game(players, mode).unwrap();
    engine.set_player_names(names(players)).unwrap();
    engine.prepare_words(&["animals".to_string()].into_iter().collect());
    engine
}

pub type TestSession = GameSession<WordDeck, Vec<Notification>, ManualClock>;

/// Quick-mode session over the given categories, driven by `clock`.
pub fn session_with(players: usize, categories: &[&str], clock: &ManualClock) -> TestSession {
    init_logging();
    let mut config = SessionConfig::new(players)
        .with_mode(GameMode::Quick)
        .with_names(names(players));
    for id in categories {
        config = config.with_category(*id);
    }
    GameSession::new(&config, WordDeck::new(catalog(), 11), Vec::new(), clock.clone()).unwrap()
}

pub fn session(players: usize, clock: &ManualClock) -> TestSession {
    session_with(players, &["animals"], clock)
}

/// Notifications matching a predicate.
pub fn count<F>(session: &TestSession, pred: F) -> usize
where
    F: Fn(&Notification) -> bool,
{
    session.sink().iter().filter(|n| pred(n)).count()
}
