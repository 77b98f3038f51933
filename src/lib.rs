//! # word-bomb
//!
//! Turn engine for a team word-guessing party game played against a bomb.
//!
//! ## Game Model
//!
//! 1. **Teams of Two**: players sit in a ring alternating teams. One player
//!    describes a word, the partner guesses it.
//!
//! 2. **Shared Bomb**: one countdown per round. It keeps running through a
//!    correct guess, which hands the turn straight to the next team, so it
//!    can go off in any team's hands.
//!    The team holding it loses a fixed penalty and keeps the turn.
//!
//! 3. **Team Budgets**: every team drains its own time budget while it
//!    plays. An empty budget eliminates the team; the last team standing
//!    wins.
//!
//! ## Architecture
//!
//! - **Single Timeline**: no threads. The host polls `GameSession::tick()`
//!   and forwards taps; all state changes happen on that one timeline.
//!
//! - **Round Tokens**: every timer fire carries the token it was armed
//!   under and is dropped if the engine has moved on.
//!
//! - **Push-only Presentation**: the session reports state changes to a
//!   `PresentationSink` and never reads anything back.
//!
//! ## Modules
//!
//! - `core`: Teams, players, events, configuration, errors, RNG
//! - `words`: Word model and the word-supply contract
//! - `engine`: Turn rotation, penalties, elimination, win detection
//! - `timers`: Clocks, countdowns and round timer coordination
//! - `session`: Timer policy and presentation notifications

pub mod core;
pub mod engine;
pub mod session;
pub mod timers;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameEvent, GameMode, GameRng, ModeTimings, Player, PlayerSlot, SessionConfig,
    Team, TeamColor, TeamId, WordListError,
};

pub use crate::engine::{EngineSnapshot, Explosion, GameResult, RoundPhase, TurnEngine, TurnStart};

pub use crate::session::{
    DisplayedWord, GameSession, Notification, NullSink, PresentationSink, TeamSummary,
};

pub use crate::timers::{format_clock, Clock, Epoch, ManualClock, Millis, SystemClock, TimerFire, TimerKind};

pub use crate::words::{Category, Word, WordDeck, WordSource};
