//! Core data model: teams, players, events, configuration, errors, RNG.
//!
//! These are passive data holders. All turn logic lives in `engine`, all
//! timing in `timers`.

pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod rng;
pub mod team;

pub use config::{
    default_player_name, normalize_player_name, team_count_for, GameMode, ModeTimings,
    SessionConfig, TeamColor, MAX_TEAMS, MIN_TEAMS, PALETTE,
};
pub use error::{ConfigError, WordListError};
pub use event::GameEvent;
pub use player::{Player, PlayerSlot, TeamId};
pub use rng::GameRng;
pub use team::Team;
