//! Game configuration types.
//!
//! A game is configured once, before play starts:
//! - `GameMode`: one of the two canonical timing presets
//! - `ModeTimings`: the four durations the engine actually runs on
//! - `TeamColor`: fixed palette, assigned by team creation order
//! - `SessionConfig`: everything a session needs to start
//!
//! Player counts are validated here so the engine and the session agree on
//! the same rules.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::timers::Millis;

/// Team color, assigned by creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    DeepRed,
    DeepBlue,
    DeepGreen,
    DeepOrange,
    DeepPurple,
}

/// Palette in assignment order. Its length caps the number of teams.
pub const PALETTE: [TeamColor; 5] = [
    TeamColor::DeepRed,
    TeamColor::DeepBlue,
    TeamColor::DeepGreen,
    TeamColor::DeepOrange,
    TeamColor::DeepPurple,
];

/// Fewest teams a game can be played with.
pub const MIN_TEAMS: usize = 2;

/// Most teams a game can be played with.
pub const MAX_TEAMS: usize = PALETTE.len();

impl TeamColor {
    /// Hex color code, chosen to stay readable on a white background.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            TeamColor::DeepRed => "#B71C1C",
            TeamColor::DeepBlue => "#0D47A1",
            TeamColor::DeepGreen => "#1B5E20",
            TeamColor::DeepOrange => "#E65100",
            TeamColor::DeepPurple => "#4A148C",
        }
    }

    /// Color for the team created at `index`.
    #[must_use]
    pub fn for_index(index: usize) -> Option<Self> {
        PALETTE.get(index).copied()
    }
}

/// The four durations a game runs on, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModeTimings {
    /// Starting budget of every team.
    pub team_time: Millis,
    /// Length of one bomb countdown.
    pub bomb_time: Millis,
    /// Taken from the holding team when the bomb explodes.
    pub penalty: Millis,
    /// Lockout after each word before a skip is allowed.
    pub skip_cooldown: Millis,
}

impl ModeTimings {
    /// Create custom timings.
    #[must_use]
    pub const fn new(team_time: Millis, bomb_time: Millis, penalty: Millis, skip_cooldown: Millis) -> Self {
        Self {
            team_time,
            bomb_time,
            penalty,
            skip_cooldown,
        }
    }
}

impl Default for ModeTimings {
    fn default() -> Self {
        GameMode::Quick.timings()
    }
}

/// Canonical timing presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// 1:30 per team, 25s bomb.
    #[default]
    Quick,
    /// 2:45 per team, 40s bomb.
    Professional,
}

impl GameMode {
    #[must_use]
    pub const fn timings(self) -> ModeTimings {
        match self {
            GameMode::Quick => ModeTimings::new(90_000, 25_000, 15_000, 8_000),
            GameMode::Professional => ModeTimings::new(165_000, 40_000, 15_000, 8_000),
        }
    }

    #[must_use]
    pub const fn team_time(self) -> Millis {
        self.timings().team_time
    }

    #[must_use]
    pub const fn bomb_time(self) -> Millis {
        self.timings().bomb_time
    }

    #[must_use]
    pub const fn penalty(self) -> Millis {
        self.timings().penalty
    }

    #[must_use]
    pub const fn skip_cooldown(self) -> Millis {
        self.timings().skip_cooldown
    }
}

impl From<GameMode> for ModeTimings {
    fn from(mode: GameMode) -> Self {
        mode.timings()
    }
}

impl std::str::FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(GameMode::Quick),
            "professional" => Ok(GameMode::Professional),
            _ => Err(ConfigError::UnknownGameMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::Quick => write!(f, "quick"),
            GameMode::Professional => write!(f, "professional"),
        }
    }
}

/// Check a player count and return the number of teams it makes.
pub fn team_count_for(player_count: usize) -> Result<usize, ConfigError> {
    if player_count % 2 != 0 {
        return Err(ConfigError::OddPlayerCount(player_count));
    }
    let teams = player_count / 2;
    if teams < MIN_TEAMS {
        return Err(ConfigError::TooFewTeams { teams });
    }
    if teams > MAX_TEAMS {
        return Err(ConfigError::PaletteExceeded {
            requested: teams,
            max: MAX_TEAMS,
        });
    }
    Ok(teams)
}

/// Placeholder for a seat left blank (0-based seat, 1-based label).
#[must_use]
pub fn default_player_name(seat: usize) -> String {
    format!("Player {}", seat + 1)
}

/// Trim a raw name, falling back to the seat placeholder when blank.
#[must_use]
pub fn normalize_player_name(raw: &str, seat: usize) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_player_name(seat)
    } else {
        trimmed.to_string()
    }
}

/// Everything needed to start a session.
///
/// Names are given in seating order (alternating teams, see
/// `TurnEngine::set_player_names`). Leaving them out seats placeholders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Even, 4 to 10.
    pub player_count: usize,

    /// Durations for this game.
    pub timings: ModeTimings,

    /// Display names in seating order; empty means all placeholders.
    pub names: Vec<String>,

    /// Word categories to draw from.
    pub categories: Vec<String>,

    /// Seed for the word shuffle. The session reseeds its word source with
    /// it before preparing the pool.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            timings: ModeTimings::default(),
            names: Vec::new(),
            categories: Vec::new(),
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Create a config for `player_count` players in Quick mode.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Use a preset.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.timings = mode.timings();
        self
    }

    /// Use custom durations.
    #[must_use]
    pub fn with_timings(mut self, timings: ModeTimings) -> Self {
        self.timings = timings;
        self
    }

    /// Set player names in seating order.
    #[must_use]
    pub fn with_names<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Add a word category.
    #[must_use]
    pub fn with_category(mut self, id: impl Into<String>) -> Self {
        self.categories.push(id.into());
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of teams this config makes.
    pub fn validate(&self) -> Result<usize, ConfigError> {
        let teams = team_count_for(self.player_count)?;
        if !self.names.is_empty() && self.names.len() != self.player_count {
            return Err(ConfigError::NameCountMismatch {
                expected: self.player_count,
                got: self.names.len(),
            });
        }
        Ok(teams)
    }

    /// Names in seating order, placeholders filled in.
    #[must_use]
    pub fn seat_names(&self) -> Vec<String> {
        (0..self.player_count)
            .map(|seat| normalize_player_name(self.names.get(seat).map_or("", String::as_str), seat))
            .collect()
    }
}
