//! Error types.
//!
//! Only configuration problems are errors. Turn rotation, elimination and
//! stale timer fires are ordinary outcomes and never surface here.

use thiserror::Error;

/// Invalid game setup. Fatal to the call that reported it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be even, got {0}")]
    OddPlayerCount(usize),

    #[error("at least 2 teams are required, got {teams}")]
    TooFewTeams { teams: usize },

    #[error("{requested} teams requested but only {max} team colors exist")]
    PaletteExceeded { requested: usize, max: usize },

    #[error("game has not been initialized")]
    NotInitialized,

    #[error("expected {expected} player names, got {got}")]
    NameCountMismatch { expected: usize, got: usize },

    #[error("unknown game mode {0:?}")]
    UnknownGameMode(String),
}

/// A category list that could not be parsed.
#[derive(Debug, Error)]
#[error("invalid word list: {0}")]
pub struct WordListError(#[from] pub serde_json::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ConfigError::OddPlayerCount(5).to_string(),
            "player count must be even, got 5"
        );
        assert_eq!(
            ConfigError::PaletteExceeded { requested: 6, max: 5 }.to_string(),
            "6 teams requested but only 5 team colors exist"
        );
    }

    #[test]
    fn test_word_list_error_from_json() {
        let err: WordListError = serde_json::from_str::<Vec<u8>>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid word list"));
    }
}
