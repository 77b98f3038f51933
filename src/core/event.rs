//! Per-team game events.
//!
//! Every team keeps an append-only log of what happened while it held the
//! turn: words it got across, and bombs that went off in its hands. The log
//! is shown as a summary when the team is eliminated and is only cleared by
//! a full reset.

use serde::{Deserialize, Serialize};

use crate::timers::Millis;

/// Something that happened to a team during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The team's partner guessed the word.
    WordGuessed {
        word: String,
        time_spent: Millis,
    },

    /// The bomb exploded while the team held the word.
    BombExploded {
        word: String,
        time_spent: Millis,
        /// Penalty taken from the team's budget in the same transition.
        penalty: Millis,
    },
}

impl GameEvent {
    /// Create a word-guessed event.
    pub fn guessed(word: impl Into<String>, time_spent: Millis) -> Self {
        GameEvent::WordGuessed {
            word: word.into(),
            time_spent,
        }
    }

    /// Create a bomb-exploded event.
    pub fn exploded(word: impl Into<String>, time_spent: Millis, penalty: Millis) -> Self {
        GameEvent::BombExploded {
            word: word.into(),
            time_spent,
            penalty,
        }
    }

    /// The word that was on screen.
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            GameEvent::WordGuessed { word, .. } | GameEvent::BombExploded { word, .. } => word,
        }
    }

    /// Time spent on the word in milliseconds.
    #[must_use]
    pub fn time_spent(&self) -> Millis {
        match self {
            GameEvent::WordGuessed { time_spent, .. }
            | GameEvent::BombExploded { time_spent, .. } => *time_spent,
        }
    }

    /// Penalty applied, zero for guessed words.
    #[must_use]
    pub fn penalty(&self) -> Millis {
        match self {
            GameEvent::WordGuessed { .. } => 0,
            GameEvent::BombExploded { penalty, .. } => *penalty,
        }
    }

    /// Whether this records an explosion.
    #[must_use]
    pub fn is_explosion(&self) -> bool {
        matches!(self, GameEvent::BombExploded { .. })
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::WordGuessed { word, time_spent } => {
                write!(f, "guessed {:?} in {}s", word, time_spent / 1000)
            }
            GameEvent::BombExploded {
                word,
                time_spent,
                penalty,
            } => write!(
                f,
                "exploded on {:?} after {}s (-{}s)",
                word,
                time_spent / 1000,
                penalty / 1000
            ),
        }
    }
}
