//! Round phases.
//!
//! ```text
//! NotStarted ──initialize──▶ AwaitingTurnStart ◀──────────────────────┐
//!                               │  ▲      ▲                            │
//!                     start_turn│  │guess │explosion, team survives    │
//!                               ▼  │      │                            │
//!                             RoundActive ─┘                           │
//!                               │   ▲                                  │
//!                          pause│   │resume                            │
//!                               ▼   │                                  │
//!                       RoundPausedManually                            │
//!                                                                      │
//! RoundActive ──time out / explosion eliminates──▶ TeamEliminatedPending
//!                                                    │ acknowledge
//!                                                    ├──────────────────┘
//!                                                    ▼ (one team left)
//!                                                 GameOver
//! ```
//!
//! `GameOver` is terminal until reset. A guess leaves the bomb live, and the
//! session follows it with `start_turn` at once, so only explosions and
//! eliminations wait for a tap.

use serde::{Deserialize, Serialize};

/// Where the table is in the turn cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No game initialized.
    #[default]
    NotStarted,
    /// Waiting for the current player to tap to start.
    AwaitingTurnStart,
    /// A word is on screen and the team clock runs.
    RoundActive,
    /// All timers suspended by the players.
    RoundPausedManually,
    /// A team just went out; waiting for the table to acknowledge.
    TeamEliminatedPending,
    /// One team (or none) left.
    GameOver,
}

impl RoundPhase {
    /// A word is being played right now.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, RoundPhase::RoundActive)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::GameOver)
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundPhase::NotStarted => "not started",
            RoundPhase::AwaitingTurnStart => "awaiting turn start",
            RoundPhase::RoundActive => "round active",
            RoundPhase::RoundPausedManually => "paused",
            RoundPhase::TeamEliminatedPending => "team eliminated",
            RoundPhase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert_eq!(RoundPhase::default(), RoundPhase::NotStarted);
        assert!(RoundPhase::RoundActive.is_playing());
        assert!(!RoundPhase::RoundPausedManually.is_playing());
        assert!(RoundPhase::GameOver.is_terminal());
        assert_eq!(RoundPhase::TeamEliminatedPending.to_string(), "team eliminated");
    }
}
