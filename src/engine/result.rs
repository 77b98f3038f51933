//! Game outcome.

use serde::{Deserialize, Serialize};

use crate::core::TeamId;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Last team standing.
    Winner(TeamId),
    /// Every team went out at once.
    Draw,
}

impl GameResult {
    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        matches!(self, GameResult::Winner(t) if *t == team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(TeamId::new(1));
        assert!(!result.is_winner(TeamId::new(0)));
        assert!(result.is_winner(TeamId::new(1)));

        assert!(!GameResult::Draw.is_winner(TeamId::new(0)));
    }
}
