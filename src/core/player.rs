//! Team and player identification.
//!
//! ## TeamId
//!
//! Type-safe team identifier. Teams are numbered in creation order, which is
//! also the order of the color palette and of the turn rotation.
//!
//! ## PlayerSlot
//!
//! Every team has exactly two players. The slot says which of the two is up;
//! the whole table shares one slot value, flipped each time the rotation laps.

use serde::{Deserialize, Serialize};

use super::config::MAX_TEAMS;

/// Team identifier (0-based, creation order).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all team IDs for a game with `team_count` teams,
    /// capped at the palette size.
    ///
    /// ```
    /// use word_bomb::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(3).collect();
    /// assert_eq!(teams, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count.min(MAX_TEAMS)).map(|i| TeamId(i as u8))
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0 + 1)
    }
}

/// Which of a team's two players holds the turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// The player seated in the first half of the ring.
    #[default]
    First,
    /// The player seated in the second half of the ring.
    Second,
}

impl PlayerSlot {
    /// Index into a team's player list.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerSlot::First => 0,
            PlayerSlot::Second => 1,
        }
    }

    /// The other slot.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }
}

/// A named player belonging to one team.
///
/// Immutable once created; reassigning names replaces the players outright.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    team: TeamId,
}

impl Player {
    /// Create a new player.
    pub fn new(name: impl Into<String>, team: TeamId) -> Self {
        Self {
            name: name.into(),
            team,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning team.
    #[must_use]
    pub const fn team(&self) -> TeamId {
        self.team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_id_basics() {
        let t0 = TeamId::new(0);
        let t4 = TeamId::new(4);

        assert_eq!(t0.index(), 0);
        assert_eq!(t4.index(), 4);
        assert_eq!(format!("{}", t0), "Team 1");
    }

    #[test]
    fn test_all_capped_at_palette() {
        assert_eq!(TeamId::all(300).count(), MAX_TEAMS);
        assert_eq!(TeamId::all(256).last(), Some(TeamId::new(MAX_TEAMS as u8 - 1)));
        assert_eq!(TeamId::all(0).count(), 0);
    }

    #[test]
    fn test_slot_flip() {
        assert_eq!(PlayerSlot::default(), PlayerSlot::First);
        assert_eq!(PlayerSlot::First.flipped(), PlayerSlot::Second);
        assert_eq!(PlayerSlot::Second.flipped(), PlayerSlot::First);
        assert_eq!(PlayerSlot::Second.index(), 1);
    }

    #[test]
    fn test_player_accessors() {
        let player = Player::new("Sara", TeamId::new(2));
        assert_eq!(player.name(), "Sara");
        assert_eq!(player.team(), TeamId::new(2));
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new("Reza", TeamId::new(1));
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
