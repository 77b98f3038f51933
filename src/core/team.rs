//! Teams: two players sharing one time budget.
//!
//! ## Elimination
//!
//! A team is out when either its explicit flag is set or its budget has
//! reached zero. The two signals come from different paths:
//!
//! - Running out of budget on the team clock sets the flag explicitly
//!   (`TurnEngine::on_team_eliminated`).
//! - A bomb penalty only drains the budget; elimination is then implied by
//!   the zero balance.
//!
//! `is_eliminated()` is the single predicate over both.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::TeamColor;
use super::event::GameEvent;
use super::player::{Player, PlayerSlot, TeamId};
use crate::timers::{format_clock, Millis};

/// A team of two players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    color: TeamColor,
    players: SmallVec<[Player; 2]>,
    remaining: Millis,
    flagged: bool,
    events: Vector<GameEvent>,
}

impl Team {
    /// Create a team with a full budget and no players yet.
    #[must_use]
    pub fn new(id: TeamId, color: TeamColor, budget: Millis) -> Self {
        Self {
            id,
            color,
            players: SmallVec::new(),
            remaining: budget,
            flagged: false,
            events: Vector::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    #[must_use]
    pub const fn color(&self) -> TeamColor {
        self.color
    }

    /// Players in slot order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player in a slot, if names have been assigned.
    #[must_use]
    pub fn player(&self, slot: PlayerSlot) -> Option<&Player> {
        self.players.get(slot.index())
    }

    /// Remaining budget in milliseconds. Never negative.
    #[must_use]
    pub const fn remaining(&self) -> Millis {
        self.remaining
    }

    /// Out of the game, by flag or by empty budget.
    #[must_use]
    pub const fn is_eliminated(&self) -> bool {
        self.flagged || self.remaining == 0
    }

    /// Whether the explicit elimination flag is set.
    #[must_use]
    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Event log in insertion order.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    pub(crate) fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub(crate) fn clear_players(&mut self) {
        self.players.clear();
    }

    pub(crate) fn set_remaining(&mut self, remaining: Millis) {
        self.remaining = remaining;
    }

    /// Drain the budget, clamping at zero. Returns what is left.
    pub(crate) fn subtract_time(&mut self, millis: Millis) -> Millis {
        self.remaining = self.remaining.saturating_sub(millis);
        self.remaining
    }

    pub(crate) fn apply_penalty(&mut self, penalty: Millis) -> Millis {
        self.subtract_time(penalty)
    }

    pub(crate) fn mark_eliminated(&mut self) {
        self.flagged = true;
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id, self.color.hex())?;
        if self.is_eliminated() {
            write!(f, " out")
        } else {
            write!(f, " {}", format_clock(self.remaining))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team::new(TeamId::new(0), TeamColor::DeepRed, 90_000)
    }

    #[test]
    fn test_new_team() {
        let team = team();
        assert_eq!(team.remaining(), 90_000);
        assert!(team.players().is_empty());
        assert!(team.player(PlayerSlot::First).is_none());
        assert!(!team.is_eliminated());
        assert!(team.events().is_empty());
    }

    #[test]
    fn test_subtract_clamps_at_zero() {
        let mut team = team();
        assert_eq!(team.subtract_time(30_000), 60_000);
        assert_eq!(team.subtract_time(100_000), 0);
        assert_eq!(team.remaining(), 0);
    }

    #[test]
    fn test_zero_budget_implies_elimination() {
        let mut team = team();
        team.apply_penalty(90_000);
        assert!(team.is_eliminated());
        assert!(!team.is_flagged());
    }

    #[test]
    fn test_flag_implies_elimination() {
        let mut team = team();
        team.mark_eliminated();
        assert!(team.is_eliminated());
        assert_eq!(team.remaining(), 90_000);
    }

    #[test]
    fn test_players_by_slot() {
        let mut team = team();
        team.add_player(Player::new("A", team.id()));
        team.add_player(Player::new("B", team.id()));

        assert_eq!(team.player(PlayerSlot::First).map(Player::name), Some("A"));
        assert_eq!(team.player(PlayerSlot::Second).map(Player::name), Some("B"));

        team.clear_players();
        assert!(team.players().is_empty());
    }

    #[test]
    fn test_event_log_order() {
        let mut team = team();
        team.record(GameEvent::guessed("one", 1_000));
        team.record(GameEvent::exploded("two", 2_000, 15_000));

        let words: Vec<_> = team.events().iter().map(GameEvent::word).collect();
        assert_eq!(words, vec!["one", "two"]);
    }

    #[test]
    fn test_display() {
        let mut team = team();
        assert_eq!(team.to_string(), "Team 1 (#B71C1C) 1:30");
        team.mark_eliminated();
        assert_eq!(team.to_string(), "Team 1 (#B71C1C) out");
    }
}
