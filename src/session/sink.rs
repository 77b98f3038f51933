//! Push-only notifications to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{GameEvent, Team, TeamColor, TeamId};
use crate::timers::Millis;

/// What the word card shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayedWord {
    Word(String),
    /// The selected categories hold no words. Play continues regardless.
    NoWords,
}

/// A team as shown on the elimination and winner screens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: TeamId,
    pub color: TeamColor,
    pub players: Vec<String>,
    pub events: Vec<GameEvent>,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            team: team.id(),
            color: team.color(),
            players: team.players().iter().map(|p| p.name().to_string()).collect(),
            events: team.events().iter().cloned().collect(),
        }
    }
}

/// A state change the presentation layer may want to render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// Someone new holds the turn and must tap to start.
    TurnAnnounced {
        team: TeamId,
        player: String,
        next_player: String,
    },
    WordShown(DisplayedWord),
    /// Bomb countdown, once per displayed second.
    BombTick {
        remaining: Millis,
        /// Last ten seconds.
        intense: bool,
    },
    TeamTime {
        team: TeamId,
        remaining: Millis,
    },
    SkipReady(bool),
    BombExploded {
        team: TeamId,
        penalty: Millis,
        remaining: Millis,
    },
    TeamEliminated(TeamSummary),
    /// `None` when every team went out together.
    GameFinished { winner: Option<TeamSummary> },
}

/// Receives notifications. Never read back by the session.
pub trait PresentationSink {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order.
impl PresentationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<S: PresentationSink + ?Sized> PresentationSink for Box<S> {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}

/// Drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn notify(&mut self, _notification: Notification) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_summary_from_team() {
        let mut team = Team::new(TeamId::new(1), TeamColor::DeepBlue, 90_000);
        team.add_player(Player::new("Ben", TeamId::new(1)));
        team.add_player(Player::new("Ed", TeamId::new(1)));
        team.record(GameEvent::guessed("tea", 2_000));

        let summary = TeamSummary::from(&team);
        assert_eq!(summary.players, vec!["Ben", "Ed"]);
        assert_eq!(summary.color, TeamColor::DeepBlue);
        assert_eq!(summary.events.len(), 1);
    }

    #[test]
    fn test_vec_sink_keeps_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::SkipReady(false));
        sink.notify(Notification::WordShown(DisplayedWord::NoWords));
        assert_eq!(sink[0], Notification::SkipReady(false));
        assert_eq!(sink[1], Notification::WordShown(DisplayedWord::NoWords));

        NullSink.notify(Notification::SkipReady(true));
    }

    #[test]
    fn test_notification_json() {
        let n = Notification::BombTick { remaining: 9_000, intense: true };
        let json = serde_json::to_string(&n).unwrap();
        let back: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }
}
