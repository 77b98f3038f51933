//! The three round timers and the tokens that keep their fires honest.
//!
//! ## Tokens
//!
//! Each timer is armed under an [`Epoch`] handed out by the engine: the bomb
//! under the round token, the team clock and skip cooldown under the turn
//! token. A [`TimerFire`] carries the token it was armed with. Whoever
//! applies a fire compares it with the engine's current token first, so a
//! fire that outlived its round is dropped without touching state, no
//! matter what order cancellation and delivery happen in.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::clock::Millis;
use super::countdown::{Countdown, TeamClock};
use crate::core::ModeTimings;

/// Generation counter identifying one round or one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Epoch(pub u64);

impl Epoch {
    /// The following generation.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for Epoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which timer fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// The team's budget ran out.
    TeamBudget,
    /// The bomb countdown reached zero.
    Bomb,
    /// Skipping is allowed again.
    SkipCooldown,
}

/// A timer expiry, tagged with the token it was armed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerFire {
    pub kind: TimerKind,
    pub token: Epoch,
}

impl TimerFire {
    #[must_use]
    pub const fn new(kind: TimerKind, token: Epoch) -> Self {
        Self { kind, token }
    }
}

/// Bomb countdown, team clock and skip cooldown for one table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundTimers {
    bomb: Countdown,
    bomb_token: Epoch,
    team: TeamClock,
    team_token: Epoch,
    cooldown: Countdown,
    cooldown_token: Epoch,
}

impl RoundTimers {
    #[must_use]
    pub fn new(timings: ModeTimings) -> Self {
        Self {
            bomb: Countdown::new(timings.bomb_time),
            bomb_token: Epoch::default(),
            team: TeamClock::new(),
            team_token: Epoch::default(),
            cooldown: Countdown::new(timings.skip_cooldown),
            cooldown_token: Epoch::default(),
        }
    }

    /// Start a fresh bomb countdown.
    pub fn arm_bomb(&mut self, now: Millis, token: Epoch) {
        debug!(%token, "bomb armed");
        self.bomb.start(now);
        self.bomb_token = token;
    }

    /// Start charging the current team.
    pub fn arm_team(&mut self, now: Millis, token: Epoch) {
        self.team.start(now);
        self.team_token = token;
    }

    /// Restart the skip lockout.
    pub fn arm_cooldown(&mut self, now: Millis, token: Epoch) {
        self.cooldown.start(now);
        self.cooldown_token = token;
    }

    /// Token the team clock was armed with.
    #[must_use]
    pub const fn team_token(&self) -> Epoch {
        self.team_token
    }

    /// Uncharged playing time of the current team.
    pub fn take_team_elapsed(&mut self, now: Millis) -> Millis {
        self.team.take_elapsed(now)
    }

    /// Stop everything. Nothing fires afterwards until re-armed.
    pub fn cancel_all(&mut self) {
        self.bomb.cancel();
        self.team.stop();
        self.cooldown.cancel();
    }

    /// Suspend all three timers. Returns the team time not yet charged.
    pub fn pause_all(&mut self, now: Millis) -> Millis {
        self.bomb.pause(now);
        self.cooldown.pause(now);
        self.team.pause(now)
    }

    /// Resume bomb and cooldown with what was left; re-base the team clock.
    pub fn resume_all(&mut self, now: Millis) {
        self.bomb.resume(now);
        self.cooldown.resume(now);
        self.team.resume(now);
    }

    /// A bomb round is counting down (or paused mid-count).
    #[must_use]
    pub const fn bomb_live(&self) -> bool {
        self.bomb.is_running() || self.bomb.is_paused()
    }

    /// Instant the running bomb goes off.
    #[must_use]
    pub const fn bomb_deadline(&self) -> Option<Millis> {
        self.bomb.deadline()
    }

    #[must_use]
    pub fn bomb_remaining(&self, now: Millis) -> Millis {
        self.bomb.remaining(now)
    }

    /// The skip lockout has run out.
    #[must_use]
    pub fn can_skip(&self, now: Millis) -> bool {
        self.cooldown.is_elapsed(now)
    }

    /// Expired bomb and cooldown, bomb first. Each expiry is reported once.
    pub fn poll(&mut self, now: Millis) -> SmallVec<[TimerFire; 2]> {
        let mut fires = SmallVec::new();
        if self.bomb.poll_expired(now) {
            fires.push(TimerFire::new(TimerKind::Bomb, self.bomb_token));
        }
        if self.cooldown.poll_expired(now) {
            fires.push(TimerFire::new(TimerKind::SkipCooldown, self.cooldown_token));
        }
        fires
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;

    fn timers() -> RoundTimers {
        RoundTimers::new(GameMode::Quick.timings())
    }

    #[test]
    fn test_epoch_next() {
        let e = Epoch::default();
        assert_eq!(e.next(), Epoch(1));
        assert_eq!(Epoch(u64::MAX).next(), Epoch(0));
        assert_eq!(Epoch(3).to_string(), "#3");
    }

    #[test]
    fn test_poll_carries_tokens() {
        let mut t = timers();
        t.arm_bomb(0, Epoch(4));
        t.arm_cooldown(0, Epoch(9));

        assert!(t.poll(7_999).is_empty());
        let fires = t.poll(8_000);
        assert_eq!(fires.as_slice(), &[TimerFire::new(TimerKind::SkipCooldown, Epoch(9))]);

        let fires = t.poll(25_000);
        assert_eq!(fires.as_slice(), &[TimerFire::new(TimerKind::Bomb, Epoch(4))]);
        assert!(t.poll(60_000).is_empty());
    }

    #[test]
    fn test_bomb_first_when_both_due() {
        let mut t = timers();
        t.arm_bomb(0, Epoch(1));
        t.arm_cooldown(20_000, Epoch(2));

        let kinds: Vec<_> = t.poll(30_000).iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![TimerKind::Bomb, TimerKind::SkipCooldown]);
    }

    #[test]
    fn test_cancel_all_silences() {
        let mut t = timers();
        t.arm_bomb(0, Epoch(1));
        t.arm_team(0, Epoch(1));
        t.arm_cooldown(0, Epoch(1));

        t.cancel_all();
        assert!(t.poll(100_000).is_empty());
        assert!(!t.bomb_live());
        assert_eq!(t.take_team_elapsed(100_000), 0);
    }

    #[test]
    fn test_rearm_turn_keeps_bomb() {
        let mut t = timers();
        t.arm_bomb(0, Epoch(1));
        t.arm_team(0, Epoch(1));
        t.arm_cooldown(0, Epoch(1));
        assert_eq!(t.take_team_elapsed(5_000), 5_000);

        t.arm_team(5_000, Epoch(2));
        t.arm_cooldown(5_000, Epoch(2));
        assert_eq!(t.team_token(), Epoch(2));
        assert_eq!(t.bomb_remaining(5_000), 20_000);
        assert!(!t.can_skip(12_999));

        let fires = t.poll(13_000);
        assert_eq!(fires.as_slice(), &[TimerFire::new(TimerKind::SkipCooldown, Epoch(2))]);
        assert_eq!(t.take_team_elapsed(13_000), 8_000);
    }

    #[test]
    fn test_pause_resume_all() {
        let mut t = timers();
        t.arm_bomb(0, Epoch(1));
        t.arm_team(0, Epoch(1));
        t.arm_cooldown(0, Epoch(1));

        assert_eq!(t.bomb_deadline(), Some(25_000));
        assert_eq!(t.pause_all(5_000), 5_000);
        assert!(t.bomb_live());
        assert_eq!(t.bomb_deadline(), None);
        assert!(t.poll(500_000).is_empty());

        t.resume_all(500_000);
        assert_eq!(t.bomb_deadline(), Some(520_000));
        assert_eq!(t.bomb_remaining(500_000), 20_000);
        assert_eq!(t.take_team_elapsed(501_000), 1_000);
        assert!(t.can_skip(503_000));
        assert_eq!(t.poll(520_000).len(), 2);
    }
}
