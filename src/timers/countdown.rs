//! Pausable countdown and wall-clock team clock.
//!
//! Neither type schedules anything. They answer "how much is left at
//! `now`?" and are polled by whoever owns the timeline.

use serde::{Deserialize, Serialize};

use super::clock::Millis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum CountdownState {
    Idle,
    Running { since: Millis },
    Paused,
    Expired,
}

/// Fixed-length countdown that can be paused and resumed with what is left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    duration: Millis,
    /// Remaining time as of the last start/pause.
    left: Millis,
    state: CountdownState,
}

impl Countdown {
    /// Create an idle countdown.
    #[must_use]
    pub const fn new(duration: Millis) -> Self {
        Self {
            duration,
            left: duration,
            state: CountdownState::Idle,
        }
    }

    #[must_use]
    pub const fn duration(&self) -> Millis {
        self.duration
    }

    /// Start from the full duration, discarding any previous run.
    pub fn start(&mut self, now: Millis) {
        self.left = self.duration;
        self.state = CountdownState::Running { since: now };
    }

    /// Remaining time at `now`.
    #[must_use]
    pub fn remaining(&self, now: Millis) -> Millis {
        match self.state {
            CountdownState::Running { since } => self.left.saturating_sub(now.saturating_sub(since)),
            CountdownState::Expired => 0,
            CountdownState::Idle | CountdownState::Paused => self.left,
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    /// Instant the running countdown reaches zero.
    #[must_use]
    pub const fn deadline(&self) -> Option<Millis> {
        match self.state {
            CountdownState::Running { since } => Some(since.saturating_add(self.left)),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        matches!(self.state, CountdownState::Paused)
    }

    /// Ran all the way down, whether or not it has been polled yet.
    #[must_use]
    pub fn is_elapsed(&self, now: Millis) -> bool {
        match self.state {
            CountdownState::Expired => true,
            CountdownState::Running { .. } => self.remaining(now) == 0,
            CountdownState::Idle | CountdownState::Paused => false,
        }
    }

    /// Report expiry exactly once.
    pub fn poll_expired(&mut self, now: Millis) -> bool {
        if self.is_running() && self.remaining(now) == 0 {
            self.left = 0;
            self.state = CountdownState::Expired;
            true
        } else {
            false
        }
    }

    /// Freeze with the time left at `now`.
    pub fn pause(&mut self, now: Millis) {
        if self.is_running() {
            self.left = self.remaining(now);
            self.state = CountdownState::Paused;
        }
    }

    /// Continue a paused countdown with what was left.
    pub fn resume(&mut self, now: Millis) {
        if self.is_paused() {
            self.state = CountdownState::Running { since: now };
        }
    }

    /// Stop and rearm at the full duration.
    pub fn cancel(&mut self) {
        self.left = self.duration;
        self.state = CountdownState::Idle;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum ClockState {
    Stopped,
    Running { last: Millis },
    Paused,
}

/// Measures how long the current team has been playing.
///
/// Charges the wall-clock delta between polls rather than a fixed step, so
/// irregular tick scheduling never skews a team's budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamClock {
    state: ClockState,
}

impl Default for TeamClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TeamClock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ClockState::Stopped,
        }
    }

    pub fn start(&mut self, now: Millis) {
        self.state = ClockState::Running { last: now };
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    /// Time played since the last call, re-basing on `now`.
    pub fn take_elapsed(&mut self, now: Millis) -> Millis {
        match self.state {
            ClockState::Running { last } => {
                self.state = ClockState::Running { last: now.max(last) };
                now.saturating_sub(last)
            }
            ClockState::Stopped | ClockState::Paused => 0,
        }
    }

    /// Stop counting; returns the uncharged time up to `now`.
    pub fn pause(&mut self, now: Millis) -> Millis {
        let elapsed = self.take_elapsed(now);
        if self.is_running() {
            self.state = ClockState::Paused;
        }
        elapsed
    }

    /// Continue counting from `now`.
    pub fn resume(&mut self, now: Millis) {
        if self.state == ClockState::Paused {
            self.state = ClockState::Running { last: now };
        }
    }

    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
    }
}
