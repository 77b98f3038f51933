//! Time sources.
//!
//! Everything in the crate measures time in whole milliseconds on a
//! monotonic timeline. Hosts use [`SystemClock`]; tests drive a
//! [`ManualClock`] by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Milliseconds, either a duration or a point on the clock's timeline.
pub type Millis = u64;

/// A monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since the clock's origin.
    fn now(&self) -> Millis;
}

/// Wall clock anchored at construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Millis {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock. Clones share the same time.
///
/// ```
/// use word_bomb::timers::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(1_500);
/// assert_eq!(clock.now(), 1_500);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, millis: Millis) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, millis: Millis) {
        if millis > self.now.get() {
            self.now.set(millis);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

/// Render a duration as `m:ss`.
#[must_use]
pub fn format_clock(millis: Millis) -> String {
    let seconds = millis / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
