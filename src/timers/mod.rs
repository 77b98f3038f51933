//! Round timing.
//!
//! Three countdowns run while a turn is being played:
//!
//! - **Bomb**: one per round. Survives a correct guess, so the bomb can go
//!   off in any team's hands during a pass. Pausing keeps what is left.
//! - **Team clock**: drains the holding team's budget by wall-clock delta,
//!   only while a turn is actually being played.
//! - **Skip cooldown**: advisory lockout restarted on every word.
//!
//! Nothing here spawns threads or schedules callbacks. The owner polls on
//! its own timeline and applies the resulting [`TimerFire`]s.

mod clock;
mod countdown;
mod round;

pub use clock::{format_clock, Clock, ManualClock, Millis, SystemClock};
pub use countdown::{Countdown, TeamClock};
pub use round::{Epoch, RoundTimers, TimerFire, TimerKind};
