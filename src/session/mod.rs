//! Session controller: timer policy on top of the turn engine.
//!
//! `GameSession` is the single owner of the engine, the three round timers
//! and the presentation sink. Everything runs on the caller's timeline: the
//! host calls `tick()` periodically and forwards taps as method calls.
//!
//! ## Timer Policy
//!
//! - Tap-to-start draws one word, starts the bomb and starts the team clock
//!   and skip cooldown.
//! - A correct guess passes the turn with no tap: the next team's clock and
//!   a fresh cooldown start at once, a new word is drawn and the bomb keeps
//!   running.
//! - An explosion cancels everything. The same player taps to start a new
//!   round unless the penalty knocked the team out.
//! - Pause freezes all three timers; resume continues them.
//!
//! ## Catching Up
//!
//! Every tap first applies whatever fired since the last `tick()`, so input
//! that arrives after the bomb went off never counts. When the bomb is due,
//! the playing team is charged only up to the instant it went off.
//!
//! ## Stale Fires
//!
//! Fires are applied only when their token matches the engine's current
//! round token (bomb) or turn token (team budget, cooldown). The team budget
//! is checked before the bomb, so a team that runs out of time in the same
//! instant the bomb goes off is eliminated by time and the bomb fire is
//! dropped.

mod sink;

pub use sink::{DisplayedWord, Notification, NullSink, PresentationSink, TeamSummary};

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::core::{ConfigError, SessionConfig, TeamId};
use crate::engine::{RoundPhase, TurnEngine};
use crate::timers::{Clock, Millis, RoundTimers, TimerFire, TimerKind};
use crate::words::WordSource;

/// Bomb time at or below which the countdown is shown as intense.
pub const INTENSE_THRESHOLD: Millis = 10_000;

/// One table's game, from setup to winner.
pub struct GameSession<W, S, C> {
    engine: TurnEngine<W>,
    timers: RoundTimers,
    sink: S,
    clock: C,
    word_started_at: Millis,
    paused_at: Option<Millis>,
    last_bomb_second: Option<Millis>,
    skip_ready: bool,
}

impl<W, S, C> GameSession<W, S, C>
where
    W: WordSource,
    S: PresentationSink,
    C: Clock,
{
    /// Set up teams, seat players, load words and announce the first player.
    pub fn new(config: &SessionConfig, words: W, sink: S, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = TurnEngine::new(words);
        engine.initialize_game(config.player_count, config.timings)?;
        engine.set_player_names(config.seat_names())?;
        let categories: FxHashSet<String> = config.categories.iter().cloned().collect();
        engine.words_mut().reseed(config.seed);
        engine.prepare_words(&categories);

        let mut session = Self {
            engine,
            timers: RoundTimers::new(config.timings),
            sink,
            clock,
            word_started_at: 0,
            paused_at: None,
            last_bomb_second: None,
            skip_ready: false,
        };
        session.announce_turn();
        Ok(session)
    }

    // === Accessors ===

    #[must_use]
    pub fn engine(&self) -> &TurnEngine<W> {
        &self.engine
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.engine.phase()
    }

    /// Skipping is currently allowed.
    #[must_use]
    pub fn can_skip(&self) -> bool {
        self.engine.phase() == RoundPhase::RoundActive && self.timers.can_skip(self.clock.now())
    }

    /// Time left on the bomb, if a round is live.
    #[must_use]
    pub fn bomb_remaining(&self) -> Option<Millis> {
        self.timers
            .bomb_live()
            .then(|| self.timers.bomb_remaining(self.clock.now()))
    }

    /// Tear the session down into its engine and sink.
    pub fn into_parts(self) -> (TurnEngine<W>, S) {
        (self.engine, self.sink)
    }

    // === Player Input ===

    /// Tap-to-start.
    pub fn start_turn(&mut self) -> bool {
        let now = self.clock.now();
        self.catch_up(now);
        self.begin_turn(now)
    }

    /// The partner got the word. The next team plays on at once.
    pub fn word_guessed(&mut self) -> bool {
        let now = self.clock.now();
        self.catch_up(now);
        if self.engine.phase() != RoundPhase::RoundActive {
            warn!(phase = %self.engine.phase(), "guess ignored");
            return false;
        }

        let time_spent = now.saturating_sub(self.word_started_at);
        self.engine.on_word_guessed(time_spent);
        self.announce_turn();
        self.begin_turn(now)
    }

    /// Swap the word for another once the cooldown allows it.
    pub fn skip(&mut self) -> bool {
        let now = self.clock.now();
        self.catch_up(now);
        if self.engine.phase() != RoundPhase::RoundActive || !self.timers.can_skip(now) {
            debug!("skip refused");
            return false;
        }
        let shown = self.draw(|engine| engine.skip_word().map(|w| w.text.clone()));
        self.timers.arm_cooldown(now, self.engine.turn_token());
        self.set_skip_ready(false);
        self.sink.notify(Notification::WordShown(shown));
        true
    }

    /// Freeze all timers.
    pub fn pause(&mut self) -> bool {
        let now = self.clock.now();
        self.catch_up(now);
        if !self.engine.pause() {
            return false;
        }
        self.timers.pause_all(now);
        self.paused_at = Some(now);
        debug!(at = now, "paused");
        true
    }

    /// Continue after a pause with the time that was left.
    pub fn resume(&mut self) -> bool {
        if !self.engine.resume() {
            return false;
        }
        let now = self.clock.now();
        self.timers.resume_all(now);
        if let Some(at) = self.paused_at.take() {
            self.word_started_at = self.word_started_at.saturating_add(now.saturating_sub(at));
        }
        debug!(at = now, "resumed");
        true
    }

    /// Leave the elimination screen.
    pub fn acknowledge_elimination(&mut self) -> RoundPhase {
        if self.engine.phase() != RoundPhase::TeamEliminatedPending {
            return self.engine.phase();
        }
        let phase = self.engine.acknowledge_elimination();
        match phase {
            RoundPhase::GameOver => {
                let winner = self.engine.winner().map(TeamSummary::from);
                self.sink.notify(Notification::GameFinished { winner });
            }
            RoundPhase::AwaitingTurnStart => self.announce_turn(),
            _ => {}
        }
        phase
    }

    /// Drop the game in any phase. A new session starts from scratch.
    pub fn abandon(&mut self) {
        self.timers.cancel_all();
        self.engine.reset();
        self.paused_at = None;
        self.last_bomb_second = None;
        self.skip_ready = false;
        info!("session abandoned");
    }

    // === Timeline ===

    /// Advance to the clock's current time.
    ///
    /// Charges the playing team, updates the displays and applies whatever
    /// fired, team budget first.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        self.catch_up(now);
    }

    /// Apply one timer fire. Returns false for stale fires, and for a team
    /// budget fire while the team still has time.
    pub fn handle_fire(&mut self, fire: TimerFire) -> bool {
        let now = self.clock.now();
        self.apply_fire(fire, now)
    }

    // === Internals ===

    /// Bring timers and displays up to `now`, applying fires in order.
    fn catch_up(&mut self, now: Millis) {
        // Nothing is charged past the instant the bomb went off.
        let until = match self.timers.bomb_deadline() {
            Some(deadline) if deadline <= now => deadline,
            _ => now,
        };
        let mut fires: SmallVec<[TimerFire; 3]> = SmallVec::new();

        if self.engine.phase() == RoundPhase::RoundActive {
            let elapsed = self.timers.take_team_elapsed(until);
            if let Some(0) = self.drain(elapsed) {
                fires.push(TimerFire::new(TimerKind::TeamBudget, self.timers.team_token()));
            }
        }
        fires.extend(self.timers.poll(now));
        self.report_bomb(now);

        for fire in fires {
            self.apply_fire(fire, until);
        }
    }

    fn apply_fire(&mut self, fire: TimerFire, at: Millis) -> bool {
        let current = match fire.kind {
            TimerKind::Bomb => self.engine.round_token(),
            TimerKind::TeamBudget | TimerKind::SkipCooldown => self.engine.turn_token(),
        };
        if fire.token != current {
            warn!(kind = ?fire.kind, fired = %fire.token, current = %current, "stale timer fire ignored");
            return false;
        }

        match fire.kind {
            TimerKind::TeamBudget => {
                let left = self.engine.current_team().map_or(0, |t| t.remaining());
                if left > 0 {
                    warn!(left, "team budget fire with time left ignored");
                    return false;
                }
                self.team_out()
            }
            TimerKind::Bomb => self.explode(at),
            TimerKind::SkipCooldown => {
                self.set_skip_ready(true);
                true
            }
        }
    }

    /// Open a turn for the team holding it: bomb if none is live, team
    /// clock, cooldown and a fresh word.
    fn begin_turn(&mut self, now: Millis) -> bool {
        let Some(start) = self.engine.start_turn() else {
            return false;
        };
        if start.fresh_round {
            self.timers.arm_bomb(now, start.round);
            self.last_bomb_second = None;
        }
        self.timers.arm_team(now, start.turn);
        self.timers.arm_cooldown(now, start.turn);
        self.set_skip_ready(false);
        self.show_next_word(now);
        true
    }

    fn drain(&mut self, elapsed: Millis) -> Option<Millis> {
        let remaining = self.engine.drain_team_time(elapsed)?;
        if elapsed > 0 {
            let team = self.current_team_id()?;
            self.sink.notify(Notification::TeamTime { team, remaining });
        }
        Some(remaining)
    }

    fn team_out(&mut self) -> bool {
        let Some(id) = self.engine.on_team_eliminated() else {
            return false;
        };
        self.end_round();
        self.notify_eliminated(id);
        true
    }

    fn explode(&mut self, now: Millis) -> bool {
        let time_spent = match self.engine.current_word() {
            Some(_) => now.saturating_sub(self.word_started_at),
            None => 0,
        };
        let Some(explosion) = self.engine.on_bomb_exploded(time_spent) else {
            return false;
        };
        self.end_round();
        self.sink.notify(Notification::BombExploded {
            team: explosion.team,
            penalty: explosion.penalty,
            remaining: explosion.remaining,
        });
        self.sink.notify(Notification::TeamTime {
            team: explosion.team,
            remaining: explosion.remaining,
        });

        if explosion.eliminated {
            self.notify_eliminated(explosion.team);
        } else {
            self.announce_turn();
        }
        true
    }

    fn end_round(&mut self) {
        self.timers.cancel_all();
        self.paused_at = None;
        self.last_bomb_second = None;
        self.skip_ready = false;
    }

    fn notify_eliminated(&mut self, id: TeamId) {
        if let Some(team) = self.engine.team(id) {
            let summary = TeamSummary::from(team);
            self.sink.notify(Notification::TeamEliminated(summary));
        }
    }

    fn current_team_id(&self) -> Option<TeamId> {
        self.engine.current_team().map(|t| t.id())
    }

    fn announce_turn(&mut self) {
        let Some(team) = self.current_team_id() else {
            return;
        };
        let player = self.engine.current_player_name().to_string();
        let next_player = self.engine.next_player_name().to_string();
        self.sink.notify(Notification::TurnAnnounced {
            team,
            player,
            next_player,
        });
    }

    fn draw<F>(&mut self, pick: F) -> DisplayedWord
    where
        F: FnOnce(&mut TurnEngine<W>) -> Option<String>,
    {
        match pick(&mut self.engine) {
            Some(text) => DisplayedWord::Word(text),
            None => DisplayedWord::NoWords,
        }
    }

    fn show_next_word(&mut self, now: Millis) {
        let shown = self.draw(|engine| engine.next_word().map(|w| w.text.clone()));
        self.word_started_at = now;
        self.sink.notify(Notification::WordShown(shown));
    }

    fn set_skip_ready(&mut self, ready: bool) {
        if self.skip_ready != ready {
            self.skip_ready = ready;
            self.sink.notify(Notification::SkipReady(ready));
        }
    }

    fn report_bomb(&mut self, now: Millis) {
        if !self.timers.bomb_live() {
            return;
        }
        let remaining = self.timers.bomb_remaining(now);
        let second = remaining.div_ceil(1000);
        if self.last_bomb_second != Some(second) {
            self.last_bomb_second = Some(second);
            self.sink.notify(Notification::BombTick {
                remaining,
                intense: remaining <= INTENSE_THRESHOLD,
            });
        }
    }
}
