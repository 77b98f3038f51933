//! The turn engine: rotation, penalties, elimination, win detection.
//!
//! ## Seating and Rotation
//!
//! Players sit in a ring that alternates teams: with three teams the ring is
//! `T1-P1, T2-P1, T3-P1, T1-P2, T2-P2, T3-P2`. The turn walks the ring one
//! team at a time; each time the team index wraps to 0, the player slot
//! flips. Eliminated teams are skipped, within a bound of one full lap.
//!
//! ## Two Elimination Paths
//!
//! | Path            | Sets flag | Rotates turn           |
//! |-----------------|-----------|------------------------|
//! | Team clock out  | yes       | yes, inside the engine |
//! | Bomb penalty    | no        | no, caller decides     |
//!
//! After a bomb explosion the same player keeps the turn and starts a new
//! round, unless the penalty emptied the budget. Running out of time always
//! passes the turn on.
//!
//! ## Tie-break
//!
//! Once a team carries the explicit flag, later penalties or clock drains
//! aimed at it are ignored.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::phase::RoundPhase;
use super::result::GameResult;
use crate::core::{
    normalize_player_name, team_count_for, ConfigError, GameEvent, ModeTimings, Player,
    PlayerSlot, Team, TeamColor, TeamId, PALETTE,
};
use crate::timers::{Epoch, Millis};
use crate::words::{Word, WordSource};

/// A turn that just began.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnStart {
    /// Team now playing.
    pub team: TeamId,
    /// A new bomb round started (otherwise the running bomb carries on).
    pub fresh_round: bool,
    /// Token for the bomb countdown.
    pub round: Epoch,
    /// Token for the team clock and skip cooldown.
    pub turn: Epoch,
}

/// What a bomb explosion did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Explosion {
    /// Team holding the turn when the bomb went off.
    pub team: TeamId,
    /// Penalty taken from the budget.
    pub penalty: Millis,
    /// Budget left afterwards.
    pub remaining: Millis,
    /// The penalty emptied the budget.
    pub eliminated: bool,
}

/// Serializable view of the engine for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub phase: RoundPhase,
    pub timings: ModeTimings,
    pub teams: Vec<Team>,
    pub current_team: Option<TeamId>,
    pub current_slot: PlayerSlot,
    pub current_word: Option<String>,
}

/// Owns the teams, the turn pointer and the word source.
///
/// One instance per table, owned by the session controller. All mutation
/// happens on the caller's single timeline.
pub struct TurnEngine<W> {
    teams: Vec<Team>,
    current_team: usize,
    current_slot: PlayerSlot,
    timings: ModeTimings,
    phase: RoundPhase,
    paused_from: Option<RoundPhase>,
    round: Epoch,
    turn: Epoch,
    bomb_live: bool,
    started: bool,
    current_word: Option<Word>,
    /// Guessed word still on the card while the turn passes.
    last_word: Option<String>,
    words: W,
}

impl<W: WordSource> TurnEngine<W> {
    /// Create an engine with no game.
    pub fn new(words: W) -> Self {
        Self {
            teams: Vec::new(),
            current_team: 0,
            current_slot: PlayerSlot::First,
            timings: ModeTimings::default(),
            phase: RoundPhase::NotStarted,
            paused_from: None,
            round: Epoch::default(),
            turn: Epoch::default(),
            bomb_live: false,
            started: false,
            current_word: None,
            last_word: None,
            words,
        }
    }

    // === Setup ===

    /// Create `player_count / 2` teams with full budgets and no players.
    ///
    /// Fails if the count is odd, makes fewer than two teams, or more teams
    /// than there are palette colors.
    pub fn initialize_game(
        &mut self,
        player_count: usize,
        mode: impl Into<ModeTimings>,
    ) -> Result<(), ConfigError> {
        let team_count = team_count_for(player_count)?;
        let timings = mode.into();

        self.teams = PALETTE
            .iter()
            .take(team_count)
            .enumerate()
            .map(|(i, &color)| Team::new(TeamId::new(i as u8), color, timings.team_time))
            .collect();
        self.timings = timings;
        self.current_team = 0;
        self.current_slot = PlayerSlot::First;
        self.phase = RoundPhase::AwaitingTurnStart;
        self.paused_from = None;
        self.bomb_live = false;
        self.started = false;
        self.current_word = None;
        self.last_word = None;
        self.invalidate_timers();

        info!(player_count, team_count, team_time = timings.team_time, "game initialized");
        Ok(())
    }

    /// Seat players. Name `i` joins team `i mod team_count`, so slot 0 of
    /// every team fills before slot 1.
    ///
    /// Replaces any earlier names. Blank names get a `"Player N"` placeholder.
    pub fn set_player_names<I, N>(&mut self, names: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        if self.teams.is_empty() {
            return Err(ConfigError::NotInitialized);
        }
        let names: Vec<N> = names.into_iter().collect();
        let team_count = self.teams.len();
        if names.len() != team_count * 2 {
            return Err(ConfigError::NameCountMismatch {
                expected: team_count * 2,
                got: names.len(),
            });
        }

        for team in &mut self.teams {
            team.clear_players();
        }
        for (seat, raw) in names.iter().enumerate() {
            let team_index = seat % team_count;
            let name = normalize_player_name(raw.as_ref(), seat);
            self.teams[team_index].add_player(Player::new(name, TeamId::new(team_index as u8)));
        }

        debug!(players = names.len(), team_count, "player names assigned");
        Ok(())
    }

    /// Switch timings before the first turn, refilling every budget.
    ///
    /// Returns false once play has started.
    pub fn set_game_mode(&mut self, mode: impl Into<ModeTimings>) -> bool {
        if self.started {
            warn!("game mode change ignored after play started");
            return false;
        }
        self.timings = mode.into();
        for team in &mut self.teams {
            team.set_remaining(self.timings.team_time);
        }
        true
    }

    /// Load the word pool for the selected categories.
    pub fn prepare_words(&mut self, categories: &FxHashSet<String>) {
        self.words.prepare(categories);
    }

    // === Queries ===

    #[must_use]
    pub fn timings(&self) -> ModeTimings {
        self.timings
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Token of the current bomb round.
    #[must_use]
    pub fn round_token(&self) -> Epoch {
        self.round
    }

    /// Token of the current turn.
    #[must_use]
    pub fn turn_token(&self) -> Epoch {
        self.turn
    }

    /// A bomb round is in progress (it survives correct guesses).
    #[must_use]
    pub fn bomb_live(&self) -> bool {
        self.bomb_live
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[must_use]
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.index())
    }

    #[must_use]
    pub fn current_team_index(&self) -> usize {
        self.current_team
    }

    #[must_use]
    pub fn current_slot(&self) -> PlayerSlot {
        self.current_slot
    }

    #[must_use]
    pub fn current_team(&self) -> Option<&Team> {
        self.teams.get(self.current_team)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_team()?.player(self.current_slot)
    }

    /// Name of the player up now, empty if none.
    #[must_use]
    pub fn current_player_name(&self) -> &str {
        self.current_player().map_or("", Player::name)
    }

    /// Name of the player who would be up after one rotation step.
    ///
    /// Empty when no team other than eliminated ones can be reached.
    #[must_use]
    pub fn next_player_name(&self) -> &str {
        match self.rotation_target() {
            (index, slot, true) => self.teams[index].player(slot).map_or("", Player::name),
            _ => "",
        }
    }

    /// The word on screen, if any.
    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.current_word.as_ref()
    }

    #[must_use]
    pub fn words(&self) -> &W {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut W {
        &mut self.words
    }

    #[must_use]
    pub fn active_team_count(&self) -> usize {
        self.teams.iter().filter(|t| !t.is_eliminated()).count()
    }

    /// At most one team is left.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.active_team_count() <= 1
    }

    /// First team still in, in list order.
    #[must_use]
    pub fn winner(&self) -> Option<&Team> {
        self.teams.iter().find(|t| !t.is_eliminated())
    }

    /// Outcome once the game is over; all teams out is a draw.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.teams.is_empty() || !self.is_game_over() {
            return None;
        }
        Some(self.winner().map_or(GameResult::Draw, |t| GameResult::Winner(t.id())))
    }

    /// Seating ring: every slot-0 player in team order, then every slot-1.
    #[must_use]
    pub fn circular_player_order(&self) -> Vec<&str> {
        [PlayerSlot::First, PlayerSlot::Second]
            .into_iter()
            .flat_map(|slot| self.teams.iter().filter_map(move |t| t.player(slot)))
            .map(Player::name)
            .collect()
    }

    /// Color of the team a player belongs to, first palette color if unknown.
    #[must_use]
    pub fn team_color_by_player_name(&self, name: &str) -> TeamColor {
        self.teams
            .iter()
            .find(|t| t.players().iter().any(|p| p.name() == name))
            .map_or(PALETTE[0], Team::color)
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            phase: self.phase,
            timings: self.timings,
            teams: self.teams.clone(),
            current_team: self.current_team().map(Team::id),
            current_slot: self.current_slot,
            current_word: self.current_word.as_ref().map(|w| w.text.clone()),
        }
    }

    // === Rotation ===

    fn step(&self, index: usize, slot: PlayerSlot) -> (usize, PlayerSlot) {
        let next = (index + 1) % self.teams.len();
        let slot = if next == 0 { slot.flipped() } else { slot };
        (next, slot)
    }

    /// Walk at most one lap; the flag says whether a live team was found.
    fn rotation_target(&self) -> (usize, PlayerSlot, bool) {
        let (mut index, mut slot) = (self.current_team, self.current_slot);
        if self.teams.is_empty() {
            return (index, slot, false);
        }
        for _ in 0..self.teams.len() {
            (index, slot) = self.step(index, slot);
            if !self.teams[index].is_eliminated() {
                return (index, slot, true);
            }
        }
        (index, slot, false)
    }

    /// Pass the turn to the next team still in.
    pub fn move_to_next_team(&mut self) {
        let (index, slot, found) = self.rotation_target();
        self.current_team = index;
        self.current_slot = slot;
        if found {
            debug!(team = index, slot = slot.index(), "turn passed");
        } else {
            warn!("no team left to pass the turn to");
        }
    }

    // === Words ===

    /// Draw the next word. Call once per word transition.
    pub fn next_word(&mut self) -> Option<&Word> {
        self.current_word = self.words.next_word();
        self.last_word = None;
        match &self.current_word {
            Some(word) => debug!(word = %word.text, "word drawn"),
            None => warn!("word source is empty"),
        }
        self.current_word.as_ref()
    }

    /// Skip the word on screen.
    pub fn skip_word(&mut self) -> Option<&Word> {
        self.current_word = self.words.skip_word();
        self.last_word = None;
        debug!(word = ?self.current_word.as_ref().map(|w| &w.text), "word skipped");
        self.current_word.as_ref()
    }

    // === Turn Cycle ===

    fn invalidate_timers(&mut self) {
        self.round = self.round.next();
        self.turn = self.turn.next();
    }

    /// Tap-to-start. Opens a new bomb round unless one is still running.
    pub fn start_turn(&mut self) -> Option<TurnStart> {
        if self.phase != RoundPhase::AwaitingTurnStart {
            warn!(phase = %self.phase, "turn start ignored");
            return None;
        }
        let team = self.current_team()?.id();

        let fresh_round = !self.bomb_live;
        if fresh_round {
            self.round = self.round.next();
            self.bomb_live = true;
        }
        self.turn = self.turn.next();
        self.started = true;
        self.phase = RoundPhase::RoundActive;

        debug!(%team, fresh_round, round = %self.round, "turn started");
        Some(TurnStart {
            team,
            fresh_round,
            round: self.round,
            turn: self.turn,
        })
    }

    /// The partner got the word: log it and pass the turn. The bomb round
    /// keeps running and the next `start_turn` continues it.
    pub fn on_word_guessed(&mut self, time_spent: Millis) -> bool {
        if self.phase != RoundPhase::RoundActive {
            warn!(phase = %self.phase, "guess ignored");
            return false;
        }
        if let Some(word) = self.current_word.take().filter(|w| !w.text.is_empty()) {
            self.teams[self.current_team].record(GameEvent::guessed(word.text.clone(), time_spent));
            self.last_word = Some(word.text);
        }
        self.move_to_next_team();
        self.turn = self.turn.next();
        self.phase = RoundPhase::AwaitingTurnStart;
        true
    }

    /// Charge the penalty to the team holding the turn and end the round.
    ///
    /// Never moves the turn pointer. If the result is elimination the
    /// caller passes the turn on.
    pub fn on_bomb_exploded(&mut self, time_spent: Millis) -> Option<Explosion> {
        if matches!(
            self.phase,
            RoundPhase::NotStarted | RoundPhase::GameOver | RoundPhase::TeamEliminatedPending
        ) {
            warn!(phase = %self.phase, "explosion ignored");
            return None;
        }
        let team = self.teams.get(self.current_team)?;
        if team.is_eliminated() {
            warn!(team = %team.id(), "explosion on eliminated team ignored");
            return None;
        }

        let penalty = self.timings.penalty;
        let word = self
            .current_word
            .take()
            .map(|w| w.text)
            .or_else(|| self.last_word.take())
            .unwrap_or_default();
        let team = &mut self.teams[self.current_team];
        let remaining = team.apply_penalty(penalty);
        team.record(GameEvent::exploded(word, time_spent, penalty));
        let explosion = Explosion {
            team: team.id(),
            penalty,
            remaining,
            eliminated: team.is_eliminated(),
        };

        self.bomb_live = false;
        self.paused_from = None;
        self.invalidate_timers();
        self.phase = if explosion.eliminated {
            RoundPhase::TeamEliminatedPending
        } else {
            RoundPhase::AwaitingTurnStart
        };

        info!(team = %explosion.team, remaining, eliminated = explosion.eliminated, "bomb exploded");
        Some(explosion)
    }

    /// Drain the current team's budget by played time.
    ///
    /// Returns what is left, or `None` if the team is already flagged out.
    pub fn drain_team_time(&mut self, elapsed: Millis) -> Option<Millis> {
        let team = self.teams.get_mut(self.current_team)?;
        if team.is_flagged() {
            return None;
        }
        Some(team.subtract_time(elapsed))
    }

    /// The current team ran out of time: flag it and pass the turn.
    pub fn on_team_eliminated(&mut self) -> Option<TeamId> {
        if matches!(self.phase, RoundPhase::NotStarted | RoundPhase::GameOver) {
            return None;
        }
        let team = self.teams.get_mut(self.current_team)?;
        if team.is_flagged() {
            warn!(team = %team.id(), "team already eliminated");
            return None;
        }
        team.mark_eliminated();
        let id = team.id();

        self.move_to_next_team();
        self.bomb_live = false;
        self.current_word = None;
        self.last_word = None;
        self.paused_from = None;
        self.invalidate_timers();
        self.phase = RoundPhase::TeamEliminatedPending;

        info!(team = %id, left = self.active_team_count(), "team out of time");
        Some(id)
    }

    /// Leave the elimination screen. Ends the game if one team is left.
    pub fn acknowledge_elimination(&mut self) -> RoundPhase {
        if self.phase != RoundPhase::TeamEliminatedPending {
            return self.phase;
        }
        if self.is_game_over() {
            self.phase = RoundPhase::GameOver;
            info!(result = ?self.result(), "game over");
        } else {
            if self.current_team().is_some_and(Team::is_eliminated) {
                self.move_to_next_team();
            }
            self.phase = RoundPhase::AwaitingTurnStart;
        }
        self.phase
    }

    /// Suspend play. Allowed mid-turn, or mid-pass while a bomb is running.
    pub fn pause(&mut self) -> bool {
        let pausable = match self.phase {
            RoundPhase::RoundActive => true,
            RoundPhase::AwaitingTurnStart => self.bomb_live,
            _ => false,
        };
        if pausable {
            self.paused_from = Some(self.phase);
            self.phase = RoundPhase::RoundPausedManually;
        }
        pausable
    }

    /// Return to the phase held before pausing.
    pub fn resume(&mut self) -> bool {
        if self.phase != RoundPhase::RoundPausedManually {
            return false;
        }
        self.phase = self.paused_from.take().unwrap_or(RoundPhase::AwaitingTurnStart);
        true
    }

    /// Drop the game. Safe in any phase; the engine is ready for a fresh
    /// `initialize_game`.
    pub fn reset(&mut self) {
        self.teams.clear();
        self.current_team = 0;
        self.current_slot = PlayerSlot::First;
        self.current_word = None;
        self.last_word = None;
        self.words.reset();
        self.phase = RoundPhase::NotStarted;
        self.paused_from = None;
        self.bomb_live = false;
        self.started = false;
        self.invalidate_timers();
        info!("engine reset");
    }
}
