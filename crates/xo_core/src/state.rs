//! The game's transition table.
//!
//! [`GameState`] is plain data. [`GameState::apply`] feeds it one [`Event`]
//! and returns the [`Effect`]s the owner has to carry out; it never touches
//! timers or audio itself.

use crate::audio::Cue;
use crate::error::MoveError;
use crate::position::Position;
use crate::rules::{self, WinningLine};
use crate::timer::{Countdown, Epoch};
use crate::turn::Turn;
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Input to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Start the first game and its clock.
    Start,
    /// Player pressed the cell with this index (0-8).
    CellClick(usize),
    /// One period of a tick schedule elapsed.
    Tick(Epoch),
    /// Clear the board and the clock.
    Reset,
}

/// Work the state machine asks its owner to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Play a sound cue.
    Play(Cue),
    /// Replace any running tick schedule with one tagged `Epoch`.
    StartTicking(Epoch),
    /// Cancel the running tick schedule.
    StopTicking,
}

/// Full mutable state of one game instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    turn: Turn,
    outcome: Outcome,
    line: Option<WinningLine>,
    countdown: Countdown,
    started: bool,
    time_expired: bool,
    epoch: Epoch,
}

impl GameState {
    /// Fresh, not yet started state with `time_limit` seconds on the clock.
    pub fn new(time_limit: u32) -> Self {
        Self {
            turn: Turn::new(),
            outcome: Outcome::InProgress,
            line: None,
            countdown: Countdown::new(time_limit),
            started: false,
            time_expired: false,
            epoch: Epoch::default(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.turn.board()
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.turn.to_move()
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.line
    }

    /// Seconds left on the clock.
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Whether Start has been pressed.
    pub fn started(&self) -> bool {
        self.started
    }

    /// True when the current draw came from the clock rather than a full board.
    pub fn time_expired(&self) -> bool {
        self.time_expired
    }

    /// Epoch of the current tick schedule.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Whether the clock should be running.
    pub fn is_active(&self) -> bool {
        self.started && !self.outcome.is_over() && !self.countdown.is_expired()
    }

    /// Applies one event and returns the effects to execute, in order.
    ///
    /// Events whose preconditions do not hold are ignored and yield no
    /// effects.
    #[instrument(skip(self), fields(outcome = ?self.outcome, started = self.started))]
    pub fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Start => self.start(),
            Event::CellClick(index) => self.cell_click(index).unwrap_or_else(|e| {
                debug!(index, error = %e, "Move ignored");
                Vec::new()
            }),
            Event::Tick(epoch) => self.tick(epoch),
            Event::Reset => self.reset(),
        }
    }

    fn start(&mut self) -> Vec<Effect> {
        if self.started {
            debug!("Start ignored, game already started");
            return Vec::new();
        }

        info!(time_limit = self.countdown.limit(), "Game started");
        self.started = true;
        self.outcome = Outcome::InProgress;
        self.schedule()
    }

    fn cell_click(&mut self, index: usize) -> Result<Vec<Effect>, MoveError> {
        if !self.started {
            return Err(MoveError::NotStarted);
        }

        let pos: Position = self.turn.play(self.outcome, index)?;
        let mut effects = vec![Effect::Play(Cue::Click)];

        let evaluation = rules::evaluate(self.turn.board());
        self.outcome = evaluation.outcome;
        self.line = evaluation.line;

        if self.outcome.is_over() {
            info!(position = %pos, outcome = %self.outcome, line = ?self.line, "Game over");
            effects.extend(self.finish());
        }

        Ok(effects)
    }

    fn tick(&mut self, epoch: Epoch) -> Vec<Effect> {
        if epoch != self.epoch || !self.is_active() {
            debug!(%epoch, current = %self.epoch, "Stale tick ignored");
            return Vec::new();
        }

        let remaining = self.countdown.tick();
        if remaining > 0 {
            return Vec::new();
        }

        info!("Time expired, game drawn");
        self.outcome = Outcome::Draw;
        self.line = None;
        self.time_expired = true;
        self.finish()
    }

    fn reset(&mut self) -> Vec<Effect> {
        info!(started = self.started, "Game reset");
        self.turn = Turn::new();
        self.outcome = Outcome::InProgress;
        self.line = None;
        self.countdown.reset();
        self.time_expired = false;

        if self.started {
            self.schedule()
        } else {
            Vec::new()
        }
    }

    /// Opens a new tick schedule if the clock should be running.
    fn schedule(&mut self) -> Vec<Effect> {
        if !self.is_active() {
            return Vec::new();
        }
        self.epoch = self.epoch.next();
        vec![Effect::StartTicking(self.epoch)]
    }

    /// Effects of leaving the in-progress state.
    fn finish(&mut self) -> Vec<Effect> {
        self.epoch = self.epoch.next();
        vec![Effect::StopTicking, Effect::Play(Cue::GameOver)]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::timer::DEFAULT_TIME_LIMIT)
    }
}
