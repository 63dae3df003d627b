//! Game session: the state machine wired to a clock and a speaker.

use crate::audio::AudioSink;
use crate::rules::WinningLine;
use crate::state::{Effect, Event, GameState};
use crate::timer::{Epoch, TickGuard, TickSource};
use crate::types::{Board, Outcome, Player};
use serde::Serialize;
use tracing::{debug, instrument};

/// Read-only projection of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Board contents.
    pub board: Board,
    /// Player whose mark goes down next.
    pub to_move: Player,
    /// Current classification.
    pub outcome: Outcome,
    /// Line to highlight after a win.
    pub winning_line: Option<WinningLine>,
    /// Seconds left on the clock.
    pub remaining_secs: u32,
    /// Whether Start has been pressed.
    pub started: bool,
    /// True when the draw came from the clock running out.
    pub time_expired: bool,
}

impl SessionView {
    /// Board indices of the winning line, if any.
    pub fn winning_indices(&self) -> Option<[usize; 3]> {
        self.winning_line.map(WinningLine::indices)
    }
}

/// One game instance and the resources it owns.
///
/// Inputs are processed one at a time, each to completion. The running tick
/// schedule, if any, is held as a [`TickGuard`] and is cancelled whenever the
/// game stops being active and when the session is dropped.
pub struct GameSession {
    state: GameState,
    ticks: Box<dyn TickSource>,
    guard: Option<TickGuard>,
    audio: Box<dyn AudioSink>,
}

impl GameSession {
    /// Creates a not yet started session with `time_limit` seconds per game.
    #[instrument(skip(ticks, audio))]
    pub fn new(
        time_limit: u32,
        ticks: impl TickSource + 'static,
        audio: impl AudioSink + 'static,
    ) -> Self {
        Self {
            state: GameState::new(time_limit),
            ticks: Box::new(ticks),
            guard: None,
            audio: Box::new(audio),
        }
    }

    /// Start button.
    pub fn start(&mut self) {
        self.dispatch(Event::Start);
    }

    /// Cell `index` (0-8) pressed. Illegal moves are ignored.
    pub fn cell_click(&mut self, index: usize) {
        self.dispatch(Event::CellClick(index));
    }

    /// A tick from the schedule tagged `epoch` arrived.
    pub fn tick(&mut self, epoch: Epoch) {
        self.dispatch(Event::Tick(epoch));
    }

    /// Reset button.
    pub fn reset(&mut self) {
        self.dispatch(Event::Reset);
    }

    /// Applies `event` and carries out the resulting effects.
    pub fn dispatch(&mut self, event: Event) {
        let effects = self.state.apply(event);
        for effect in effects {
            self.execute(effect);
        }
    }

    /// Returns the underlying state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether a tick schedule is currently held.
    pub fn is_ticking(&self) -> bool {
        self.guard.is_some()
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.state.board().clone(),
            to_move: self.state.to_move(),
            outcome: self.state.outcome(),
            winning_line: self.state.winning_line(),
            remaining_secs: self.state.remaining_secs(),
            started: self.state.started(),
            time_expired: self.state.time_expired(),
        }
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Play(cue) => {
                debug!(%cue, "Playing cue");
                self.audio.play(cue);
            }
            Effect::StartTicking(epoch) => {
                // Old schedule goes first so two never overlap.
                self.guard = None;
                self.guard = Some(self.ticks.start(epoch));
            }
            Effect::StopTicking => {
                self.guard = None;
            }
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}
