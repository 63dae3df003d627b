//! Application state and logic.

use crate::input::{self, Action};
use crossterm::event::KeyEvent;
use tracing::{debug, info, instrument};
use xo_core::{Epoch, GameSession, Outcome, Position, SessionView};

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Wraps a session with the cursor on the center square.
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match input::action_for(key) {
            Some(action) => self.handle_action(action),
            None => debug!(code = ?key.code, "Unbound key"),
        }
    }

    /// Carries out a bound action.
    #[instrument(skip(self))]
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::PlaceAtCursor => self.session.cell_click(self.cursor.to_index()),
            Action::Place(position) => {
                self.cursor = position;
                self.session.cell_click(position.to_index());
            }
            Action::Start => self.session.start(),
            Action::Reset => {
                info!("Resetting game");
                self.session.reset();
            }
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Forwards a clock tick to the session.
    pub fn on_tick(&mut self, epoch: Epoch) {
        self.session.tick(epoch);
    }

    /// Status line for the current state.
    pub fn status_message(&self) -> String {
        status_message(&self.session.view())
    }
}

/// Status line for a session snapshot.
pub fn status_message(view: &SessionView) -> String {
    match view.outcome {
        _ if !view.started => "Press 's' to start".to_string(),
        Outcome::InProgress => format!("Player {}'s turn", view.to_move),
        Outcome::Won(player) => format!("Player {} wins! Press 'r' for a new game.", player),
        Outcome::Draw if view.time_expired => {
            "Time's up! Draw. Press 'r' for a new game.".to_string()
        }
        Outcome::Draw => "Draw! Press 'r' for a new game.".to_string(),
    }
}
