//! Tic-tac-toe against the clock.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`evaluate`]) over the fixed
//!   [`WinningLine`] catalog
//! - **Turn**: the side to move and move legality ([`Turn`])
//! - **Timer**: the [`Countdown`] and the cancellable tick schedule
//!   ([`TickSource`], [`TickGuard`], [`IntervalTicks`])
//! - **State**: the transition table ([`GameState::apply`])
//! - **Session**: state plus the clock and audio it drives ([`GameSession`])
//!
//! # Example
//!
//! ```
//! use xo_core::{GameSession, Outcome, Player, SilentSink, TickGuard, TickSource, Epoch};
//!
//! struct NoTicks;
//!
//! impl TickSource for NoTicks {
//!     fn start(&self, _epoch: Epoch) -> TickGuard {
//!         TickGuard::new(|| {})
//!     }
//! }
//!
//! let mut session = GameSession::new(120, NoTicks, SilentSink);
//! session.start();
//! for index in [0, 4, 1, 3, 2] {
//!     session.cell_click(index);
//! }
//! assert_eq!(session.view().outcome, Outcome::Won(Player::X));
//! assert_eq!(session.view().winning_indices(), Some([0, 1, 2]));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod audio;
mod error;
mod position;
pub mod rules;
mod session;
mod state;
mod timer;
mod turn;
mod types;

pub use audio::{AudioSink, Cue, SilentSink};
pub use error::MoveError;
pub use position::Position;
pub use rules::{Evaluation, WinningLine, evaluate};
pub use session::{GameSession, SessionView};
pub use state::{Effect, Event, GameState};
pub use timer::{
    Countdown, DEFAULT_TIME_LIMIT, Epoch, IntervalTicks, TICK_PERIOD, TickGuard, TickSource,
};
pub use turn::Turn;
pub use types::{Board, Outcome, ParseBoardError, Player, Square};
