//! Audio boundary: sound cues the session emits.

use serde::{Deserialize, Serialize};

/// A one-shot sound effect.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Cue {
    /// A mark was placed.
    #[display("click")]
    Click,
    /// The game left the in-progress state.
    #[display("game over")]
    GameOver,
}

/// Plays cues, fire-and-forget.
///
/// Implementations must not block and must swallow their own failures: a
/// missing audio device never affects the game.
pub trait AudioSink {
    /// Plays `cue`.
    fn play(&self, cue: Cue);
}

/// Sink that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&self, _cue: Cue) {}
}
