//! Terminal bell audio sink.

use crate::config::SoundConfig;
use std::io::{Stdout, Write};
use std::sync::Mutex;
use tracing::debug;
use xo_core::{AudioSink, Cue};

const BEL: u8 = 0x07;

/// Rings the terminal bell for sound cues.
///
/// A click rings once, game over rings twice. Write failures are logged and
/// otherwise ignored; a missing bell never interrupts play.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: Mutex<W>,
    sound: SoundConfig,
}

impl TerminalBell<Stdout> {
    /// Bell on standard output.
    pub fn stdout(sound: SoundConfig) -> Self {
        Self::new(std::io::stdout(), sound)
    }
}

impl<W: Write> TerminalBell<W> {
    /// Bell writing to `out`.
    pub fn new(out: W, sound: SoundConfig) -> Self {
        Self {
            out: Mutex::new(out),
            sound,
        }
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn rings(cue: Cue) -> usize {
        match cue {
            Cue::Click => 1,
            Cue::GameOver => 2,
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&self, cue: Cue) {
        if !self.sound.enabled(cue) {
            debug!(%cue, "Cue muted");
            return;
        }

        let Ok(mut out) = self.out.lock() else {
            debug!(%cue, "Bell writer poisoned, skipping cue");
            return;
        };

        let bells = vec![BEL; Self::rings(cue)];
        if let Err(e) = out.write_all(&bells).and_then(|()| out.flush()) {
            debug!(%cue, error = %e, "Failed to ring bell");
        }
    }
}
