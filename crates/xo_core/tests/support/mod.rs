//! Test doubles for the clock and the speaker.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use xo_core::{AudioSink, Cue, Epoch, TickGuard, TickSource};

#[derive(Debug, Default)]
struct TickLog {
    started: Vec<Epoch>,
    live: usize,
}

/// Tick source that records schedules instead of running them.
#[derive(Debug, Clone, Default)]
pub struct ManualTicks {
    log: Arc<Mutex<TickLog>>,
}

impl ManualTicks {
    /// Number of schedules not yet cancelled.
    pub fn live(&self) -> usize {
        self.log.lock().unwrap().live
    }

    /// Epochs of every schedule started so far.
    pub fn started(&self) -> Vec<Epoch> {
        self.log.lock().unwrap().started.clone()
    }

    /// Epoch of the most recent schedule.
    pub fn last_epoch(&self) -> Epoch {
        *self
            .log
            .lock()
            .unwrap()
            .started
            .last()
            .expect("no schedule started")
    }
}

impl TickSource for ManualTicks {
    fn start(&self, epoch: Epoch) -> TickGuard {
        {
            let mut log = self.log.lock().unwrap();
            log.started.push(epoch);
            log.live += 1;
        }
        let log = Arc::clone(&self.log);
        TickGuard::new(move || log.lock().unwrap().live -= 1)
    }
}

/// Sink that remembers every cue it was asked to play.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingSink {
    /// Cues played so far.
    pub fn cues(&self) -> Vec<Cue> {
        self.cues.lock().unwrap().clone()
    }

    /// How many times `cue` was played.
    pub fn count(&self, cue: Cue) -> usize {
        self.cues.lock().unwrap().iter().filter(|c| **c == cue).count()
    }
}

impl AudioSink for RecordingSink {
    fn play(&self, cue: Cue) {
        self.cues.lock().unwrap().push(cue);
    }
}
