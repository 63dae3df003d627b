//! Countdown clock and the tick schedule that drives it.
//!
//! [`Countdown`] is a plain counter. Ticks come from a [`TickSource`]; each
//! schedule it starts is tagged with an [`Epoch`] and lives exactly as long
//! as the returned [`TickGuard`].

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};
use tracing::{debug, instrument};

/// Seconds on the clock at the start of every game.
pub const DEFAULT_TIME_LIMIT: u32 = 120;

/// Interval between two ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Remaining whole seconds of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
}

impl Countdown {
    /// A full clock of `limit` seconds.
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Seconds the clock starts from.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Seconds left.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// True once the clock has run down.
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Takes one second off the clock and returns what is left.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Puts the full limit back on the clock.
    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT)
    }
}

/// Generation of a tick schedule.
///
/// Every time ticking starts or stops the epoch advances, so ticks still in
/// flight from an older schedule can be told apart and dropped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("epoch {}", _0)]
pub struct Epoch(u64);

impl Epoch {
    /// The following generation.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Keeps a tick schedule alive. Dropping the guard cancels the schedule.
pub struct TickGuard {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TickGuard {
    /// Wraps the action that stops the schedule.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Stops the schedule now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TickGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickGuard")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Something that can deliver a tick every period until told to stop.
pub trait TickSource {
    /// Starts a repeating schedule whose ticks carry `epoch`.
    ///
    /// The first tick arrives one period after the call. The schedule runs
    /// until the returned guard is dropped.
    fn start(&self, epoch: Epoch) -> TickGuard;
}

/// Tick source backed by a tokio interval task.
///
/// Ticks are delivered as the schedule's [`Epoch`] on an unbounded channel;
/// the event loop owning the receiver forwards them to the session.
#[derive(Debug, Clone)]
pub struct IntervalTicks {
    period: Duration,
    tx: mpsc::UnboundedSender<Epoch>,
}

impl IntervalTicks {
    /// Creates the source together with the receiving end of its ticks.
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<Epoch>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { period, tx }, rx)
    }

    /// Interval between ticks.
    pub fn period(&self) -> Duration {
        self.period
    }
}

impl TickSource for IntervalTicks {
    /// Spawns the interval task. Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(period = ?self.period))]
    fn start(&self, epoch: Epoch) -> TickGuard {
        let tx = self.tx.clone();
        let period = self.period;
        let first = Instant::now() + period;

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            loop {
                interval.tick().await;
                if tx.send(epoch).is_err() {
                    debug!(%epoch, "Tick receiver gone, stopping schedule");
                    break;
                }
            }
        });

        debug!(%epoch, "Tick schedule started");
        TickGuard::new(move || {
            debug!(%epoch, "Tick schedule cancelled");
            handle.abort();
        })
    }
}
