//! Timed playback over a completed trace.
//!
//! The controller is a pure state machine: the host owns the actual
//! timer and drives it through [`Playback::schedule`] and
//! [`Playback::timer_fired`]. A [`TimerToken`] carries the epoch it was
//! issued under; replacing the trace bumps the epoch, so callbacks from
//! timers armed for a superseded trace can never move the index.

use std::time::Duration;

use log::{debug, trace};

use crate::snapshot::Snapshot;
use crate::trace::Trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    /// No snapshots to play. Stepping and ticking are no-ops.
    Idle,
    /// The timer is active; each firing advances one step.
    Playing,
    /// The timer is inactive; the index is frozen where it was.
    Paused,
    /// The last snapshot was reached. Terminal until restart or a new
    /// trace.
    Completed,
}

/// Cancellation token for one scheduled timer callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerToken {
    epoch: u64,
}

/// Steps through a completed [`Trace`] under host-driven timing.
pub struct Playback {
    trace: Trace,
    index: usize,
    delay: Duration,
    state: PlayState,
    epoch: u64,
}

impl Playback {
    /// Starts playing the trace from index 0, or idles on an empty one.
    pub fn new(trace: Trace, delay: Duration) -> Self {
        let state = if trace.is_empty() {
            PlayState::Idle
        } else {
            PlayState::Playing
        };
        Self {
            trace,
            index: 0,
            delay,
            state,
            epoch: 0,
        }
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The snapshot at the current index, for the renderer to draw.
    pub fn current(&self) -> Option<&Snapshot> {
        self.trace.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Re-paces subsequent steps. The index is untouched.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Advances one step. At the last snapshot the controller becomes
    /// [`PlayState::Completed`] and further calls are no-ops; there is
    /// no wraparound.
    pub fn step(&mut self) -> bool {
        match self.state {
            PlayState::Idle | PlayState::Completed => false,
            PlayState::Playing | PlayState::Paused => {
                if self.index + 1 < self.trace.len() {
                    self.index += 1;
                    if self.index + 1 == self.trace.len() {
                        self.state = PlayState::Completed;
                        debug!("playback completed at index {}", self.index);
                    }
                    true
                } else {
                    self.state = PlayState::Completed;
                    false
                }
            }
        }
    }

    /// Freezes the index exactly where it is.
    pub fn pause(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Paused;
            debug!("paused at index {}", self.index);
        }
    }

    /// Continues advancing from the paused index, not from the start.
    pub fn resume(&mut self) {
        if self.state == PlayState::Paused {
            self.state = PlayState::Playing;
            debug!("resumed at index {}", self.index);
        }
    }

    /// Back to index 0 and automatic advancement.
    pub fn restart(&mut self) {
        if self.state == PlayState::Idle {
            return;
        }
        self.index = 0;
        self.state = PlayState::Playing;
        debug!("restarted");
    }

    /// Swaps in a freshly built trace: index 0, playing (or idle on an
    /// empty trace), and every outstanding timer token invalidated.
    pub fn replace_trace(&mut self, trace: Trace) {
        self.epoch += 1;
        self.index = 0;
        self.state = if trace.is_empty() {
            PlayState::Idle
        } else {
            PlayState::Playing
        };
        self.trace = trace;
        debug!("trace replaced; epoch {}", self.epoch);
    }

    /// While playing, returns the token the host should hand back after
    /// waiting [`Self::delay`]. Returns `None` when no timer should be
    /// armed.
    pub fn schedule(&self) -> Option<TimerToken> {
        (self.state == PlayState::Playing).then_some(TimerToken { epoch: self.epoch })
    }

    /// One timer callback. Advances only if the token is current and
    /// the controller is still playing; stale and paused ticks are
    /// discarded without touching the index.
    pub fn timer_fired(&mut self, token: TimerToken) -> bool {
        if token.epoch != self.epoch {
            trace!(
                "stale timer tick ignored (epoch {} != {})",
                token.epoch,
                self.epoch
            );
            return false;
        }
        if self.state != PlayState::Playing {
            return false;
        }
        self.step()
    }
}
