//! The repeating tick timer owned by the engine.
//!
//! Time is supplied by the host in seconds (macroquad's `get_time()`), so the timer can be
//! driven by hand in tests.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimerState {
    #[default]
    Idle,
    Running {
        interval: Duration,
        next_due: f64,
    },
    Stopped,
}

#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    state: TimerState,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Starts the timer. Returns `false` and leaves the timer untouched if it is already
    /// running.
    pub fn start(&mut self, interval: Duration, now: f64) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = TimerState::Running {
            interval,
            next_due: now + interval.as_secs_f64(),
        };
        true
    }

    /// Stops a running timer. Returns `false` if there was nothing to stop.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = TimerState::Stopped;
        true
    }

    /// Returns `true` when a tick is due at `now`. Fires at most once per call; when the
    /// host falls more than a whole interval behind, missed ticks are dropped.
    pub fn poll(&mut self, now: f64) -> bool {
        let TimerState::Running { interval, next_due } = &mut self.state else {
            return false;
        };
        if now < *next_due {
            return false;
        }
        let step = interval.as_secs_f64();
        *next_due += step;
        if now - *next_due > step {
            *next_due = now + step;
        }
        true
    }
}
