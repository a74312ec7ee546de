//! Fixed-interval repeating task.
//!
//! The event loop owns a [`RepeatingTask`] and asks it, after every input poll,
//! how many ticks are due. Nothing runs in the background: a cancelled task
//! simply stops reporting ticks, so tearing the game down never leaves a
//! pending frame behind.

use crate::core::constants::MAX_CATCH_UP_TICKS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RepeatingTask {
    interval: Duration,
    /// Deadline of the next tick; `None` while stopped.
    next_due: Option<Instant>,
    max_catch_up: u32,
}

impl RepeatingTask {
    /// Create a stopped task. Zero intervals are bumped to 1ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
            max_catch_up: MAX_CATCH_UP_TICKS,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Arm the task. The first tick falls due one interval after `now`.
    /// Restarting a running task resets its phase.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Stop the task and drop any tick that was pending.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Number of ticks that fell due up to `now`.
    ///
    /// After a long stall only `max_catch_up` ticks are reported and the
    /// schedule restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut due) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while due <= now {
            ticks += 1;
            due += self.interval;
            if ticks >= self.max_catch_up {
                if due <= now {
                    due = now + self.interval;
                }
                break;
            }
        }
        self.next_due = Some(due);
        ticks
    }

    /// How long the caller may block before the next tick; `None` when stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}
