// SPDX-License-Identifier: MPL-2.0
//! Control bar auto-hide timer.
//!
//! The control bar stays visible while the user is interacting or playback is
//! paused. During playback it hides after a period without pointer activity,
//! and sooner once the pointer leaves the player.
//!
//! Time is passed in explicitly so the presentation layer can drive the timer
//! from its own clock and tests can step it deterministically.

use crate::config::ControlsConfig;
use std::time::{Duration, Instant};

/// Pending hide deadline for the control bar.
#[derive(Debug, Clone)]
pub struct ControlsTimer {
    hide_delay: Duration,
    leave_hide_delay: Duration,
    deadline: Option<Instant>,
}

impl ControlsTimer {
    #[must_use]
    pub fn new(config: &ControlsConfig) -> Self {
        Self {
            hide_delay: config.hide_delay(),
            leave_hide_delay: config.leave_hide_delay(),
            deadline: None,
        }
    }

    /// Pointer moved. Restarts the hide countdown if hiding is allowed.
    pub fn on_activity(&mut self, now: Instant, can_hide: bool) {
        self.deadline = can_hide.then(|| now + self.hide_delay);
    }

    /// Pointer left the player or the control bar.
    pub fn on_leave(&mut self, now: Instant, can_hide: bool) {
        if can_hide {
            self.deadline = Some(now + self.leave_hide_delay);
        }
    }

    /// Cancels any pending hide.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns true, and clears the deadline, once it has passed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

impl Default for ControlsTimer {
    fn default() -> Self {
        Self::new(&ControlsConfig::default())
    }
}
