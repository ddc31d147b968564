// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Debounced redraw requests
//!
//! Change notifications request a redraw after a delay; a new request
//! replaces any pending one, so a burst of changes results in one redraw. The
//! queue does not own a timer: the caller supplies the current time.

use std::time::{Duration, Instant};

/// Delay used for user edits
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Delay used for programmatic changes
pub const IMMEDIATE: Duration = Duration::from_millis(1);

/// A coalescing redraw timer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedrawQueue {
    due: Option<Instant>,
}

impl RedrawQueue {
    /// Construct with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a redraw `delay` after `now`
    ///
    /// Replaces any pending request. A zero delay means [`DEFAULT_DELAY`].
    pub fn queue(&mut self, now: Instant, delay: Duration) {
        let delay = if delay.is_zero() { DEFAULT_DELAY } else { delay };
        self.due = Some(now + delay);
    }

    /// Time of the pending redraw, if any
    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Drop any pending request
    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// If a redraw is due at `now`, clear it and return true
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Run `draw` if a redraw is due
    ///
    /// When `ready` is false (e.g. images are still loading) the redraw is
    /// requeued with [`DEFAULT_DELAY`] instead. Returns true if `draw` ran.
    pub fn poll(&mut self, now: Instant, ready: bool, draw: impl FnOnce()) -> bool {
        if !self.take_due(now) {
            return false;
        }
        if !ready {
            log::debug!("RedrawQueue: not ready; rescheduling");
            self.queue(now, DEFAULT_DELAY);
            return false;
        }
        draw();
        true
    }
}
