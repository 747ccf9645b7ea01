//! Double-tap detection on the press stream.
//!
//! Observes the same raw events as the drag classifier but is logically
//! independent of it: a double tap never cancels an in-flight drag, and an
//! active drag never suppresses detection. Timestamps are passed in by the
//! caller so tests can fabricate timing.

use std::time::{Duration, Instant};

use crate::constants::{DOUBLE_TAP_SLOP, DOUBLE_TAP_WINDOW};
use crate::geometry::Point;

#[derive(Debug, Clone, Copy)]
pub struct DoubleTapDetector {
    window: Duration,
    slop: f32,
    last_press: Option<(Point, Instant)>,
}

impl Default for DoubleTapDetector {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_WINDOW, DOUBLE_TAP_SLOP)
    }
}

impl DoubleTapDetector {
    pub fn new(window: Duration, slop: f32) -> Self {
        Self {
            window,
            slop,
            last_press: None,
        }
    }

    /// Feed one press. Returns `true` exactly once per double tap: when this
    /// press lands within the time window and slop radius of the previous
    /// one. The pending press is consumed on firing, so a triple tap is one
    /// double tap plus a fresh first press.
    pub fn on_press(&mut self, pos: Point, now: Instant) -> bool {
        if let Some((prev_pos, prev_at)) = self.last_press
            && now.duration_since(prev_at) <= self.window
            && pos.distance_to(prev_pos) <= self.slop
        {
            self.last_press = None;
            return true;
        }
        self.last_press = Some((pos, now));
        false
    }

    /// Forget any pending first press.
    pub fn reset(&mut self) {
        self.last_press = None;
    }
}
