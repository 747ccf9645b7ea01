//! Pointer-drag controller for the floating pane.
//!
//! Turns a down/move/up event stream into move and resize operations on a
//! [`PaneRect`]. The interaction mode is classified once at press time from
//! the edge hotzones and never re-evaluated mid-drag; every move recomputes
//! geometry from the press-time rectangle and the total pointer delta, so
//! delivering the same move event twice is harmless.

pub mod double_tap;

use thiserror::Error;

use crate::constants::{HANDLE_SIZE, MIN_PANE_SIZE};
use crate::geometry::{PaneRect, Point};

/// What a drag does to the pane, decided at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Moving,
    ResizeLeft,
    ResizeTop,
    ResizeRight,
    ResizeBottom,
    ResizeTopLeft,
    ResizeTopRight,
    ResizeBottomLeft,
    ResizeBottomRight,
}

/// Controller construction parameters.
///
/// `handle_size` is in logical units and is resolved to device units once,
/// via `density`, when the controller is built. `min_size` is in device
/// units. Defaults match the pixel-display profile; terminal hosts pass a
/// fractional density and a cell-scaled minimum.
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub handle_size: f32,
    pub density: f32,
    pub min_size: i32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            handle_size: HANDLE_SIZE,
            density: 1.0,
            min_size: MIN_PANE_SIZE,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("handle size must be non-negative, got {0}")]
    NegativeHandleSize(f32),
    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f32),
    #[error("minimum pane size must be positive, got {0}")]
    NonPositiveMinSize(i32),
}

/// One press-to-release interaction.
///
/// `initial` and `anchor` are frozen at press time. `last` is the most
/// recently accepted geometry: when a resize proposal violates the minimum
/// size, the rejected axis keeps its `last` value rather than snapping back
/// to `initial`, so the moving edge sticks at the smallest size it validly
/// reached. That matches the observed behavior this controller reproduces
/// and is covered by `sticky_clamp_keeps_last_accepted_width`.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pub mode: DragMode,
    initial: PaneRect,
    anchor: Point,
    last: PaneRect,
}

impl DragSession {
    pub fn initial(&self) -> PaneRect {
        self.initial
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Geometry after the most recent accepted move.
    pub fn current(&self) -> PaneRect {
        self.last
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GeometryController {
    hotzone: f32,
    min_size: i32,
}

impl GeometryController {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        if config.handle_size < 0.0 {
            return Err(ConfigError::NegativeHandleSize(config.handle_size));
        }
        if config.density <= 0.0 {
            return Err(ConfigError::NonPositiveDensity(config.density));
        }
        if config.min_size <= 0 {
            return Err(ConfigError::NonPositiveMinSize(config.min_size));
        }
        Ok(Self {
            hotzone: config.handle_size * config.density,
            min_size: config.min_size,
        })
    }

    /// Hotzone band width in device units.
    pub fn hotzone(&self) -> f32 {
        self.hotzone
    }

    pub fn min_size(&self) -> i32 {
        self.min_size
    }

    /// Classify a press and open a session.
    ///
    /// `local` is relative to the pane's top-left corner; `abs` is in the
    /// same coordinate space as the pane rectangle. The rectangle is only
    /// read, never mutated. Every press yields a mode: corners win over
    /// single edges, and anything outside the hotzones is a move.
    pub fn pointer_down(&self, local: Point, abs: Point, rect: PaneRect) -> DragSession {
        let mode = self.classify(local, rect);
        tracing::debug!(?mode, x = f64::from(local.x), y = f64::from(local.y), "drag session opened");
        DragSession {
            mode,
            initial: rect,
            anchor: abs,
            last: rect,
        }
    }

    fn classify(&self, local: Point, rect: PaneRect) -> DragMode {
        let h = self.hotzone;
        let left = local.x < h;
        let top = local.y < h;
        let right = local.x > rect.width as f32 - h;
        let bottom = local.y > rect.height as f32 - h;

        // Corner zones overlap two edge zones; corners first. When the pane
        // is narrower than two hotzones, opposite edges overlap too, and
        // this order still resolves deterministically.
        if left && top {
            DragMode::ResizeTopLeft
        } else if right && top {
            DragMode::ResizeTopRight
        } else if left && bottom {
            DragMode::ResizeBottomLeft
        } else if right && bottom {
            DragMode::ResizeBottomRight
        } else if left {
            DragMode::ResizeLeft
        } else if top {
            DragMode::ResizeTop
        } else if right {
            DragMode::ResizeRight
        } else if bottom {
            DragMode::ResizeBottom
        } else {
            DragMode::Moving
        }
    }

    /// Apply a pointer move, returning the new geometry.
    ///
    /// Each axis is derived from the press-time rectangle and the total
    /// delta. A proposed dimension at or below the minimum leaves that axis
    /// (dimension plus paired coordinate for left/top edges) at the
    /// session's last accepted value.
    pub fn pointer_move(&self, session: &mut DragSession, abs: Point) -> PaneRect {
        let dx = abs.x - session.anchor.x;
        let dy = abs.y - session.anchor.y;
        let r0 = session.initial;
        let mut next = session.last;

        match session.mode {
            DragMode::Moving => {
                next.x = (r0.x as f32 + dx) as i32;
                next.y = (r0.y as f32 + dy) as i32;
                next.width = r0.width;
                next.height = r0.height;
            }
            DragMode::ResizeLeft => {
                self.resize_left(&mut next, r0, dx);
            }
            DragMode::ResizeTop => {
                self.resize_top(&mut next, r0, dy);
            }
            DragMode::ResizeRight => {
                self.resize_right(&mut next, r0, dx);
            }
            DragMode::ResizeBottom => {
                self.resize_bottom(&mut next, r0, dy);
            }
            DragMode::ResizeTopLeft => {
                self.resize_left(&mut next, r0, dx);
                self.resize_top(&mut next, r0, dy);
            }
            DragMode::ResizeTopRight => {
                self.resize_right(&mut next, r0, dx);
                self.resize_top(&mut next, r0, dy);
            }
            DragMode::ResizeBottomLeft => {
                self.resize_left(&mut next, r0, dx);
                self.resize_bottom(&mut next, r0, dy);
            }
            DragMode::ResizeBottomRight => {
                self.resize_right(&mut next, r0, dx);
                self.resize_bottom(&mut next, r0, dy);
            }
        }

        session.last = next;
        next
    }

    /// Close the session and return the final geometry snapshot. The host
    /// persists this (or the rect it last applied) at teardown.
    pub fn pointer_up(&self, session: DragSession) -> PaneRect {
        tracing::debug!(mode = ?session.mode, rect = ?session.last, "drag session closed");
        session.last
    }

    fn resize_left(&self, next: &mut PaneRect, r0: PaneRect, dx: f32) {
        let width = (r0.width as f32 - dx) as i32;
        if width > self.min_size {
            next.width = width;
            next.x = (r0.x as f32 + dx) as i32;
        }
    }

    fn resize_right(&self, next: &mut PaneRect, r0: PaneRect, dx: f32) {
        let width = (r0.width as f32 + dx) as i32;
        if width > self.min_size {
            next.width = width;
        }
    }

    fn resize_top(&self, next: &mut PaneRect, r0: PaneRect, dy: f32) {
        let height = (r0.height as f32 - dy) as i32;
        if height > self.min_size {
            next.height = height;
            next.y = (r0.y as f32 + dy) as i32;
        }
    }

    fn resize_bottom(&self, next: &mut PaneRect, r0: PaneRect, dy: f32) {
        let height = (r0.height as f32 + dy) as i32;
        if height > self.min_size {
            next.height = height;
        }
    }
}
