//! The live overlay pane: owns the current geometry, routes mouse events
//! into the drag controller, and raises the dismiss signal from the
//! double-tap detector.
//!
//! Exactly one drag session is active at a time. Presses outside the pane
//! open no session; drag and release events without a session are ignored.

use std::time::Instant;

use crossterm::event::{MouseEvent, MouseEventKind};

use crate::controller::double_tap::DoubleTapDetector;
use crate::controller::{DragMode, DragSession, GeometryController};
use crate::geometry::{PaneRect, Point};

pub struct OverlayPane {
    controller: GeometryController,
    detector: DoubleTapDetector,
    rect: PaneRect,
    session: Option<DragSession>,
    dismiss_requested: bool,
}

impl OverlayPane {
    pub fn new(controller: GeometryController, rect: PaneRect) -> Self {
        Self {
            controller,
            detector: DoubleTapDetector::default(),
            rect,
            session: None,
            dismiss_requested: false,
        }
    }

    /// Current geometry, as last applied. This is what the host persists at
    /// teardown.
    pub fn rect(&self) -> PaneRect {
        self.rect
    }

    pub fn drag_mode(&self) -> Option<DragMode> {
        self.session.as_ref().map(|s| s.mode)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// One-shot dismiss flag, consumed by the host loop.
    pub fn take_dismiss_request(&mut self) -> bool {
        std::mem::take(&mut self.dismiss_requested)
    }

    pub fn handle_mouse(&mut self, mouse: &MouseEvent) -> bool {
        self.handle_mouse_at(mouse, Instant::now())
    }

    /// Route one mouse event. Returns `true` when the event was consumed.
    /// `now` feeds the double-tap detector; tests pass fabricated instants.
    pub fn handle_mouse_at(&mut self, mouse: &MouseEvent, now: Instant) -> bool {
        let abs = Point::new(mouse.column as f32, mouse.row as f32);
        match mouse.kind {
            MouseEventKind::Down(_) => {
                if !self.rect.contains(abs) {
                    return false;
                }
                // The detector sees every press; dismissal does not stop
                // the press from also opening a session.
                if self.detector.on_press(abs, now) {
                    tracing::debug!("double tap, requesting dismissal");
                    self.dismiss_requested = true;
                }
                let local = Point::new(abs.x - self.rect.x as f32, abs.y - self.rect.y as f32);
                self.session = Some(self.controller.pointer_down(local, abs, self.rect));
                true
            }
            MouseEventKind::Drag(_) => {
                let Some(session) = self.session.as_mut() else {
                    return false;
                };
                self.rect = self.controller.pointer_move(session, abs);
                true
            }
            MouseEventKind::Up(_) => {
                let Some(session) = self.session.take() else {
                    return false;
                };
                self.rect = self.controller.pointer_up(session);
                true
            }
            _ => false,
        }
    }

    /// Terminate an in-flight session without a release event, e.g. when
    /// the terminal loses focus. The last computed geometry stands.
    pub fn cancel_interaction(&mut self) {
        if let Some(session) = self.session.take() {
            self.rect = self.controller.pointer_up(session);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::ControllerConfig;
    use crossterm::event::{KeyModifiers, MouseButton};
    use std::time::Duration;

    fn pane() -> OverlayPane {
        // hotzone 3 cells, minimum 5 cells
        let controller = GeometryController::new(ControllerConfig {
            handle_size: 30.0,
            density: 0.1,
            min_size: 5,
        })
        .unwrap();
        OverlayPane::new(controller, PaneRect::new(10, 5, 20, 10))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn press_outside_pane_is_ignored() {
        let mut p = pane();
        assert!(!p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 5)));
        assert!(!p.is_dragging());
    }

    #[test]
    fn body_drag_moves_the_pane() {
        let mut p = pane();
        assert!(p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 10)));
        assert_eq!(p.drag_mode(), Some(DragMode::Moving));
        assert!(p.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 24, 12)));
        assert_eq!(p.rect(), PaneRect::new(14, 7, 20, 10));
        assert!(p.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 24, 12)));
        assert!(!p.is_dragging());
    }

    #[test]
    fn edge_press_resizes() {
        let mut p = pane();
        // pane spans x 10..30; x=29 is within the 3-cell right hotzone
        assert!(p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 29, 10)));
        assert_eq!(p.drag_mode(), Some(DragMode::ResizeRight));
        p.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 35, 10));
        assert_eq!(p.rect(), PaneRect::new(10, 5, 26, 10));
    }

    #[test]
    fn stray_drag_and_release_without_session_are_ignored() {
        let mut p = pane();
        assert!(!p.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 20, 10)));
        assert!(!p.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 20, 10)));
        assert_eq!(p.rect(), PaneRect::new(10, 5, 20, 10));
    }

    #[test]
    fn double_click_requests_dismiss_without_breaking_the_drag() {
        let mut p = pane();
        let t0 = Instant::now();
        let down = mouse(MouseEventKind::Down(MouseButton::Left), 20, 10);
        p.handle_mouse_at(&down, t0);
        p.handle_mouse_at(&mouse(MouseEventKind::Up(MouseButton::Left), 20, 10), t0);
        p.handle_mouse_at(&down, t0 + Duration::from_millis(150));
        assert!(p.take_dismiss_request());
        // the flag is one-shot
        assert!(!p.take_dismiss_request());
        // the second press still opened a session, and it keeps working
        assert!(p.is_dragging());
        p.handle_mouse_at(
            &mouse(MouseEventKind::Drag(MouseButton::Left), 22, 10),
            t0 + Duration::from_millis(200),
        );
        assert_eq!(p.rect(), PaneRect::new(12, 5, 20, 10));
    }

    #[test]
    fn cancel_keeps_last_computed_geometry() {
        let mut p = pane();
        p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        p.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 25, 10));
        p.cancel_interaction();
        assert_eq!(p.rect(), PaneRect::new(15, 5, 20, 10));
        assert!(!p.is_dragging());
    }

    #[test]
    fn second_session_starts_from_where_the_first_ended() {
        let mut p = pane();
        p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 20, 10));
        p.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 26, 10));
        p.handle_mouse(&mouse(MouseEventKind::Up(MouseButton::Left), 26, 10));
        assert_eq!(p.rect(), PaneRect::new(16, 5, 20, 10));

        p.handle_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 26, 10));
        p.handle_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 24, 10));
        assert_eq!(p.rect(), PaneRect::new(14, 5, 20, 10));
    }
}
