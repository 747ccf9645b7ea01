//! Rendering for the overlay: a dimmed backdrop with the blocking pane on
//! top. The pane is clipped to the viewport; its geometry itself is allowed
//! to extend offscreen mid-drag.

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::controller::DragMode;
use crate::overlay::OverlayPane;

const HINT: &str = " drag edges to resize, double-click to close ";

pub fn render_overlay(frame: &mut Frame, pane: &OverlayPane) {
    let area = frame.area();
    let backdrop = Block::new().style(Style::new().bg(Color::Black).fg(Color::DarkGray));
    frame.render_widget(backdrop, area);

    let Some(rect) = pane.rect().clip_to(area) else {
        // Pane dragged fully offscreen; leave the backdrop so Ctrl+Q still
        // has a visible surface.
        return;
    };

    let border_style = if pane.is_dragging() {
        Style::new().fg(Color::Yellow)
    } else {
        Style::new().fg(Color::Gray)
    };
    let title = match pane.drag_mode() {
        Some(mode) => format!(" term-shade [{}] ", mode_label(mode)),
        None => " term-shade ".to_string(),
    };

    let block = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(border_style)
        .title(title)
        .style(Style::new().bg(Color::DarkGray).fg(Color::White));
    let inner = block.inner(rect);
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    if inner.height > 0 && inner.width as usize >= HINT.len() {
        let hint_area = ratatui::layout::Rect {
            x: inner.x,
            y: inner.y + inner.height / 2,
            width: inner.width,
            height: 1,
        };
        let hint = Paragraph::new(HINT)
            .alignment(Alignment::Center)
            .style(Style::new().add_modifier(Modifier::DIM));
        frame.render_widget(hint, hint_area);
    }
}

fn mode_label(mode: DragMode) -> &'static str {
    match mode {
        DragMode::Moving => "move",
        DragMode::ResizeLeft => "resize left",
        DragMode::ResizeTop => "resize top",
        DragMode::ResizeRight => "resize right",
        DragMode::ResizeBottom => "resize bottom",
        DragMode::ResizeTopLeft => "resize top-left",
        DragMode::ResizeTopRight => "resize top-right",
        DragMode::ResizeBottomLeft => "resize bottom-left",
        DragMode::ResizeBottomRight => "resize bottom-right",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ControllerConfig, GeometryController};
    use crate::geometry::PaneRect;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn pane(rect: PaneRect) -> OverlayPane {
        let controller = GeometryController::new(ControllerConfig {
            handle_size: 30.0,
            density: 0.1,
            min_size: 5,
        })
        .unwrap();
        OverlayPane::new(controller, rect)
    }

    #[test]
    fn draws_double_border_at_pane_corners() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let p = pane(PaneRect::new(10, 5, 20, 10));
        terminal.draw(|frame| render_overlay(frame, &p)).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.cell((10, 5)).unwrap().symbol(), "╔");
        assert_eq!(buffer.cell((29, 14)).unwrap().symbol(), "╝");
    }

    #[test]
    fn offscreen_pane_renders_backdrop_only() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let p = pane(PaneRect::new(-100, -100, 20, 10));
        terminal.draw(|frame| render_overlay(frame, &p)).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn partially_offscreen_pane_clips_instead_of_panicking() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let p = pane(PaneRect::new(-5, -2, 20, 10));
        terminal.draw(|frame| render_overlay(frame, &p)).unwrap();
        let buffer = terminal.backend().buffer();
        // the visible bottom-right corner of the clipped pane
        assert_eq!(buffer.cell((14, 7)).unwrap().symbol(), "╝");
    }
}
