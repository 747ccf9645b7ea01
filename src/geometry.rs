use ratatui::prelude::Rect;

/// Signed panel rectangle: origin may go offscreen during a drag, and the
/// arithmetic in the drag controller is signed throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PaneRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x as f32
            && p.x < (self.x + self.width) as f32
            && p.y >= self.y as f32
            && p.y < (self.y + self.height) as f32
    }

    /// Clip to a terminal viewport for drawing. Returns `None` when the
    /// visible intersection is empty.
    pub fn clip_to(&self, bounds: Rect) -> Option<Rect> {
        let bx = bounds.x as i32;
        let by = bounds.y as i32;
        let bright = bx + bounds.width as i32;
        let bbottom = by + bounds.height as i32;

        let left = self.x.max(bx);
        let top = self.y.max(by);
        let right = (self.x + self.width).min(bright);
        let bottom = (self.y + self.height).min(bbottom);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

/// Pointer position in fractional device units. Terminal cells arrive as
/// integers but the controller contract works in continuous coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = PaneRect::new(2, 3, 10, 5);
        assert!(r.contains(Point::new(2.0, 3.0)));
        assert!(r.contains(Point::new(11.9, 7.9)));
        assert!(!r.contains(Point::new(12.0, 3.0)));
        assert!(!r.contains(Point::new(2.0, 8.0)));
        assert!(!r.contains(Point::new(1.9, 4.0)));
    }

    #[test]
    fn clip_keeps_onscreen_portion_of_negative_origin() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let r = PaneRect::new(-5, -2, 20, 10);
        assert_eq!(
            r.clip_to(bounds),
            Some(Rect {
                x: 0,
                y: 0,
                width: 15,
                height: 8
            })
        );
    }

    #[test]
    fn clip_fully_offscreen_is_none() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        assert_eq!(PaneRect::new(-30, 0, 20, 10).clip_to(bounds), None);
        assert_eq!(PaneRect::new(0, 30, 20, 10).clip_to(bounds), None);
    }
}
