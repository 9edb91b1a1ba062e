//! Drag gesture recogniser.
//!
//! Movement below the touch slop is swallowed. Once the slop is crossed the
//! recogniser reports deltas relative to the last reported position, the
//! first one measured from the press position.

use swipeview_ui_graphics::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    slop: f32,
    press: Option<Point>,
    last: Point,
    dragging: bool,
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new(crate::gesture_constants::DRAG_THRESHOLD)
    }
}

impl DragGesture {
    pub fn new(slop: f32) -> Self {
        Self {
            slop,
            press: None,
            last: Point::ZERO,
            dragging: false,
        }
    }

    pub fn press(&mut self, position: Point) {
        self.press = Some(position);
        self.last = position;
        self.dragging = false;
    }

    /// Feeds a move sample; returns the delta to apply once dragging.
    pub fn motion(&mut self, position: Point) -> Option<Point> {
        let press = self.press?;
        if !self.dragging {
            if press.distance_to(position) <= self.slop {
                return None;
            }
            self.dragging = true;
        }
        let delta = position - self.last;
        self.last = position;
        Some(delta)
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn reset(&mut self) {
        self.press = None;
        self.dragging = false;
    }
}
