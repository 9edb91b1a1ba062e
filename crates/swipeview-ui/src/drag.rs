//! Per-gesture drag bookkeeping.

use swipeview_ui_graphics::IntOffset;

/// Resolved horizontal direction of a swipe. Left likes, right dislikes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalDirection {
    Left,
    Right,
}

impl HorizontalDirection {
    /// Negative offsets point left; zero counts as right.
    pub fn from_offset(x: i32) -> Self {
        if x < 0 {
            HorizontalDirection::Left
        } else {
            HorizontalDirection::Right
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalDirection {
    Top,
    Bottom,
}

impl VerticalDirection {
    /// Negative offsets point up; zero counts as bottom.
    pub fn from_offset(y: i32) -> Self {
        if y < 0 {
            VerticalDirection::Top
        } else {
            VerticalDirection::Bottom
        }
    }
}

/// Drag progress since the last press. All fields return to their defaults
/// on press and after every finished animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Signed pixels dragged per axis.
    pub scrolled: IntOffset,
    pub horizontal: Option<HorizontalDirection>,
    pub vertical: Option<VerticalDirection>,
    /// Indicator opacity shown after the previous drag sample.
    pub previous_alpha: f32,
    /// Width of the focused card, captured on press.
    pub card_width: i32,
}

impl DragState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_reset(&self) -> bool {
        *self == Self::default()
    }

    pub fn accumulate(&mut self, delta: IntOffset) {
        self.scrolled += delta;
    }

    /// Absolute distance dragged per axis.
    pub fn total(&self) -> IntOffset {
        IntOffset::new(self.scrolled.x.abs(), self.scrolled.y.abs())
    }

    /// Signed horizontal progress relative to the card width.
    pub fn horizontal_ratio(&self) -> Option<f32> {
        (self.card_width > 0).then(|| self.scrolled.x as f32 / self.card_width as f32)
    }

    pub fn resolve_directions(&mut self) {
        self.horizontal = Some(HorizontalDirection::from_offset(self.scrolled.x));
        self.vertical = Some(VerticalDirection::from_offset(self.scrolled.y));
    }
}
