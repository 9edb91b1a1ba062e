//! Depth-indexed padding that makes the stacked cards peek out behind the
//! focused one.

use swipeview_ui_graphics::{Dp, IntEdgeInsets};

use crate::config::MAX_ELEMENTS;

const PADDING_HORIZONTAL: [Dp; MAX_ELEMENTS] = [Dp(0.0), Dp(10.0), Dp(20.0)];
const PADDING_TOP: [Dp; MAX_ELEMENTS] = [Dp(0.0), Dp(10.0), Dp(20.0)];
const PADDING_BOTTOM: [Dp; MAX_ELEMENTS] = [Dp(20.0), Dp(10.0), Dp(0.0)];

/// Padding per stack depth (front = 0), scaled to device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingTable {
    horizontal: [i32; MAX_ELEMENTS],
    top: [i32; MAX_ELEMENTS],
    bottom: [i32; MAX_ELEMENTS],
}

impl PaddingTable {
    pub fn new(density: f32) -> Self {
        Self {
            horizontal: PADDING_HORIZONTAL.map(|dp| dp.to_int_px(density)),
            top: PADDING_TOP.map(|dp| dp.to_int_px(density)),
            bottom: PADDING_BOTTOM.map(|dp| dp.to_int_px(density)),
        }
    }

    /// Padding of the card at `depth`. Depths past the table reuse the
    /// deepest entry.
    pub fn for_depth(&self, depth: usize) -> IntEdgeInsets {
        let depth = depth.min(MAX_ELEMENTS - 1);
        IntEdgeInsets::from_components(
            self.horizontal[depth],
            self.top[depth],
            self.horizontal[depth],
            self.bottom[depth],
        )
    }

    /// Padding of the focused card while it is being dragged.
    pub fn lifted(&self) -> IntEdgeInsets {
        IntEdgeInsets::horizontal(self.horizontal[0])
    }
}

impl Default for PaddingTable {
    fn default() -> Self {
        Self::new(1.0)
    }
}
