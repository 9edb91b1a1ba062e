//! Widget configuration and fixed limits.

use swipeview_foundation::gesture_constants::{DOUBLE_TAP_TIMEOUT_MILLIS, DRAG_THRESHOLD};

/// Maximum number of cards held by the stack at once.
pub const MAX_ELEMENTS: usize = 3;

/// Pixels the focused card travels per axis on each animation tick.
pub const SCROLL_LENGTH: i32 = 5;

/// Delay between two animation ticks.
pub const DELAY_SCROLL_MILLIS: u64 = 1;

/// Construction-time settings of a [`SwipeView`](crate::SwipeView).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeViewConfig {
    /// Display density used to scale the padding table once.
    pub density: f32,
    /// Pixels per axis per tick. Values below 1 are treated as 1.
    pub scroll_length: i32,
    pub tick_delay_millis: u64,
    /// Distance the pointer must travel before a press becomes a drag.
    pub touch_slop: f32,
    pub double_tap_timeout_millis: u64,
}

impl Default for SwipeViewConfig {
    fn default() -> Self {
        Self {
            density: 1.0,
            scroll_length: SCROLL_LENGTH,
            tick_delay_millis: DELAY_SCROLL_MILLIS,
            touch_slop: DRAG_THRESHOLD,
            double_tap_timeout_millis: DOUBLE_TAP_TIMEOUT_MILLIS,
        }
    }
}

impl SwipeViewConfig {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_scroll_length(mut self, scroll_length: i32) -> Self {
        self.scroll_length = scroll_length;
        self
    }

    pub fn with_tick_delay_millis(mut self, delay: u64) -> Self {
        self.tick_delay_millis = delay;
        self
    }

    pub fn with_touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    pub fn with_double_tap_timeout_millis(mut self, timeout: u64) -> Self {
        self.double_tap_timeout_millis = timeout;
        self
    }

    pub(crate) fn step_length(&self) -> i32 {
        self.scroll_length.max(1)
    }
}
