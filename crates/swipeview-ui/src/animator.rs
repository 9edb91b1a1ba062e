//! Fixed-step card animation.
//!
//! The animator is a pure step function: each call to
//! [`StepwiseAnimator::step`] yields the displacement for one tick. The
//! owner applies it to the focused card and schedules the next tick.

use swipeview_ui_graphics::IntOffset;

use crate::decision::SwipeMode;
use crate::drag::{HorizontalDirection, VerticalDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationStep {
    /// Move the focused card by this offset and tick again.
    Advance(IntOffset),
    /// Nothing left to travel.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepwiseAnimator {
    mode: SwipeMode,
    horizontal: HorizontalDirection,
    vertical: VerticalDirection,
    /// Distance still to travel per axis, never negative.
    remaining: IntOffset,
    step_length: i32,
}

impl StepwiseAnimator {
    /// Keeps moving the card the way it was dragged until `remaining_x`
    /// pixels have been covered.
    pub fn swipe_out(
        horizontal: HorizontalDirection,
        vertical: VerticalDirection,
        remaining_x: i32,
        step_length: i32,
    ) -> Self {
        Self::new(
            SwipeMode::Out,
            horizontal,
            vertical,
            IntOffset::new(remaining_x, 0),
            step_length,
        )
    }

    /// Moves the card back by `total`, the absolute distance dragged.
    pub fn spring_back(
        horizontal: HorizontalDirection,
        vertical: VerticalDirection,
        total: IntOffset,
        step_length: i32,
    ) -> Self {
        Self::new(SwipeMode::Back, horizontal, vertical, total, step_length)
    }

    fn new(
        mode: SwipeMode,
        horizontal: HorizontalDirection,
        vertical: VerticalDirection,
        remaining: IntOffset,
        step_length: i32,
    ) -> Self {
        Self {
            mode,
            horizontal,
            vertical,
            remaining: IntOffset::new(remaining.x.max(0), remaining.y.max(0)),
            step_length: step_length.max(1),
        }
    }

    pub fn mode(&self) -> SwipeMode {
        self.mode
    }

    pub fn horizontal(&self) -> HorizontalDirection {
        self.horizontal
    }

    pub fn vertical(&self) -> VerticalDirection {
        self.vertical
    }

    pub fn remaining(&self) -> IntOffset {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn step(&mut self) -> AnimationStep {
        if self.is_finished() {
            return AnimationStep::Finished;
        }
        // The last step on each axis shrinks to land exactly on the target.
        let dx = consume(&mut self.remaining.x, self.step_length);
        let dy = consume(&mut self.remaining.y, self.step_length);

        let (x_sign, y_sign) = match self.mode {
            SwipeMode::Out => (self.horizontal_sign(), self.vertical_sign()),
            SwipeMode::Back => (-self.horizontal_sign(), -self.vertical_sign()),
        };
        AnimationStep::Advance(IntOffset::new(dx * x_sign, dy * y_sign))
    }

    fn horizontal_sign(&self) -> i32 {
        match self.horizontal {
            HorizontalDirection::Left => -1,
            HorizontalDirection::Right => 1,
        }
    }

    fn vertical_sign(&self) -> i32 {
        match self.vertical {
            VerticalDirection::Top => -1,
            VerticalDirection::Bottom => 1,
        }
    }
}

fn consume(remaining: &mut i32, step_length: i32) -> i32 {
    let length = (*remaining).min(step_length);
    *remaining -= length;
    length
}
