//! Stacked card "swipe to like / dislike" widget.
//!
//! The widget keeps up to [`MAX_ELEMENTS`] cards. The front card follows
//! single-pointer drags, shows a like or dislike indicator proportional to
//! the horizontal progress and, on release, either leaves the stack or
//! springs back. Rendering is left to the host: it reads card offsets,
//! padding and indicator opacity from the view after every event or tick.

mod animator;
mod card;
mod config;
mod decision;
mod drag;
mod error;
mod listener;
mod padding;
mod phase;
mod stack;
mod swipe_view;

pub use animator::{AnimationStep, StepwiseAnimator};
pub use card::{AlphaTransition, Card, Indicator};
pub use config::{SwipeViewConfig, DELAY_SCROLL_MILLIS, MAX_ELEMENTS, SCROLL_LENGTH};
pub use decision::{decide, SwipeMode};
pub use drag::{DragState, HorizontalDirection, VerticalDirection};
pub use error::CardStackError;
pub use listener::{OnCardSwipedListener, SwipeResult};
pub use padding::PaddingTable;
pub use phase::SwipePhase;
pub use stack::{CardSlot, CardStack};
pub use swipe_view::{SwipeView, WeakSwipeView};

pub mod prelude {
    pub use crate::card::Card;
    pub use crate::config::SwipeViewConfig;
    pub use crate::listener::OnCardSwipedListener;
    pub use crate::phase::SwipePhase;
    pub use crate::swipe_view::SwipeView;
}
