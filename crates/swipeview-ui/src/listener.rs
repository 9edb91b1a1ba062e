use crate::drag::HorizontalDirection;

/// Receives swipe outcomes and taps. Callbacks run on the UI thread from the
/// runtime's task queue, never while the widget is mid-update, so they may
/// call back into the view.
pub trait OnCardSwipedListener {
    /// The focused card left the stack to the left.
    fn on_likes(&self);

    /// The focused card left the stack to the right.
    fn on_dislikes(&self);

    /// A press was released without dragging and no second press followed.
    fn on_single_tap(&self);
}

/// Outcome of a completed swipe-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeResult {
    Liked,
    Disliked,
}

impl From<HorizontalDirection> for SwipeResult {
    fn from(direction: HorizontalDirection) -> Self {
        match direction {
            HorizontalDirection::Left => SwipeResult::Liked,
            HorizontalDirection::Right => SwipeResult::Disliked,
        }
    }
}

impl SwipeResult {
    pub(crate) fn notify(self, listener: &dyn OnCardSwipedListener) {
        match self {
            SwipeResult::Liked => listener.on_likes(),
            SwipeResult::Disliked => listener.on_dislikes(),
        }
    }
}
