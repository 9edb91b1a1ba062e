/// Interaction phase of the widget.
///
/// Touch input is only accepted in [`SwipePhase::Idle`] and
/// [`SwipePhase::Dragging`]; while an animation runs every new gesture is
/// ignored so there is a single writer of drag state at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipePhase {
    #[default]
    Idle,
    Dragging,
    AnimatingOut,
    AnimatingBack,
}

impl SwipePhase {
    pub fn is_animating(&self) -> bool {
        matches!(self, SwipePhase::AnimatingOut | SwipePhase::AnimatingBack)
    }
}
