//! The card stack widget.
//!
//! `SwipeView` is a cheap handle over shared single-threaded state. Pointer
//! input moves the focused card; releasing it either commits the swipe or
//! springs the card back, both through a stepwise animation that reschedules
//! itself on the runtime every [`SwipeViewConfig::tick_delay_millis`].
//!
//! Invalid calls are ignored rather than reported:
//! - any input while the stack is empty,
//! - touch input and programmatic swipes while an animation is running,
//! - [`SwipeView::add_card`] beyond [`MAX_ELEMENTS`](crate::MAX_ELEMENTS) (use
//!   [`SwipeView::try_add_card`] to learn why a card was refused).

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipeview_core::{CancellationToken, RuntimeHandle, TaskRegistration};
use swipeview_foundation::{GestureDetector, GestureEvent, PointerEvent};
use swipeview_ui_graphics::{IntEdgeInsets, IntOffset, Size};

use crate::animator::{AnimationStep, StepwiseAnimator};
use crate::card::{Card, Indicator};
use crate::config::SwipeViewConfig;
use crate::decision::{decide, SwipeMode};
use crate::drag::{DragState, HorizontalDirection, VerticalDirection};
use crate::error::CardStackError;
use crate::listener::{OnCardSwipedListener, SwipeResult};
use crate::padding::PaddingTable;
use crate::phase::SwipePhase;
use crate::stack::CardStack;

type SharedInner<C> = Rc<RefCell<SwipeViewInner<C>>>;
type WeakInner<C> = Weak<RefCell<SwipeViewInner<C>>>;

struct ActiveAnimation {
    animator: StepwiseAnimator,
    token: CancellationToken,
    tick: Option<TaskRegistration>,
}

struct SwipeViewInner<C> {
    runtime: RuntimeHandle,
    config: SwipeViewConfig,
    listener: Rc<dyn OnCardSwipedListener>,
    stack: CardStack<C>,
    size: Size,
    phase: SwipePhase,
    drag: DragState,
    touchable: bool,
    detector: GestureDetector,
    animation: Option<ActiveAnimation>,
    tap_confirmation: Option<TaskRegistration>,
}

/// Stacked "swipe to like / dislike" card widget.
///
/// Clones share the same widget. Dropping the last handle cancels every
/// pending tick and tap confirmation.
pub struct SwipeView<C: 'static> {
    inner: SharedInner<C>,
}

impl<C: 'static> Clone for SwipeView<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Non-owning handle, for listeners that need to call back into the view.
pub struct WeakSwipeView<C: 'static> {
    inner: WeakInner<C>,
}

impl<C: 'static> Clone for WeakSwipeView<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<C: 'static> WeakSwipeView<C> {
    pub fn upgrade(&self) -> Option<SwipeView<C>> {
        self.inner.upgrade().map(|inner| SwipeView { inner })
    }
}

impl<C: 'static> SwipeView<C> {
    pub fn new(
        runtime: RuntimeHandle,
        config: SwipeViewConfig,
        listener: Rc<dyn OnCardSwipedListener>,
    ) -> Self {
        let inner = SwipeViewInner {
            runtime,
            config,
            listener,
            stack: CardStack::new(PaddingTable::new(config.density)),
            size: Size::ZERO,
            phase: SwipePhase::Idle,
            drag: DragState::default(),
            touchable: true,
            detector: GestureDetector::new(config.touch_slop),
            animation: None,
            tap_confirmation: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    pub fn downgrade(&self) -> WeakSwipeView<C> {
        WeakSwipeView {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Updates the laid-out size. Every card fills the view, so the width is
    /// also the card width used by the swipe threshold.
    pub fn set_size(&self, size: Size) {
        self.inner.borrow_mut().size = size;
    }

    /// Adds `card` behind the existing cards.
    ///
    /// Silently ignored when the stack is already full or `position` is not
    /// below [`MAX_ELEMENTS`](crate::MAX_ELEMENTS).
    pub fn add_card(&self, card: Card<C>, position: usize) {
        if let Err(err) = self.try_add_card(card, position) {
            log::debug!("add_card ignored: {err}");
        }
    }

    /// Like [`SwipeView::add_card`] but reports why a card was refused.
    pub fn try_add_card(&self, card: Card<C>, position: usize) -> Result<(), CardStackError> {
        let mut inner = self.inner.borrow_mut();
        inner.stack.insert_back(card, position)?;
        log::debug!("card added, stack size {}", inner.stack.len());
        Ok(())
    }

    /// Detaches the focused card and returns it. Any gesture or animation
    /// involving that card is abandoned first.
    pub fn remove_focused_card(&self) -> Option<Card<C>> {
        let mut inner = self.inner.borrow_mut();
        if inner.phase != SwipePhase::Idle {
            log::debug!("removing focused card during {:?}", inner.phase);
            inner.abandon_interaction();
        }
        let removed = inner.stack.remove_focused();
        if removed.is_some() {
            log::debug!("focused card removed, stack size {}", inner.stack.len());
        }
        removed
    }

    /// Returns the focused card to its rest position and hides both
    /// indicators, e.g. after a configuration change. Ignored while an
    /// animation is running.
    pub fn reset_focused_view(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.phase.is_animating() {
            log::debug!("reset_focused_view ignored during {:?}", inner.phase);
            return;
        }
        if inner.phase == SwipePhase::Dragging {
            inner.abandon_interaction();
        }
        inner.reset_focused_card();
    }

    /// Swipes the focused card out to the left as if the user dragged it.
    pub fn like_card(&self) {
        self.swipe_programmatically(HorizontalDirection::Left);
    }

    /// Swipes the focused card out to the right as if the user dragged it.
    pub fn dislike_card(&self) {
        self.swipe_programmatically(HorizontalDirection::Right);
    }

    /// Enables or disables touch input. Disabling mid-drag springs the card
    /// back.
    pub fn set_touchable(&self, touchable: bool) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        inner.touchable = touchable;
        if !touchable && inner.phase == SwipePhase::Dragging {
            inner.detector.abandon_pointer();
            inner.release(SwipeMode::Back, &weak);
        }
    }

    /// Feeds one pointer sample. Returns `false` when the event was not
    /// handled: empty stack, animation running or touch disabled.
    pub fn on_pointer_event(&self, event: &PointerEvent) -> bool {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        if inner.stack.is_empty() || inner.phase.is_animating() || !inner.touchable {
            return false;
        }
        let gestures = inner.detector.on_pointer_event(event);
        for gesture in gestures {
            inner.on_gesture(gesture, &weak);
        }
        true
    }

    /// Stops a running animation, putting the focused card back at rest.
    /// Used on teardown; the listener is not notified.
    pub fn cancel_animation(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.animation.is_some() {
            inner.stop_animation();
        }
    }

    /// Token of the running animation; cancelling it stops the animation on
    /// its next tick.
    pub fn animation_token(&self) -> Option<CancellationToken> {
        self.inner
            .borrow()
            .animation
            .as_ref()
            .map(|animation| animation.token.clone())
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().stack.is_empty()
    }

    pub fn phase(&self) -> SwipePhase {
        self.inner.borrow().phase
    }

    pub fn is_touchable(&self) -> bool {
        self.inner.borrow().touchable
    }

    pub fn size(&self) -> Size {
        self.inner.borrow().size
    }

    pub fn drag_state(&self) -> DragState {
        self.inner.borrow().drag
    }

    pub fn has_pending_tap(&self) -> bool {
        self.inner.borrow().tap_confirmation.is_some()
    }

    pub fn focused_offset(&self) -> Option<IntOffset> {
        self.inner.borrow().stack.focused().map(|slot| slot.offset())
    }

    /// `(like, dislike)` indicators of the focused card.
    pub fn focused_indicators(&self) -> Option<(Indicator, Indicator)> {
        self.inner
            .borrow()
            .stack
            .focused()
            .map(|slot| (*slot.card().like(), *slot.card().dislike()))
    }

    /// Padding of the card at `depth`, counted from the front.
    pub fn card_padding(&self, depth: usize) -> Option<IntEdgeInsets> {
        self.inner
            .borrow()
            .stack
            .at_depth(depth)
            .map(|slot| slot.padding())
    }

    /// Read access to the stack for rendering.
    ///
    /// The view stays borrowed while `f` runs: calling a method that
    /// mutates this `SwipeView` from inside the closure panics.
    pub fn with_stack<R>(&self, f: impl FnOnce(&CardStack<C>) -> R) -> R {
        f(&self.inner.borrow().stack)
    }

    fn swipe_programmatically(&self, direction: HorizontalDirection) {
        let weak = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        if inner.stack.is_empty() {
            return;
        }
        if inner.phase.is_animating() {
            log::debug!("{direction:?} swipe ignored during {:?}", inner.phase);
            return;
        }
        if inner.phase == SwipePhase::Dragging {
            log::debug!("{direction:?} swipe abandons the active drag");
            inner.abandon_interaction();
        } else {
            inner.detector.abandon_pointer();
        }
        inner.drag.reset();
        inner.drag.card_width = inner.card_width();
        inner.drag.horizontal = Some(direction);
        if let Some(slot) = inner.stack.focused_mut() {
            let (like, dislike) = slot.card_mut().indicators_mut();
            let (shown, hidden) = match direction {
                HorizontalDirection::Left => (like, dislike),
                HorizontalDirection::Right => (dislike, like),
            };
            hidden.hide();
            shown.show();
            shown.fade(0.0, 1.0);
        }
        inner.start_animation(SwipeMode::Out, &weak);
    }
}

impl<C: 'static> SwipeViewInner<C> {
    fn card_width(&self) -> i32 {
        self.size.width as i32
    }

    fn on_gesture(&mut self, gesture: GestureEvent, weak: &WeakInner<C>) {
        match gesture {
            GestureEvent::Press { double_tap, .. } => {
                if double_tap {
                    self.tap_confirmation = None;
                }
                self.begin_drag();
            }
            GestureEvent::Drag { delta } => {
                if self.phase == SwipePhase::Dragging {
                    self.drag_by(IntOffset::truncate(delta));
                }
            }
            GestureEvent::Release { tap, .. } => {
                if tap {
                    self.schedule_tap_confirmation(weak);
                }
                if self.phase == SwipePhase::Dragging {
                    let mode = decide(self.drag.card_width, self.drag.total().x);
                    self.release(mode, weak);
                }
            }
            GestureEvent::Cancel => {
                if self.phase == SwipePhase::Dragging {
                    self.release(SwipeMode::Back, weak);
                }
            }
        }
    }

    fn begin_drag(&mut self) {
        if self.phase == SwipePhase::Dragging {
            // The release of the previous drag never arrived.
            log::debug!("press during drag, returning the card to rest");
            self.reset_focused_card();
        }
        self.drag.reset();
        self.drag.card_width = self.card_width();
        self.stack.lift_focused();
        self.phase = SwipePhase::Dragging;
        log::debug!("drag started, card width {}", self.drag.card_width);
    }

    fn drag_by(&mut self, delta: IntOffset) {
        if delta.is_zero() {
            return;
        }
        self.drag.accumulate(delta);
        if let Some(slot) = self.stack.focused_mut() {
            slot.scroll_by(delta);
        }
        self.update_indicators();
    }

    /// Shows the indicator matching the drag direction with an opacity
    /// proportional to the horizontal progress.
    fn update_indicators(&mut self) {
        let Some(ratio) = self.drag.horizontal_ratio() else {
            return;
        };
        let previous = self.drag.previous_alpha;
        let Some(slot) = self.stack.focused_mut() else {
            return;
        };
        let card = slot.card_mut();
        let (shown, alpha) = if ratio > 0.0 {
            card.like_mut().hide();
            (card.dislike_mut(), ratio)
        } else {
            card.dislike_mut().hide();
            (card.like_mut(), -ratio)
        };
        shown.show();
        shown.fade(previous, alpha);
        self.drag.previous_alpha = shown.alpha();
    }

    fn release(&mut self, mode: SwipeMode, weak: &WeakInner<C>) {
        self.stack.align_padding();
        self.drag.resolve_directions();
        self.start_animation(mode, weak);
    }

    fn start_animation(&mut self, mode: SwipeMode, weak: &WeakInner<C>) {
        let horizontal = self.drag.horizontal.unwrap_or(HorizontalDirection::Right);
        let vertical = self.drag.vertical.unwrap_or(VerticalDirection::Bottom);
        let total = self.drag.total();
        let step_length = self.config.step_length();
        let animator = match mode {
            SwipeMode::Out => StepwiseAnimator::swipe_out(
                horizontal,
                vertical,
                self.drag.card_width - total.x,
                step_length,
            ),
            SwipeMode::Back => {
                if let Some(slot) = self.stack.focused_mut() {
                    slot.card_mut().clear_indicators();
                }
                StepwiseAnimator::spring_back(horizontal, vertical, total, step_length)
            }
        };
        self.phase = match mode {
            SwipeMode::Out => SwipePhase::AnimatingOut,
            SwipeMode::Back => SwipePhase::AnimatingBack,
        };
        log::debug!(
            "{:?} animation started, {:?} px to travel",
            self.phase,
            animator.remaining()
        );
        // First tick runs as soon as possible, later ones after the delay.
        let tick = post_tick(&self.runtime, weak, 0);
        self.animation = Some(ActiveAnimation {
            animator,
            token: CancellationToken::new(),
            tick: Some(tick),
        });
    }

    /// Runs one animation tick. Returns the swipe result once a swipe-out
    /// completes.
    fn advance_animation(&mut self, weak: &WeakInner<C>) -> Option<SwipeResult> {
        let animation = self.animation.as_mut()?;
        if animation.token.is_cancelled() {
            log::debug!("animation cancelled");
            self.stop_animation();
            return None;
        }
        match animation.animator.step() {
            AnimationStep::Advance(delta) => {
                if let Some(slot) = self.stack.focused_mut() {
                    slot.scroll_by(delta);
                }
                log::trace!("animation step {delta:?}");
                animation.tick = Some(post_tick(
                    &self.runtime,
                    weak,
                    self.config.tick_delay_millis,
                ));
                None
            }
            AnimationStep::Finished => self.finish_animation(),
        }
    }

    fn finish_animation(&mut self) -> Option<SwipeResult> {
        let animation = self.animation.take()?;
        let result = match animation.animator.mode() {
            SwipeMode::Out => {
                let removed = self.stack.remove_focused();
                removed.map(|_| SwipeResult::from(animation.animator.horizontal()))
            }
            SwipeMode::Back => None,
        };
        self.drag.reset();
        self.phase = SwipePhase::Idle;
        log::debug!(
            "animation finished with {result:?}, stack size {}",
            self.stack.len()
        );
        result
    }

    fn stop_animation(&mut self) {
        self.animation = None;
        self.reset_focused_card();
        self.stack.align_padding();
        self.drag.reset();
        self.phase = SwipePhase::Idle;
    }

    /// Drops the current gesture or animation without notifying anyone.
    fn abandon_interaction(&mut self) {
        self.detector.abandon_pointer();
        self.stop_animation();
    }

    fn reset_focused_card(&mut self) {
        if let Some(slot) = self.stack.focused_mut() {
            slot.card_mut().clear_indicators();
            slot.scroll_to(IntOffset::ZERO);
        }
    }

    fn schedule_tap_confirmation(&mut self, weak: &WeakInner<C>) {
        let weak = Weak::clone(weak);
        let registration = self
            .runtime
            .post_delayed(self.config.double_tap_timeout_millis, move |_| {
                on_tap_timeout(&weak)
            });
        self.tap_confirmation = Some(registration);
    }
}

impl<C> Drop for SwipeViewInner<C> {
    fn drop(&mut self) {
        if let Some(animation) = &self.animation {
            animation.token.cancel();
        }
    }
}

fn post_tick<C: 'static>(
    runtime: &RuntimeHandle,
    weak: &WeakInner<C>,
    delay_millis: u64,
) -> TaskRegistration {
    let weak = Weak::clone(weak);
    runtime.post_delayed(delay_millis, move |_| on_animation_tick(&weak))
}

fn on_animation_tick<C: 'static>(weak: &WeakInner<C>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let result = inner.borrow_mut().advance_animation(weak);
    if let Some(result) = result {
        // Clone out so the listener runs without the view borrowed.
        let listener = Rc::clone(&inner.borrow().listener);
        result.notify(listener.as_ref());
    }
}

fn on_tap_timeout<C: 'static>(weak: &WeakInner<C>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let confirmed = {
        let mut inner = inner.borrow_mut();
        inner.tap_confirmation = None;
        inner.detector.confirm_tap()
    };
    if confirmed {
        let listener = Rc::clone(&inner.borrow().listener);
        listener.on_single_tap();
    }
}

#[cfg(test)]
#[path = "tests/swipe_view_tests.rs"]
mod tests;
