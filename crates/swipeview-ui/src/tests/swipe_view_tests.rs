use super::*;

use swipeview_core::{DefaultScheduler, ManualClock, Runtime};

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<&'static str>>,
}

impl OnCardSwipedListener for Recorder {
    fn on_likes(&self) {
        self.events.borrow_mut().push("likes");
    }

    fn on_dislikes(&self) {
        self.events.borrow_mut().push("dislikes");
    }

    fn on_single_tap(&self) {
        self.events.borrow_mut().push("tap");
    }
}

struct Harness {
    clock: ManualClock,
    runtime: Runtime,
    view: SwipeView<&'static str>,
    recorder: Rc<Recorder>,
}

impl Harness {
    fn with_cards(cards: &[&'static str]) -> Self {
        let clock = ManualClock::new(0);
        let runtime = Runtime::new(Rc::new(DefaultScheduler), Rc::new(clock.clone()));
        let recorder = Rc::new(Recorder::default());
        let view = SwipeView::new(
            runtime.handle(),
            SwipeViewConfig::default(),
            recorder.clone(),
        );
        view.set_size(Size::new(300.0, 400.0));
        for (position, content) in cards.iter().enumerate() {
            view.add_card(Card::new(*content), position);
        }
        Self {
            clock,
            runtime,
            view,
            recorder,
        }
    }

    fn pump(&self) {
        self.clock.advance(1);
        self.runtime.run_due_tasks();
    }

    fn settle(&self) -> usize {
        let mut ticks = 0;
        while self.view.phase().is_animating() {
            self.pump();
            ticks += 1;
            assert!(ticks < 10_000, "animation never settled");
        }
        ticks
    }

    fn events(&self) -> Vec<&'static str> {
        self.recorder.events.borrow().clone()
    }

    fn focused_content(&self) -> Option<&'static str> {
        self.view
            .with_stack(|stack| stack.focused().map(|slot| *slot.card().content()))
    }
}

#[test]
fn dislike_card_swipes_front_card_out_to_the_right() {
    let harness = Harness::with_cards(&["a", "b", "c"]);
    harness.view.dislike_card();

    assert_eq!(harness.view.phase(), SwipePhase::AnimatingOut);
    let (like, dislike) = harness.view.focused_indicators().expect("focused card");
    assert!(dislike.is_visible());
    assert_eq!(dislike.alpha(), 1.0);
    assert_eq!(
        dislike.last_transition(),
        Some(crate::card::AlphaTransition { from: 0.0, to: 1.0 })
    );
    assert!(!like.is_visible());

    for _ in 0..3 {
        harness.pump();
    }
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::new(15, 0)));

    harness.settle();
    assert_eq!(harness.events(), vec!["dislikes"]);
    assert_eq!(harness.view.len(), 2);
    assert_eq!(harness.focused_content(), Some("b"));
    assert!(harness.view.drag_state().is_reset());
    let table = PaddingTable::new(1.0);
    assert_eq!(harness.view.card_padding(0), Some(table.for_depth(0)));
    assert_eq!(harness.view.card_padding(1), Some(table.for_depth(1)));
}

#[test]
fn like_card_moves_left_and_reports_like() {
    let harness = Harness::with_cards(&["a", "b"]);
    harness.view.like_card();
    harness.pump();
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::new(-5, 0)));

    // 300 px in 5 px steps plus the finishing tick
    let ticks = harness.settle();
    assert_eq!(ticks, 60);
    assert_eq!(harness.events(), vec!["likes"]);
    assert_eq!(harness.view.len(), 1);
}

#[test]
fn programmatic_swipe_is_ignored_while_animating() {
    let harness = Harness::with_cards(&["a", "b", "c"]);
    harness.view.dislike_card();
    harness.view.like_card();
    assert!(!harness.view.on_pointer_event(&PointerEvent::down(10.0, 10.0)));

    harness.settle();
    assert_eq!(harness.events(), vec!["dislikes"]);
    assert_eq!(harness.view.len(), 2);
}

#[test]
fn empty_stack_ignores_everything() {
    let harness = Harness::with_cards(&[]);
    assert!(!harness.view.on_pointer_event(&PointerEvent::down(10.0, 10.0)));
    harness.view.like_card();
    harness.view.reset_focused_view();
    assert_eq!(harness.view.phase(), SwipePhase::Idle);
    assert!(harness.view.remove_focused_card().is_none());
    assert!(!harness.runtime.has_pending_tasks());
}

#[test]
fn press_lifts_focused_card_until_release() {
    let harness = Harness::with_cards(&["a", "b"]);
    assert!(harness.view.on_pointer_event(&PointerEvent::down(150.0, 200.0)));
    assert_eq!(harness.view.phase(), SwipePhase::Dragging);
    assert_eq!(harness.view.card_padding(0), Some(IntEdgeInsets::ZERO));

    harness.view.on_pointer_event(&PointerEvent::up(150.0, 200.0));
    assert_eq!(
        harness.view.card_padding(0),
        Some(PaddingTable::new(1.0).for_depth(0))
    );
}

#[test]
fn drag_moves_card_by_whole_pixels_and_shows_indicator() {
    let harness = Harness::with_cards(&["a"]);
    harness.view.on_pointer_event(&PointerEvent::down(100.0, 100.0));
    harness.view.on_pointer_event(&PointerEvent::moved(110.7, 103.2));
    harness.view.on_pointer_event(&PointerEvent::moved(160.2, 104.0));

    // deltas (10.7, 3.2) and (49.5, 0.8) truncate to (10, 3) and (49, 0)
    assert_eq!(harness.view.drag_state().scrolled, IntOffset::new(59, 3));
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::new(59, 3)));

    let (like, dislike) = harness.view.focused_indicators().expect("focused card");
    assert!(dislike.is_visible());
    assert!(!like.is_visible());
    assert!((dislike.alpha() - 59.0 / 300.0).abs() < 1e-6);
}

#[test]
fn cancel_springs_back_without_tap() {
    let harness = Harness::with_cards(&["a"]);
    harness.view.on_pointer_event(&PointerEvent::down(100.0, 100.0));
    harness.view.on_pointer_event(&PointerEvent::moved(20.0, 100.0));
    harness.view.on_pointer_event(&PointerEvent::cancel(20.0, 100.0));
    assert_eq!(harness.view.phase(), SwipePhase::AnimatingBack);

    harness.settle();
    for _ in 0..400 {
        harness.pump();
    }
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::ZERO));
    assert!(harness.events().is_empty());
}

#[test]
fn disabling_touch_mid_drag_springs_back() {
    let harness = Harness::with_cards(&["a"]);
    harness.view.on_pointer_event(&PointerEvent::down(100.0, 100.0));
    harness.view.on_pointer_event(&PointerEvent::moved(290.0, 100.0));
    harness.view.set_touchable(false);
    assert_eq!(harness.view.phase(), SwipePhase::AnimatingBack);
    harness.settle();

    assert!(!harness.view.on_pointer_event(&PointerEvent::down(100.0, 100.0)));
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::ZERO));

    harness.view.set_touchable(true);
    assert!(harness.view.on_pointer_event(&PointerEvent::down(100.0, 100.0)));
}

#[test]
fn cancelled_token_stops_animation_and_restores_card() {
    let harness = Harness::with_cards(&["a", "b"]);
    harness.view.dislike_card();
    harness.pump();
    harness.pump();
    let token = harness.view.animation_token().expect("animation running");
    token.cancel();
    harness.pump();

    assert_eq!(harness.view.phase(), SwipePhase::Idle);
    assert!(harness.view.animation_token().is_none());
    assert_eq!(harness.view.len(), 2);
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::ZERO));
    assert!(harness.view.drag_state().is_reset());
    assert!(!harness.runtime.has_pending_tasks());
    assert!(harness.events().is_empty());
}

#[test]
fn cancel_animation_stops_ticks_immediately() {
    let harness = Harness::with_cards(&["a"]);
    harness.view.like_card();
    harness.view.cancel_animation();
    assert!(!harness.runtime.has_pending_tasks());
    assert_eq!(harness.view.phase(), SwipePhase::Idle);
    assert_eq!(harness.view.focused_indicators().map(|(like, _)| like.alpha()), Some(0.0));
}

#[test]
fn removing_focused_card_mid_animation_abandons_it() {
    let harness = Harness::with_cards(&["a", "b", "c"]);
    harness.view.like_card();
    harness.pump();
    let removed = harness.view.remove_focused_card().map(Card::into_content);
    assert_eq!(removed, Some("a"));
    assert_eq!(harness.view.phase(), SwipePhase::Idle);

    for _ in 0..100 {
        harness.pump();
    }
    assert!(harness.events().is_empty());
    assert_eq!(harness.view.len(), 2);
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::ZERO));
}

#[test]
fn reset_focused_view_zeroes_offset_and_hides_indicators() {
    let harness = Harness::with_cards(&["a"]);
    harness.view.on_pointer_event(&PointerEvent::down(100.0, 100.0));
    harness.view.on_pointer_event(&PointerEvent::moved(40.0, 80.0));
    harness.view.reset_focused_view();

    assert_eq!(harness.view.phase(), SwipePhase::Idle);
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::ZERO));
    let (like, dislike) = harness.view.focused_indicators().expect("focused card");
    assert_eq!(like.alpha(), 0.0);
    assert_eq!(dislike.alpha(), 0.0);
    assert_eq!(harness.view.len(), 1);
}

#[test]
fn reset_focused_view_is_ignored_while_animating() {
    let harness = Harness::with_cards(&["a"]);
    harness.view.dislike_card();
    harness.pump();
    harness.view.reset_focused_view();
    assert_eq!(harness.view.focused_offset(), Some(IntOffset::new(5, 0)));
    assert_eq!(harness.view.phase(), SwipePhase::AnimatingOut);
}

#[test]
fn dropping_the_view_cancels_pending_ticks() {
    let harness = Harness::with_cards(&["a"]);
    harness.view.dislike_card();
    let token = harness.view.animation_token().expect("animation running");
    let Harness {
        clock,
        runtime,
        view,
        recorder,
    } = harness;
    drop(view);

    assert!(token.is_cancelled());
    assert!(!runtime.has_pending_tasks());
    clock.advance(10);
    assert_eq!(runtime.run_due_tasks(), 0);
    assert!(recorder.events.borrow().is_empty());
}

#[test]
#[should_panic]
fn mutating_the_view_inside_with_stack_panics() {
    let harness = Harness::with_cards(&["a"]);
    let view = harness.view.clone();
    harness
        .view
        .with_stack(|_| view.add_card(Card::new("b"), 1));
}

#[test]
fn reading_the_view_inside_with_stack_is_fine() {
    let harness = Harness::with_cards(&["a", "b"]);
    let view = harness.view.clone();
    let lengths = harness.view.with_stack(|stack| (stack.len(), view.len()));
    assert_eq!(lengths, (2, 2));
}
