//! Robot-style driver for SwipeView tests
//!
//! The robot owns a manual clock and the runtime, so tests control time
//! precisely: every [`SwipeRobot::advance`] moves the clock one millisecond
//! at a time and runs whatever became due.
//!
//! # Example
//!
//! ```
//! use swipeview_testing::{ListenerEvent, SwipeRobot};
//! use swipeview_ui::{Card, SwipeViewConfig};
//! use swipeview_ui_graphics::Size;
//!
//! let robot = SwipeRobot::new(Size::new(300.0, 400.0), SwipeViewConfig::default());
//! robot.view().add_card(Card::new("only card"), 0);
//!
//! robot.drag(-200.0, 0.0, 10);
//! robot.wait_for_idle();
//!
//! assert_eq!(robot.listener().events(), vec![ListenerEvent::Liked]);
//! assert!(robot.view().is_empty());
//! ```

use std::cell::Cell;
use std::rc::Rc;

use swipeview_core::{DefaultScheduler, ManualClock, Runtime};
use swipeview_foundation::PointerEvent;
use swipeview_ui::{Card, SwipeView, SwipeViewConfig};
use swipeview_ui_graphics::{Point, Size};

use crate::listener::RecordingListener;

/// Upper bound on simulated milliseconds before a wait gives up.
const MAX_WAIT_MILLIS: u64 = 60_000;

pub struct SwipeRobot<C: 'static> {
    clock: ManualClock,
    runtime: Runtime,
    view: SwipeView<C>,
    listener: Rc<RecordingListener>,
    pointer: Cell<Point>,
}

impl<C: 'static> SwipeRobot<C> {
    /// Creates a laid-out view of `size` with a recording listener.
    pub fn new(size: Size, config: SwipeViewConfig) -> Self {
        let clock = ManualClock::new(0);
        let runtime = Runtime::new(Rc::new(DefaultScheduler), Rc::new(clock.clone()));
        let listener = Rc::new(RecordingListener::new());
        let view = SwipeView::new(runtime.handle(), config, listener.clone());
        view.set_size(size);
        Self {
            clock,
            runtime,
            view,
            listener,
            pointer: Cell::new(Point::new(size.width / 2.0, size.height / 2.0)),
        }
    }

    /// Adds each content as a card, front to back.
    pub fn with_cards(self, contents: impl IntoIterator<Item = C>) -> Self {
        for (position, content) in contents.into_iter().enumerate() {
            self.view.add_card(Card::new(content), position);
        }
        self
    }

    pub fn view(&self) -> &SwipeView<C> {
        &self.view
    }

    pub fn listener(&self) -> &RecordingListener {
        &self.listener
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn now_millis(&self) -> u64 {
        self.runtime.now_millis()
    }

    /// Centre of the view, where gestures start by default.
    pub fn center(&self) -> Point {
        let size = self.view.size();
        Point::new(size.width / 2.0, size.height / 2.0)
    }

    /// Sends a pointer event; returns whether the view handled it.
    pub fn send(&self, event: PointerEvent) -> bool {
        self.pointer.set(event.position);
        self.view.on_pointer_event(&event)
    }

    pub fn press(&self, x: f32, y: f32) -> bool {
        self.send(PointerEvent::down(x, y))
    }

    pub fn move_to(&self, x: f32, y: f32) -> bool {
        self.send(PointerEvent::moved(x, y))
    }

    /// Lifts the pointer where it last was.
    pub fn release(&self) -> bool {
        let at = self.pointer.get();
        self.send(PointerEvent::up(at.x, at.y))
    }

    pub fn cancel(&self) -> bool {
        let at = self.pointer.get();
        self.send(PointerEvent::cancel(at.x, at.y))
    }

    /// Presses at the centre and moves by `(dx, dy)` in `steps` equal moves
    /// without releasing.
    pub fn drag_without_release(&self, dx: f32, dy: f32, steps: u32) {
        let start = self.center();
        self.press(start.x, start.y);
        let steps = steps.max(1);
        for step in 1..=steps {
            let fraction = step as f32 / steps as f32;
            self.move_to(start.x + dx * fraction, start.y + dy * fraction);
        }
    }

    /// Full drag from the centre followed by a release.
    pub fn drag(&self, dx: f32, dy: f32, steps: u32) {
        self.drag_without_release(dx, dy, steps);
        self.release();
    }

    /// Press and release at the same spot.
    pub fn tap(&self, x: f32, y: f32) {
        self.press(x, y);
        self.release();
    }

    /// Advances simulated time one millisecond at a time.
    pub fn advance(&self, millis: u64) {
        for _ in 0..millis {
            self.clock.advance(1);
            self.runtime.run_due_tasks();
        }
    }

    /// Runs ticks until no animation is in flight; returns the elapsed
    /// milliseconds.
    pub fn wait_for_animation(&self) -> u64 {
        let start = self.now_millis();
        while self.view.phase().is_animating() {
            self.step_or_give_up(start);
        }
        self.now_millis() - start
    }

    /// Runs until the task queue is empty, including tap confirmations.
    pub fn wait_for_idle(&self) -> u64 {
        let start = self.now_millis();
        while self.runtime.has_pending_tasks() {
            self.step_or_give_up(start);
        }
        self.now_millis() - start
    }

    fn step_or_give_up(&self, start: u64) {
        assert!(
            self.now_millis() - start < MAX_WAIT_MILLIS,
            "view did not settle within {MAX_WAIT_MILLIS} ms"
        );
        self.advance(1);
    }
}
