//! Platform abstraction traits for runtime services.
//!
//! These traits let the host decide how work is woken up and how time is
//! measured, so the widget never talks to an event loop directly.

use std::cell::Cell;
use std::rc::Rc;

use web_time::Instant;

/// Wakes the host when the runtime has work queued.
pub trait TickScheduler {
    /// Request that the host call [`Runtime::run_due_tasks`](crate::Runtime::run_due_tasks)
    /// once the earliest queued task is due.
    fn schedule_tick(&self);
}

/// Scheduler for hosts that poll the runtime every frame anyway.
#[derive(Debug, Default)]
pub struct DefaultScheduler;

impl TickScheduler for DefaultScheduler {
    fn schedule_tick(&self) {}
}

/// Monotonic millisecond time source.
pub trait Clock {
    /// Milliseconds elapsed since an arbitrary, fixed origin.
    fn now_millis(&self) -> u64;
}

/// Wall clock backed by `web_time::Instant`, usable on native and wasm hosts.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock driven explicitly by the host, e.g. from vsync frame timestamps.
///
/// Clones share the same time value.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_millis)),
        }
    }

    /// Moves the clock to `millis`. Time never goes backwards; earlier values
    /// are ignored.
    pub fn set(&self, millis: u64) {
        if millis > self.now.get() {
            self.now.set(millis);
        }
    }

    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}
