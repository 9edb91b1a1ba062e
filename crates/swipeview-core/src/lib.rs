//! Core runtime for SwipeView.
//!
//! Everything in the widget runs on one UI thread. Work that has to happen
//! "later" (animation ticks, tap confirmation) is posted onto the runtime's
//! delayed task queue and executed when the host calls
//! [`Runtime::run_due_tasks`].

mod cancellation;
mod platform;
mod registration;
mod runtime;

pub use cancellation::CancellationToken;
pub use platform::{Clock, DefaultScheduler, ManualClock, SystemClock, TickScheduler};
pub use registration::TaskRegistration;
pub use runtime::{Runtime, RuntimeHandle, TaskId};

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;

pub mod prelude {
    pub use crate::cancellation::CancellationToken;
    pub use crate::platform::{Clock, TickScheduler};
    pub use crate::registration::TaskRegistration;
    pub use crate::runtime::{Runtime, RuntimeHandle};
}
