//! Testing utilities and harness for SwipeView

pub mod listener;
pub mod robot;

pub use listener::{ListenerEvent, RecordingListener};
pub use robot::SwipeRobot;

pub mod prelude {
    pub use crate::listener::{ListenerEvent, RecordingListener};
    pub use crate::robot::SwipeRobot;
}
