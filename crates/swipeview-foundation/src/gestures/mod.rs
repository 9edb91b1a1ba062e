pub mod detector;
pub mod drag;
pub mod tap;

pub use detector::{GestureDetector, GestureEvent, GestureEvents};
pub use drag::DragGesture;
pub use tap::TapGesture;
