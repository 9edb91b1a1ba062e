//! Pointer input types and gesture recognisers for SwipeView.

pub mod gesture_constants;
pub mod gestures;
mod types;

pub use gestures::{DragGesture, GestureDetector, GestureEvent, GestureEvents, TapGesture};
pub use types::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::gestures::{GestureDetector, GestureEvent};
    pub use crate::types::{PointerEvent, PointerEventKind, PointerId};
}
