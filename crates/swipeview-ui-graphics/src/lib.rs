//! Pure math/data for geometry & units in SwipeView
//!
//! This crate contains the geometry primitives and unit types shared by the
//! gesture layer and the card stack widget.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{IntEdgeInsets, IntOffset, Point, Size};
    pub use crate::unit::Dp;
}
