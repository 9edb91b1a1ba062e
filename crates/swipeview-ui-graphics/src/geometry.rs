//! Geometric primitives: Point, Size, IntOffset, IntEdgeInsets

use std::ops::{Add, AddAssign, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Whole-pixel offset, used for view displacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct IntOffset {
    pub x: i32,
    pub y: i32,
}

impl IntOffset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const ZERO: IntOffset = IntOffset { x: 0, y: 0 };

    /// Truncates a fractional delta toward zero.
    pub fn truncate(point: Point) -> Self {
        Self {
            x: point.x as i32,
            y: point.y as i32,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl Add for IntOffset {
    type Output = IntOffset;

    fn add(self, rhs: Self) -> Self::Output {
        IntOffset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for IntOffset {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Neg for IntOffset {
    type Output = IntOffset;

    fn neg(self) -> Self::Output {
        IntOffset::new(-self.x, -self.y)
    }
}

/// Whole-pixel padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntEdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl IntEdgeInsets {
    pub const ZERO: IntEdgeInsets = IntEdgeInsets {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn horizontal(horizontal: i32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            ..Self::default()
        }
    }

    pub fn from_components(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_rounds_toward_zero() {
        assert_eq!(IntOffset::truncate(Point::new(4.9, -4.9)), IntOffset::new(4, -4));
        assert_eq!(IntOffset::truncate(Point::new(-0.5, 0.5)), IntOffset::ZERO);
    }

    #[test]
    fn offsets_accumulate() {
        let mut offset = IntOffset::new(3, -2);
        offset += IntOffset::new(-5, 2);
        assert_eq!(offset, IntOffset::new(-2, 0));
        assert_eq!(-offset, IntOffset::new(2, 0));
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        assert_eq!(a.distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn horizontal_insets_leave_vertical_edges_empty() {
        let insets = IntEdgeInsets::horizontal(7);
        assert_eq!(insets, IntEdgeInsets::from_components(7, 0, 7, 0));
    }
}
