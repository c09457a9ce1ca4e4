//! Integer 2D point with the transform math every element builds on.
//!
//! Coordinates are screen-space: x grows right, y grows down, so a positive
//! rotation angle turns clockwise on screen. Rotation goes through `glam`
//! and rounds back to the integer grid; translation and scaling stay in
//! exact integer arithmetic.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use glam::DVec2;

/// A point on the integer pixel grid.
///
/// Doubles as a displacement (for `translate`) and as a radius vector (for
/// ellipses), matching the document's attribute model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Shift by `delta`.
    #[inline]
    pub fn translate(self, delta: Point) -> Point {
        Point {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// Rotate about `origin` by `degrees`, clockwise-positive on screen.
    ///
    /// The result is rounded to the nearest grid point.
    pub fn rotate_about(self, origin: Point, degrees: i32) -> Point {
        let rel = DVec2::new((self.x - origin.x) as f64, (self.y - origin.y) as f64);
        let rot = DVec2::from_angle((degrees as f64).to_radians()).rotate(rel);
        Point {
            x: origin.x + rot.x.round() as i32,
            y: origin.y + rot.y.round() as i32,
        }
    }

    /// Scale about `origin` by an integer `factor` (exact arithmetic).
    #[inline]
    pub fn scale_about(self, origin: Point, factor: i32) -> Point {
        Point {
            x: origin.x + factor * (self.x - origin.x),
            y: origin.y + factor * (self.y - origin.y),
        }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Neg for Point {
    type Output = Point;
    fn neg(self) -> Point {
        Point { x: -self.x, y: -self.y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
