//! Plain 2D point value.
//!
//! `Point` is the value type passed to every predicate in this crate. It is
//! `Copy`, carries no invariants beyond finite coordinates, and converts to and
//! from `nalgebra::Vector2<f64>` so callers can mix it with linear algebra code.

use nalgebra::Vector2;
use std::fmt;
use std::ops::Sub;

/// Point in the plane with `f64` coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

/// Displacement `self - rhs`.
impl Sub for Point {
    type Output = Vector2<f64>;
    #[inline]
    fn sub(self, rhs: Point) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Diagnostic rendering `{x,y}`; not a parseable format.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.x, self.y)
    }
}
