use crate::point::Point;

/// Tolerance band around zero for turn determinants (machine epsilon).
///
/// Hull construction and all turn tests share this value; changing it changes
/// which nearly-collinear points survive in a hull.
pub const TURN_EPS: f64 = f64::EPSILON;

/// Turn direction of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

/// Twice the signed area of triangle `(a, b, c)`; positive for a left turn.
#[inline]
pub fn turn_determinant(a: Point, b: Point, c: Point) -> f64 {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Classify the turn `a -> b -> c`.
///
/// Determinants within `[-TURN_EPS, TURN_EPS]` count as `Collinear`.
#[inline]
pub fn classify_turn(a: Point, b: Point, c: Point) -> Orientation {
    let det = turn_determinant(a, b, c);
    if det > TURN_EPS {
        Orientation::Left
    } else if det < -TURN_EPS {
        Orientation::Right
    } else {
        Orientation::Collinear
    }
}
