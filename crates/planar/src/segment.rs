use crate::point::Point;

/// True iff `p` lies on the closed segment `segment.0 -- segment.1`.
///
/// Collinearity is exact (cross product `== 0.0`). The extent check runs on the
/// axis along which the segment is longer, so vertical and horizontal segments
/// both use a non-degenerate range; endpoints may be given in either order.
///
/// A zero-length segment reduces to coordinate equality on the x axis only.
pub fn is_point_on_segment(p: Point, segment: (Point, Point)) -> bool {
    let (a, b) = segment;
    let d = p - a;
    let line = b - a;
    if d.perp(&line) != 0.0 {
        return false;
    }
    if line.x.abs() >= line.y.abs() {
        within(p.x, a.x, b.x)
    } else {
        within(p.y, a.y, b.y)
    }
}

#[inline]
fn within(v: f64, from: f64, to: f64) -> bool {
    if to > from {
        from <= v && v <= to
    } else {
        to <= v && v <= from
    }
}
