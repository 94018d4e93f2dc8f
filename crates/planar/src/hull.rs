//! Convex hull via a two-chain monotone scan.
//!
//! Points are sorted lexicographically by `(x, y)`. With `first`/`last` the
//! extreme points of that order, every other point is routed by its turn
//! against `first -> last`: points above the line feed the upper chain (which
//! must keep turning right), points below feed the lower chain (left turns).
//! Points collinear with `first -> last` cannot be hull vertices and are
//! dropped. `last` closes both chains.
//!
//! The result is a clockwise traversal starting at `first`. Collinear boundary
//! points are removed by the strict-turn backtracking.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::Result;
use crate::orient::{classify_turn, Orientation};
use crate::point::Point;
use crate::polygon::Polygon;

/// Build the convex hull of `points` as a `Polygon`.
///
/// - Empty input fails with `Error::InvalidInput`.
/// - One or two points are returned unchanged (degenerate hull).
/// - Input where every point coincides collapses to a single vertex.
pub fn build_convex_hull(mut points: Vec<Point>) -> Result<Polygon> {
    if points.len() <= 2 {
        return Polygon::new(points);
    }
    points.sort_by(lexicographic);
    let first = points[0];
    let last = points[points.len() - 1];
    if first == last {
        return Polygon::new(vec![first]);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(points.len());
    let mut lower: Vec<Point> = Vec::with_capacity(points.len());
    upper.push(first);
    lower.push(first);
    for &p in &points[1..points.len() - 1] {
        match classify_turn(first, p, last) {
            Orientation::Right => push_with_turn(&mut upper, p, Orientation::Right),
            Orientation::Left => push_with_turn(&mut lower, p, Orientation::Left),
            Orientation::Collinear => {}
        }
    }
    push_with_turn(&mut upper, last, Orientation::Right);
    push_with_turn(&mut lower, last, Orientation::Left);
    let (upper_len, lower_len) = (upper.len(), lower.len());

    // `lower` starts at `first` and ends at `last`, both already in `upper`.
    let mut hull = upper;
    hull.extend(lower[1..lower.len() - 1].iter().rev());
    trace!(
        input = points.len(),
        upper = upper_len,
        lower = lower_len,
        hull = hull.len(),
        "convex_hull"
    );
    Polygon::new(hull)
}

/// Append `p` after popping every tail point that does not produce `turn`.
#[inline]
fn push_with_turn(chain: &mut Vec<Point>, p: Point, turn: Orientation) {
    while chain.len() >= 2 {
        let n = chain.len();
        if classify_turn(chain[n - 2], chain[n - 1], p) == turn {
            break;
        }
        chain.pop();
    }
    chain.push(p);
}

#[inline]
fn lexicographic(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}
