//! Simple polygon given by its vertex sequence (V-representation).
//!
//! Purpose
//! - Own an ordered vertex list and answer area and containment queries.
//! - Cache the bounding box and area magnitude at construction; the value is
//!   immutable afterwards, so the caches never go stale.
//!
//! Assumptions and conventions
//! - Vertex order defines the boundary; either orientation is accepted.
//! - Area uses the shoelace formula and is only meaningful for polygons whose
//!   boundary does not self-intersect. Self-intersecting input is accepted and
//!   returns the absolute value of the signed sum, nothing more.
//! - Containment uses the even-odd rule with a ray towards `+x`. Points on the
//!   boundary are best-effort: the tested cases (e.g. a point on a horizontal
//!   edge) report `false`, other placements are not guaranteed either way.

use tracing::debug;

use crate::error::{Error, Result};
use crate::point::Point;

/// Polygon with cached area and axis-aligned bounding box.
///
/// Invariants:
/// - `vertices` is non-empty.
/// - `min`/`max` are the coordinate-wise extrema of `vertices`.
/// - `area` is `0.5 * |shoelace sum|` over `vertices` in stored order.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Point>,
    area: f64,
    min: Point,
    max: Point,
}

impl Polygon {
    /// Build from a vertex sequence; fails on empty input.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        let Some(&first) = vertices.first() else {
            debug!("rejecting polygon with no vertices");
            return Err(Error::InvalidInput("empty point collection is not allowed"));
        };
        let n = vertices.len();
        let mut min = first;
        let mut max = first;
        let mut sum = 0.0;
        for (i, &p) in vertices.iter().enumerate() {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            let q = vertices[(i + 1) % n];
            sum += (p.x + q.x) * (p.y - q.y);
        }
        Ok(Self {
            vertices,
            area: 0.5 * sum.abs(),
            min,
            max,
        })
    }

    /// Convenience constructor from anything convertible into points.
    pub fn from_points<I, P>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::new(points.into_iter().map(Into::into).collect())
    }

    /// Cached, non-negative area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Number of vertices (always at least one).
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Bounding box as `(min, max)` corners.
    #[inline]
    pub fn bounds(&self) -> (Point, Point) {
        (self.min, self.max)
    }

    /// Cyclic edges `(v[i], v[i+1])`, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Even-odd ray casting; `false` outside the bounding box.
    pub fn is_point_inside(&self, p: Point) -> bool {
        if p.x < self.min.x || p.x > self.max.x || p.y < self.min.y || p.y > self.max.y {
            return false;
        }
        let n = self.vertices.len();
        let mut inside = false;
        let mut prev = n - 1;
        for cur in 0..n {
            if ray_crosses(p, (self.vertices[cur], self.vertices[prev])) {
                inside = !inside;
            }
            prev = cur;
        }
        inside
    }
}

/// Does the ray from `p` towards `+x` cross `side`?
///
/// The half-open test on `y > p.y` counts a shared vertex once.
#[inline]
fn ray_crosses(p: Point, side: (Point, Point)) -> bool {
    let (a, b) = side;
    if (a.y > p.y) == (b.y > p.y) {
        return false;
    }
    let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
    p.x < x_cross
}
