//! Deterministic random inputs (point clouds, radial convex polygons).
//!
//! Every draw is keyed by a `ReplayToken` `(seed, index)`, so a failing
//! property-test or benchmark case can be replayed from two integers.
//!
//! - Point clouds: uniform samples in the square `[-h, h]²`.
//! - Radial polygons: evenly spaced angles on the unit circle, each shifted by
//!   up to `ANGLE_JITTER` of the spacing, radii jittered, then hulled. The hull
//!   may drop points that radial jitter pushed inside.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Result;
use crate::hull::build_convex_hull;
use crate::point::Point;
use crate::polygon::Polygon;

/// Angular jitter as a fraction of the spacing `2π/n`.
const ANGLE_JITTER: f64 = 0.3;

#[derive(Clone, Debug)]
pub struct RadialCfg {
    /// Vertex count, drawn uniformly; values below 3 are raised to 3.
    pub vertices: RangeInclusive<usize>,
    /// Radii are `1 + u` with `u` uniform in `[-radius_jitter, radius_jitter]`.
    pub radius_jitter: f64,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertices: 12..=12,
            radius_jitter: 0.25,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn rng(self) -> StdRng {
        // Golden-ratio stride keeps neighbouring indices far apart.
        StdRng::seed_from_u64(self.seed ^ self.index.wrapping_mul(0x9e3779b97f4a7c15))
    }
}

/// `n` points drawn uniformly from `[-half_extent, half_extent]²`.
pub fn draw_point_cloud(n: usize, half_extent: f64, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.rng();
    let h = half_extent.abs().max(f64::MIN_POSITIVE);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h)))
        .collect()
}

/// Random convex polygon around the origin, clockwise like every hull.
pub fn draw_polygon_radial(cfg: &RadialCfg, tok: ReplayToken) -> Result<Polygon> {
    let mut rng = tok.rng();
    let lo = (*cfg.vertices.start()).max(3);
    let hi = (*cfg.vertices.end()).max(lo);
    let n = rng.gen_range(lo..=hi);
    let rj = cfg.radius_jitter.clamp(0.0, 0.99);
    let spacing = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen_range(0.0..std::f64::consts::TAU);
    let pts: Vec<Point> = (0..n)
        .map(|k| {
            let th = phase + spacing * (k as f64 + rng.gen_range(-ANGLE_JITTER..=ANGLE_JITTER));
            let r = if rj > 0.0 { 1.0 + rng.gen_range(-rj..=rj) } else { 1.0 };
            Point::new(r * th.cos(), r * th.sin())
        })
        .collect();
    build_convex_hull(pts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_token_same_polygon() {
        let cfg = RadialCfg {
            vertices: 10..=10,
            radius_jitter: 0.1,
        };
        let tok = ReplayToken::new(42, 7);
        let p1 = draw_polygon_radial(&cfg, tok).unwrap();
        let p2 = draw_polygon_radial(&cfg, tok).unwrap();
        assert_eq!(p1.vertices(), p2.vertices());
        assert!(p1.len() >= 3);
    }

    #[test]
    fn tokens_differ_by_index() {
        let a = draw_point_cloud(8, 1.0, ReplayToken::new(1, 0));
        let b = draw_point_cloud(8, 1.0, ReplayToken::new(1, 1));
        assert_ne!(a, b);
        assert!(a.iter().all(|p| p.x.abs() <= 1.0 && p.y.abs() <= 1.0));
    }

    #[test]
    fn circle_polygon_keeps_every_point_and_wraps_origin() {
        let cfg = RadialCfg {
            vertices: 5..=9,
            radius_jitter: 0.0,
        };
        for index in 0..16 {
            let p = draw_polygon_radial(&cfg, ReplayToken::new(3, index)).unwrap();
            assert!((5..=9).contains(&p.len()));
            assert!(p.is_point_inside(Point::new(0.0, 0.0)));
            assert!(p.area() > 0.0 && p.area() < std::f64::consts::PI);
        }
    }

    #[test]
    fn small_vertex_ranges_are_raised_to_triangles() {
        let cfg = RadialCfg {
            vertices: 0..=1,
            radius_jitter: 0.0,
        };
        let p = draw_polygon_radial(&cfg, ReplayToken::new(8, 0)).unwrap();
        assert_eq!(p.len(), 3);
    }
}
