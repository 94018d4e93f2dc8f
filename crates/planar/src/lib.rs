//! Planar geometry primitives.
//!
//! - `Point`: `f64` coordinate pair, the value type used everywhere.
//! - `Polygon`: vertex sequence with cached area and bounding box; answers
//!   area and point-in-polygon queries.
//! - `classify_turn`: three-point orientation with a machine-epsilon band.
//! - `is_point_on_segment`: collinear point-on-closed-segment test.
//! - `build_convex_hull`: two-chain monotone scan producing a `Polygon`.
//!
//! Everything is synchronous and allocation-local; values can be shared across
//! threads freely.

pub mod error;
pub mod hull;
pub mod orient;
pub mod point;
pub mod polygon;
pub mod rand;
pub mod segment;

pub use error::{Error, Result};
pub use hull::build_convex_hull;
pub use orient::{classify_turn, turn_determinant, Orientation, TURN_EPS};
pub use point::Point;
pub use polygon::Polygon;
pub use segment::is_point_on_segment;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_point_cloud, draw_polygon_radial, RadialCfg, ReplayToken};
    pub use crate::{
        build_convex_hull, classify_turn, is_point_on_segment, Error, Orientation, Point, Polygon,
    };
}
