use thiserror::Error;

/// Result type for planar geometry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building polygons.
///
/// Only construction can fail; every query on an existing `Polygon` is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
