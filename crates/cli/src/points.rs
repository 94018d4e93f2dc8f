use anyhow::{Context, Result};
use planar::Point;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Point given on the command line as `x,y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointArg(pub Point);

impl FromStr for PointArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s
            .split_once(',')
            .with_context(|| format!("expected `x,y`, got `{s}`"))?;
        let x: f64 = x
            .trim()
            .parse()
            .with_context(|| format!("bad x coordinate in `{s}`"))?;
        let y: f64 = y
            .trim()
            .parse()
            .with_context(|| format!("bad y coordinate in `{s}`"))?;
        Ok(PointArg(Point::new(x, y)))
    }
}

/// Read a JSON array of `[x, y]` pairs.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing point list in {}", path.display()))?;
    Ok(raw.into_iter().map(Point::from).collect())
}

pub fn to_pairs(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}
