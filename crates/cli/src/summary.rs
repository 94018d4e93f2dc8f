use anyhow::{Context, Result};
use planar::Polygon;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Facts about one hull run, written as `<out stem>.summary.json` next to the hull.
#[derive(Debug, Serialize)]
pub struct HullSummary {
    pub input: String,
    pub points: usize,
    pub hull_vertices: usize,
    pub dropped: usize,
    pub area: f64,
    pub bounds: [[f64; 2]; 2],
    pub planar_version: &'static str,
}

impl HullSummary {
    pub fn new(input: &Path, points: usize, hull: &Polygon) -> Self {
        let (min, max) = hull.bounds();
        Self {
            input: input.to_string_lossy().into_owned(),
            points,
            hull_vertices: hull.len(),
            dropped: points.saturating_sub(hull.len()),
            area: hull.area(),
            bounds: [[min.x, min.y], [max.x, max.y]],
            planar_version: planar::VERSION,
        }
    }
}

/// `out/hull.json` -> `out/hull.summary.json`.
fn summary_path(out: &Path) -> PathBuf {
    out.with_extension("summary.json")
}

pub fn write_summary(out: &Path, summary: &HullSummary) -> Result<PathBuf> {
    let path = summary_path(out);
    fs::write(&path, serde_json::to_vec_pretty(summary)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
