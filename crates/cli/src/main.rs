use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::{build_convex_hull, classify_turn, is_point_on_segment, Polygon};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod summary;

use points::{read_points, to_pairs, PointArg};
use summary::{write_summary, HullSummary};

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Planar geometry queries over JSON point lists")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area of the polygon whose vertices are listed in the input file
    Area {
        #[arg(long)]
        input: PathBuf,
    },
    /// Whether a point lies strictly inside the polygon
    Inside {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        point: PointArg,
    },
    /// Convex hull of the input points; optionally written to --out with a run summary
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Turn direction of three points: --point a --point b --point c
    Turn {
        #[arg(long = "point", required = true, allow_hyphen_values = true)]
        points: Vec<PointArg>,
    },
    /// Whether the first point lies on the segment spanned by the next two
    OnSegment {
        #[arg(long = "point", required = true, allow_hyphen_values = true)]
        points: Vec<PointArg>,
    },
}

#[derive(Serialize)]
struct HullReport {
    vertices: Vec<[f64; 2]>,
    area: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Area { input } => area(&input)?,
        Action::Inside { input, point } => inside(&input, point)?,
        Action::Hull { input, out } => hull(&input, out.as_deref())?,
        Action::Turn { points } => turn(&points)?,
        Action::OnSegment { points } => on_segment(&points)?,
    };
    println!("{out}");
    Ok(())
}

fn area(input: &Path) -> Result<String> {
    let poly = Polygon::new(read_points(input)?)
        .with_context(|| format!("building polygon from {}", input.display()))?;
    tracing::info!(input = %input.display(), vertices = poly.len(), area = poly.area(), "area");
    Ok(poly.area().to_string())
}

fn inside(input: &Path, point: PointArg) -> Result<String> {
    let poly = Polygon::new(read_points(input)?)
        .with_context(|| format!("building polygon from {}", input.display()))?;
    let inside = poly.is_point_inside(point.0);
    tracing::info!(input = %input.display(), point = %point.0, inside, "inside");
    Ok(inside.to_string())
}

fn hull(input: &Path, out: Option<&Path>) -> Result<String> {
    let pts = read_points(input)?;
    let n = pts.len();
    let hull = build_convex_hull(pts)
        .with_context(|| format!("building convex hull of {}", input.display()))?;
    tracing::info!(input = %input.display(), points = n, hull = hull.len(), "hull");
    let report = HullReport {
        vertices: to_pairs(hull.vertices()),
        area: hull.area(),
    };
    let body = serde_json::to_string_pretty(&report)?;
    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
        write_summary(out, &HullSummary::new(input, n, &hull))?;
    }
    Ok(body)
}

fn turn(points: &[PointArg]) -> Result<String> {
    let [a, b, c] = points else {
        bail!("turn needs exactly three --point values, got {}", points.len());
    };
    let t = classify_turn(a.0, b.0, c.0);
    tracing::info!(a = %a.0, b = %b.0, c = %c.0, turn = ?t, "turn");
    Ok(format!("{t:?}"))
}

fn on_segment(points: &[PointArg]) -> Result<String> {
    let [p, a, b] = points else {
        bail!("on-segment needs exactly three --point values, got {}", points.len());
    };
    let on = is_point_on_segment(p.0, (a.0, b.0));
    tracing::info!(point = %p.0, from = %a.0, to = %b.0, on, "on_segment");
    Ok(on.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_input(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn arg(s: &str) -> PointArg {
        s.parse().unwrap()
    }

    #[test]
    fn area_and_inside_on_unit_square() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "sq.json", "[[0,0],[1,0],[1,1],[0,1]]");
        assert_eq!(area(&input).unwrap(), "1");
        assert_eq!(inside(&input, arg("0.5,0.5")).unwrap(), "true");
        assert_eq!(inside(&input, arg("0.5,1")).unwrap(), "false");
    }

    #[test]
    fn empty_input_is_an_error() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "empty.json", "[]");
        let err = area(&input).unwrap_err();
        assert!(format!("{err:#}").contains("invalid input"));
        assert!(hull(&input, None).is_err());
    }

    #[test]
    fn hull_writes_output_and_summary() {
        let dir = tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "cloud.json",
            "[[0,0],[4,0],[0,4],[1,1],[2,0],[4,4],[2,2]]",
        );
        let out = dir.path().join("out").join("hull.json");
        let body = hull(&input, Some(out.as_path())).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["area"], 16.0);
        assert_eq!(parsed["vertices"].as_array().unwrap().len(), 4);
        assert!(out.exists());
        let summary: serde_json::Value = serde_json::from_slice(
            &fs::read(dir.path().join("out").join("hull.summary.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(summary["points"], 7);
        assert_eq!(summary["hull_vertices"], 4);
        assert_eq!(summary["area"], 16.0);
    }

    #[test]
    fn turn_and_segment_commands() {
        let pts = [arg("0,0"), arg("2,0"), arg("0.5,1")];
        assert_eq!(turn(&pts).unwrap(), "Left");
        assert!(turn(&pts[..2]).is_err());
        let seg = [arg("-1,1"), arg("-1,0"), arg("-1,2")];
        assert_eq!(on_segment(&seg).unwrap(), "true");
        let off = [arg("-0.5,1"), arg("-1,0"), arg("-1,2")];
        assert_eq!(on_segment(&off).unwrap(), "false");
    }

    #[test]
    fn cli_parses_negative_points() {
        let cmd = Cmd::try_parse_from([
            "planar-cli", "turn", "--point", "-1,0", "--point", "0,-1", "--point", "1,0",
        ])
        .unwrap();
        match cmd.action {
            Action::Turn { points } => assert_eq!(points.len(), 3),
            _ => panic!("expected turn"),
        }
    }
}
