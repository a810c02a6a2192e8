// File: crates/plot-core/src/path.rs
// Summary: Renderer-agnostic polyline path descriptors.

use std::fmt::Write as _;

use crate::sample::SampledPoint;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
}

/// An ordered list of path commands. One command per input point; an empty
/// path is a valid no-op, never an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    pub cmds: Vec<PathCmd>,
}

impl PathData {
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Serialize to an SVG `d` string ("M 30,200 L 70,180 ...") with the
    /// given number of decimals per coordinate.
    pub fn to_svg(&self, precision: usize) -> String {
        let mut out = String::new();
        for cmd in &self.cmds {
            if !out.is_empty() {
                out.push(' ');
            }
            match *cmd {
                PathCmd::MoveTo { x, y } => {
                    let _ = write!(out, "M {x:.precision$},{y:.precision$}");
                }
                PathCmd::LineTo { x, y } => {
                    let _ = write!(out, "L {x:.precision$},{y:.precision$}");
                }
            }
        }
        out
    }
}

/// First point moves, every later point draws, in input order.
pub fn points_to_path(points: &[SampledPoint]) -> PathData {
    let cmds = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == 0 {
                PathCmd::MoveTo { x: p.pixel_x, y: p.pixel_y }
            } else {
                PathCmd::LineTo { x: p.pixel_x, y: p.pixel_y }
            }
        })
        .collect();
    PathData { cmds }
}

/// One sub-path per maximal run of unclamped points, for callers that break
/// the stroke at clamped samples instead of drawing along the plot edge.
/// Runs of clamped points produce nothing; no sub-path is ever empty.
pub fn points_to_subpaths(points: &[SampledPoint]) -> Vec<PathData> {
    let mut out = Vec::new();
    let mut run: Vec<SampledPoint> = Vec::new();
    for p in points {
        if p.clamped {
            if !run.is_empty() {
                out.push(points_to_path(&run));
                run.clear();
            }
        } else {
            run.push(*p);
        }
    }
    if !run.is_empty() {
        out.push(points_to_path(&run));
    }
    out
}
