// File: crates/plot-core/src/grid.rs
// Summary: Even-spacing and gridline layout helpers.

use crate::axis::Tick;

/// `steps` evenly spaced values across [start, end], both ends included.
/// Fewer than two steps floors to two; the final value is `end` exactly
/// rather than the accumulated sum, so boundary comparisons stay exact.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    let n = steps.max(2);
    let step = (end - start) / (n as f64 - 1.0);
    let mut out: Vec<f64> = (0..n - 1).map(|i| start + step * i as f64).collect();
    out.push(end);
    out
}

/// Pixel positions for gridlines, one per tick on each axis. The caller
/// draws each vertical line across the plot rect's height and each
/// horizontal line across its width.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gridlines {
    pub vertical: Vec<f64>,
    pub horizontal: Vec<f64>,
}

pub fn gridlines(ticks_x: &[Tick], ticks_y: &[Tick]) -> Gridlines {
    Gridlines {
        vertical: ticks_x.iter().map(|t| t.pixel_position).collect(),
        horizontal: ticks_y.iter().map(|t| t.pixel_position).collect(),
    }
}
