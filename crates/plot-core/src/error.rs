// File: crates/plot-core/src/error.rs
// Summary: Typed errors surfaced when a plot cannot be constructed.

use std::fmt;

use thiserror::Error;

/// Which axis a geometry error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => write!(f, "x"),
            AxisKind::Y => write!(f, "y"),
        }
    }
}

/// Fatal conditions for a single plot request. Parsing problems are never
/// errors (they degrade to literal formatting); only geometry that would
/// divide by zero or draw into an empty rectangle is surfaced.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PlotError {
    /// min == max on an axis; the linear transform is undefined.
    #[error("degenerate {axis} range: min == max ({value})")]
    DegenerateRange { axis: AxisKind, value: f64 },

    /// Insets consumed the whole surface; nothing left to plot into.
    #[error("empty plot rect: {width}x{height} px after insets")]
    EmptyPlotRect { width: f64, height: f64 },
}
