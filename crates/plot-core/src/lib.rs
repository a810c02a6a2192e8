// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the term-algebra and plot geometry API.

pub mod term;
pub mod types;
pub mod error;
pub mod viewport;
pub mod scale;
pub mod sample;
pub mod axis;
pub mod grid;
pub mod path;
pub mod plot;

pub use term::{distribute, multiply, parse_expression, term_multiply, Multiplier, Op, Term};
pub use error::{AxisKind, PlotError};
pub use viewport::Viewport;
pub use scale::CoordinateMapper;
pub use sample::{sample, SampledPoint};
pub use axis::{Axis, Tick};
pub use grid::{gridlines, linspace, Gridlines};
pub use path::{points_to_path, points_to_subpaths, PathCmd, PathData};
pub use plot::{build_plot, Figure, Highlight, Marker, PlotConfig, SurfaceOptions};
pub use types::Insets;
