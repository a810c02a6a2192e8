// File: crates/plot-core/src/plot.rs
// Summary: Plot configuration and figure assembly pipeline.

use crate::axis::{self, Axis, Tick};
use crate::error::PlotError;
use crate::grid::{gridlines, Gridlines};
use crate::path::{points_to_path, PathData};
use crate::sample::{sample, SampledPoint};
use crate::scale::CoordinateMapper;
use crate::types::Insets;
use crate::viewport::Viewport;

/// An x value the lesson wants called out on the curve, e.g. the two known
/// points used to define a line.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    pub x: f64,
    pub label: String,
}

impl Highlight {
    pub fn new(x: f64, label: impl Into<String>) -> Self {
        Self { x, label: label.into() }
    }
}

/// A resolved highlight: evaluated, mapped, ready to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub label: String,
}

/// Pixel surface the figure is laid out for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            width: crate::types::WIDTH,
            height: crate::types::HEIGHT,
            insets: Insets::default(),
        }
    }
}

/// Everything a lesson page supplies for one plot.
pub struct PlotConfig<F: Fn(f64) -> f64> {
    pub f: F,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub sample_count: usize,
    pub tick_count_x: usize,
    pub tick_count_y: usize,
    pub x_label: String,
    pub y_label: String,
    pub highlights: Vec<Highlight>,
    pub surface: SurfaceOptions,
}

impl<F: Fn(f64) -> f64> PlotConfig<F> {
    pub fn new(f: F, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            f,
            x_min,
            x_max,
            y_min,
            y_max,
            sample_count: 100,
            tick_count_x: 7,
            tick_count_y: 5,
            x_label: "x".to_string(),
            y_label: "y".to_string(),
            highlights: Vec::new(),
            surface: SurfaceOptions::default(),
        }
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    pub fn with_samples(mut self, count: usize) -> Self {
        self.sample_count = count;
        self
    }

    pub fn with_ticks(mut self, count_x: usize, count_y: usize) -> Self {
        self.tick_count_x = count_x;
        self.tick_count_y = count_y;
        self
    }

    pub fn with_highlights(mut self, highlights: Vec<Highlight>) -> Self {
        self.highlights = highlights;
        self
    }

    pub fn with_surface(mut self, surface: SurfaceOptions) -> Self {
        self.surface = surface;
        self
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.x_min, self.x_max, self.y_min, self.y_max)
            .with_surface(self.surface.width, self.surface.height)
            .with_insets(self.surface.insets)
    }
}

/// The assembled drawable result handed to a presentation layer.
#[derive(Clone, Debug)]
pub struct Figure {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub ticks_x: Vec<Tick>,
    pub ticks_y: Vec<Tick>,
    pub gridlines: Gridlines,
    pub path: PathData,
    pub points: Vec<SampledPoint>,
    pub markers: Vec<Marker>,
}

/// Run the full pipeline: transform, samples, path, ticks, gridlines,
/// markers. Fails only on degenerate geometry; everything downstream of a
/// valid transform is total.
pub fn build_plot<F: Fn(f64) -> f64>(config: &PlotConfig<F>) -> Result<Figure, PlotError> {
    let mapper = CoordinateMapper::build(&config.viewport())?;

    let points = sample(&config.f, config.x_min, config.x_max, config.sample_count, &mapper);
    let path = points_to_path(&points);

    let ticks_x = axis::x_ticks(&mapper, config.tick_count_x);
    let ticks_y = axis::y_ticks(&mapper, config.tick_count_y);
    let gridlines = gridlines(&ticks_x, &ticks_y);

    let markers = config
        .highlights
        .iter()
        .map(|h| {
            let y = (config.f)(h.x);
            // Pin off-range marker values the same way samples pin.
            let pixel_y = if y.is_finite() && y >= mapper.y_min() && y <= mapper.y_max() {
                mapper.to_pixel_y(y)
            } else if y > mapper.y_max() {
                mapper.pixel_top()
            } else {
                mapper.pixel_bottom()
            };
            Marker {
                x: h.x,
                y,
                pixel_x: mapper.to_pixel_x(h.x),
                pixel_y,
                label: h.label.clone(),
            }
        })
        .collect();

    Ok(Figure {
        x_axis: Axis::new(config.x_label.clone(), config.x_min, config.x_max),
        y_axis: Axis::new(config.y_label.clone(), config.y_min, config.y_max),
        ticks_x,
        ticks_y,
        gridlines,
        path,
        points,
        markers,
    })
}
