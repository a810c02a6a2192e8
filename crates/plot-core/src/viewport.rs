// File: crates/plot-core/src/viewport.rs
// Summary: Data-space viewport over a pixel surface, with validation and autoscale.

use crate::error::{AxisKind, PlotError};
use crate::types::{Insets, HEIGHT, WIDTH};

/// The data-space rectangle to plot, plus the pixel surface it maps onto.
/// Invariants (checked by `validate`): x_min < x_max, y_min < y_max, and the
/// inset plot rectangle has positive width and height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub pixel_width: i32,
    pub pixel_height: i32,
    pub insets: Insets,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
            pixel_width: WIDTH,
            pixel_height: HEIGHT,
            insets: Insets::default(),
        }
    }

    pub fn with_surface(mut self, pixel_width: i32, pixel_height: i32) -> Self {
        self.pixel_width = pixel_width;
        self.pixel_height = pixel_height;
        self
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Derive a viewport from a point cloud, padding the y range by
    /// `margin_frac` of its span so extremes do not sit on the border.
    /// Collapsed or empty ranges widen to a unit span instead of failing.
    pub fn from_points(points: &[(f64, f64)], margin_frac: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::new(0.0, 1.0, 0.0, 1.0);
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let ym = (y_max - y_min) * margin_frac;
        Self::new(x_min, x_max, y_min - ym, y_max + ym)
    }

    // Plot rectangle in pixel space (insets applied).
    pub fn pixel_left(&self) -> f64 { self.insets.left as f64 }
    pub fn pixel_right(&self) -> f64 { (self.pixel_width - self.insets.right as i32) as f64 }
    pub fn pixel_top(&self) -> f64 { self.insets.top as f64 }
    pub fn pixel_bottom(&self) -> f64 { (self.pixel_height - self.insets.bottom as i32) as f64 }
    pub fn plot_width(&self) -> f64 { self.pixel_right() - self.pixel_left() }
    pub fn plot_height(&self) -> f64 { self.pixel_bottom() - self.pixel_top() }

    /// Fail fast on geometry the linear transform cannot express.
    pub fn validate(&self) -> Result<(), PlotError> {
        if self.x_max == self.x_min {
            return Err(PlotError::DegenerateRange { axis: AxisKind::X, value: self.x_min });
        }
        if self.y_max == self.y_min {
            return Err(PlotError::DegenerateRange { axis: AxisKind::Y, value: self.y_min });
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(PlotError::EmptyPlotRect {
                width: self.plot_width(),
                height: self.plot_height(),
            });
        }
        Ok(())
    }
}
