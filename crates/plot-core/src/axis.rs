// File: crates/plot-core/src/axis.rs
// Summary: Axis model, tick generation, and label formatting.

use crate::grid::linspace;
use crate::scale::CoordinateMapper;

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }
}

/// A labeled reference point along an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub pixel_position: f64,
    pub label: String,
}

/// Ticks at even data-space intervals across [min, max], boundary values
/// always included. `to_pixel` is the axis' forward transform; pixel
/// positions inherit its monotonicity.
pub fn generate(min: f64, max: f64, desired_count: usize, to_pixel: impl Fn(f64) -> f64) -> Vec<Tick> {
    linspace(min, max, desired_count)
        .into_iter()
        .map(|value| Tick {
            value,
            pixel_position: to_pixel(value),
            label: format_tick_label(value),
        })
        .collect()
}

/// Ticks for the horizontal axis of a built transform.
pub fn x_ticks(mapper: &CoordinateMapper, desired_count: usize) -> Vec<Tick> {
    generate(mapper.x_min(), mapper.x_max(), desired_count, |v| mapper.to_pixel_x(v))
}

/// Ticks for the vertical axis of a built transform.
pub fn y_ticks(mapper: &CoordinateMapper, desired_count: usize) -> Vec<Tick> {
    generate(mapper.y_min(), mapper.y_max(), desired_count, |v| mapper.to_pixel_y(v))
}

/// Integer values print bare; small fractions keep three decimals (the
/// precision lesson value tables show), larger fractions one.
pub fn format_tick_label(value: f64) -> String {
    if value.is_finite() && value == value.trunc() {
        format!("{value}")
    } else if value.abs() < 1.0 {
        format!("{value:.3}")
    } else {
        format!("{value:.1}")
    }
}
