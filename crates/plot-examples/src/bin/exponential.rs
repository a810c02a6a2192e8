// File: crates/plot-examples/src/bin/exponential.rs
// Summary: Minimal example that builds the y = 2^x lesson figure and prints it.

use plot_core::{build_plot, Highlight, PlotConfig};

fn main() {
    let config = PlotConfig::new(|x: f64| 2f64.powf(x), -3.0, 3.0, 0.0, 8.0)
        .with_samples(61)
        .with_ticks(7, 5)
        .with_highlights(vec![Highlight::new(0.0, "(0, 1)")]);

    let figure = build_plot(&config).expect("build figure");

    println!("curve: {}", figure.path.to_svg(1));
    println!();
    println!("x ticks:");
    for t in &figure.ticks_x {
        println!("  {:>6}  at {:.1} px", t.label, t.pixel_position);
    }
    println!("y ticks:");
    for t in &figure.ticks_y {
        println!("  {:>6}  at {:.1} px", t.label, t.pixel_position);
    }
    for m in &figure.markers {
        println!("marker {} at ({:.1}, {:.1}) px", m.label, m.pixel_x, m.pixel_y);
    }

    let clamped = figure.points.iter().filter(|p| p.clamped).count();
    println!("{} samples, {} clamped", figure.points.len(), clamped);
}
