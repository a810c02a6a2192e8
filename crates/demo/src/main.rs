// File: crates/demo/src/main.rs
// Summary: Demo builds the standard lesson figures (exponential, quadratic,
// trig, linear) and writes their sample/tick tables to CSV for inspection.

use anyhow::{Context, Result};
use plot_core::{build_plot, Figure, Highlight, PlotConfig};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    // Accept output directory from CLI or fall back to target/out.
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output dir '{}'", out_dir.display()))?;

    for (name, figure) in build_figures()? {
        let points_path = out_dir.join(format!("{name}_points.csv"));
        write_points_csv(&figure, &points_path)
            .with_context(|| format!("failed to write '{}'", points_path.display()))?;

        let ticks_path = out_dir.join(format!("{name}_ticks.csv"));
        write_ticks_csv(&figure, &ticks_path)
            .with_context(|| format!("failed to write '{}'", ticks_path.display()))?;

        let clamped = figure.points.iter().filter(|p| p.clamped).count();
        log::info!("{name}: {} samples ({clamped} clamped)", figure.points.len());
        println!("Wrote {} and {}", points_path.display(), ticks_path.display());
    }

    Ok(())
}

/// The four curve families the lesson catalogue actually plots.
fn build_figures() -> Result<Vec<(&'static str, Figure)>> {
    let exponential = build_plot(
        &PlotConfig::new(|x: f64| 2f64.powf(x), -3.0, 3.0, 0.0, 8.0)
            .with_samples(61)
            .with_ticks(7, 5)
            .with_highlights(vec![Highlight::new(0.0, "(0, 1)")]),
    )?;

    let quadratic = build_plot(
        &PlotConfig::new(|x: f64| x * x - 2.0, -4.0, 4.0, -3.0, 9.0)
            .with_samples(81)
            .with_ticks(9, 7),
    )?;

    let sine = build_plot(
        &PlotConfig::new(|x: f64| x.sin(), -6.3, 6.3, -1.2, 1.2)
            .with_samples(127)
            .with_ticks(7, 5)
            .with_labels("x (radians)", "sin x"),
    )?;

    let linear = build_plot(
        &PlotConfig::new(|x: f64| 0.5 * x + 1.0, -4.0, 4.0, -2.0, 4.0)
            .with_samples(2)
            .with_ticks(9, 7)
            .with_highlights(vec![
                Highlight::new(-2.0, "(-2, 0)"),
                Highlight::new(2.0, "(2, 2)"),
            ]),
    )?;

    Ok(vec![
        ("exponential", exponential),
        ("quadratic", quadratic),
        ("sine", sine),
        ("linear", linear),
    ])
}

// ---- CSV output -------------------------------------------------------------

fn write_points_csv(figure: &Figure, path: &Path) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["x", "y", "pixel_x", "pixel_y", "clamped"])?;
    for p in &figure.points {
        w.write_record([
            p.x.to_string(),
            p.y.to_string(),
            p.pixel_x.to_string(),
            p.pixel_y.to_string(),
            p.clamped.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn write_ticks_csv(figure: &Figure, path: &Path) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["axis", "value", "pixel_position", "label"])?;
    for t in &figure.ticks_x {
        w.write_record([
            "x".to_string(),
            t.value.to_string(),
            t.pixel_position.to_string(),
            t.label.clone(),
        ])?;
    }
    for t in &figure.ticks_y {
        w.write_record([
            "y".to_string(),
            t.value.to_string(),
            t.pixel_position.to_string(),
            t.label.clone(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
