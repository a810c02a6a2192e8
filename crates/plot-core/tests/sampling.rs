// File: crates/plot-core/tests/sampling.rs
// Purpose: Validate even sampling, determinism, and edge clamping.

use plot_core::{sample, CoordinateMapper, Viewport};

fn mapper(vp: &Viewport) -> CoordinateMapper {
    CoordinateMapper::build(vp).expect("valid viewport")
}

#[test]
fn samples_both_endpoints_at_even_spacing() {
    let vp = Viewport::new(-3.0, 3.0, 0.0, 8.0);
    let m = mapper(&vp);
    let points = sample(|x| x, -3.0, 3.0, 7, &m);

    assert_eq!(points.len(), 7);
    assert_eq!(points[0].x, -3.0);
    assert_eq!(points[6].x, 3.0);
    for pair in points.windows(2) {
        assert!((pair[1].x - pair[0].x - 1.0).abs() < 1e-9);
    }
}

#[test]
fn exponential_hits_unit_intercept_exactly() {
    let vp = Viewport::new(-3.0, 3.0, 0.0, 8.0);
    let m = mapper(&vp);
    let points = sample(|x| 2f64.powf(x), -3.0, 3.0, 7, &m);

    // x = 0 lands exactly on a sample; 2^0 must be exactly 1.
    let at_zero = points.iter().find(|p| p.x == 0.0).expect("sample at x = 0");
    assert_eq!(at_zero.y, 1.0);
    assert!(!at_zero.clamped);
}

#[test]
fn identical_inputs_yield_identical_sequences() {
    let vp = Viewport::new(-3.0, 3.0, 0.0, 8.0);
    let m = mapper(&vp);
    let a = sample(|x| 2f64.powf(x), -3.0, 3.0, 50, &m);
    let b = sample(|x| 2f64.powf(x), -3.0, 3.0, 50, &m);
    assert_eq!(a, b);
}

#[test]
fn out_of_range_values_pin_to_plot_edges() {
    let vp = Viewport::new(-3.0, 3.0, 0.0, 8.0);
    let m = mapper(&vp);

    // x^2 exceeds y_max = 8 at both domain ends.
    let over = sample(|x| x * x, -3.0, 3.0, 7, &m);
    assert!(over[0].clamped);
    assert_eq!(over[0].pixel_y, m.pixel_top());
    assert!(!over[3].clamped); // x = 0, y = 0 in range

    // A line dips below y_min = 0 on the left half.
    let under = sample(|x| x, -3.0, 3.0, 7, &m);
    assert!(under[0].clamped);
    assert_eq!(under[0].pixel_y, m.pixel_bottom());
}

#[test]
fn non_finite_values_stay_drawable() {
    let vp = Viewport::new(-1.0, 1.0, -10.0, 10.0);
    let m = mapper(&vp);
    let points = sample(|x| 1.0 / x, -1.0, 1.0, 5, &m);

    // x = 0 evaluates to +inf; the point is pinned, not propagated.
    let mid = &points[2];
    assert!(mid.clamped);
    assert!(mid.pixel_y.is_finite());
    assert_eq!(mid.pixel_y, m.pixel_top());

    let nan = sample(|_| f64::NAN, -1.0, 1.0, 3, &m);
    assert!(nan.iter().all(|p| p.clamped && p.pixel_y.is_finite()));
}

#[test]
fn counts_below_two_floor_to_two() {
    let vp = Viewport::new(0.0, 4.0, 0.0, 4.0);
    let m = mapper(&vp);
    for count in [0, 1, 2] {
        let points = sample(|x| x, 0.0, 4.0, count, &m);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[1].x, 4.0);
    }
}
