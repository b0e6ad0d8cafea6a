use crate::geom::{
    BezierPatch, Curve3, MIN_SAMPLE_STEP, PlanarCubicBezier, Point3, Surface, TessellationError,
    clamp_step, sample_parameters, tessellate_curve_by_step, tessellate_patch_by_step,
};

fn sample_curve() -> PlanarCubicBezier {
    PlanarCubicBezier::new(
        Point3::new(0.5, 0.5, 0.0),
        Point3::new(0.5, -0.5, 0.0),
        Point3::new(0.0, 0.5, 0.0),
        Point3::new(0.0, -0.5, 0.0),
    )
}

#[test]
fn half_step_hits_both_endpoints() {
    let params = sample_parameters(0.5).unwrap();
    assert_eq!(params, vec![0.0, 0.5, 1.0]);
}

#[test]
fn dividing_steps_include_the_endpoint() {
    // 20 × 0.05 and 100 × 0.01 both round to exactly 1.0
    assert_eq!(sample_parameters(0.05).unwrap().len(), 21);
    assert_eq!(sample_parameters(0.01).unwrap().len(), 101);
    assert_eq!(*sample_parameters(0.01).unwrap().last().unwrap(), 1.0);
}

#[test]
fn non_dividing_step_stops_short_of_the_endpoint() {
    let params = sample_parameters(0.3).unwrap();
    assert_eq!(params.len(), 4);
    assert!(*params.last().unwrap() < 1.0);
}

#[test]
fn parameters_are_strictly_increasing() {
    let params = sample_parameters(0.07).unwrap();
    assert!(params.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(params[0], 0.0);
}

#[test]
fn invalid_steps_are_rejected() {
    assert!(matches!(
        sample_parameters(0.0),
        Err(TessellationError::InvalidStep(_))
    ));
    assert!(matches!(
        sample_parameters(-0.25),
        Err(TessellationError::InvalidStep(_))
    ));
    assert!(matches!(
        sample_parameters(f64::NAN),
        Err(TessellationError::InvalidStep(_))
    ));
    assert!(matches!(
        sample_parameters(f64::INFINITY),
        Err(TessellationError::InvalidStep(_))
    ));
}

#[test]
fn tiny_positive_step_is_raised_to_the_floor() {
    let params = sample_parameters(1e-12).unwrap();
    assert_eq!(params.len(), sample_parameters(MIN_SAMPLE_STEP).unwrap().len());
}

#[test]
fn clamp_step_bounds_raw_input() {
    assert_eq!(clamp_step(0.05), 0.05);
    assert_eq!(clamp_step(0.0), MIN_SAMPLE_STEP);
    assert_eq!(clamp_step(-3.0), MIN_SAMPLE_STEP);
    assert_eq!(clamp_step(f64::NAN), MIN_SAMPLE_STEP);
    assert_eq!(clamp_step(7.5), 1.0);
}

#[test]
fn curve_tessellation_walks_the_parameter_sequence() {
    let curve = sample_curve();
    let points = tessellate_curve_by_step(&curve, 0.5).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], curve.p0);
    assert_eq!(points[1], curve.point_at(0.5));
    assert_eq!(points[2], curve.p3);
}

#[test]
fn curve_tessellation_is_deterministic() {
    let curve = sample_curve();
    let a = tessellate_curve_by_step(&curve, 0.01).unwrap();
    let b = tessellate_curve_by_step(&curve, 0.01).unwrap();
    assert_eq!(a, b);
}

#[test]
fn patch_sweep_is_row_major() {
    let patch = BezierPatch::uniform_grid(0.5, 0.5);
    let points = tessellate_patch_by_step(&patch, 0.5).unwrap();
    assert_eq!(points.len(), 9);

    // outer loop over u, inner over v: the second point keeps u = 0
    assert_eq!(points[0], patch.point_at(0.0, 0.0));
    assert_eq!(points[1], patch.point_at(0.0, 0.5));
    assert_eq!(points[3], patch.point_at(0.5, 0.0));
    assert_eq!(points[8], patch.point_at(1.0, 1.0));
}

#[test]
fn flat_patch_sweep_stays_flat() {
    let patch = BezierPatch::uniform_grid(2.0, 2.0);
    let points = tessellate_patch_by_step(&patch, 0.05).unwrap();
    assert_eq!(points.len(), 21 * 21);
    assert!(points.iter().all(|p| p.y == 0.0));
}

#[test]
fn patch_tessellation_rejects_invalid_step() {
    let patch = BezierPatch::uniform_grid(1.0, 1.0);
    assert!(tessellate_patch_by_step(&patch, -0.1).is_err());
    assert!(tessellate_curve_by_step(&sample_curve(), f64::NAN).is_err());
}
