use super::core::Point3;
use super::curve::Curve3;
use super::surface::Surface;

/// Smallest step the samplers will honour. Anything positive but finer than
/// this is quietly raised to it, which bounds a single sweep at 10001 samples
/// per direction.
pub const MIN_SAMPLE_STEP: f64 = 1e-4;

#[derive(Debug, thiserror::Error)]
pub enum TessellationError {
    #[error("sample step must be finite and > 0, got {0}")]
    InvalidStep(f64),
}

/// Caller-side guard for raw slider/keyboard step values: non-finite input
/// falls back to `MIN_SAMPLE_STEP`, everything else is clamped into
/// `[MIN_SAMPLE_STEP, 1.0]`. Use this before storing a step; the samplers
/// themselves reject invalid steps instead of fixing them.
#[must_use]
pub fn clamp_step(step: f64) -> f64 {
    if !step.is_finite() {
        log::debug!("non-finite sample step {step} replaced with {MIN_SAMPLE_STEP}");
        return MIN_SAMPLE_STEP;
    }
    let clamped = step.clamp(MIN_SAMPLE_STEP, 1.0);
    if clamped != step {
        log::debug!("sample step {step} clamped to {clamped}");
    }
    clamped
}

/// Ordered parameter sequence `0, step, 2·step, …` over [0, 1].
///
/// Parameters are computed as `k · step` products, not a running sum, so the
/// sequence is free of per-iteration accumulation drift. The exact endpoint
/// 1.0 appears only when some representable multiple of `step` lands on or
/// below it: `step = 0.5` yields `{0.0, 0.5, 1.0}`, while `step = 0.3` stops
/// at `3 × 0.3 ≈ 0.8999…` because the next multiple overshoots 1.0. The
/// sequence is not padded to force the endpoint in; the host application
/// draws one closing segment to the last control point instead.
///
/// # Errors
/// `TessellationError::InvalidStep` if `step` is non-finite or not positive.
pub fn sample_parameters(step: f64) -> Result<Vec<f64>, TessellationError> {
    if !step.is_finite() || step <= 0.0 {
        return Err(TessellationError::InvalidStep(step));
    }
    let step = step.max(MIN_SAMPLE_STEP);

    let mut params = Vec::with_capacity((1.0 / step) as usize + 2);
    for k in 0u32.. {
        let t = f64::from(k) * step;
        if t > 1.0 {
            break;
        }
        params.push(t);
    }
    Ok(params)
}

/// Evaluate `curve` at every parameter of [`sample_parameters`], in order.
/// The result is rebuilt from scratch on every call; nothing is cached.
///
/// # Errors
/// `TessellationError::InvalidStep` if `step` is non-finite or not positive.
pub fn tessellate_curve_by_step(
    curve: &impl Curve3,
    step: f64,
) -> Result<Vec<Point3>, TessellationError> {
    let params = sample_parameters(step)?;
    Ok(params.into_iter().map(|t| curve.point_at(t)).collect())
}

/// Evaluate `surface` over the step sweep in both directions, outer loop over
/// u and inner over v (row-major). Both directions share the same step and
/// the same endpoint-inclusion rule as [`sample_parameters`].
///
/// # Errors
/// `TessellationError::InvalidStep` if `step` is non-finite or not positive.
pub fn tessellate_patch_by_step(
    surface: &impl Surface,
    step: f64,
) -> Result<Vec<Point3>, TessellationError> {
    let params = sample_parameters(step)?;
    let mut points = Vec::with_capacity(params.len() * params.len());
    for &u in &params {
        for &v in &params {
            points.push(surface.point_at(u, v));
        }
    }
    Ok(points)
}
