mod core;
mod curve;
mod surface;
mod tessellation;

pub use core::{Point3, Tolerance, Vec3};
pub use curve::{Curve3, PlanarCubicBezier, cubic_bernstein};
pub use surface::{BezierPatch, Surface};
pub use tessellation::{
    MIN_SAMPLE_STEP, TessellationError, clamp_step, sample_parameters, tessellate_curve_by_step,
    tessellate_patch_by_step,
};

#[cfg(test)]
mod tests;
