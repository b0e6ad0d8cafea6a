//! Editable viewer state.
//!
//! The host application mutates a scene between frames (sliders, keyboard)
//! and calls `rebuild` once per frame to get fresh point lists for upload.
//! One writer, then one reader, strictly sequenced by the frame loop; the
//! scenes hold no caches and no references across frames.

use crate::geom::{
    BezierPatch, PlanarCubicBezier, Point3, TessellationError, Vec3, clamp_step,
    tessellate_curve_by_step, tessellate_patch_by_step,
};

/// Editable 2D curve: four control points and a tessellation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveScene {
    control_points: [Point3; 4],
    step: f64,
}

impl Default for CurveScene {
    fn default() -> Self {
        Self {
            control_points: [
                Point3::new(0.5, 0.5, 0.0),
                Point3::new(0.5, -0.5, 0.0),
                Point3::new(0.0, 0.5, 0.0),
                Point3::new(0.0, -0.5, 0.0),
            ],
            step: 0.01,
        }
    }
}

impl CurveScene {
    #[must_use]
    pub fn new(control_points: [Point3; 4], step: f64) -> Self {
        Self {
            control_points,
            step: clamp_step(step),
        }
    }

    #[must_use]
    pub const fn control_points(&self) -> &[Point3; 4] {
        &self.control_points
    }

    /// # Panics
    /// Panics if `index` is not in `0..4`.
    pub fn set_control_point(&mut self, index: usize, point: Point3) {
        self.control_points[index] = point;
    }

    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Raw slider values go through [`clamp_step`] before being stored, so a
    /// degenerate step can never reach the sampling loop.
    pub fn set_step(&mut self, step: f64) {
        self.step = clamp_step(step);
    }

    #[must_use]
    pub const fn curve(&self) -> PlanarCubicBezier {
        PlanarCubicBezier::from_points(self.control_points)
    }

    /// Evaluate the curve at the current step. Called once per frame; the
    /// point list is rebuilt from scratch every time.
    ///
    /// # Errors
    /// `TessellationError::InvalidStep` never occurs here in practice since
    /// the stored step is pre-clamped, but the sampler's contract is kept.
    pub fn rebuild(&self) -> Result<Vec<Point3>, TessellationError> {
        tessellate_curve_by_step(&self.curve(), self.step)
    }
}

/// Editable 3D patch: a 4×4 control grid, a tessellation step and the grid
/// cell currently grabbed by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceScene {
    patch: BezierPatch,
    step: f64,
    selected: (usize, usize),
    nudge_distance: f64,
}

impl Default for SurfaceScene {
    fn default() -> Self {
        Self {
            patch: BezierPatch::uniform_grid(0.5, 0.5),
            step: 0.05,
            selected: (0, 0),
            nudge_distance: 0.01,
        }
    }
}

impl SurfaceScene {
    #[must_use]
    pub fn new(patch: BezierPatch, step: f64) -> Self {
        Self {
            patch,
            step: clamp_step(step),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn patch(&self) -> &BezierPatch {
        &self.patch
    }

    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    pub fn set_step(&mut self, step: f64) {
        self.step = clamp_step(step);
    }

    #[must_use]
    pub const fn selected(&self) -> (usize, usize) {
        self.selected
    }

    /// Grab a grid cell for keyboard editing. Out-of-range indices are
    /// ignored rather than wrapped; the grid is always 4×4.
    pub fn select(&mut self, i: usize, j: usize) {
        if i < 4 && j < 4 {
            self.selected = (i, j);
        } else {
            log::debug!("ignoring selection of out-of-range control point ({i}, {j})");
        }
    }

    /// Move the selected control point by `delta`, scaled to the configured
    /// nudge distance per unit. Arrow keys pass unit axis vectors here.
    pub fn nudge_selected(&mut self, delta: Vec3) {
        let (i, j) = self.selected;
        let moved = self
            .patch
            .control_point(i, j)
            .add_vec(delta.mul_scalar(self.nudge_distance));
        self.patch.set_control_point(i, j, moved);
    }

    /// # Panics
    /// Panics if `i` or `j` is outside the 4×4 grid.
    pub fn set_control_point(&mut self, i: usize, j: usize, point: Point3) {
        self.patch.set_control_point(i, j, point);
    }

    /// Reset the grid to the flat default layout.
    pub fn reset(&mut self, width: f64, depth: f64) {
        self.patch = BezierPatch::uniform_grid(width, depth);
    }

    /// Evaluate the patch over the current step sweep. Called once per frame.
    ///
    /// # Errors
    /// `TessellationError::InvalidStep`, unreachable for a pre-clamped step.
    pub fn rebuild(&self) -> Result<Vec<Point3>, TessellationError> {
        tessellate_patch_by_step(&self.patch, self.step)
    }
}
