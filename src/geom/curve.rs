use super::core::{Point3, Tolerance, Vec3};

/// Cubic Bernstein basis value for index `i` at parameter `t`.
///
/// The four weights are `(1-t)³`, `3(1-t)²t`, `3(1-t)t²` and `t³`; they sum to
/// 1 for every `t`. Any index outside `0..=3` yields 0.0 — unreachable through
/// the fixed-degree types in this crate, kept as the defensive default.
#[must_use]
pub fn cubic_bernstein(i: usize, t: f64) -> f64 {
    let u = 1.0 - t;
    match i {
        0 => u * u * u,
        1 => 3.0 * u * u * t,
        2 => 3.0 * u * t * t,
        3 => t * t * t,
        _ => 0.0,
    }
}

pub trait Curve3 {
    fn point_at(&self, t: f64) -> Point3;

    #[must_use]
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn derivative_at(&self, t: f64) -> Vec3 {
        let (a, b) = self.domain();
        let span = b - a;
        if !span.is_finite() || span == 0.0 {
            return Vec3::ZERO;
        }

        let h = Tolerance::DERIVATIVE.relative_to(span);
        if !h.is_finite() || h == 0.0 {
            return Vec3::ZERO;
        }

        let t0 = (t - h).max(a);
        let t1 = (t + h).min(b);
        if t1 == t0 {
            return Vec3::ZERO;
        }

        let p0 = self.point_at(t0);
        let p1 = self.point_at(t1);
        p1.sub_point(p0).mul_scalar(1.0 / (t1 - t0))
    }

    /// Returns the unit tangent vector at parameter `t`.
    /// Returns `None` if the derivative is zero or degenerate.
    #[must_use]
    fn tangent_at(&self, t: f64) -> Option<Vec3> {
        self.derivative_at(t).normalized()
    }
}

/// Cubic Bezier segment confined to the z = 0 plane.
///
/// The control points are caller-owned and freely editable between frames;
/// evaluation never mutates them. Whatever z values the control points carry,
/// every evaluated point has z forced to 0.0 — the curve is a 2D object
/// embedded in the 3D scene. Parameters outside [0, 1] extrapolate the
/// segment; the tessellation layer only ever produces values inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarCubicBezier {
    pub p0: Point3,
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl PlanarCubicBezier {
    #[must_use]
    pub const fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p0, p1, p2, p3 }
    }

    #[must_use]
    pub const fn from_points(points: [Point3; 4]) -> Self {
        Self::new(points[0], points[1], points[2], points[3])
    }

    /// Control points in order, for rendering the helper polygon.
    #[must_use]
    pub const fn control_polygon(&self) -> [Point3; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }
}

impl Curve3 for PlanarCubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        let b0 = cubic_bernstein(0, t);
        let b1 = cubic_bernstein(1, t);
        let b2 = cubic_bernstein(2, t);
        let b3 = cubic_bernstein(3, t);
        Point3::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
            // the curve lives in the z = 0 plane
            0.0,
        )
    }

    fn derivative_at(&self, t: f64) -> Vec3 {
        let u = 1.0 - t;
        let a = self.p1.sub_point(self.p0);
        let b = self.p2.sub_point(self.p1);
        let c = self.p3.sub_point(self.p2);
        let d = a
            .mul_scalar(3.0 * u * u)
            .add(b.mul_scalar(6.0 * u * t))
            .add(c.mul_scalar(3.0 * t * t));
        // projected like the curve itself
        Vec3::new(d.x, d.y, 0.0)
    }
}
