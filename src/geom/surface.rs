use super::core::Point3;
use super::curve::cubic_bernstein;

pub trait Surface {
    fn point_at(&self, u: f64, v: f64) -> Point3;

    #[must_use]
    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn domain_v(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// Bicubic Bezier patch over a fixed 4×4 control grid.
///
/// The grid is row-major: `control_points[i][j]` blends with the Bernstein
/// weight for index `i` in the u direction and index `j` in the v direction.
/// Degree is fixed at 3 in both directions, so the grid never resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPatch {
    control_points: [[Point3; 4]; 4],
}

impl BezierPatch {
    #[must_use]
    pub const fn new(control_points: [[Point3; 4]; 4]) -> Self {
        Self { control_points }
    }

    /// Flat 4×4 grid centred on the origin at height 0: columns (index `j`)
    /// spaced `width / 3` apart along x, rows (index `i`) spaced `depth / 3`
    /// apart along z. This is the viewer's default/reset layout, not a
    /// general mesh generator.
    #[must_use]
    pub fn uniform_grid(width: f64, depth: f64) -> Self {
        let half_w = width / 2.0;
        let half_d = depth / 2.0;

        let mut control_points = [[Point3::ORIGIN; 4]; 4];
        for (i, row) in control_points.iter_mut().enumerate() {
            for (j, point) in row.iter_mut().enumerate() {
                *point = Point3::new(
                    -half_w + j as f64 * (width / 3.0),
                    0.0,
                    -half_d + i as f64 * (depth / 3.0),
                );
            }
        }
        Self { control_points }
    }

    /// # Panics
    /// Panics if `i` or `j` is outside the 4×4 grid.
    #[must_use]
    pub const fn control_point(&self, i: usize, j: usize) -> Point3 {
        self.control_points[i][j]
    }

    /// # Panics
    /// Panics if `i` or `j` is outside the 4×4 grid.
    pub fn set_control_point(&mut self, i: usize, j: usize, point: Point3) {
        self.control_points[i][j] = point;
    }

    #[must_use]
    pub const fn control_grid(&self) -> &[[Point3; 4]; 4] {
        &self.control_points
    }
}

impl Surface for BezierPatch {
    /// Tensor-product evaluation: Σᵢ Σⱼ Bᵢ(u) · Bⱼ(v) · grid[i][j].
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let mut point = Point3::ORIGIN;
        for (i, row) in self.control_points.iter().enumerate() {
            let bu = cubic_bernstein(i, u);
            for (j, cp) in row.iter().enumerate() {
                let bv = cubic_bernstein(j, v);
                let w = bu * bv;
                point = Point3::new(
                    point.x + w * cp.x,
                    point.y + w * cp.y,
                    point.z + w * cp.z,
                );
            }
        }
        point
    }
}
