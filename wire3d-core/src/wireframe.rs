/// Wireframe object model with delta-based incremental transforms
use crate::math::{Mat4, MathError, Vec4};
use crate::transform;

/// One of the object's three local axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Accumulated absolute parameter values. Each incremental apply computes
/// the delta against the stored value and then stores the new one, so
/// resending the same value is a no-op and per-axis updates compose in
/// any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub rotation_deg: [f64; 3],
    pub translation: [f64; 3],
    pub scale: [f64; 3],
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            rotation_deg: [0.0; 3],
            translation: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

/// A polyhedral mesh as vertices plus edge index pairs, carrying its own
/// world-space pivot and local axis frame. Transform operations return a
/// new value; nothing here mutates in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    pub vertices: Vec<Vec4>,
    pub edges: Vec<[usize; 2]>,
    pub origin: Vec4,
    pub axes: [Vec4; 3],
    pub state: TransformState,
}

impl Wireframe {
    pub fn new(vertices: Vec<Vec4>, edges: Vec<[usize; 2]>, origin: Vec4, axes: [Vec4; 3]) -> Self {
        debug_assert!(
            edges.iter().all(|e| e[0] < vertices.len() && e[1] < vertices.len()),
            "edge index out of bounds"
        );
        Self {
            vertices,
            edges,
            origin,
            axes,
            state: TransformState::default(),
        }
    }

    /// Axis-aligned cube of the given edge length pivoted at `center`,
    /// with the 12 standard edges and the basis axis frame.
    pub fn cube(size: f64, center: Vec4) -> Self {
        let h = size / 2.0;
        let (cx, cy, cz) = (center.x, center.y, center.z);

        let vertices = vec![
            Vec4::point(cx + h, cy + h, cz - h),
            Vec4::point(cx - h, cy + h, cz - h),
            Vec4::point(cx - h, cy - h, cz - h),
            Vec4::point(cx + h, cy - h, cz - h),
            Vec4::point(cx + h, cy + h, cz + h),
            Vec4::point(cx - h, cy + h, cz + h),
            Vec4::point(cx - h, cy - h, cz + h),
            Vec4::point(cx + h, cy - h, cz + h),
        ];

        let edges = vec![
            [0, 1],
            [1, 2],
            [2, 3],
            [3, 0],
            [4, 5],
            [5, 6],
            [6, 7],
            [7, 4],
            [0, 4],
            [1, 5],
            [2, 6],
            [3, 7],
        ];

        let axes = [
            Vec4::point(1.0, 0.0, 0.0),
            Vec4::point(0.0, 1.0, 0.0),
            Vec4::point(0.0, 0.0, 1.0),
        ];

        Self::new(vertices, edges, center, axes)
    }

    fn map_vertices(&self, matrix: &Mat4) -> Vec<Vec4> {
        self.vertices.iter().map(|&v| matrix.mul_vec(v)).collect()
    }

    /// Rotate to an absolute angle (degrees) about the object's own axis.
    ///
    /// The incremental delta is applied about the *current* frame vector
    /// for that axis with the vertices re-pivoted into the local frame,
    /// and the frame rotates in lock-step with the vertices, so repeated
    /// calls keep spinning the object about itself no matter where it
    /// has been moved or how it is oriented.
    pub fn rotate(&self, axis: Axis, target_deg: f64) -> Result<Wireframe, MathError> {
        let i = axis.index();
        let delta = target_deg - self.state.rotation_deg[i];
        let mut state = self.state;
        state.rotation_deg[i] = target_deg;

        let rotation = transform::rotation_about_axis(delta, self.axes[i])?;
        let pivot_in = transform::world_to_local(self.origin);
        let pivot_out = transform::local_to_world(self.origin);
        let about_origin = pivot_out.mul_mat(&rotation).mul_mat(&pivot_in);

        let axes = [
            rotation.mul_vec(self.axes[0]),
            rotation.mul_vec(self.axes[1]),
            rotation.mul_vec(self.axes[2]),
        ];

        Ok(Wireframe {
            vertices: self.map_vertices(&about_origin),
            edges: self.edges.clone(),
            origin: self.origin,
            axes,
            state,
        })
    }

    /// Translate to an absolute offset along the object's own axis. The
    /// origin moves with the vertices; the frame is unaffected.
    pub fn translate(&self, axis: Axis, target: f64) -> Wireframe {
        let i = axis.index();
        let delta = target - self.state.translation[i];
        let mut state = self.state;
        state.translation[i] = target;

        let matrix = transform::translation(delta, self.axes[i]);

        Wireframe {
            vertices: self.map_vertices(&matrix),
            edges: self.edges.clone(),
            origin: matrix.mul_vec(self.origin),
            axes: self.axes,
            state,
        }
    }

    /// Scale to an absolute factor along the object's own axis. Applies
    /// to the vertices only; object directions do not stretch.
    ///
    /// Factors must stay strictly positive: a stored or requested factor
    /// of zero would make the next delta (target / stored) undefined.
    pub fn scale(&self, axis: Axis, target: f64) -> Result<Wireframe, MathError> {
        let i = axis.index();
        let stored = self.state.scale[i];
        if stored == 0.0 || target == 0.0 {
            return Err(MathError::ZeroScaleFactor);
        }
        let delta = target / stored;
        let mut state = self.state;
        state.scale[i] = target;

        let scaling = transform::scale_about_axis(delta, self.axes[i])?;
        let pivot_in = transform::world_to_local(self.origin);
        let pivot_out = transform::local_to_world(self.origin);
        let about_origin = pivot_out.mul_mat(&scaling).mul_mat(&pivot_in);

        Ok(Wireframe {
            vertices: self.map_vertices(&about_origin),
            edges: self.edges.clone(),
            origin: self.origin,
            axes: self.axes,
            state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn startup_cube() -> Wireframe {
        Wireframe::cube(2.0, Vec4::point(0.0, 0.0, 4.0))
    }

    fn assert_vertices_eq(a: &[Vec4], b: &[Vec4]) {
        assert_eq!(a.len(), b.len());
        for (va, vb) in a.iter().zip(b) {
            assert!((va.x - vb.x).abs() < EPSILON, "{} vs {}", va.x, vb.x);
            assert!((va.y - vb.y).abs() < EPSILON, "{} vs {}", va.y, vb.y);
            assert!((va.z - vb.z).abs() < EPSILON, "{} vs {}", va.z, vb.z);
        }
    }

    #[test]
    fn test_cube_matches_startup_literal() {
        let cube = startup_cube();
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.edges.len(), 12);
        assert_eq!(cube.vertices[0], Vec4::point(1.0, 1.0, 3.0));
        assert_eq!(cube.vertices[6], Vec4::point(-1.0, -1.0, 5.0));
        assert_eq!(cube.origin, Vec4::point(0.0, 0.0, 4.0));
    }

    #[test]
    fn test_rotate_zero_round_trip() {
        let cube = startup_cube();
        let once = cube.rotate(Axis::Y, 0.0).unwrap();
        let twice = once.rotate(Axis::Y, 0.0).unwrap();
        assert_vertices_eq(&cube.vertices, &twice.vertices);
    }

    #[test]
    fn test_translate_is_idempotent() {
        let cube = startup_cube();
        let once = cube.translate(Axis::X, 5.0);
        let twice = once.translate(Axis::X, 5.0);
        assert_vertices_eq(&once.vertices, &twice.vertices);
        assert!((once.origin.x - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_is_idempotent() {
        let cube = startup_cube();
        let once = cube.rotate(Axis::Z, 30.0).unwrap();
        let twice = once.rotate(Axis::Z, 30.0).unwrap();
        assert_vertices_eq(&once.vertices, &twice.vertices);
    }

    #[test]
    fn test_scale_deltas_telescope() {
        let cube = startup_cube();
        let stepped = cube
            .scale(Axis::X, 0.1)
            .unwrap()
            .scale(Axis::X, 3.0)
            .unwrap();
        let direct = cube.scale(Axis::X, 3.0).unwrap();
        assert_vertices_eq(&stepped.vertices, &direct.vertices);
    }

    #[test]
    fn test_scale_zero_rejected() {
        let cube = startup_cube();
        assert_eq!(
            cube.scale(Axis::Y, 0.0).unwrap_err(),
            MathError::ZeroScaleFactor
        );
    }

    #[test]
    fn test_rotation_spins_about_own_origin() {
        // 180 degrees about the object's y axis mirrors x and z through
        // the pivot, so (1, 1, 3) lands on (-1, 1, 5)
        let rotated = startup_cube().rotate(Axis::Y, 180.0).unwrap();
        let v = rotated.vertices[0];
        assert!((v.x + 1.0).abs() < EPSILON);
        assert!((v.y - 1.0).abs() < EPSILON);
        assert!((v.z - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotation_after_translation_keeps_pivot() {
        // Move the object, then rotate: it must spin around where it is
        // now, not around its starting pivot
        let moved = startup_cube().translate(Axis::X, 3.0);
        let rotated = moved.rotate(Axis::Y, 180.0).unwrap();
        assert!((rotated.origin.x - moved.origin.x).abs() < EPSILON);
        // vertex 0 mirrors through the moved pivot
        assert!((rotated.vertices[0].x - (2.0 * moved.origin.x - moved.vertices[0].x)).abs() < EPSILON);
    }

    #[test]
    fn test_axis_frame_stays_orthonormal() {
        let spun = startup_cube()
            .rotate(Axis::X, 35.0)
            .unwrap()
            .rotate(Axis::Y, 120.0)
            .unwrap()
            .rotate(Axis::Z, 275.0)
            .unwrap()
            .rotate(Axis::X, 10.0)
            .unwrap();

        for i in 0..3 {
            assert!((spun.axes[i].magnitude() - 1.0).abs() < EPSILON);
            for j in (i + 1)..3 {
                assert!(spun.axes[i].dot(spun.axes[j]).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_scale_preserves_axis_frame() {
        let scaled = startup_cube().scale(Axis::Z, 2.5).unwrap();
        assert_eq!(scaled.axes, startup_cube().axes);
    }
}
