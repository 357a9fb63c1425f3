/// Viewpoint model: origin plus axis frame, no vertex set
use crate::math::{MathError, Vec4};
use crate::transform;

/// Accumulated camera parameter values; the camera has no scale family.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraState {
    pub rotation_deg: [f64; 3],
    pub translation: [f64; 3],
}

/// The camera is repositioned with the same incremental-delta discipline
/// as the mesh object. Rotation spins the axis frame in place: the
/// camera's own origin is the pivot by definition, so no re-pivot step
/// is needed.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub origin: Vec4,
    pub axes: [Vec4; 3],
    pub state: CameraState,
}

impl Camera {
    pub fn new(origin: Vec4, axes: [Vec4; 3]) -> Self {
        Self {
            origin,
            axes,
            state: CameraState::default(),
        }
    }

    /// Rotate the view to an absolute angle (degrees) about the camera's
    /// own axis for that parameter.
    pub fn rotate(&self, axis: crate::wireframe::Axis, target_deg: f64) -> Result<Camera, MathError> {
        let i = axis.index();
        let delta = target_deg - self.state.rotation_deg[i];
        let mut state = self.state;
        state.rotation_deg[i] = target_deg;

        let rotation = transform::rotation_about_axis(delta, self.axes[i])?;
        let axes = [
            rotation.mul_vec(self.axes[0]),
            rotation.mul_vec(self.axes[1]),
            rotation.mul_vec(self.axes[2]),
        ];

        Ok(Camera {
            origin: self.origin,
            axes,
            state,
        })
    }

    /// Move the viewpoint to an absolute offset along the camera's own
    /// axis for that parameter.
    pub fn translate(&self, axis: crate::wireframe::Axis, target: f64) -> Camera {
        let i = axis.index();
        let delta = target - self.state.translation[i];
        let mut state = self.state;
        state.translation[i] = target;

        let matrix = transform::translation(delta, self.axes[i]);

        Camera {
            origin: matrix.mul_vec(self.origin),
            axes: self.axes,
            state,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Vec4::point(0.0, 0.0, 0.0),
            [
                Vec4::point(1.0, 0.0, 0.0),
                Vec4::point(0.0, 1.0, 0.0),
                Vec4::point(0.0, 0.0, 1.0),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wireframe::Axis;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_translate_is_idempotent() {
        let camera = Camera::default();
        let once = camera.translate(Axis::Z, 2.0);
        let twice = once.translate(Axis::Z, 2.0);
        assert!((once.origin.z - 2.0).abs() < EPSILON);
        assert!((twice.origin.z - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_rotate_spins_frame_in_place() {
        let camera = Camera::default().rotate(Axis::Y, 90.0).unwrap();
        assert_eq!(camera.origin, Vec4::point(0.0, 0.0, 0.0));
        // after a 90 degree yaw the camera's x axis swings onto the z axis...
        assert!((camera.axes[0].z + 1.0).abs() < EPSILON || (camera.axes[0].z - 1.0).abs() < EPSILON);
        // ...and the frame stays orthonormal
        for i in 0..3 {
            assert!((camera.axes[i].magnitude() - 1.0).abs() < EPSILON);
            for j in (i + 1)..3 {
                assert!(camera.axes[i].dot(camera.axes[j]).abs() < EPSILON);
            }
        }
    }

    #[test]
    fn test_translate_follows_rotated_frame() {
        // yaw 90 degrees, then dolly along the camera's x axis: motion
        // happens along the rotated direction, not world x
        let camera = Camera::default()
            .rotate(Axis::Y, 90.0)
            .unwrap()
            .translate(Axis::X, 3.0);
        assert!(camera.origin.x.abs() < EPSILON);
        assert!((camera.origin.z.abs() - 3.0).abs() < EPSILON);
    }
}
