/// Perspective projection and camera-space conversion
use crate::camera::Camera;
use crate::math::{Mat4, Vec4};
use crate::transform;
use crate::wireframe::Wireframe;

/// Perspective matrix from a field of view in degrees.
///
/// Rows 3 and 4 are identical on purpose: the post-transform w carries
/// the untouched camera-space z as the perspective divisor, and z itself
/// is never remapped into a depth range.
pub fn perspective_matrix(fov_deg: f64) -> Mat4 {
    let f = 1.0 / (fov_deg.to_radians() * 0.5).tan();
    Mat4::new([
        f, 0.0, 0.0, 0.0, //
        0.0, f, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0, 0.0,
    ])
}

/// A wireframe after projection: x and y sit in the roughly [-1, 1]
/// device range, z and w retain their camera-space depth. Topology is
/// projection-invariant, so the edge list is carried through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedWireframe {
    pub vertices: Vec<Vec4>,
    pub edges: Vec<[usize; 2]>,
    pub origin: Vec4,
    pub axes: [Vec4; 3],
}

/// Outer-product projector (a a^T) onto a camera axis, embedded in a
/// homogeneous matrix.
fn axis_projector(a: Vec4) -> Mat4 {
    Mat4::new([
        a.x * a.x,
        a.x * a.y,
        a.x * a.z,
        0.0,
        a.x * a.y,
        a.y * a.y,
        a.y * a.z,
        0.0,
        a.x * a.z,
        a.y * a.z,
        a.z * a.z,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ])
}

/// Re-express a camera-translated point along the camera's axis
/// directions: project the vector onto each axis and recover the signed
/// magnitude from the dot product's sign.
fn to_camera_basis(axes: &[Vec4; 3], v: Vec4) -> Vec4 {
    let component = |a: Vec4| {
        let sign = if v.dot(a) > 0.0 { 1.0 } else { -1.0 };
        axis_projector(a).mul_vec(v).magnitude() * sign
    };
    Vec4::point(component(axes[0]), component(axes[1]), component(axes[2]))
}

/// Perspective-divide x and y; z and w keep their pre-divide values so
/// the depth survives for callers that want it.
fn divide_xy(v: Vec4) -> Vec4 {
    Vec4::new(v.x / v.w, v.y / v.w, v.z, v.w)
}

/// Project a transformed wireframe into normalized device coordinates
/// through the camera.
///
/// Precondition: every point has nonzero camera-space z (the projection
/// divisor); the control bounds keep the startup scene in front of the
/// camera.
pub fn project(wireframe: &Wireframe, camera: &Camera, fov_deg: f64) -> ProjectedWireframe {
    let projection = perspective_matrix(fov_deg);

    // axis endpoints in world space (w = 1, so the translation acts)
    let into_world = transform::local_to_world(wireframe.origin);
    let mut axes = wireframe.axes.map(|a| into_world.mul_vec(a));

    // into camera-local coordinates
    let into_camera = transform::world_to_local(camera.origin);
    let mut vertices: Vec<Vec4> = wireframe
        .vertices
        .iter()
        .map(|&v| into_camera.mul_vec(v))
        .collect();
    axes = axes.map(|a| into_camera.mul_vec(a));
    let mut origin = into_camera.mul_vec(wireframe.origin);

    // re-express along the camera's (possibly rotated) axis directions
    for v in &mut vertices {
        *v = to_camera_basis(&camera.axes, *v);
    }
    axes = axes.map(|a| to_camera_basis(&camera.axes, a));
    origin = to_camera_basis(&camera.axes, origin);

    // perspective transform and divide
    for v in &mut vertices {
        *v = divide_xy(projection.mul_vec(*v));
    }
    axes = axes.map(|a| divide_xy(projection.mul_vec(a)));
    origin = divide_xy(projection.mul_vec(origin));

    ProjectedWireframe {
        vertices,
        edges: wireframe.edges.clone(),
        origin,
        axes,
    }
}
