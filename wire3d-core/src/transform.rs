/// Transform-matrix factory: rotation, translation, scale and frame changes
use crate::math::{Mat4, MathError, Vec4};

const AXIS_EPSILON: f64 = 1e-12;

/// Normalize an axis direction, rejecting zero-length input. The rotation
/// and scale formulas assume a unit axis.
fn unit_axis(axis: Vec4) -> Result<Vec4, MathError> {
    let mag = axis.magnitude();
    if mag < AXIS_EPSILON {
        return Err(MathError::DegenerateAxis);
    }
    Ok(Vec4::new(axis.x / mag, axis.y / mag, axis.z / mag, axis.w))
}

/// Rotation by `angle_deg` about an arbitrary axis through the origin,
/// in Rodrigues form. Reduces to the elementary X/Y/Z matrices when the
/// axis is a basis vector.
pub fn rotation_about_axis(angle_deg: f64, axis: Vec4) -> Result<Mat4, MathError> {
    let a = unit_axis(axis)?;
    let rad = angle_deg.to_radians();
    let (s, c) = rad.sin_cos();
    let d = 1.0 - c;

    let x = a.x * d;
    let y = a.y * d;
    let z = a.z * d;

    let axay = x * a.y;
    let axaz = x * a.z;
    let ayaz = y * a.z;

    Ok(Mat4::new([
        c + x * a.x,
        axay - s * a.z,
        axaz + s * a.y,
        0.0,
        axay + s * a.z,
        c + y * a.y,
        ayaz - s * a.x,
        0.0,
        axaz - s * a.y,
        ayaz + s * a.x,
        c + z * a.z,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]))
}

/// Elementary rotation about the global x axis.
pub fn rotation_x(angle_deg: f64) -> Mat4 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Mat4::new([
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Elementary rotation about the global y axis.
pub fn rotation_y(angle_deg: f64) -> Mat4 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Mat4::new([
        c, 0.0, s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        -s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Elementary rotation about the global z axis.
pub fn rotation_z(angle_deg: f64) -> Mat4 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Mat4::new([
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Translation by `amount` along `direction`. The direction need not be
/// unit length; the translation vector is amount * direction.
pub fn translation(amount: f64, direction: Vec4) -> Mat4 {
    Mat4::new([
        1.0,
        0.0,
        0.0,
        direction.x * amount,
        0.0,
        1.0,
        0.0,
        direction.y * amount,
        0.0,
        0.0,
        1.0,
        direction.z * amount,
        0.0,
        0.0,
        0.0,
        1.0,
    ])
}

/// Scale by `factor` along a unit axis: I + (s - 1) * (a a^T). Directions
/// orthogonal to the axis are unchanged.
pub fn scale_about_axis(factor: f64, axis: Vec4) -> Result<Mat4, MathError> {
    let a = unit_axis(axis)?;
    let d = factor - 1.0;

    let x = a.x * d;
    let y = a.y * d;
    let z = a.z * d;

    Ok(Mat4::new([
        x * a.x + 1.0,
        x * a.y,
        x * a.z,
        0.0,
        y * a.x,
        y * a.y + 1.0,
        y * a.z,
        0.0,
        z * a.x,
        z * a.y,
        z * a.z + 1.0,
        0.0,
        0.0,
        0.0,
        0.0,
        1.0,
    ]))
}

/// Shift into an object's local frame: translate by -origin.
pub fn world_to_local(origin: Vec4) -> Mat4 {
    Mat4::new([
        1.0,
        0.0,
        0.0,
        -origin.x,
        0.0,
        1.0,
        0.0,
        -origin.y,
        0.0,
        0.0,
        1.0,
        -origin.z,
        0.0,
        0.0,
        0.0,
        1.0,
    ])
}

/// Shift back out of an object's local frame: translate by +origin.
pub fn local_to_world(origin: Vec4) -> Mat4 {
    Mat4::new([
        1.0, 0.0, 0.0, origin.x, //
        0.0, 1.0, 0.0, origin.y, //
        0.0, 0.0, 1.0, origin.z, //
        0.0, 0.0, 0.0, 1.0,
    ])
}
