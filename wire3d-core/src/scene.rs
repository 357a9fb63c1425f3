/// Frame driver: one immutable input in, one rendered frame's data out
use crate::camera::Camera;
use crate::math::{MathError, Vec4};
use crate::projection::{self, ProjectedWireframe};
use crate::wireframe::{Axis, Wireframe};

/// The named control a frame's input targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    RotateX,
    RotateY,
    RotateZ,
    TranslateX,
    TranslateY,
    TranslateZ,
    ScaleX,
    ScaleY,
    ScaleZ,
    CamRotateX,
    CamRotateY,
    CamRotateZ,
    CamTranslateX,
    CamTranslateY,
    CamTranslateZ,
    Fov,
    None,
}

/// A single control change. `Parameter::None` re-projects the current
/// state without touching anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    pub parameter: Parameter,
    pub value: f64,
}

impl FrameInput {
    pub fn none() -> Self {
        Self {
            parameter: Parameter::None,
            value: 0.0,
        }
    }
}

/// Everything a completed frame hands outward: the projected wireframe
/// for the surface renderer and the pre-projection world-space vertices
/// for the readout table.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub projected: ProjectedWireframe,
    pub world_vertices: Vec<Vec4>,
}

/// The authoritative scene: object, camera, field of view. `advance`
/// never mutates; it returns the successor state alongside the frame's
/// outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub wireframe: Wireframe,
    pub camera: Camera,
    pub fov_deg: f64,
}

impl SceneState {
    pub fn new(wireframe: Wireframe, camera: Camera, fov_deg: f64) -> Self {
        Self {
            wireframe,
            camera,
            fov_deg,
        }
    }

    /// Apply one control change, reproject, and return the next state
    /// with the frame outputs. Errors abort the frame and leave the
    /// caller holding the previous state.
    pub fn advance(&self, input: FrameInput) -> Result<(SceneState, FrameOutput), MathError> {
        let mut wireframe = self.wireframe.clone();
        let mut camera = self.camera.clone();
        let mut fov_deg = self.fov_deg;

        match input.parameter {
            Parameter::RotateX => wireframe = wireframe.rotate(Axis::X, input.value)?,
            Parameter::RotateY => wireframe = wireframe.rotate(Axis::Y, input.value)?,
            Parameter::RotateZ => wireframe = wireframe.rotate(Axis::Z, input.value)?,
            Parameter::TranslateX => wireframe = wireframe.translate(Axis::X, input.value),
            Parameter::TranslateY => wireframe = wireframe.translate(Axis::Y, input.value),
            Parameter::TranslateZ => wireframe = wireframe.translate(Axis::Z, input.value),
            Parameter::ScaleX => wireframe = wireframe.scale(Axis::X, input.value)?,
            Parameter::ScaleY => wireframe = wireframe.scale(Axis::Y, input.value)?,
            Parameter::ScaleZ => wireframe = wireframe.scale(Axis::Z, input.value)?,
            Parameter::CamRotateX => camera = camera.rotate(Axis::X, input.value)?,
            Parameter::CamRotateY => camera = camera.rotate(Axis::Y, input.value)?,
            Parameter::CamRotateZ => camera = camera.rotate(Axis::Z, input.value)?,
            Parameter::CamTranslateX => camera = camera.translate(Axis::X, input.value),
            Parameter::CamTranslateY => camera = camera.translate(Axis::Y, input.value),
            Parameter::CamTranslateZ => camera = camera.translate(Axis::Z, input.value),
            Parameter::Fov => fov_deg = input.value,
            Parameter::None => {}
        }

        let projected = projection::project(&wireframe, &camera, fov_deg);
        let world_vertices = wireframe.vertices.clone();

        tracing::debug!(parameter = ?input.parameter, value = input.value, "frame advanced");

        Ok((
            SceneState {
                wireframe,
                camera,
                fov_deg,
            },
            FrameOutput {
                projected,
                world_vertices,
            },
        ))
    }
}
