/// Wire3D Core Library - wireframe geometry and projection pipeline
///
/// This library provides the stateless math and value-semantics scene
/// model for interactive wireframe rendering: homogeneous vector/matrix
/// algebra, transform-matrix factories, the incremental object and
/// camera models, perspective projection, and the per-frame update
/// driver.

pub mod camera;
pub mod math;
pub mod projection;
pub mod scene;
pub mod transform;
pub mod wireframe;

// Re-export commonly used types
pub use camera::{Camera, CameraState};
pub use math::{Mat4, MathError, Vec4};
pub use projection::{perspective_matrix, project, ProjectedWireframe};
pub use scene::{FrameInput, FrameOutput, Parameter, SceneState};
pub use wireframe::{Axis, TransformState, Wireframe};
