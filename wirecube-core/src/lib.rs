/// WireCube Core Library - Cube rotation and projection logic
///
/// This library holds the frontend-independent part of the wireframe cube
/// viewer: the eight cube corners, rotations about their centroid,
/// orthographic projection and the key bindings. Frontends supply a
/// [`LineSink`] to draw on.

pub mod config;
pub mod controls;
pub mod geometry;
pub mod projection;
pub mod rotator;
pub mod transform;

// Re-export commonly used types
pub use config::RotatorConfig;
pub use controls::Key;
pub use geometry::{Cube, Vertex, CUBE_EDGES};
pub use projection::{CanvasPoint, Color, LineSink, Projection, Segment, Stroke};
pub use rotator::CubeRotator;
pub use transform::{rotate_about_centroid, Axis};
