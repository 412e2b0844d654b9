//! WebGPU rendering module
//!
//! The paddle and ball are tessellated on the CPU and drawn as one
//! flat-colored triangle list per frame.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::frame_vertices;
pub use vertex::Vertex;
