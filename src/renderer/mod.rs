//! WebGPU rendering module
//!
//! The scene is rebuilt as a colored triangle list every frame; game
//! coordinates are canvas pixels.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::scene;
pub use vertex::Vertex;
