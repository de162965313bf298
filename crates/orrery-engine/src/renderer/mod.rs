pub mod camera;
pub mod draw_list;
pub mod traits;

// Re-export key types for convenient access
pub use draw_list::{DrawCommand, DrawKind, DrawList, FrameUniforms};
pub use traits::{FrameData, Renderer};
