//! Renderer trait for native GPU backends.
//!
//! In the browser build all rendering happens in TypeScript (WebGL): the
//! bridge exposes the draw list, frame uniforms, and static geometry as
//! flat buffers, and the TS side issues the actual GL calls. This trait
//! defines the same contract for future Rust-native backends.
//!
//! Backend creation is the embedder's responsibility. If no backend can
//! be created at startup that is terminal: report it to the user once and
//! never enter the frame loop — there is no fallback rendering path.

use crate::core::geometry::SceneGeometry;
use crate::renderer::draw_list::{DrawCommand, FrameUniforms};

pub trait Renderer {
    /// Backend identifier (e.g., "webgl", "wgpu", "metal").
    fn backend(&self) -> &'static str;

    /// Upload the static sphere and ring buffers. Called once before the
    /// first frame; the geometry never changes afterwards.
    fn upload_geometry(&mut self, geometry: &SceneGeometry);

    /// Draw one complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Handle a canvas/window resize.
    fn resize(&mut self, width: u32, height: u32);
}

/// Everything a backend needs for one frame, in submission order.
pub struct FrameData<'a> {
    pub uniforms: &'a FrameUniforms,
    pub commands: &'a [DrawCommand],
}
