//! Flat draw-command buffer read by the JS renderer.
//!
//! Each frame the game rebuilds the list; the bridge exposes it as raw
//! floats over the WASM boundary. Strides must match the TypeScript
//! protocol exactly.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

/// What a command draws: the shared sphere mesh as an indexed triangle
/// list, or the orbit circle as a line loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Sphere,
    OrbitRing,
}

impl DrawKind {
    fn encode(self) -> f32 {
        match self {
            DrawKind::Sphere => 0.0,
            DrawKind::OrbitRing => 1.0,
        }
    }
}

/// Per-draw data written to the shared buffer.
/// 38 floats = 152 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DrawCommand {
    /// 0 = sphere (indexed triangles), 1 = orbit ring (line loop).
    pub kind: f32,
    /// Color tint (r, g, b).
    pub color: [f32; 3],
    /// 1.0 to apply the lighting model, 0.0 for flat color.
    pub lighting: f32,
    /// Texture slot to bind, or -1.0 for untextured.
    pub texture: f32,
    /// Column-major model-view matrix.
    pub model_view: [f32; 16],
    /// Inverse-transpose of the model-view upper 3x3, padded to 4x4.
    pub normal_matrix: [f32; 16],
}

impl DrawCommand {
    pub const FLOATS: usize = 38;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    /// Lit, textured sphere draw. The normal matrix is derived here so
    /// callers only supply the final model-view.
    pub fn sphere(model_view: Mat4, color: [f32; 3], texture: f32) -> Self {
        let normal = Mat4::from_mat3(Mat3::from_mat4(model_view).inverse().transpose());
        Self {
            kind: DrawKind::Sphere.encode(),
            color,
            lighting: 1.0,
            texture,
            model_view: model_view.to_cols_array(),
            normal_matrix: normal.to_cols_array(),
        }
    }

    /// Unlit, untextured orbit-ring draw.
    pub fn ring(model_view: Mat4, color: [f32; 3]) -> Self {
        Self {
            kind: DrawKind::OrbitRing.encode(),
            color,
            lighting: 0.0,
            texture: -1.0,
            model_view: model_view.to_cols_array(),
            normal_matrix: Mat4::IDENTITY.to_cols_array(),
        }
    }

    pub fn kind(&self) -> DrawKind {
        if self.kind == 0.0 {
            DrawKind::Sphere
        } else {
            DrawKind::OrbitRing
        }
    }
}

/// Per-frame uniform block shared by every draw. 32 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Column-major projection matrix.
    pub projection: [f32; 16],
    /// Point light position, object space (w = 1).
    pub light_position: [f32; 4],
    /// Diffuse and specular light color, tinted by the UI channel
    /// scalars (rgb, 1).
    pub light_color: [f32; 4],
    /// Ambient product (rgb, 1).
    pub ambient: [f32; 4],
    pub shininess: f32,
    pub clear_color: [f32; 3],
}

impl FrameUniforms {
    pub const FLOATS: usize = 32;
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            projection: Mat4::IDENTITY.to_cols_array(),
            light_position: [0.0, 0.0, 100.0, 1.0],
            light_color: [1.0, 1.0, 1.0, 1.0],
            ambient: [0.04, 0.04, 0.04, 1.0],
            shininess: 20.0,
            clear_color: [0.2, 0.2, 0.2],
        }
    }
}

/// Draw commands plus frame uniforms for one rendered frame.
pub struct DrawList {
    pub frame: FrameUniforms,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frame: FrameUniforms::default(),
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Drop last frame's commands. Frame uniforms persist; the game
    /// overwrites the fields it animates.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn count(&self) -> u32 {
        self.commands.len() as u32
    }

    /// Raw pointer to command data for reads from JS.
    pub fn commands_ptr(&self) -> *const f32 {
        self.commands.as_ptr() as *const f32
    }

    /// Raw pointer to the frame uniform block.
    pub fn frame_ptr(&self) -> *const f32 {
        &self.frame as *const FrameUniforms as *const f32
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
