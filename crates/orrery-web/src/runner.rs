use orrery_engine::{
    DrawCommand, EngineContext, FrameUniforms, Game, GameConfig, InputEvent, InputQueue,
    TextureManifest, TextureSlot,
};

/// Generic runner that wires a Game to the browser loop.
///
/// Each concrete scene creates a `thread_local!` GameRunner and exports
/// free functions via `#[wasm_bindgen]`, because wasm-bindgen cannot
/// export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let ctx = EngineContext::new(&config);
        Self {
            game,
            ctx,
            input: InputQueue::new(),
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Parse a texture manifest and rebuild the registry from it.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                self.ctx.load_textures(&manifest);
                log::info!("texture manifest loaded: {} entries", self.ctx.textures.len());
            }
            Err(err) => log::error!("texture manifest parse failed: {err}"),
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Mark a texture slot's image as loaded (JS image onload callback).
    pub fn texture_ready(&mut self, slot: u32) {
        self.ctx.textures.mark_ready(TextureSlot(slot));
    }

    /// Run one frame: update the game against pending input, then drain
    /// the queue. `dt_ms` is the wall-clock delta from the scheduler.
    pub fn tick(&mut self, dt_ms: f64) {
        if !self.initialized {
            return;
        }
        self.ctx.clear_frame_data();
        self.game.update(&mut self.ctx, &self.input, dt_ms);
        self.input.drain();
    }

    // ---- Static geometry accessors (one-time GPU upload from JS) ----

    pub fn sphere_positions_ptr(&self) -> *const f32 {
        self.ctx.geometry.sphere.positions.as_ptr()
    }

    pub fn sphere_normals_ptr(&self) -> *const f32 {
        self.ctx.geometry.sphere.normals.as_ptr()
    }

    pub fn sphere_tex_coords_ptr(&self) -> *const f32 {
        self.ctx.geometry.sphere.tex_coords.as_ptr()
    }

    pub fn sphere_indices_ptr(&self) -> *const u16 {
        self.ctx.geometry.sphere.indices.as_ptr()
    }

    pub fn sphere_vertex_count(&self) -> u32 {
        self.ctx.geometry.sphere.vertex_count() as u32
    }

    pub fn sphere_index_count(&self) -> u32 {
        self.ctx.geometry.sphere.index_count() as u32
    }

    pub fn ring_ptr(&self) -> *const f32 {
        self.ctx.geometry.ring.as_ptr()
    }

    pub fn ring_vertex_count(&self) -> u32 {
        self.ctx.geometry.ring_vertex_count()
    }

    // ---- Per-frame accessors ----

    pub fn draw_commands_ptr(&self) -> *const f32 {
        self.ctx.draws.commands_ptr()
    }

    pub fn draw_count(&self) -> u32 {
        self.ctx.draws.count()
    }

    pub fn draw_stride_floats(&self) -> u32 {
        DrawCommand::FLOATS as u32
    }

    pub fn frame_uniforms_ptr(&self) -> *const f32 {
        self.ctx.draws.frame_ptr()
    }

    pub fn frame_uniforms_floats(&self) -> u32 {
        FrameUniforms::FLOATS as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn canvas_width(&self) -> f32 {
        self.config.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.config.canvas_height
    }
}
