use crate::api::types::GameEvent;
use crate::assets::manifest::TextureManifest;
use crate::assets::registry::TextureRegistry;
use crate::core::geometry::SceneGeometry;
use crate::input::queue::InputQueue;
use crate::renderer::draw_list::DrawList;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Canvas size in pixels; feeds trackball normalization and aspect.
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Sphere tessellation band counts.
    pub latitude_bands: u32,
    pub longitude_bands: u32,
    /// Sample count for the orbit circle.
    pub ring_segments: u32,
    /// Draw-command capacity hint per frame.
    pub max_draws: usize,
    /// Game-event capacity hint per frame.
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1024.0,
            canvas_height: 512.0,
            latitude_bands: 50,
            longitude_bands: 50,
            ring_segments: 64,
            max_draws: 16,
            max_events: 8,
        }
    }
}

/// The contract an orrery scene fulfills.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Set up initial state. Static geometry is already built by the time
    /// this runs.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One frame: consume input, advance simulated time, rebuild the draw
    /// list. `dt_ms` is the wall-clock delta since the previous callback.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt_ms: f64);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    /// Static mesh data, built once from the config and uploaded by the
    /// embedder before the first frame.
    pub geometry: SceneGeometry,
    pub textures: TextureRegistry,
    pub draws: DrawList,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            geometry: SceneGeometry::build(
                config.latitude_bands,
                config.longitude_bands,
                config.ring_segments,
            ),
            textures: TextureRegistry::new(),
            draws: DrawList::with_capacity(config.max_draws),
            events: Vec::with_capacity(config.max_events),
        }
    }

    /// Replace the texture registry from a parsed manifest.
    pub fn load_textures(&mut self, manifest: &TextureManifest) {
        self.textures = TextureRegistry::from_manifest(manifest);
    }

    /// Emit a game event to be forwarded to the UI layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (draw commands, events).
    pub fn clear_frame_data(&mut self) {
        self.draws.clear();
        self.events.clear();
    }
}
