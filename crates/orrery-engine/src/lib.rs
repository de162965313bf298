pub mod api;
pub mod core;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{GameEvent, TextureSlot};
pub use core::clock::{SimulationClock, DEFAULT_DAYS_PER_FRAME, FRAME_INTERVAL_MS};
pub use core::geometry::{orbit_ring, SceneGeometry, SphereMesh};
pub use core::trackball::Trackball;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::Camera;
pub use renderer::draw_list::{DrawCommand, DrawKind, DrawList, FrameUniforms};
pub use renderer::traits::{FrameData, Renderer};
pub use assets::manifest::TextureManifest;
pub use assets::registry::{TextureRegistry, TextureState};
