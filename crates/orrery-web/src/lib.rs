pub mod runner;

pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for an orrery scene.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - a `with_runner()` helper
/// - all wasm-bindgen exports (init, tick, pointer/UI events, texture
///   readiness, and flat-buffer accessors for the TypeScript renderer)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use orrery_engine::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The scene struct type implementing `orrery_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt_ms: f64) {
            with_runner(|r| r.tick(dt_ms));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        #[wasm_bindgen]
        pub fn game_texture_ready(slot: u32) {
            with_runner(|r| r.texture_ready(slot));
        }

        // ---- Static geometry accessors (one-time upload) ----

        #[wasm_bindgen]
        pub fn get_sphere_positions_ptr() -> *const f32 {
            with_runner(|r| r.sphere_positions_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_normals_ptr() -> *const f32 {
            with_runner(|r| r.sphere_normals_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_tex_coords_ptr() -> *const f32 {
            with_runner(|r| r.sphere_tex_coords_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_indices_ptr() -> *const u16 {
            with_runner(|r| r.sphere_indices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_vertex_count() -> u32 {
            with_runner(|r| r.sphere_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_sphere_index_count() -> u32 {
            with_runner(|r| r.sphere_index_count())
        }

        #[wasm_bindgen]
        pub fn get_ring_ptr() -> *const f32 {
            with_runner(|r| r.ring_ptr())
        }

        #[wasm_bindgen]
        pub fn get_ring_vertex_count() -> u32 {
            with_runner(|r| r.ring_vertex_count())
        }

        // ---- Per-frame accessors ----

        #[wasm_bindgen]
        pub fn get_draw_commands_ptr() -> *const f32 {
            with_runner(|r| r.draw_commands_ptr())
        }

        #[wasm_bindgen]
        pub fn get_draw_count() -> u32 {
            with_runner(|r| r.draw_count())
        }

        #[wasm_bindgen]
        pub fn get_draw_stride_floats() -> u32 {
            with_runner(|r| r.draw_stride_floats())
        }

        #[wasm_bindgen]
        pub fn get_frame_uniforms_ptr() -> *const f32 {
            with_runner(|r| r.frame_uniforms_ptr())
        }

        #[wasm_bindgen]
        pub fn get_frame_uniforms_floats() -> u32 {
            with_runner(|r| r.frame_uniforms_floats())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_canvas_width() -> f32 {
            with_runner(|r| r.canvas_width())
        }

        #[wasm_bindgen]
        pub fn get_canvas_height() -> f32 {
            with_runner(|r| r.canvas_height())
        }
    };
}
