/// The orrery scene: Sun, Mercury, Venus, Earth, and the Moon on circular
/// scripted orbits, a trackball-rotatable view, and UI controls for
/// animation, orbit rings, the day counter, simulation rate, and light
/// color.

use glam::Mat4;
use orrery_engine::*;

use crate::{bodies, placement};

// ── Custom event kinds from the UI ───────────────────────────────────

/// Checkbox state events carry the new state in `a` (0.0 or 1.0).
const CUSTOM_ANIMATION_ENABLE: u32 = 1;
const CUSTOM_ORBITS_VISIBLE: u32 = 2;
const CUSTOM_DAY_DISPLAY: u32 = 3;
const CUSTOM_RATE_DOUBLE: u32 = 4;
const CUSTOM_RATE_HALVE: u32 = 5;
/// Light channel sliders carry the channel scalar in `a`.
const CUSTOM_LIGHT_RED: u32 = 6;
const CUSTOM_LIGHT_GREEN: u32 = 7;
const CUSTOM_LIGHT_BLUE: u32 = 8;
/// Canvas resize (sent by the embedder as kind=99): a = width, b = height.
const CUSTOM_RESIZE: u32 = 99;

// ── Game event kinds to the UI ───────────────────────────────────────

/// Day-counter readout: a = current day, b = days per frame.
const EVENT_DAY_INFO: f32 = 1.0;

// ── Ring colors ──────────────────────────────────────────────────────

const PLANET_RING_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const MOON_RING_COLOR: [f32; 3] = [0.2, 0.2, 0.2];

pub struct Orrery {
    clock: SimulationClock,
    trackball: Trackball,
    camera: Camera,
    show_orbits: bool,
    show_day: bool,
    /// Light color channels from the UI sliders; tints both the diffuse
    /// and specular products.
    light_rgb: [f32; 3],
}

impl Orrery {
    pub fn new() -> Self {
        let config = GameConfig::default();
        Self {
            clock: SimulationClock::new(),
            trackball: Trackball::new(config.canvas_width, config.canvas_height),
            camera: Camera::new(bodies::global_scale() as f32),
            show_orbits: true,
            show_day: true,
            light_rgb: [1.0, 1.0, 1.0],
        }
    }

    fn texture_uniform(textures: &TextureRegistry, name: &str) -> f32 {
        textures
            .slot(name)
            .map(|slot| textures.bindable(slot))
            .unwrap_or(-1.0)
    }

    /// Rebuild the frame's draw list: orbit rings first (so bodies draw
    /// over them), then Sun → Mercury → Venus → Earth → Moon, then the
    /// Moon's ring inside Earth's frame.
    fn compose_draws(&self, ctx: &mut EngineContext) {
        let common = self.camera.common_transform(self.trackball.rotation_matrix());
        let day = self.clock.current_day();

        ctx.draws.frame.projection = self.camera.projection().to_cols_array();
        ctx.draws.frame.light_color =
            [self.light_rgb[0], self.light_rgb[1], self.light_rgb[2], 1.0];

        if self.show_orbits {
            for planet in bodies::PLANETS {
                let mv = common * Mat4::from_scale(glam::Vec3::splat(planet.orbit_km as f32));
                ctx.draws.push(DrawCommand::ring(mv, PLANET_RING_COLOR));
            }
        }

        let sun_tex = Self::texture_uniform(&ctx.textures, bodies::SUN.texture);
        let sun_mv = common * placement::body_scale(bodies::SUN.radius_km, bodies::SUN_SIZE_MULT);
        ctx.draws
            .push(DrawCommand::sphere(sun_mv, bodies::SUN.tint, sun_tex));

        for planet in [&bodies::MERCURY, &bodies::VENUS] {
            let tex = Self::texture_uniform(&ctx.textures, planet.texture);
            let mv = common
                * placement::orbit_placement(day, planet.period_days, planet.orbit_km)
                * placement::body_scale(planet.radius_km, bodies::PLANET_SIZE_MULT);
            ctx.draws.push(DrawCommand::sphere(mv, planet.tint, tex));
        }

        // Earth and the Moon share the Earth frame; the Moon orbits inside
        // the tilted, spinning frame, as does its ring.
        let earth_frame = placement::earth_placement(day, self.clock.spin_deg());

        let earth_tex = Self::texture_uniform(&ctx.textures, bodies::EARTH.texture);
        let earth_mv = common
            * earth_frame
            * placement::body_scale(bodies::EARTH.radius_km, bodies::PLANET_SIZE_MULT);
        ctx.draws
            .push(DrawCommand::sphere(earth_mv, bodies::EARTH.tint, earth_tex));

        let moon_tex = Self::texture_uniform(&ctx.textures, bodies::MOON.texture);
        let moon_mv = common
            * earth_frame
            * placement::moon_placement(day)
            * placement::body_scale(bodies::MOON.radius_km, bodies::PLANET_SIZE_MULT);
        ctx.draws
            .push(DrawCommand::sphere(moon_mv, bodies::MOON.tint, moon_tex));

        if self.show_orbits {
            let ring_mv =
                common * earth_frame * Mat4::from_scale(glam::Vec3::splat(bodies::moon_orbit_km() as f32));
            ctx.draws.push(DrawCommand::ring(ring_mv, MOON_RING_COLOR));
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => self.trackball.begin_drag(x, y),
            InputEvent::PointerMove { x, y } => self.trackball.drag_to(x, y),
            InputEvent::PointerUp { .. } => self.trackball.end_drag(),
            InputEvent::Custom { kind, a, b, .. } => match kind {
                CUSTOM_ANIMATION_ENABLE => self.clock.set_running(a != 0.0),
                CUSTOM_ORBITS_VISIBLE => self.show_orbits = a != 0.0,
                CUSTOM_DAY_DISPLAY => self.show_day = a != 0.0,
                CUSTOM_RATE_DOUBLE => self.clock.double_rate(),
                CUSTOM_RATE_HALVE => self.clock.halve_rate(),
                CUSTOM_LIGHT_RED => self.light_rgb[0] = a,
                CUSTOM_LIGHT_GREEN => self.light_rgb[1] = a,
                CUSTOM_LIGHT_BLUE => self.light_rgb[2] = a,
                CUSTOM_RESIZE => {
                    self.trackball.set_canvas_size(a, b);
                    self.camera.set_aspect(a, b);
                }
                _ => {}
            },
        }
    }
}

impl Default for Orrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Orrery {
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.draws.frame.projection = self.camera.projection().to_cols_array();
        log::info!(
            "orrery ready: {} bodies, sphere {} verts, ring {} verts",
            bodies::PLANETS.len() + 2,
            ctx.geometry.sphere.vertex_count(),
            ctx.geometry.ring_vertex_count()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt_ms: f64) {
        for event in input.iter() {
            self.handle_event(event);
        }

        self.clock.advance(dt_ms);
        self.compose_draws(ctx);

        if self.show_day {
            ctx.emit_event(GameEvent {
                kind: EVENT_DAY_INFO,
                a: self.clock.current_day() as f32,
                b: self.clock.days_per_frame() as f32,
                c: 0.0,
            });
        }
    }
}
