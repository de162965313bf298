/// Body data for the orrery — real radii and orbital distances in km,
/// rescaled for visibility.
///
/// The rescale is deliberately non-physical: at true scale every planet
/// would be sub-pixel. Surface radii and orbital distances get different
/// multipliers, and the Moon's orbit is pushed outward so its mesh clears
/// the oversized Earth (see `moon_orbit_km`).

/// Size multiplier for the Sun — keeps its rendered size manageable.
pub const SUN_SIZE_MULT: f64 = 45.0;
/// Size multiplier for planets and the Moon.
pub const PLANET_SIZE_MULT: f64 = 2000.0;

/// Earth's axial tilt, degrees about Z.
pub const EARTH_TILT_DEG: f32 = 23.5;

/// Descriptor for one body on a circular, scripted orbit.
pub struct BodyDesc {
    pub name: &'static str,
    /// Surface radius, km.
    pub radius_km: f64,
    /// Orbital radius around the parent, km.
    pub orbit_km: f64,
    /// Simulated days per revolution around the parent.
    pub period_days: f64,
    /// Display tint (r, g, b).
    pub tint: [f32; 3],
    /// Texture name in the manifest.
    pub texture: &'static str,
}

pub const SUN: BodyDesc = BodyDesc {
    name: "Sun",
    radius_km: 696_000.0,
    orbit_km: 0.0,
    period_days: 1.0,
    tint: [1.0, 1.0, 0.0],
    texture: "sun",
};

pub const MERCURY: BodyDesc = BodyDesc {
    name: "Mercury",
    radius_km: 2_440.0,
    orbit_km: 57_909_050.0,
    period_days: 88.0,
    tint: [1.0, 0.5, 0.5],
    texture: "mercury",
};

pub const VENUS: BodyDesc = BodyDesc {
    name: "Venus",
    radius_km: 6_052.0,
    orbit_km: 108_208_000.0,
    period_days: 225.0,
    tint: [0.5, 1.0, 0.5],
    texture: "venus",
};

pub const EARTH: BodyDesc = BodyDesc {
    name: "Earth",
    radius_km: 6_371.0,
    orbit_km: 149_598_261.0,
    period_days: 365.0,
    tint: [0.5, 0.5, 1.0],
    texture: "earth",
};

/// Parented to Earth, not the Sun.
pub const MOON: BodyDesc = BodyDesc {
    name: "Moon",
    radius_km: 1_737.0,
    orbit_km: 384_399.0,
    period_days: 27.0,
    tint: [1.0, 1.0, 1.0],
    texture: "moon",
};

/// Sun-orbiting planets in draw order.
pub const PLANETS: [&BodyDesc; 3] = [&MERCURY, &VENUS, &EARTH];

/// The Moon's orbital radius after the visibility clamp: at least the
/// rescaled Earth+Moon surface radii, so the meshes never interpenetrate.
/// A documented compromise of physical accuracy for legibility — not
/// something to "fix" back to the true distance.
pub fn moon_orbit_km() -> f64 {
    MOON.orbit_km
        .max((EARTH.radius_km + MOON.radius_km) * PLANET_SIZE_MULT)
}

/// Uniform scale fitting the Earth–Moon system's outer extent into the
/// fixed viewing volume.
pub fn global_scale() -> f64 {
    27.0 / (EARTH.orbit_km + MOON.orbit_km + (EARTH.radius_km + 2.0 * MOON.radius_km) * PLANET_SIZE_MULT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planets_ordered_by_orbit_radius() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].orbit_km < pair[1].orbit_km);
        }
    }

    #[test]
    fn moon_orbit_is_clamped_outward() {
        // The true lunar distance is far smaller than the rescaled
        // Earth+Moon radii, so the clamp must kick in.
        assert!(moon_orbit_km() > MOON.orbit_km);
        assert_eq!(
            moon_orbit_km(),
            (EARTH.radius_km + MOON.radius_km) * PLANET_SIZE_MULT
        );
    }

    #[test]
    fn global_scale_shrinks_the_system_into_view() {
        let s = global_scale();
        assert!(s > 0.0);
        // The whole Earth-Moon extent must land within a few tens of units.
        let extent = (EARTH.orbit_km + moon_orbit_km() + MOON.radius_km * PLANET_SIZE_MULT) * s;
        assert!(extent < 35.0, "scaled extent = {extent}");
    }
}
