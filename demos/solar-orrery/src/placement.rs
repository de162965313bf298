/// Per-body transform composition — pure math, no engine dependencies.
///
/// Day counts stay f64 and angles are reduced mod 360 before the f32
/// conversion, so precision holds at large simulated times. Matrices are
/// f32 since that is what reaches the GPU.

use glam::{Mat4, Vec3};

use crate::bodies;

/// Orbital angle in degrees for a body at `day`, reduced to [0, 360).
pub fn orbital_angle_deg(day: f64, period_days: f64) -> f64 {
    (day * 360.0 / period_days).rem_euclid(360.0)
}

fn rotate_y_deg(deg: f64) -> Mat4 {
    Mat4::from_rotation_y(deg.to_radians() as f32)
}

/// Place a body on its circular orbit: rotate about Y by the orbital
/// angle, then translate out along X by the orbital radius.
pub fn orbit_placement(day: f64, period_days: f64, orbit_km: f64) -> Mat4 {
    rotate_y_deg(orbital_angle_deg(day, period_days))
        * Mat4::from_translation(Vec3::new(orbit_km as f32, 0.0, 0.0))
}

/// Earth's frame: orbital placement, then axial tilt, then self-spin.
/// Spin is a child of the tilt, so day/night rotation happens about the
/// tilted axis; both sit under the orbital placement.
pub fn earth_placement(day: f64, spin_deg: f64) -> Mat4 {
    orbit_placement(day, bodies::EARTH.period_days, bodies::EARTH.orbit_km)
        * Mat4::from_rotation_z(bodies::EARTH_TILT_DEG.to_radians())
        * rotate_y_deg(spin_deg.rem_euclid(360.0))
}

/// The Moon's placement inside Earth's (already tilted and spun) frame,
/// using the clamped orbit radius.
pub fn moon_placement(day: f64) -> Mat4 {
    orbit_placement(day, bodies::MOON.period_days, bodies::moon_orbit_km())
}

/// Uniform scale for a body's rendered size.
pub fn body_scale(radius_km: f64, size_mult: f64) -> Mat4 {
    Mat4::from_scale(Vec3::splat((radius_km * size_mult) as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mats_close(a: Mat4, b: Mat4, eps: f32) -> bool {
        a.to_cols_array()
            .iter()
            .zip(b.to_cols_array().iter())
            .all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn orbital_angle_wraps_at_period() {
        assert_eq!(orbital_angle_deg(0.0, 88.0), 0.0);
        assert!((orbital_angle_deg(44.0, 88.0) - 180.0).abs() < 1e-9);
        assert!(orbital_angle_deg(88.0, 88.0) < 1e-9);
    }

    #[test]
    fn orbit_is_periodic() {
        for k in 1..5 {
            let at_zero = orbit_placement(0.0, 225.0, 1000.0);
            let at_period = orbit_placement(225.0 * k as f64, 225.0, 1000.0);
            assert!(mats_close(at_zero, at_period, 1e-3), "k = {k}");
        }
    }

    #[test]
    fn orbit_places_body_at_orbital_radius() {
        let radius = 57_909_050.0;
        for day in [0.0, 13.0, 61.5, 87.9] {
            let m = orbit_placement(day, 88.0, radius);
            let p = m.transform_point3(Vec3::ZERO);
            assert!(p.y.abs() < 1.0);
            assert!((p.length() - radius as f32).abs() / (radius as f32) < 1e-5);
        }
    }

    #[test]
    fn earth_spin_does_not_move_the_center() {
        let a = earth_placement(10.0, 0.0).transform_point3(Vec3::ZERO);
        let b = earth_placement(10.0, 123.0).transform_point3(Vec3::ZERO);
        assert!((a - b).length() < 1.0);
    }

    #[test]
    fn earth_spin_rotates_the_surface() {
        let a = earth_placement(10.0, 0.0).transform_point3(Vec3::X);
        let b = earth_placement(10.0, 180.0).transform_point3(Vec3::X);
        assert!((a - b).length() > 1.0);
    }

    #[test]
    fn moon_sits_at_clamped_radius_from_earth() {
        let m = moon_placement(3.0);
        let p = m.transform_point3(Vec3::ZERO);
        let expected = bodies::moon_orbit_km() as f32;
        assert!((p.length() - expected).abs() / expected < 1e-5);
    }

    #[test]
    fn large_day_counts_stay_precise() {
        // 10 million days: naive f32 degree math would have drifted.
        let day = 1.0e7;
        let angle = orbital_angle_deg(day, 365.0);
        let reference = orbital_angle_deg(day % 365.0, 365.0);
        assert!((angle - reference).abs() < 1e-4, "{angle} vs {reference}");
    }
}
