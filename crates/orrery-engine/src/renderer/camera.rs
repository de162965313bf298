//! Fixed viewpoint for the orrery scene.
//!
//! The camera itself never moves: user rotation arrives as the trackball
//! matrix and is folded into the common transform each frame. The global
//! scale squeezes the whole system (out to the Earth–Moon extent) into
//! the viewing volume.

use glam::{Mat4, Vec3};

#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view, degrees.
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Base tilt applied under the trackball rotation, degrees about X.
    pub tilt_deg: f32,
    /// Uniform scale fitting the scene into the viewing volume.
    pub global_scale: f32,
}

impl Camera {
    pub fn new(global_scale: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 100.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y_deg: 15.0,
            aspect: 2.0,
            near: 0.1,
            far: 1000.0,
            tilt_deg: 15.0,
            global_scale,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// `view · trackball · tilt · global scale` — the prefix shared by
    /// every body and orbit ring in the scene.
    pub fn common_transform(&self, trackball: Mat4) -> Mat4 {
        self.view()
            * trackball
            * Mat4::from_rotation_x(self.tilt_deg.to_radians())
            * Mat4::from_scale(Vec3::splat(self.global_scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_down_positive_z() {
        let cam = Camera::new(1.0);
        let origin_in_view = cam.view().transform_point3(Vec3::ZERO);
        // The origin sits 100 units in front of the camera (-Z in view space).
        assert!((origin_in_view.z + 100.0).abs() < 1e-4);
    }

    #[test]
    fn common_transform_applies_global_scale() {
        let cam = Camera::new(0.5);
        // Cancel the tilt so the scale check stays axis-aligned.
        let mut cam = cam;
        cam.tilt_deg = 0.0;
        let m = cam.common_transform(Mat4::IDENTITY);
        let p = m.transform_point3(Vec3::new(2.0, 0.0, 0.0));
        let q = m.transform_point3(Vec3::ZERO);
        assert!(((p - q).length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn trackball_changes_only_rotation() {
        let cam = Camera::new(1.0);
        let a = cam.common_transform(Mat4::IDENTITY);
        let b = cam.common_transform(Mat4::from_rotation_y(1.0));
        // Same origin, different orientation.
        let oa = a.transform_point3(Vec3::ZERO);
        let ob = b.transform_point3(Vec3::ZERO);
        assert!((oa - ob).length() < 1e-4);
        assert_ne!(a, b);
    }
}
