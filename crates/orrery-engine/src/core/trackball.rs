//! Virtual trackball: maps 2D cursor drags on the canvas to an
//! accumulated 3D rotation.
//!
//! Cursor positions project onto a unit sphere near the viewport center
//! and onto a hyperbolic sheet further out, so the mapping stays
//! continuous past the sphere's silhouette instead of pinning large drags
//! to the equator. Each drag segment becomes a unit quaternion composed
//! onto the running orientation.

use glam::{Mat4, Quat, Vec2, Vec3};

/// Accumulated-orientation trackball controller.
///
/// Owns the pixel→normalized conversion: input arrives as canvas-local
/// pixel coordinates and is mapped to [-1, 1] with y pointing up.
pub struct Trackball {
    orientation: Quat,
    canvas_width: f32,
    canvas_height: f32,
    /// Normalized coordinates of the previous drag sample.
    last_cursor: Vec2,
    dragging: bool,
}

impl Trackball {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            canvas_width,
            canvas_height,
            last_cursor: Vec2::ZERO,
            dragging: false,
        }
    }

    /// Canvas pixel coordinates → normalized [-1, 1], y-up.
    pub fn normalize_cursor(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new(
            (2.0 * px - self.canvas_width) / self.canvas_width,
            (self.canvas_height - 2.0 * py) / self.canvas_height,
        )
    }

    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    pub fn begin_drag(&mut self, px: f32, py: f32) {
        self.last_cursor = self.normalize_cursor(px, py);
        self.dragging = true;
    }

    /// Feed a cursor move. Rotates from the previous sample to this one
    /// and makes this one the new anchor. No-op unless a drag is active.
    pub fn drag_to(&mut self, px: f32, py: f32) {
        if !self.dragging {
            return;
        }
        let cur = self.normalize_cursor(px, py);
        if cur != self.last_cursor {
            let rotation = drag_rotation(self.last_cursor, cur);
            self.accumulate(rotation);
            self.last_cursor = cur;
        }
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Compose a rotation onto the accumulated orientation. The new
    /// rotation multiplies on the left so it acts around the current view
    /// axes, not the axes as they were before any earlier drags.
    pub fn accumulate(&mut self, drag: Quat) {
        self.orientation = (drag * self.orientation).normalize();
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Current orientation as a 4x4 rotation matrix for the transform
    /// composer.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation)
    }
}

/// Project a normalized cursor position onto the trackball surface: the
/// unit sphere while `x² + y² < 1/2`, the hyperbolic sheet `z = 1/(2d)`
/// outside it. The two pieces meet at z = 1/√2, so z falls off smoothly
/// as the cursor leaves the center.
pub fn project_to_sphere(p: Vec2) -> Vec3 {
    let d2 = p.length_squared();
    let z = if d2 < 0.5 {
        (1.0 - d2).sqrt()
    } else {
        0.5 / d2.sqrt()
    };
    Vec3::new(p.x, p.y, z)
}

/// Unit quaternion carrying the projection of `prev` to the projection of
/// `cur`. The axis is the cross product of the projected points and the
/// angle comes from the chord length between them, with the `asin`
/// argument clamped so near-coincident points cannot leave the domain.
/// Identical points produce the identity.
pub fn drag_rotation(prev: Vec2, cur: Vec2) -> Quat {
    if prev == cur {
        return Quat::IDENTITY;
    }
    let p1 = project_to_sphere(prev);
    let p2 = project_to_sphere(cur);

    let axis = p1.cross(p2);
    if axis.length_squared() <= f32::EPSILON {
        return Quat::IDENTITY;
    }

    let t = ((p1 - p2).length() / 2.0).clamp(-1.0, 1.0);
    let angle = 2.0 * t.asin();
    Quat::from_axis_angle(axis.normalize(), angle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_orientation_is_identity() {
        let tb = Trackball::new(800.0, 400.0);
        assert_eq!(tb.orientation(), Quat::IDENTITY);
        assert_eq!(tb.rotation_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn normalize_cursor_maps_corners() {
        let tb = Trackball::new(800.0, 400.0);
        let center = tb.normalize_cursor(400.0, 200.0);
        assert!(center.length() < 1e-6);
        let top_left = tb.normalize_cursor(0.0, 0.0);
        assert_eq!(top_left, Vec2::new(-1.0, 1.0));
        let bottom_right = tb.normalize_cursor(800.0, 400.0);
        assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn project_center_sits_on_sphere_pole() {
        let p = project_to_sphere(Vec2::ZERO);
        assert_eq!(p, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn projection_is_continuous_at_crossover() {
        // d² = 0.5 is the sphere/sheet boundary.
        let d = (0.5f32).sqrt();
        let inside = project_to_sphere(Vec2::new(d - 1e-4, 0.0));
        let outside = project_to_sphere(Vec2::new(d + 1e-4, 0.0));
        assert!((inside.z - outside.z).abs() < 1e-3);
    }

    #[test]
    fn projection_z_decreases_away_from_center() {
        let near = project_to_sphere(Vec2::new(0.2, 0.0));
        let mid = project_to_sphere(Vec2::new(0.6, 0.0));
        let far = project_to_sphere(Vec2::new(1.4, 0.0));
        assert!(near.z > mid.z && mid.z > far.z);
        assert!(far.z > 0.0);
    }

    #[test]
    fn coincident_points_give_identity() {
        for p in [Vec2::ZERO, Vec2::new(0.3, -0.7), Vec2::new(1.0, 1.0)] {
            assert_eq!(drag_rotation(p, p), Quat::IDENTITY);
        }
    }

    #[test]
    fn drag_rotation_is_unit_quaternion() {
        let q = drag_rotation(Vec2::new(-0.2, 0.1), Vec2::new(0.4, 0.3));
        assert!((q.length() - 1.0).abs() < 1e-5);
        assert_ne!(q, Quat::IDENTITY);
    }

    #[test]
    fn accumulate_matches_combined_quaternion() {
        let a = drag_rotation(Vec2::new(0.0, 0.0), Vec2::new(0.3, 0.1));
        let b = drag_rotation(Vec2::new(0.3, 0.1), Vec2::new(0.5, -0.2));

        let mut stepped = Trackball::new(100.0, 100.0);
        stepped.accumulate(a);
        stepped.accumulate(b);

        let mut combined = Trackball::new(100.0, 100.0);
        combined.accumulate(b * a);

        let dot = stepped.orientation().dot(combined.orientation()).abs();
        assert!(dot > 1.0 - 1e-5, "orientations differ: dot = {dot}");
    }

    #[test]
    fn drag_lifecycle_updates_orientation() {
        let mut tb = Trackball::new(800.0, 400.0);
        tb.drag_to(450.0, 210.0); // ignored: no drag active
        assert_eq!(tb.orientation(), Quat::IDENTITY);

        tb.begin_drag(400.0, 200.0);
        assert!(tb.is_dragging());
        tb.drag_to(450.0, 210.0);
        assert_ne!(tb.orientation(), Quat::IDENTITY);

        let after_drag = tb.orientation();
        tb.end_drag();
        tb.drag_to(500.0, 250.0); // released: must not rotate further
        assert_eq!(tb.orientation(), after_drag);
    }

    #[test]
    fn stationary_move_during_drag_is_noop() {
        let mut tb = Trackball::new(800.0, 400.0);
        tb.begin_drag(100.0, 100.0);
        tb.drag_to(100.0, 100.0);
        assert_eq!(tb.orientation(), Quat::IDENTITY);
    }
}
