//! Static mesh generation: one UV sphere shared by every body, one unit
//! circle for orbit paths.
//!
//! Both are built once at startup from band counts and never mutated.
//! Buffers are flat f32/u16 so the embedder can hand them to the GPU
//! without repacking.

use std::f32::consts::{PI, TAU};

/// UV-sphere triangle mesh, centered at the origin.
///
/// Parameterization: `x = cosφ·sinθ, y = cosθ, z = sinφ·sinθ` with
/// θ ∈ [0, π] over `latitude_bands + 1` samples and φ ∈ [0, 2π] over
/// `longitude_bands + 1` samples. The normal at each vertex is the unit
/// position vector; per-body sizing happens later in the model matrix.
pub struct SphereMesh {
    /// Vertex positions, 3 floats per vertex.
    pub positions: Vec<f32>,
    /// Per-vertex unit normals, 3 floats per vertex.
    pub normals: Vec<f32>,
    /// Texture coordinates, 2 floats per vertex.
    pub tex_coords: Vec<f32>,
    /// Triangle-list indices, two triangles per lat/long quad.
    pub indices: Vec<u16>,
}

impl SphereMesh {
    pub fn build(latitude_bands: u32, longitude_bands: u32, radius: f32) -> Self {
        let vertex_count = ((latitude_bands + 1) * (longitude_bands + 1)) as usize;
        let mut positions = Vec::with_capacity(vertex_count * 3);
        let mut normals = Vec::with_capacity(vertex_count * 3);
        let mut tex_coords = Vec::with_capacity(vertex_count * 2);

        for lat in 0..=latitude_bands {
            let theta = lat as f32 * PI / latitude_bands as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            for lon in 0..=longitude_bands {
                let phi = lon as f32 * TAU / longitude_bands as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();

                let x = cos_phi * sin_theta;
                let y = cos_theta;
                let z = sin_phi * sin_theta;

                positions.extend_from_slice(&[radius * x, radius * y, radius * z]);
                normals.extend_from_slice(&[x, y, z]);
                tex_coords.extend_from_slice(&[
                    1.0 - lon as f32 / longitude_bands as f32,
                    1.0 - lat as f32 / latitude_bands as f32,
                ]);
            }
        }

        // Two triangles per quad. `first` is the quad's corner on this
        // latitude row, `second` the matching vertex one row down.
        let mut indices = Vec::with_capacity((latitude_bands * longitude_bands * 6) as usize);
        for lat in 0..latitude_bands {
            for lon in 0..longitude_bands {
                let first = (lat * (longitude_bands + 1) + lon) as u16;
                let second = first + longitude_bands as u16 + 1;
                indices.extend_from_slice(&[first, second, first + 1]);
                indices.extend_from_slice(&[second, second + 1, first + 1]);
            }
        }

        Self {
            positions,
            normals,
            tex_coords,
            indices,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Unit-circle polyline in the XZ plane, sampled at a fixed angular
/// increment. Drawn as a closed line loop: the last point connects back
/// to the first implicitly, so the seam point is not duplicated.
pub fn orbit_ring(segments: u32) -> Vec<f32> {
    let mut points = Vec::with_capacity(segments as usize * 3);
    for i in 0..segments {
        let theta = i as f32 * TAU / segments as f32;
        points.extend_from_slice(&[theta.cos(), 0.0, theta.sin()]);
    }
    points
}

/// The orrery's complete static geometry.
pub struct SceneGeometry {
    pub sphere: SphereMesh,
    /// Orbit circle vertex positions, 3 floats per vertex.
    pub ring: Vec<f32>,
}

impl SceneGeometry {
    pub fn build(latitude_bands: u32, longitude_bands: u32, ring_segments: u32) -> Self {
        Self {
            sphere: SphereMesh::build(latitude_bands, longitude_bands, 1.0),
            ring: orbit_ring(ring_segments),
        }
    }

    pub fn ring_vertex_count(&self) -> u32 {
        (self.ring.len() / 3) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertex_and_index_counts() {
        for &(lat, lon) in &[(3u32, 4u32), (10, 10), (50, 50)] {
            let mesh = SphereMesh::build(lat, lon, 1.0);
            assert_eq!(mesh.vertex_count(), ((lat + 1) * (lon + 1)) as usize);
            assert_eq!(mesh.index_count(), (6 * lat * lon) as usize);
            assert_eq!(mesh.tex_coords.len(), mesh.vertex_count() * 2);
            assert_eq!(mesh.normals.len(), mesh.positions.len());
        }
    }

    #[test]
    fn sphere_vertices_lie_on_sphere() {
        let radius = 2.5;
        let mesh = SphereMesh::build(8, 12, radius);
        for v in mesh.positions.chunks_exact(3) {
            let mag = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!((mag - radius).abs() < 1e-4, "vertex magnitude {mag}");
        }
    }

    #[test]
    fn sphere_normals_are_unit_length() {
        let mesh = SphereMesh::build(6, 6, 3.0);
        for n in mesh.normals.chunks_exact(3) {
            let mag = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((mag - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn sphere_indices_in_range() {
        let mesh = SphereMesh::build(5, 7, 1.0);
        let count = mesh.vertex_count() as u16;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn sphere_texcoord_corners() {
        // First vertex is (lat=0, lon=0): u = 1, v = 1.
        let mesh = SphereMesh::build(4, 4, 1.0);
        assert_eq!(mesh.tex_coords[0], 1.0);
        assert_eq!(mesh.tex_coords[1], 1.0);
        // Last vertex is (lat=latBands, lon=lonBands): u = 0, v = 0.
        let n = mesh.tex_coords.len();
        assert_eq!(mesh.tex_coords[n - 2], 0.0);
        assert_eq!(mesh.tex_coords[n - 1], 0.0);
    }

    #[test]
    fn ring_points_on_unit_circle_in_xz() {
        let ring = orbit_ring(64);
        assert_eq!(ring.len(), 64 * 3);
        for p in ring.chunks_exact(3) {
            assert_eq!(p[1], 0.0);
            let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
            assert!((r - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn ring_does_not_duplicate_seam() {
        let ring = orbit_ring(8);
        let first = &ring[0..3];
        let last = &ring[ring.len() - 3..];
        assert_ne!(first, last);
    }
}
