//! The sphere mesh shared by every body part.
//!
//! The figure is drawn from a single sphere; only the per-node transform
//! differs. This module generates that sphere on the CPU. Uploading it to
//! the GPU is the renderer's job, which refers to it through a
//! [`MeshHandle`].

use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use walker_core::{Error, Result};

/// Radius of the sphere the body parts are scaled from.
pub const BODY_SPHERE_RADIUS: f32 = 1.3;
/// Longitude subdivisions of the body sphere.
pub const BODY_SPHERE_SLICES: u32 = 12;
/// Latitude subdivisions of the body sphere.
pub const BODY_SPHERE_STACKS: u32 = 12;

/// Per-vertex RGBA colors, assigned to the sphere's vertices in order and
/// repeated once exhausted.
pub const VERTEX_PALETTE: [[f32; 4]; 36] = [
    [0.583, 0.771, 0.014, 1.0],
    [0.609, 0.115, 0.436, 1.0],
    [0.327, 0.483, 0.844, 1.0],
    [0.822, 0.569, 0.201, 1.0],
    [0.435, 0.602, 0.223, 1.0],
    [0.310, 0.747, 0.185, 1.0],
    [0.597, 0.770, 0.761, 1.0],
    [0.559, 0.436, 0.730, 1.0],
    [0.359, 0.583, 0.152, 1.0],
    [0.483, 0.596, 0.789, 1.0],
    [0.559, 0.861, 0.639, 1.0],
    [0.195, 0.548, 0.859, 1.0],
    [0.014, 0.184, 0.576, 1.0],
    [0.771, 0.328, 0.970, 1.0],
    [0.406, 0.615, 0.116, 1.0],
    [0.676, 0.977, 0.133, 1.0],
    [0.971, 0.572, 0.833, 1.0],
    [0.140, 0.616, 0.489, 1.0],
    [0.997, 0.513, 0.064, 1.0],
    [0.945, 0.719, 0.592, 1.0],
    [0.543, 0.021, 0.978, 1.0],
    [0.279, 0.317, 0.505, 1.0],
    [0.167, 0.620, 0.077, 1.0],
    [0.347, 0.857, 0.137, 1.0],
    [0.055, 0.953, 0.042, 1.0],
    [0.714, 0.505, 0.345, 1.0],
    [0.783, 0.290, 0.734, 1.0],
    [0.722, 0.645, 0.174, 1.0],
    [0.302, 0.455, 0.848, 1.0],
    [0.225, 0.587, 0.040, 1.0],
    [0.517, 0.713, 0.338, 1.0],
    [0.053, 0.959, 0.120, 1.0],
    [0.393, 0.621, 0.362, 1.0],
    [0.673, 0.211, 0.457, 1.0],
    [0.820, 0.883, 0.371, 1.0],
    [0.982, 0.099, 0.879, 1.0],
];

/// Vertex with position, normal and color.
///
/// # Memory Layout
///
/// - Offset 0: position (12 bytes)
/// - Offset 12: normal (12 bytes)
/// - Offset 24: color (16 bytes)
/// - Total size: 40 bytes
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: [f32; 4],
}

impl Vertex {
    /// Size of the struct in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();

    #[inline]
    pub const fn new(position: Vec3, normal: Vec3, color: [f32; 4]) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }
}

/// Cheap reference to uploaded geometry, attached to every node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle {
    /// Identifier the renderer uses to find its buffers.
    pub id: u32,
    /// Number of indices to draw as a triangle list.
    pub index_count: u32,
}

/// A UV sphere centered at the origin.
#[derive(Clone, Debug)]
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Build a sphere with `slices` longitude and `stacks` latitude bands.
    ///
    /// Produces `(slices + 1) * (stacks + 1)` vertices, duplicating the seam
    /// and poles, and `slices * stacks * 6` indices.
    ///
    /// # Errors
    /// Returns [`Error::Config`] for a non-positive radius, fewer than 3
    /// slices or fewer than 2 stacks.
    pub fn new(radius: f32, slices: u32, stacks: u32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::Config(format!(
                "sphere radius must be positive, got {radius}"
            )));
        }
        if slices < 3 || stacks < 2 {
            return Err(Error::Config(format!(
                "sphere needs at least 3 slices and 2 stacks, got {slices}x{stacks}"
            )));
        }

        let rad_per_slice = 2.0 * PI / slices as f32;
        let rad_per_stack = PI / stacks as f32;

        let mut vertices = Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
        let mut indices = Vec::with_capacity((slices * stacks * 6) as usize);

        let mut base = 0u32;
        for i in 0..=slices {
            let (lon_sin, lon_cos) = (rad_per_slice * i as f32).sin_cos();
            for j in 0..=stacks {
                let (lat_sin, lat_cos) = (rad_per_stack * j as f32).sin_cos();
                let normal = Vec3::new(lon_cos * lat_sin, lon_sin * lat_sin, lat_cos);
                let color = VERTEX_PALETTE[base as usize % VERTEX_PALETTE.len()];
                vertices.push(Vertex::new(normal * radius, normal, color));

                if i < slices && j < stacks {
                    indices.extend_from_slice(&[
                        base,
                        base + stacks + 1,
                        base + stacks + 2,
                        base,
                        base + stacks + 2,
                        base + 1,
                    ]);
                }
                base += 1;
            }
        }

        tracing::debug!(
            "Generated sphere: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        Ok(Self { vertices, indices })
    }

    /// The sphere every body part is drawn with.
    pub fn body() -> Result<Self> {
        Self::new(BODY_SPHERE_RADIUS, BODY_SPHERE_SLICES, BODY_SPHERE_STACKS)
    }

    /// Handle to this mesh under the given renderer id.
    pub fn handle(&self, id: u32) -> MeshHandle {
        MeshHandle {
            id,
            index_count: self.indices.len() as u32,
        }
    }

    /// Vertex data as bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        assert_eq!(Vertex::SIZE, 40);
    }

    #[test]
    fn test_vertex_colors_cycle_through_palette() {
        let sphere = SphereMesh::body().unwrap();
        assert_eq!(sphere.vertices[0].color, [0.583, 0.771, 0.014, 1.0]);
        assert_eq!(sphere.vertices[35].color, [0.982, 0.099, 0.879, 1.0]);
        // The palette wraps after 36 vertices.
        assert_eq!(sphere.vertices[36].color, sphere.vertices[0].color);
        assert_eq!(sphere.vertices[168].color, VERTEX_PALETTE[168 % 36]);
        assert!(sphere.vertices.iter().all(|v| v.color[3] == 1.0));
    }

    #[test]
    fn test_body_sphere_counts() {
        let sphere = SphereMesh::body().unwrap();
        assert_eq!(sphere.vertices.len(), 13 * 13);
        assert_eq!(sphere.indices.len(), 12 * 12 * 6);
        assert_eq!(sphere.handle(7).index_count, 864);
        assert_eq!(sphere.handle(7).id, 7);
    }

    #[test]
    fn test_vertices_on_surface() {
        let sphere = SphereMesh::new(2.0, 8, 6).unwrap();
        for v in &sphere.vertices {
            assert!((v.normal.length() - 1.0).abs() < 1e-5);
            assert!((v.position.length() - 2.0).abs() < 1e-5);
            assert!((v.position - v.normal * 2.0).length() < 1e-5);
        }
    }

    #[test]
    fn test_indices_in_bounds() {
        let sphere = SphereMesh::new(1.0, 5, 4).unwrap();
        let count = sphere.vertices.len() as u32;
        assert!(sphere.indices.iter().all(|&i| i < count));
        assert_eq!(sphere.indices.len() % 3, 0);
    }

    #[test]
    fn test_byte_views() {
        let sphere = SphereMesh::new(1.0, 3, 2).unwrap();
        assert_eq!(sphere.vertex_bytes().len(), sphere.vertices.len() * Vertex::SIZE);
        assert_eq!(sphere.index_bytes().len(), sphere.indices.len() * 4);
    }

    #[test]
    fn test_rejects_degenerate_parameters() {
        assert!(matches!(SphereMesh::new(0.0, 12, 12), Err(Error::Config(_))));
        assert!(matches!(SphereMesh::new(1.0, 2, 12), Err(Error::Config(_))));
        assert!(matches!(SphereMesh::new(1.0, 12, 1), Err(Error::Config(_))));
    }
}
