//! # Mesh Description
//!
//! Vertex buffer, UV buffer and triangle index buffer handed to the host
//! renderer.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A single vertex: position and texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Position in mesh space
    pub position: Vec3,
    /// Texture coordinate
    pub uv: Vec2,
}

impl Vertex {
    /// Creates a vertex.
    #[inline]
    pub const fn new(position: Vec3, uv: Vec2) -> Self {
        Self { position, uv }
    }
}

/// A triangle mesh with UV-mapped vertices and indices.
///
/// Ownership passes to the caller once built; nothing else keeps a
/// reference to it.
///
/// # Example
///
/// ```rust
/// use grid_mesh::{MeshDescription, Vertex};
/// use glam::{Vec2, Vec3};
///
/// let mut mesh = MeshDescription::new();
/// mesh.add_vertex(Vertex::new(Vec3::ZERO, Vec2::ZERO));
/// mesh.add_vertex(Vertex::new(Vec3::Z, Vec2::Y));
/// mesh.add_vertex(Vertex::new(Vec3::X, Vec2::X));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshDescription {
    vertices: Vec<Vertex>,
    triangles: Vec<[u32; 3]>,
}

impl MeshDescription {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, vertex: Vertex) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        index
    }

    /// Adds a triangle by vertex indices. Winding is kept as given.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Iterates over vertex positions.
    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; both are zero for an empty mesh.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some(first) = self.vertices.first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        self.vertices[1..].iter().fold(
            (first.position, first.position),
            |(min, max), v| (min.min(v.position), max.max(v.position)),
        )
    }

    /// Mean of all vertex positions, or zero for an empty mesh.
    pub fn centroid(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::ZERO;
        }
        let sum: Vec3 = self.positions().sum();
        sum / self.vertices.len() as f32
    }

    /// Appends another mesh, re-offsetting its indices.
    pub fn merge(&mut self, other: &MeshDescription) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats an index
    /// - No zero-area triangles
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i as usize >= vertex_count) {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let [p0, p1, p2] = tri.map(|i| self.vertices[i as usize].position);
            (p1 - p0).cross(p2 - p0).length() >= DEGENERATE_AREA_EPSILON
        })
    }

    /// Exports positions as a flat `[x, y, z, ...]` array for GPU upload.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.position.to_array())
            .collect()
    }

    /// Exports texture coordinates as a flat `[u, v, ...]` array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.uv.to_array()).collect()
    }

    /// Exports triangle indices as a flat `[i0, i1, i2, ...]` array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}
