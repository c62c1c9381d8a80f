//! # Marker Sphere
//!
//! Generates the sphere mesh drawn for a debug marker using
//! latitude/longitude tessellation.

use std::f32::consts::PI;

use config::constants::{MAX_MARKER_SEGMENTS, MIN_MARKER_SEGMENTS};
use glam::{Vec2, Vec3};
use grid_mesh::{MeshDescription, Vertex};

use crate::error::{VisualizeError, VisualizeResult};
use crate::marker::DebugMarker;

/// Creates a sphere mesh centered on `marker.position` with `marker.radius`.
///
/// # Arguments
///
/// * `marker` - Marker to tessellate
/// * `segments` - Number of segments around the circumference, in
///   `MIN_MARKER_SEGMENTS..=MAX_MARKER_SEGMENTS`
///
/// # Algorithm
///
/// - `num_rings = (segments + 1) / 2` rings, no pole vertices
/// - Ring `i` sits at polar angle `phi = PI * (i + 0.5) / num_rings` from `+Y`
/// - Adjacent rings are stitched with quads, the end rings are closed with fans
/// - UVs wrap longitude to U and latitude to V
///
/// Triangles wind counter-clockwise seen from outside.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use tangent_debug::{sphere::marker_sphere, DebugMarker, MarkerColor};
///
/// let marker = DebugMarker::new(Vec3::ZERO, 1.0, MarkerColor::Red);
/// let mesh = marker_sphere(&marker, 12).unwrap();
/// assert_eq!(mesh.vertex_count(), 72);
/// assert!(mesh.validate());
/// ```
pub fn marker_sphere(marker: &DebugMarker, segments: u32) -> VisualizeResult<MeshDescription> {
    let radius = marker.radius;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(VisualizeError::invalid_marker(format!(
            "sphere radius must be positive: {radius}"
        )));
    }

    if !(MIN_MARKER_SEGMENTS..=MAX_MARKER_SEGMENTS).contains(&segments) {
        return Err(VisualizeError::invalid_marker(format!(
            "sphere segments must be in {MIN_MARKER_SEGMENTS}..={MAX_MARKER_SEGMENTS}: {segments}"
        )));
    }

    let num_rings = (segments + 1) / 2;
    let mut mesh = MeshDescription::with_capacity(
        (num_rings * segments) as usize,
        (2 * segments * num_rings) as usize,
    );

    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(num_rings as usize);

    for i in 0..num_rings {
        let phi = PI * (i as f32 + 0.5) / num_rings as f32;
        let ring_radius = radius * phi.sin();
        let y = radius * phi.cos();

        let ring = (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f32 / segments as f32;
                // positive rotation about +Y, keeps the winding outward
                let offset = Vec3::new(ring_radius * theta.cos(), y, -ring_radius * theta.sin());
                let uv = Vec2::new(j as f32 / segments as f32, phi / PI);
                mesh.add_vertex(Vertex::new(marker.position + offset, uv))
            })
            .collect();

        rings.push(ring);
    }

    // Top cap
    let first_ring = &rings[0];
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(first_ring[0], first_ring[j], first_ring[j + 1]);
    }

    // Middle bands
    for pair in rings.windows(2) {
        let (ring_a, ring_b) = (&pair[0], &pair[1]);

        for j in 0..segments as usize {
            let j_next = (j + 1) % segments as usize;

            let a0 = ring_a[j];
            let a1 = ring_a[j_next];
            let b0 = ring_b[j];
            let b1 = ring_b[j_next];

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // Bottom cap, reversed
    let last_ring = &rings[rings.len() - 1];
    for j in 1..segments as usize - 1 {
        mesh.add_triangle(last_ring[0], last_ring[j + 1], last_ring[j]);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::MarkerColor;
    use approx::assert_relative_eq;

    fn marker(center: Vec3, radius: f32) -> DebugMarker {
        DebugMarker::new(center, radius, MarkerColor::Black)
    }

    #[test]
    fn test_sphere_basic() {
        let mesh = marker_sphere(&marker(Vec3::ZERO, 1.0), 16).unwrap();
        assert_eq!(mesh.vertex_count(), 8 * 16);
        assert!(mesh.triangle_count() > 0);
        assert!(mesh.validate());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let center = Vec3::new(1.0, -2.0, 0.5);
        let mesh = marker_sphere(&marker(center, 0.25), 12).unwrap();
        for p in mesh.positions() {
            assert_relative_eq!(p.distance(center), 0.25, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sphere_faces_outward() {
        let mesh = marker_sphere(&marker(Vec3::ZERO, 1.0), 12).unwrap();
        for tri in mesh.triangles() {
            let [p0, p1, p2] = tri.map(|i| mesh.vertices()[i as usize].position);
            let normal = (p1 - p0).cross(p2 - p0);
            let centroid = (p0 + p1 + p2) / 3.0;
            assert!(normal.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn test_small_marker_validates() {
        let mesh = marker_sphere(&marker(Vec3::ZERO, 0.0025), 12).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_sphere_invalid_radius() {
        assert!(marker_sphere(&marker(Vec3::ZERO, 0.0), 16).is_err());
        assert!(marker_sphere(&marker(Vec3::ZERO, -5.0), 16).is_err());
    }

    #[test]
    fn test_sphere_too_many_segments() {
        for segments in [MAX_MARKER_SEGMENTS + 1, u32::MAX] {
            let err = marker_sphere(&marker(Vec3::ZERO, 1.0), segments).unwrap_err();
            assert!(matches!(err, VisualizeError::InvalidMarker { .. }));
        }
    }

    #[test]
    fn test_sphere_max_segments() {
        let mesh = marker_sphere(&marker(Vec3::ZERO, 1.0), MAX_MARKER_SEGMENTS).unwrap();
        let rings = (MAX_MARKER_SEGMENTS + 1) / 2;
        assert_eq!(mesh.vertex_count(), (rings * MAX_MARKER_SEGMENTS) as usize);
        assert!(mesh.validate());
    }

    #[test]
    fn test_sphere_too_few_segments() {
        let err = marker_sphere(&marker(Vec3::ZERO, 1.0), 2).unwrap_err();
        assert!(matches!(err, VisualizeError::InvalidMarker { .. }));
    }
}
