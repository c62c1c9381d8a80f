//! # Tangent Frame Visualizer
//!
//! Stateless transform from a mesh and its per-vertex basis to debug markers.

use grid_mesh::MeshDescription;

use crate::basis::TangentBasis;
use crate::error::{VisualizeError, VisualizeResult};
use crate::marker::{DebugMarker, MarkerColor};

/// Emits four markers per vertex: the vertex itself and the tip of each
/// basis axis.
///
/// # Arguments
///
/// * `mesh` - Mesh whose vertex positions anchor the markers
/// * `basis` - One basis per vertex, in vertex order
/// * `axis_length` - Distance from the vertex to each axis marker
/// * `marker_radius` - Radius of the vertex marker; axis markers use half
///
/// # Returns
///
/// `4 * mesh.vertex_count()` markers, grouped per vertex as
/// black, red, green, blue.
///
/// # Errors
///
/// [`VisualizeError::BasisMismatch`] when `basis.len()` differs from the
/// vertex count. No markers are produced in that case.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use grid_mesh::{build, GridSpec};
/// use tangent_debug::{visualize, MarkerColor, TangentBasis};
///
/// let mesh = build(&GridSpec::new(1, 1, 1.0)).unwrap();
/// let basis = vec![TangentBasis::new(Vec3::X, Vec3::Z, Vec3::Y); 4];
/// let markers = visualize(&mesh, &basis, 0.5, 0.1).unwrap();
///
/// assert_eq!(markers[3].color, MarkerColor::Blue);
/// assert_eq!(markers[3].position, mesh.vertices()[0].position + Vec3::Y * 0.5);
/// assert_eq!(markers[3].radius, 0.05);
/// ```
pub fn visualize(
    mesh: &MeshDescription,
    basis: &[TangentBasis],
    axis_length: f32,
    marker_radius: f32,
) -> VisualizeResult<Vec<DebugMarker>> {
    if basis.len() != mesh.vertex_count() {
        return Err(VisualizeError::basis_mismatch(
            mesh.vertex_count(),
            basis.len(),
        ));
    }

    let axis_radius = marker_radius / 2.0;
    let mut markers = Vec::with_capacity(4 * basis.len());

    for (position, frame) in mesh.positions().zip(basis) {
        markers.push(DebugMarker::new(position, marker_radius, MarkerColor::Black));

        for (axis, color) in frame.axes().into_iter().zip(MarkerColor::AXES) {
            markers.push(DebugMarker::new(
                position + axis_length * axis,
                axis_radius,
                color,
            ));
        }
    }

    log::debug!(
        "emitted {} tangent-frame markers for {} vertices",
        markers.len(),
        mesh.vertex_count()
    );

    Ok(markers)
}
