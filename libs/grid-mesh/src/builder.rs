//! # Grid Builder
//!
//! Generates the flat grid surface: four vertices and two triangles per cell,
//! no shared vertices between cells.

use glam::{Vec2, Vec3};

use crate::error::MeshResult;
use crate::grid::GridSpec;
use crate::mesh::{MeshDescription, Vertex};

/// Per-corner UVs, in the order the corners are emitted.
const CELL_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Builds the grid mesh described by `spec`.
///
/// # Arguments
///
/// * `spec` - Cell counts and cell size
///
/// # Returns
///
/// A mesh with `4 * cells_x * cells_y` vertices and `2 * cells_x * cells_y`
/// triangles, centered on the origin in XZ at `y = 0`.
///
/// # Algorithm
///
/// Cells are visited row-major (`row` along Z, `col` along X). Each cell
/// emits its corners `(x,z)`, `(x+s,z)`, `(x,z+s)`, `(x+s,z+s)` with UVs
/// `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)`, then the triangles
/// `(i, i+2, i+1)` and `(i+1, i+2, i+3)` where `i` is the index of the
/// cell's first vertex. Both triangles face `+Y`.
///
/// # Example
///
/// ```rust
/// use grid_mesh::{build, GridSpec};
///
/// let mesh = build(&GridSpec::new(1, 1, 0.1)).unwrap();
/// assert_eq!(mesh.triangles(), &[[0, 2, 1], [1, 2, 3]]);
/// ```
pub fn build(spec: &GridSpec) -> MeshResult<MeshDescription> {
    spec.validate()?;

    let s = spec.cell_size;
    let offset = spec.offset();
    let mut mesh = MeshDescription::with_capacity(spec.vertex_count(), spec.triangle_count());

    for row in 0..spec.cells_y {
        for col in 0..spec.cells_x {
            let x = col as f32 * s - offset.x;
            let z = row as f32 * s - offset.y;

            let corners = [
                Vec3::new(x, 0.0, z),
                Vec3::new(x + s, 0.0, z),
                Vec3::new(x, 0.0, z + s),
                Vec3::new(x + s, 0.0, z + s),
            ];

            let mut indices = [0u32; 4];
            for (slot, (position, uv)) in corners.into_iter().zip(CELL_UVS).enumerate() {
                indices[slot] = mesh.add_vertex(Vertex::new(position, uv));
            }
            let [i0, i1, i2, i3] = indices;

            mesh.add_triangle(i0, i2, i1);
            mesh.add_triangle(i1, i2, i3);
        }
    }

    log::debug!(
        "built {}x{} grid (cell size {}): {} vertices, {} triangles",
        spec.cells_x,
        spec.cells_y,
        s,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}
