//! # UV-Gradient Tangent Basis
//!
//! Per-vertex tangent frames from texture-coordinate partial derivatives.
//!
//! 1. For every triangle, solve `dP = T * du + B * dv` for its tangent `T`
//!    and bitangent `B`, and take its face normal from the edge cross product.
//! 2. Accumulate all three at each corner vertex (area-weighted through the
//!    unnormalized deltas).
//! 3. Per vertex, Gram-Schmidt the tangent against the normal and rebuild
//!    the bitangent as `N × T`, signed to agree with the accumulated `B`.

use config::constants::UV_DETERMINANT_EPSILON;
use glam::Vec3;
use grid_mesh::MeshDescription;
use tangent_debug::{TangentBasis, TangentBasisSource, VisualizeError, VisualizeResult};

/// Derives an orthonormal tangent basis from positions and UVs.
///
/// - Triangles with a degenerate UV mapping contribute a normal but no
///   tangent direction.
/// - A vertex without any tangent direction gets one picked from its normal.
/// - A vertex no triangle references gets an all-zero basis.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use grid_mesh::{build, GridSpec};
/// use tangent_space::UvGradientBasis;
///
/// let mesh = build(&GridSpec::new(1, 1, 0.1)).unwrap();
/// let basis = UvGradientBasis.derive(&mesh).unwrap();
/// assert!(basis[0].normal.abs_diff_eq(Vec3::Y, 1e-6));
/// assert!(basis[0].tangent.abs_diff_eq(Vec3::X, 1e-6));
/// assert!(basis[0].bitangent.abs_diff_eq(Vec3::Z, 1e-6));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UvGradientBasis;

impl UvGradientBasis {
    /// Returns one basis per vertex of `mesh`.
    ///
    /// Fails with [`VisualizeError::BasisSource`] when a triangle references
    /// a vertex outside the mesh.
    pub fn derive(&self, mesh: &MeshDescription) -> VisualizeResult<Vec<TangentBasis>> {
        let vertices = mesh.vertices();
        let vertex_count = vertices.len();

        let mut normals = vec![Vec3::ZERO; vertex_count];
        let mut tangents = vec![Vec3::ZERO; vertex_count];
        let mut bitangents = vec![Vec3::ZERO; vertex_count];
        let mut degenerate_uv = 0usize;

        for (index, tri) in mesh.triangles().iter().enumerate() {
            if let Some(&bad) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(VisualizeError::basis_source(format!(
                    "triangle {index} references vertex {bad} of {vertex_count}"
                )));
            }

            let [v0, v1, v2] = tri.map(|i| vertices[i as usize]);
            let dp1 = v1.position - v0.position;
            let dp2 = v2.position - v0.position;
            let duv1 = v1.uv - v0.uv;
            let duv2 = v2.uv - v0.uv;

            let normal = dp1.cross(dp2);
            for &i in tri {
                normals[i as usize] += normal;
            }

            let det = duv1.x * duv2.y - duv1.y * duv2.x;
            if det.abs() < UV_DETERMINANT_EPSILON {
                degenerate_uv += 1;
                continue;
            }

            let inv_det = 1.0 / det;
            let t = (dp1 * duv2.y - dp2 * duv1.y) * inv_det;
            let b = (dp2 * duv1.x - dp1 * duv2.x) * inv_det;

            for &i in tri {
                tangents[i as usize] += t;
                bitangents[i as usize] += b;
            }
        }

        if degenerate_uv > 0 {
            log::warn!("skipped {degenerate_uv} triangles with degenerate UV mapping");
        }

        let basis: Vec<TangentBasis> = normals
            .into_iter()
            .zip(tangents)
            .zip(bitangents)
            .map(|((n, t), b)| orthonormalize(n, t, b))
            .collect();

        log::debug!(
            "derived tangent basis for {} vertices from {} triangles",
            vertex_count,
            mesh.triangle_count()
        );

        Ok(basis)
    }
}

impl TangentBasisSource for UvGradientBasis {
    fn tangent_basis(&self, mesh: &MeshDescription) -> VisualizeResult<Vec<TangentBasis>> {
        self.derive(mesh)
    }
}

/// Turns accumulated per-vertex sums into a unit, right-angled frame.
fn orthonormalize(normal: Vec3, tangent: Vec3, bitangent: Vec3) -> TangentBasis {
    let n = normal.normalize_or_zero();
    if n == Vec3::ZERO {
        return TangentBasis::default();
    }

    // Gram-Schmidt: T' = normalize(T - N * dot(N, T))
    let mut t = (tangent - n * n.dot(tangent)).normalize_or_zero();
    if t == Vec3::ZERO {
        t = fallback_tangent(n);
    }

    let handedness = if n.cross(t).dot(bitangent) < 0.0 {
        -1.0
    } else {
        1.0
    };

    TangentBasis::new(t, n.cross(t) * handedness, n)
}

/// Tangent perpendicular to `normal`, along the axis it is least aligned with.
fn fallback_tangent(normal: Vec3) -> Vec3 {
    let abs_n = normal.abs();
    let axis = if abs_n.x >= abs_n.y && abs_n.x >= abs_n.z {
        Vec3::Y
    } else {
        Vec3::X
    };
    (axis - normal * normal.dot(axis)).normalize()
}
