//! # Tangent Basis
//!
//! Per-vertex tangent-space basis and the seam through which it is derived.

use glam::Vec3;
use grid_mesh::MeshDescription;
use serde::{Deserialize, Serialize};

use crate::error::VisualizeResult;

/// Tangent, bitangent and normal of one vertex, in mesh space.
///
/// Directions are expected to be unit length but are not checked; a zero
/// vector is carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TangentBasis {
    /// Direction of increasing U
    pub tangent: Vec3,
    /// Direction of increasing V
    pub bitangent: Vec3,
    /// Surface normal
    pub normal: Vec3,
}

impl TangentBasis {
    /// Creates a basis from its three axes.
    #[inline]
    pub const fn new(tangent: Vec3, bitangent: Vec3, normal: Vec3) -> Self {
        Self {
            tangent,
            bitangent,
            normal,
        }
    }

    /// Axes in the same order as [`crate::MarkerColor::AXES`].
    pub(crate) fn axes(&self) -> [Vec3; 3] {
        [self.tangent, self.bitangent, self.normal]
    }
}

/// Derives a per-vertex tangent basis for a mesh.
///
/// Implemented by whatever geometry engine owns tangent-space generation.
/// The returned sequence must hold one entry per mesh vertex, in vertex
/// order. Plain functions and closures with the matching signature
/// implement the trait too.
///
/// # Example
///
/// ```rust
/// use glam::Vec3;
/// use grid_mesh::MeshDescription;
/// use tangent_debug::{TangentBasis, TangentBasisSource, VisualizeResult};
///
/// let flat = |mesh: &MeshDescription| -> VisualizeResult<Vec<TangentBasis>> {
///     Ok(vec![TangentBasis::new(Vec3::X, Vec3::Z, Vec3::Y); mesh.vertex_count()])
/// };
/// let basis = flat.tangent_basis(&MeshDescription::new()).unwrap();
/// assert!(basis.is_empty());
/// ```
pub trait TangentBasisSource {
    /// Returns one basis per vertex of `mesh`.
    fn tangent_basis(&self, mesh: &MeshDescription) -> VisualizeResult<Vec<TangentBasis>>;
}

impl<F> TangentBasisSource for F
where
    F: Fn(&MeshDescription) -> VisualizeResult<Vec<TangentBasis>>,
{
    fn tangent_basis(&self, mesh: &MeshDescription) -> VisualizeResult<Vec<TangentBasis>> {
        self(mesh)
    }
}
