//! # Debug Scene
//!
//! Runs the whole pipeline for one surface: build the grid, derive its
//! tangent basis through the injected source, emit markers.

use config::constants::DebugConfig;
use grid_mesh::{build, GridSpec, MeshDescription};
use serde::Serialize;

use crate::basis::TangentBasisSource;
use crate::error::VisualizeResult;
use crate::marker::{DebugMarker, MarkerColor};
use crate::sphere::marker_sphere;
use crate::visualize::visualize;

/// The generated surface and its debug markers, ready for a host renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugScene {
    /// Grid surface mesh
    pub mesh: MeshDescription,
    /// Tangent-frame markers; empty when frames are hidden
    pub markers: Vec<DebugMarker>,
    /// Segment count used by [`DebugScene::marker_batches`]
    pub marker_segments: u32,
}

/// All marker spheres of one color merged into a single mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerBatch {
    /// Shared color of every sphere in the batch
    pub color: MarkerColor,
    /// Merged sphere geometry
    pub mesh: MeshDescription,
}

impl DebugScene {
    /// Builds the grid for `spec` and, when `config.show_tangent_frames` is
    /// set, its tangent-frame markers.
    ///
    /// The basis source is only consulted when markers are requested.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::DebugConfig;
    /// use glam::Vec3;
    /// use grid_mesh::{GridSpec, MeshDescription};
    /// use tangent_debug::{DebugScene, TangentBasis, VisualizeResult};
    ///
    /// let flat = |mesh: &MeshDescription| -> VisualizeResult<Vec<TangentBasis>> {
    ///     Ok(vec![TangentBasis::new(Vec3::X, Vec3::Z, Vec3::Y); mesh.vertex_count()])
    /// };
    /// let scene = DebugScene::build(&GridSpec::default(), &DebugConfig::default(), &flat)?;
    /// assert_eq!(scene.markers.len(), 4 * 36);
    /// # Ok::<(), tangent_debug::VisualizeError>(())
    /// ```
    pub fn build<S>(spec: &GridSpec, config: &DebugConfig, source: &S) -> VisualizeResult<Self>
    where
        S: TangentBasisSource + ?Sized,
    {
        let mesh = build(spec)?;

        let markers = if config.show_tangent_frames {
            let basis = source.tangent_basis(&mesh)?;
            visualize(&mesh, &basis, config.axis_length, config.marker_radius)?
        } else {
            Vec::new()
        };

        Ok(Self {
            mesh,
            markers,
            marker_segments: config.marker_segments,
        })
    }

    /// Tessellates every marker with `marker_segments` and merges the
    /// spheres per color.
    ///
    /// Batches come out in [`MarkerColor::ALL`] order; colors without
    /// markers are skipped.
    pub fn marker_batches(&self) -> VisualizeResult<Vec<MarkerBatch>> {
        let segments = self.marker_segments;
        let mut batches = Vec::with_capacity(MarkerColor::ALL.len());

        for color in MarkerColor::ALL {
            let mut mesh = MeshDescription::new();
            for marker in self.markers.iter().filter(|m| m.color == color) {
                mesh.merge(&marker_sphere(marker, segments)?);
            }
            if !mesh.is_empty() {
                batches.push(MarkerBatch { color, mesh });
            }
        }

        log::debug!(
            "tessellated {} markers into {} color batches",
            self.markers.len(),
            batches.len()
        );

        Ok(batches)
    }
}
