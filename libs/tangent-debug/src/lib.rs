//! # Tangent Debug
//!
//! Debug visualization of the tangent-space basis of a generated mesh.
//!
//! ## Architecture
//!
//! ```text
//! MeshDescription ──► TangentBasisSource ──► [TangentBasis]
//!        │                                        │
//!        └──────────────► visualize() ◄───────────┘
//!                             │
//!                       [DebugMarker] ──► marker spheres ──► host renderer
//! ```
//!
//! The basis itself is derived by an injected [`TangentBasisSource`]; this
//! crate never computes tangents, it only places markers:
//!
//! - **Black**: the vertex position
//! - **Red**: `position + axis_length * tangent`
//! - **Green**: `position + axis_length * bitangent`
//! - **Blue**: `position + axis_length * normal`
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use grid_mesh::{build, GridSpec};
//! use tangent_debug::{visualize, TangentBasis};
//!
//! let mesh = build(&GridSpec::new(2, 2, 0.1))?;
//! let basis = vec![TangentBasis::new(Vec3::X, Vec3::Z, Vec3::Y); mesh.vertex_count()];
//! let markers = visualize(&mesh, &basis, 0.02, 0.005)?;
//! assert_eq!(markers.len(), 4 * mesh.vertex_count());
//! # Ok::<(), tangent_debug::VisualizeError>(())
//! ```

pub mod basis;
pub mod error;
pub mod marker;
pub mod scene;
pub mod sphere;
pub mod visualize;

pub use basis::{TangentBasis, TangentBasisSource};
pub use error::{VisualizeError, VisualizeResult};
pub use marker::{DebugMarker, MarkerColor};
pub use scene::{DebugScene, MarkerBatch};
pub use visualize::visualize;
