//! # Grid Mesh
//!
//! Procedural generation of a flat, rectangular grid surface.
//!
//! ## Architecture
//!
//! ```text
//! GridSpec → build() → MeshDescription → host renderer
//! ```
//!
//! ## Conventions
//!
//! - Right-handed coordinates, **+Y is up**; the grid lies in the XZ plane at `y = 0`
//! - Centered on the origin along X and Z
//! - Every cell owns four vertices with the full `(0,0)..(1,1)` UV range
//! - Front faces are visible from above (geometric normal `+Y`)
//!
//! ## Usage
//!
//! ```rust
//! use grid_mesh::{build, GridSpec};
//!
//! let mesh = build(&GridSpec::new(3, 3, 0.1))?;
//! assert_eq!(mesh.vertex_count(), 36);
//! assert_eq!(mesh.triangle_count(), 18);
//! # Ok::<(), grid_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod grid;
pub mod mesh;

pub use builder::build;
pub use error::{MeshError, MeshResult};
pub use grid::GridSpec;
pub use mesh::{MeshDescription, Vertex};
