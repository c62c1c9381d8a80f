//! # Tangent Space
//!
//! Reference tangent-basis derivation, standing in for the rendering
//! engine that would normally own it.
//!
//! ```text
//! MeshDescription (positions + UVs) → UvGradientBasis → [TangentBasis] → tangent-debug
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::DebugConfig;
//! use grid_mesh::GridSpec;
//! use tangent_debug::DebugScene;
//! use tangent_space::UvGradientBasis;
//!
//! let scene = DebugScene::build(&GridSpec::default(), &DebugConfig::default(), &UvGradientBasis)?;
//! assert_eq!(scene.markers.len(), 4 * scene.mesh.vertex_count());
//! # Ok::<(), tangent_debug::VisualizeError>(())
//! ```

pub mod uv_gradient;

pub use uv_gradient::UvGradientBasis;
