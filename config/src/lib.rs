//! # Config Crate
//!
//! Centralized configuration constants for the grid mesh pipeline.
//! All magic numbers and tunable parameters (grid defaults, debug marker
//! sizes, tolerances and safety limits) are defined here so the mesh and
//! debug crates stay free of literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DebugConfig, DEFAULT_AXIS_LENGTH, DEFAULT_CELL_SIZE};
//!
//! let cfg = DebugConfig::default();
//! assert_eq!(cfg.axis_length, DEFAULT_AXIS_LENGTH);
//! assert!(DEFAULT_CELL_SIZE > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No I/O**: Values are compiled in; hosts override them explicitly
//! - **Validated Snapshots**: Runtime overrides go through checked constructors

pub mod constants;
