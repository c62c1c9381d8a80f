//! Centralized configuration values shared across the grid mesh pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for floating-point comparisons of `f32` geometry.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!((0.1f32 * 3.0 - 0.3).abs() < EPSILON);
/// ```
pub const EPSILON: f32 = 1.0e-5;

/// Cross-product magnitude below which a triangle counts as zero-area.
///
/// Kept tiny because debug marker spheres are millimetre sized.
///
/// # Examples
/// ```
/// use config::constants::{DEGENERATE_AREA_EPSILON, EPSILON};
/// assert!(DEGENERATE_AREA_EPSILON < EPSILON);
/// ```
pub const DEGENERATE_AREA_EPSILON: f32 = 1.0e-12;

/// Determinant magnitude below which a triangle's UV mapping is degenerate
/// and contributes no tangent direction.
pub const UV_DETERMINANT_EPSILON: f32 = 1.0e-8;

// =============================================================================
// GRID DEFAULTS
// =============================================================================

/// Default number of cells along X.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_CELLS_X, DEFAULT_CELLS_Y};
/// assert_eq!(DEFAULT_CELLS_X * DEFAULT_CELLS_Y, 9);
/// ```
pub const DEFAULT_CELLS_X: u32 = 3;

/// Default number of cells along Z.
pub const DEFAULT_CELLS_Y: u32 = 3;

/// Default edge length of one square cell, in metres.
pub const DEFAULT_CELL_SIZE: f32 = 0.1;

// =============================================================================
// DEBUG MARKER DEFAULTS
// =============================================================================

/// Distance from a vertex at which its basis-axis markers are placed.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_AXIS_LENGTH, DEFAULT_CELL_SIZE};
/// assert!(DEFAULT_AXIS_LENGTH < DEFAULT_CELL_SIZE);
/// ```
pub const DEFAULT_AXIS_LENGTH: f32 = 0.02;

/// Radius of the marker drawn at a vertex position. Axis markers use half.
pub const DEFAULT_MARKER_RADIUS: f32 = 0.005;

/// Default segment count around a marker sphere.
pub const DEFAULT_MARKER_SEGMENTS: u32 = 12;

/// Smallest segment count that still closes a sphere.
pub const MIN_MARKER_SEGMENTS: u32 = 3;

/// Largest segment count accepted for a marker sphere.
///
/// Bounds one sphere to `256 * 128` vertices, far inside the `u32` index space.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_MARKER_SEGMENTS, MAX_MARKER_SEGMENTS, MIN_MARKER_SEGMENTS};
/// assert!((MIN_MARKER_SEGMENTS..=MAX_MARKER_SEGMENTS).contains(&DEFAULT_MARKER_SEGMENTS));
/// ```
pub const MAX_MARKER_SEGMENTS: u32 = 256;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices a single generated mesh may hold.
///
/// Triangle indices are `u32`, so every vertex must be addressable by one.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// assert!(MAX_VERTICES <= u32::MAX as usize);
/// ```
pub const MAX_VERTICES: usize = 16_000_000;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Vertex position marker color (RGBA, `[0.0, 1.0]`).
pub const COLOR_BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Tangent axis marker color.
pub const COLOR_RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Bitangent axis marker color.
pub const COLOR_GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

/// Normal axis marker color.
pub const COLOR_BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

// =============================================================================
// DEBUG CONFIG
// =============================================================================

/// Immutable snapshot of the tangent-frame debug settings.
///
/// # Examples
/// ```
/// use config::constants::DebugConfig;
/// let config = DebugConfig::default();
/// assert!(config.show_tangent_frames);
/// assert!(config.marker_radius > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugConfig {
    /// Whether tangent-frame markers are produced at all.
    pub show_tangent_frames: bool,
    /// Offset along each basis axis at which its marker is placed.
    pub axis_length: f32,
    /// Radius of vertex markers.
    pub marker_radius: f32,
    /// Segment count used when tessellating marker spheres.
    pub marker_segments: u32,
}

impl DebugConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// marker geometry.
    ///
    /// # Examples
    /// ```
    /// use config::constants::DebugConfig;
    /// let cfg = DebugConfig::new(true, 0.05, 0.01, 16).expect("valid config");
    /// assert_eq!(cfg.marker_segments, 16);
    /// ```
    pub fn new(
        show_tangent_frames: bool,
        axis_length: f32,
        marker_radius: f32,
        marker_segments: u32,
    ) -> Result<Self, ConfigError> {
        if !axis_length.is_finite() || axis_length <= 0.0 {
            return Err(ConfigError::InvalidAxisLength(axis_length));
        }
        if !marker_radius.is_finite() || marker_radius <= 0.0 {
            return Err(ConfigError::InvalidMarkerRadius(marker_radius));
        }
        if !(MIN_MARKER_SEGMENTS..=MAX_MARKER_SEGMENTS).contains(&marker_segments) {
            return Err(ConfigError::InvalidSegments(marker_segments));
        }
        Ok(Self {
            show_tangent_frames,
            axis_length,
            marker_radius,
            marker_segments,
        })
    }

    /// Returns a copy with tangent-frame markers switched off.
    pub fn hidden(self) -> Self {
        Self {
            show_tangent_frames: false,
            ..self
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_tangent_frames: true,
            axis_length: DEFAULT_AXIS_LENGTH,
            marker_radius: DEFAULT_MARKER_RADIUS,
            marker_segments: DEFAULT_MARKER_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the axis length is zero, negative or not finite.
    InvalidAxisLength(f32),
    /// Raised when the marker radius is zero, negative or not finite.
    InvalidMarkerRadius(f32),
    /// Raised when the segment count cannot close a sphere or exceeds
    /// [`MAX_MARKER_SEGMENTS`].
    InvalidSegments(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAxisLength(value) => {
                write!(f, "axis_length must be positive: {value}")
            }
            ConfigError::InvalidMarkerRadius(value) => {
                write!(f, "marker_radius must be positive: {value}")
            }
            ConfigError::InvalidSegments(value) => {
                write!(
                    f,
                    "marker_segments must be in {MIN_MARKER_SEGMENTS}..={MAX_MARKER_SEGMENTS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
