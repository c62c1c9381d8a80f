//! # Debug Markers
//!
//! Colored sphere placements produced by a visualization pass.

use config::constants::{COLOR_BLACK, COLOR_BLUE, COLOR_GREEN, COLOR_RED};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Marker color, one per kind of marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerColor {
    /// Vertex position
    Black,
    /// Tangent axis
    Red,
    /// Bitangent axis
    Green,
    /// Normal axis
    Blue,
}

impl MarkerColor {
    /// All colors, in emission order.
    pub const ALL: [MarkerColor; 4] = [Self::Black, Self::Red, Self::Green, Self::Blue];

    /// Axis colors in tangent, bitangent, normal order.
    pub const AXES: [MarkerColor; 3] = [Self::Red, Self::Green, Self::Blue];

    /// RGBA in `[0.0, 1.0]`.
    pub fn rgba(self) -> [f32; 4] {
        match self {
            Self::Black => COLOR_BLACK,
            Self::Red => COLOR_RED,
            Self::Green => COLOR_GREEN,
            Self::Blue => COLOR_BLUE,
        }
    }
}

/// A sphere to draw: where, how big, what color.
///
/// Markers carry no link back to the vertex they came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugMarker {
    /// Sphere center
    pub position: Vec3,
    /// Sphere radius
    pub radius: f32,
    /// Sphere color
    pub color: MarkerColor,
}

impl DebugMarker {
    /// Creates a marker.
    #[inline]
    pub const fn new(position: Vec3, radius: f32, color: MarkerColor) -> Self {
        Self {
            position,
            radius,
            color,
        }
    }
}
