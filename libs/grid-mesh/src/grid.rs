//! # Grid Parameters
//!
//! Cell-count-and-size description of a flat surface to generate.

use config::constants::{DEFAULT_CELLS_X, DEFAULT_CELLS_Y, DEFAULT_CELL_SIZE, MAX_VERTICES};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Grid parameters chosen by the hosting application.
///
/// `cells_x` counts cells along X, `cells_y` counts cells along Z.
/// Construction is unchecked; [`GridSpec::validate`] (called by
/// [`crate::build`]) enforces the ranges.
///
/// # Example
///
/// ```rust
/// use grid_mesh::GridSpec;
///
/// let spec = GridSpec::new(4, 2, 0.5);
/// assert_eq!(spec.size(), glam::Vec2::new(2.0, 1.0));
/// assert_eq!(spec.vertex_count(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Number of cells along X (must be >= 1)
    pub cells_x: u32,
    /// Number of cells along Z (must be >= 1)
    pub cells_y: u32,
    /// Edge length of every square cell (must be > 0)
    pub cell_size: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self::new(DEFAULT_CELLS_X, DEFAULT_CELLS_Y, DEFAULT_CELL_SIZE)
    }
}

impl GridSpec {
    /// Creates grid parameters without validating them.
    pub const fn new(cells_x: u32, cells_y: u32, cell_size: f32) -> Self {
        Self {
            cells_x,
            cells_y,
            cell_size,
        }
    }

    /// Total surface extent `(cells_x * cell_size, cells_y * cell_size)`.
    pub fn size(&self) -> Vec2 {
        Vec2::new(
            self.cells_x as f32 * self.cell_size,
            self.cells_y as f32 * self.cell_size,
        )
    }

    /// Half the extent; subtracting it from a cell corner centers the grid.
    pub fn offset(&self) -> Vec2 {
        self.size() / 2.0
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells_x as usize * self.cells_y as usize
    }

    /// Number of vertices the builder emits (four per cell).
    #[inline]
    pub fn vertex_count(&self) -> usize {
        4 * self.cell_count()
    }

    /// Number of triangles the builder emits (two per cell).
    #[inline]
    pub fn triangle_count(&self) -> usize {
        2 * self.cell_count()
    }

    /// Checks the parameter ranges.
    ///
    /// Fails when a cell count is zero, the cell size is not a positive
    /// finite number, the total extent is not finite, or the vertex count
    /// would overflow the index space.
    pub fn validate(&self) -> MeshResult<()> {
        if self.cells_x < 1 || self.cells_y < 1 {
            return Err(MeshError::invalid_parameter(format!(
                "cell counts must be >= 1: [{}, {}]",
                self.cells_x, self.cells_y
            )));
        }

        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(MeshError::invalid_parameter(format!(
                "cell size must be positive: {}",
                self.cell_size
            )));
        }

        if !self.size().is_finite() {
            return Err(MeshError::invalid_parameter(format!(
                "grid extent overflows: [{}, {}] cells of {}",
                self.cells_x, self.cells_y, self.cell_size
            )));
        }

        let vertex_count = u64::from(self.cells_x)
            .checked_mul(u64::from(self.cells_y))
            .and_then(|cells| cells.checked_mul(4));
        match vertex_count {
            Some(count) if count <= MAX_VERTICES as u64 => {}
            _ => {
                return Err(MeshError::invalid_parameter(format!(
                    "grid of [{}, {}] cells exceeds {MAX_VERTICES} vertices",
                    self.cells_x, self.cells_y
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_config() {
        let spec = GridSpec::default();
        assert_eq!(spec.cells_x, DEFAULT_CELLS_X);
        assert_eq!(spec.cells_y, DEFAULT_CELLS_Y);
        assert_eq!(spec.cell_size, DEFAULT_CELL_SIZE);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_size_and_offset() {
        let spec = GridSpec::new(4, 2, 0.5);
        assert_eq!(spec.size(), Vec2::new(2.0, 1.0));
        assert_eq!(spec.offset(), Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_counts() {
        let spec = GridSpec::new(3, 5, 1.0);
        assert_eq!(spec.cell_count(), 15);
        assert_eq!(spec.vertex_count(), 60);
        assert_eq!(spec.triangle_count(), 30);
    }

    #[test]
    fn test_zero_cells_rejected() {
        assert!(GridSpec::new(0, 3, 0.1).validate().is_err());
        assert!(GridSpec::new(3, 0, 0.1).validate().is_err());
    }

    #[test]
    fn test_bad_cell_size_rejected() {
        for size in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            let err = GridSpec::new(1, 1, size).validate().unwrap_err();
            assert!(matches!(err, MeshError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn test_infinite_extent_rejected() {
        let spec = GridSpec::new(4, 4, 1.0e38);
        assert!(spec.cell_size.is_finite());
        let err = spec.validate().unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { .. }));
    }

    #[test]
    fn test_cell_count_overflow_rejected() {
        // wraps a 32-bit usize product into a small value
        assert!(GridSpec::new(65_536, 65_537, 1.0).validate().is_err());
        assert!(GridSpec::new(1, u32::MAX, 1.0).validate().is_err());
    }

    #[test]
    fn test_too_many_vertices_rejected() {
        assert!(GridSpec::new(100_000, 100_000, 1.0).validate().is_err());
        assert!(GridSpec::new(u32::MAX, u32::MAX, 1.0).validate().is_err());
    }
}
