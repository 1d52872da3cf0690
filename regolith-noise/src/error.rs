//! Error types for caller-contract violations.

use thiserror::Error;

/// Reportable configuration errors.
///
/// Normal sampling has no failure states (every coordinate is accepted);
/// these only surface when a generator is configured in a way its contract
/// forbids.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NoiseError {
    /// Cell noise needs at least one cell on each axis; a zero count would
    /// collapse every coordinate into a single cell index.
    #[error("cell resolution must be positive on both axes, got {cells_x}x{cells_y}")]
    InvalidCellResolution {
        /// Requested cell count along the x axis.
        cells_x: u32,
        /// Requested cell count along the y axis.
        cells_y: u32,
    },
}
