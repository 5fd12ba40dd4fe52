//! Error types for cellseg-edge

use thiserror::Error;

/// Errors that can occur during edge-mask preparation
#[derive(Debug, Error)]
pub enum EdgeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] cellseg_core::Error),

    /// Mask and intensity raster dimensions differ
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Threshold outside its valid range
    #[error("invalid threshold: {0}")]
    InvalidThreshold(String),
}

/// Result type for edge-mask operations
pub type EdgeResult<T> = Result<T, EdgeError>;
