//! Error types for configuration and patch application.

use thiserror::Error;

use crate::vitality::CURVE_SAMPLES;

/// Errors detected when a rule/topology/vitality combination is applied.
/// Stepping never raises: everything it needs is validated here first.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The stencil is wider than the rule bitmasks can index.
    #[error("neighborhood has {max_neighbors} neighbors, rule masks only index 0..=31")]
    MaskWidthExceeded { max_neighbors: u32 },

    /// A rule mask sets a bit no neighbor count can reach.
    #[error("{which} mask {mask:#x} sets bits above neighbor count {max_neighbors}")]
    MaskOutOfRange {
        which: &'static str,
        mask: u32,
        max_neighbors: u32,
    },

    /// State count outside the representable range.
    #[error("num_states {got} is outside 2..=256")]
    StateCount { got: u32 },

    /// Curve mode configured without exactly the required sample count.
    #[error("curve mode requires exactly {CURVE_SAMPLES} samples, got {got}")]
    CurveSampleCount { got: usize },

    /// Zero-area grids cannot be stepped.
    #[error("grid dimensions must be nonzero, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
}

/// Errors detected before a patch touches the grid. All-or-nothing: on any
/// variant the front buffer is exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatchError {
    /// A sparse entry names a cell outside the grid.
    #[error("patch index {index} out of bounds for {cells} cells")]
    IndexOutOfBounds { index: usize, cells: usize },

    /// A state value at or above the configured state count.
    #[error("patch value {value} out of range for {num_states} states")]
    ValueOutOfRange { value: u8, num_states: u16 },

    /// A dense patch whose length is not width*height.
    #[error("dense patch has {got} cells, grid has {expected}")]
    DenseSizeMismatch { got: usize, expected: usize },
}
