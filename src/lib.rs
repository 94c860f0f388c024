//! linsolve: dense linear algebra with a Gaussian elimination core
//!
//! - `rn` holds the numeric containers (`Vector`, `Matrix`) and the
//!   partial-pivoting elimination engine.
//! - `gm` builds lines and planes on top of the engine for intersection queries.
//!
//! Structural misuse (bad dimensions, out-of-range indices) is reported as
//! [`LinError`]. Singular systems are not errors: they come back as solutions
//! carrying NaN or infinite components.

pub mod precision;
pub mod rn;
pub mod gm;

// Re-exports for convenience
pub use rn::{Vector, Matrix, Elimination};
pub use gm::{Line, Plane, Intersection};

/// Result type for linsolve operations
pub type Result<T> = std::result::Result<T, LinError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LinError {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("Vector index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Row index {index} out of range for {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },

    #[error("Column index {index} out of range for {cols} columns")]
    ColOutOfRange { index: usize, cols: usize },

    #[error("Shape mismatch: {left} vs {right}")]
    ShapeMismatch { left: usize, right: usize },

    #[error("Row length mismatch: expected {expected}, got {found}")]
    RowLengthMismatch { expected: usize, found: usize },

    #[error("Column length mismatch: expected {expected}, got {found}")]
    ColumnLengthMismatch { expected: usize, found: usize },

    #[error("Slice of length {found} does not fit a vector of length {len}")]
    SliceLengthMismatch { len: usize, found: usize },

    #[error("Operation on zero-length vector")]
    EmptyVector,

    #[error("Unsupported order {0} (expected 3)")]
    UnsupportedOrder(usize),

    #[error("Incompatible shape for elimination: {rows}x{cols}")]
    IncompatibleShape { rows: usize, cols: usize },
}
