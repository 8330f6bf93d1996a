use thiserror::Error;

/// Custom error type for the kernel layer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum KernelError {
    #[error("Allocation failure: could not obtain {numel} elements for operation {operation}")]
    AllocationFailure { numel: usize, operation: String },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Length mismatch: expected {expected} elements, got {actual} during operation {operation}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Invalid reduction dimension {dim} for rank {rank}")]
    InvalidDimension { dim: usize, rank: usize },

    #[error("Buffer creation error: data length {data_len} does not match shape {shape:?}")]
    BufferCreationError { data_len: usize, shape: Vec<usize> },

    #[error("Invalid shape {shape:?}: every dimension extent must be at least 1")]
    InvalidShape { shape: Vec<usize> },
}
