use crate::error::KernelError;

/// Owned value or gradient storage for one tensor: a flat, contiguous `f32`
/// buffer in row-major order paired with its shape descriptor.
///
/// The shape is validated at construction: the product of the extents must
/// equal the data length, and every extent must be at least 1. The empty
/// shape denotes a scalar holding a single element.
///
/// Forward kernels allocate and return a `TensorBuffer`, transferring
/// ownership to the caller. Backward kernels populate caller-supplied
/// buffers through `as_mut_slice` and never allocate.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorBuffer {
    data: Vec<f32>,
    shape: Vec<usize>,
}

impl TensorBuffer {
    /// Builds a buffer from existing data, validating it against `shape`.
    pub fn new(data: Vec<f32>, shape: Vec<usize>) -> Result<Self, KernelError> {
        let numel = checked_numel(&shape)?;
        if data.len() != numel {
            return Err(KernelError::BufferCreationError {
                data_len: data.len(),
                shape,
            });
        }
        Ok(TensorBuffer { data, shape })
    }

    /// Allocates a zero-filled buffer for `shape`.
    ///
    /// Allocation goes through a fallible reservation so that memory
    /// exhaustion surfaces as `KernelError::AllocationFailure` rather than
    /// an abort.
    pub fn zeros(shape: Vec<usize>) -> Result<Self, KernelError> {
        let numel = checked_numel(&shape)?;
        let data = try_alloc(numel, "TensorBuffer::zeros")?;
        Ok(TensorBuffer { data, shape })
    }

    /// Allocates a zero-filled buffer with the same shape as `self`.
    pub fn zeros_like(&self) -> Result<Self, KernelError> {
        TensorBuffer::zeros(self.shape.clone())
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements held by the buffer.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the buffer, handing the raw storage back to the caller.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// Validates a shape descriptor and returns its element count.
pub(crate) fn checked_numel(shape: &[usize]) -> Result<usize, KernelError> {
    if shape.iter().any(|&d| d == 0) {
        return Err(KernelError::InvalidShape {
            shape: shape.to_vec(),
        });
    }
    Ok(shape.iter().product())
}

/// Fallibly allocates a zero-filled `Vec<f32>` of `numel` elements.
pub(crate) fn try_alloc(numel: usize, operation: &str) -> Result<Vec<f32>, KernelError> {
    let mut data = Vec::new();
    if data.try_reserve_exact(numel).is_err() {
        log::warn!("allocation of {} f32 elements failed in {}", numel, operation);
        return Err(KernelError::AllocationFailure {
            numel,
            operation: operation.to_string(),
        });
    }
    data.resize(numel, 0.0);
    Ok(data)
}
