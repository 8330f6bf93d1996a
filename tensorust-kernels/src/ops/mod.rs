pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

use crate::buffer::TensorBuffer;
use crate::error::KernelError;

/// Elementwise kernels pair buffers by element count; the result takes the
/// left operand's shape.
pub(crate) fn check_same_numel(
    a: &TensorBuffer,
    b: &TensorBuffer,
    operation: &str,
) -> Result<(), KernelError> {
    if a.numel() != b.numel() {
        return Err(KernelError::LengthMismatch {
            expected: a.numel(),
            actual: b.numel(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_numel(
    buf: &TensorBuffer,
    expected: usize,
    operation: &str,
) -> Result<(), KernelError> {
    if buf.numel() != expected {
        return Err(KernelError::LengthMismatch {
            expected,
            actual: buf.numel(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}
