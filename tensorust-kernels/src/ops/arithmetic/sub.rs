// tensorust-kernels/src/ops/arithmetic/sub.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::{check_numel, check_same_numel};
use crate::schedule;

// --- Forward Operation ---

/// Element-wise subtraction: `r[i] = a[i] - b[i]`.
pub fn sub_op(a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer, KernelError> {
    check_same_numel(a, b, "sub_op")?;
    let mut result = TensorBuffer::zeros(a.shape().to_vec())?;
    schedule::binary_map(a.as_slice(), b.as_slice(), result.as_mut_slice(), |x, y| x - y);
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of subtraction: `d(a-b)/da = 1`, `d(a-b)/db = -1`. Overwrites.
pub fn sub_backward(
    grad_a: &mut TensorBuffer,
    grad_b: &mut TensorBuffer,
    grad_result: &TensorBuffer,
) -> Result<(), KernelError> {
    check_numel(grad_a, grad_result.numel(), "sub_backward")?;
    check_numel(grad_b, grad_result.numel(), "sub_backward")?;
    schedule::unary_map(grad_result.as_slice(), grad_a.as_mut_slice(), |g| g);
    schedule::unary_map(grad_result.as_slice(), grad_b.as_mut_slice(), |g| -g);
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
