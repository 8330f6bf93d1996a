// tensorust-kernels/src/ops/arithmetic/add.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::{check_numel, check_same_numel};
use crate::schedule;

// --- Forward Operation ---

/// Element-wise addition over two equal-length buffers.
///
/// Returns a newly allocated buffer `r` with `r[i] = a[i] + b[i]`, taking
/// `a`'s shape.
pub fn add_op(a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer, KernelError> {
    check_same_numel(a, b, "add_op")?;
    let mut result = TensorBuffer::zeros(a.shape().to_vec())?;
    schedule::binary_map(a.as_slice(), b.as_slice(), result.as_mut_slice(), |x, y| x + y);
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of addition: `d(a+b)/da = 1`, `d(a+b)/db = 1`.
///
/// Overwrites `grad_a` and `grad_b` with this operation's local
/// contribution; accumulation across graph edges is the caller's
/// responsibility.
pub fn add_backward(
    grad_a: &mut TensorBuffer,
    grad_b: &mut TensorBuffer,
    grad_result: &TensorBuffer,
) -> Result<(), KernelError> {
    check_numel(grad_a, grad_result.numel(), "add_backward")?;
    check_numel(grad_b, grad_result.numel(), "add_backward")?;
    schedule::unary_map(grad_result.as_slice(), grad_a.as_mut_slice(), |g| g);
    schedule::unary_map(grad_result.as_slice(), grad_b.as_mut_slice(), |g| g);
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
