// tensorust-kernels/src/ops/arithmetic/mul.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::{check_numel, check_same_numel};
use crate::schedule;

// --- Forward Operation ---

/// Element-wise multiplication: `r[i] = a[i] * b[i]`.
pub fn mul_op(a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer, KernelError> {
    check_same_numel(a, b, "mul_op")?;
    let mut result = TensorBuffer::zeros(a.shape().to_vec())?;
    schedule::binary_map(a.as_slice(), b.as_slice(), result.as_mut_slice(), |x, y| x * y);
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of multiplication: `d(a*b)/da = b`, `d(a*b)/db = a`.
///
/// Needs the original operands. Overwrites `grad_a` and `grad_b` with this
/// operation's local contribution; accumulation across graph edges is the
/// caller's responsibility.
pub fn mul_backward(
    grad_a: &mut TensorBuffer,
    grad_b: &mut TensorBuffer,
    grad_result: &TensorBuffer,
    a: &TensorBuffer,
    b: &TensorBuffer,
) -> Result<(), KernelError> {
    check_numel(a, grad_result.numel(), "mul_backward")?;
    check_numel(b, grad_result.numel(), "mul_backward")?;
    check_numel(grad_a, grad_result.numel(), "mul_backward")?;
    check_numel(grad_b, grad_result.numel(), "mul_backward")?;
    schedule::binary_map(grad_result.as_slice(), b.as_slice(), grad_a.as_mut_slice(), |g, y| {
        y * g
    });
    schedule::binary_map(grad_result.as_slice(), a.as_slice(), grad_b.as_mut_slice(), |g, x| {
        x * g
    });
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
