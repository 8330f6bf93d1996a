// tensorust-kernels/src/ops/arithmetic/div.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::{check_numel, check_same_numel};
use crate::schedule;

// --- Forward Operation ---

/// Element-wise division: `r[i] = a[i] / b[i]`.
///
/// Division by zero follows IEEE-754: `x/0` is `±inf` for nonzero `x` and
/// `NaN` for `0/0`. The kernel never traps.
pub fn div_op(a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer, KernelError> {
    check_same_numel(a, b, "div_op")?;
    let mut result = TensorBuffer::zeros(a.shape().to_vec())?;
    schedule::binary_map(a.as_slice(), b.as_slice(), result.as_mut_slice(), |x, y| x / y);
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of division: `d(a/b)/da = 1/b`, `d(a/b)/db = -a/b^2`.
///
/// Needs the original operands. A zero divisor yields `inf`/`NaN` gradients
/// per IEEE-754, mirroring the forward behavior. Overwrites `grad_a` and
/// `grad_b`.
pub fn div_backward(
    grad_a: &mut TensorBuffer,
    grad_b: &mut TensorBuffer,
    grad_result: &TensorBuffer,
    a: &TensorBuffer,
    b: &TensorBuffer,
) -> Result<(), KernelError> {
    check_numel(a, grad_result.numel(), "div_backward")?;
    check_numel(b, grad_result.numel(), "div_backward")?;
    check_numel(grad_a, grad_result.numel(), "div_backward")?;
    check_numel(grad_b, grad_result.numel(), "div_backward")?;
    schedule::binary_map(grad_result.as_slice(), b.as_slice(), grad_a.as_mut_slice(), |g, y| {
        g / y
    });
    schedule::ternary_map(
        grad_result.as_slice(),
        a.as_slice(),
        b.as_slice(),
        grad_b.as_mut_slice(),
        |g, x, y| -(x / (y * y)) * g,
    );
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
