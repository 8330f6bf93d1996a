// tensorust-kernels/src/ops/arithmetic/neg.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::check_numel;
use crate::schedule;

// --- Forward Operation ---

/// Element-wise negation: `r[i] = -v[i]`.
pub fn neg_op(v: &TensorBuffer) -> Result<TensorBuffer, KernelError> {
    let mut result = TensorBuffer::zeros(v.shape().to_vec())?;
    schedule::unary_map(v.as_slice(), result.as_mut_slice(), |x| -x);
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of negation: `d(-v)/dv = -1`. Overwrites `grad`.
pub fn neg_backward(
    grad: &mut TensorBuffer,
    grad_result: &TensorBuffer,
) -> Result<(), KernelError> {
    check_numel(grad, grad_result.numel(), "neg_backward")?;
    schedule::unary_map(grad_result.as_slice(), grad.as_mut_slice(), |g| -g);
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
