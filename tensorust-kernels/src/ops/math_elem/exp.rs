// tensorust-kernels/src/ops/math_elem/exp.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::check_numel;
use crate::schedule;

// --- Forward Operation ---

/// Element-wise exponential: `r[i] = e^(v[i])`.
///
/// Overflows to `+inf` for large positive inputs per IEEE-754; no clamping
/// is applied.
pub fn exp_op(v: &TensorBuffer) -> Result<TensorBuffer, KernelError> {
    let mut result = TensorBuffer::zeros(v.shape().to_vec())?;
    schedule::unary_map(v.as_slice(), result.as_mut_slice(), |x| x.exp());
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of the exponential: `d(e^v)/dv = e^v`.
///
/// Recomputes the activation from the retained input so the caller does not
/// have to keep the forward result alive for the backward pass. Overwrites
/// `grad`.
pub fn exp_backward(
    grad: &mut TensorBuffer,
    grad_result: &TensorBuffer,
    values: &TensorBuffer,
) -> Result<(), KernelError> {
    check_numel(values, grad_result.numel(), "exp_backward")?;
    check_numel(grad, grad_result.numel(), "exp_backward")?;
    schedule::binary_map(
        grad_result.as_slice(),
        values.as_slice(),
        grad.as_mut_slice(),
        |g, v| v.exp() * g,
    );
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
