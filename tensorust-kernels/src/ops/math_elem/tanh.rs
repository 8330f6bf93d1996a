// tensorust-kernels/src/ops/math_elem/tanh.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::check_numel;
use crate::schedule;

// --- Forward Operation ---

/// Element-wise hyperbolic tangent: `r[i] = tanh(v[i])`.
///
/// Saturates to ±1 for large inputs; there is no overflow risk.
pub fn tanh_op(v: &TensorBuffer) -> Result<TensorBuffer, KernelError> {
    let mut result = TensorBuffer::zeros(v.shape().to_vec())?;
    schedule::unary_map(v.as_slice(), result.as_mut_slice(), |x| x.tanh());
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of tanh: `d(tanh v)/dv = 1 - tanh(v)^2`.
///
/// The gradient vanishes at saturation. Recomputes the activation from the
/// retained input; overwrites `grad`.
pub fn tanh_backward(
    grad: &mut TensorBuffer,
    grad_result: &TensorBuffer,
    values: &TensorBuffer,
) -> Result<(), KernelError> {
    check_numel(values, grad_result.numel(), "tanh_backward")?;
    check_numel(grad, grad_result.numel(), "tanh_backward")?;
    schedule::binary_map(
        grad_result.as_slice(),
        values.as_slice(),
        grad.as_mut_slice(),
        |g, v| {
            let t = v.tanh();
            (1.0 - t * t) * g
        },
    );
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
