// tensorust-kernels/src/ops/arithmetic/pow.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::{check_numel, check_same_numel};
use crate::schedule;

// --- Forward Operation ---

/// Element-wise power: `r[i] = a[i] ^ b[i]`.
///
/// Follows `powf` semantics: negative bases with non-integral exponents
/// produce `NaN`, `0^0` is `1`.
pub fn pow_op(a: &TensorBuffer, b: &TensorBuffer) -> Result<TensorBuffer, KernelError> {
    check_same_numel(a, b, "pow_op")?;
    let mut result = TensorBuffer::zeros(a.shape().to_vec())?;
    schedule::binary_map(a.as_slice(), b.as_slice(), result.as_mut_slice(), |x, y| {
        x.powf(y)
    });
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of the power: `d(a^b)/da = b * a^(b-1)`, `d(a^b)/db = a^b * ln(a)`.
///
/// The exponent gradient is only defined for `a > 0`; for `a <= 0` the real
/// logarithm yields `NaN` (or `-inf` at exactly zero), which is propagated
/// unchanged. Needs the original operands; overwrites `grad_a` and `grad_b`.
pub fn pow_backward(
    grad_a: &mut TensorBuffer,
    grad_b: &mut TensorBuffer,
    grad_result: &TensorBuffer,
    a: &TensorBuffer,
    b: &TensorBuffer,
) -> Result<(), KernelError> {
    check_numel(a, grad_result.numel(), "pow_backward")?;
    check_numel(b, grad_result.numel(), "pow_backward")?;
    check_numel(grad_a, grad_result.numel(), "pow_backward")?;
    check_numel(grad_b, grad_result.numel(), "pow_backward")?;
    schedule::ternary_map(
        grad_result.as_slice(),
        a.as_slice(),
        b.as_slice(),
        grad_a.as_mut_slice(),
        |g, x, y| y * x.powf(y - 1.0) * g,
    );
    schedule::ternary_map(
        grad_result.as_slice(),
        a.as_slice(),
        b.as_slice(),
        grad_b.as_mut_slice(),
        |g, x, y| x.powf(y) * x.ln() * g,
    );
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
