// tensorust-kernels/src/ops/reduction/sum.rs

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use crate::ops::check_numel;
use crate::ops::reduction::utils::{check_dim, reduced_shape};
use crate::schedule::{self, DimSplit};

// --- Forward Operation ---

/// Sums `input` along dimension `dim`.
///
/// The reduced dimension is removed from the result shape, or kept with
/// extent 1 when `keep_dim` is set. Accumulation along the reduced extent
/// runs in ascending index order, so repeated calls on identical input are
/// bit-identical regardless of how output groups are scheduled.
pub fn sum_op(
    input: &TensorBuffer,
    dim: usize,
    keep_dim: bool,
) -> Result<TensorBuffer, KernelError> {
    check_dim(dim, input.rank())?;
    let split = DimSplit::new(input.shape(), dim);
    let mut result = TensorBuffer::zeros(reduced_shape(input.shape(), dim, keep_dim))?;
    schedule::reduce_dim_sum(input.as_slice(), split, result.as_mut_slice());
    Ok(result)
}

// --- Backward Operation ---

/// Gradient of the sum: broadcast-copies `grad_result` back along the
/// reduced dimension of `input_shape`.
///
/// Every element of `grad` along `dim` receives the value at its
/// corresponding reduced position (the dual of the forward sum). Overwrites
/// `grad`; accumulation across graph edges is the caller's responsibility.
/// Both reduced-shape conventions share one flat layout, so `grad_result`
/// is validated by element count only.
pub fn sum_backward(
    input_shape: &[usize],
    dim: usize,
    grad: &mut TensorBuffer,
    grad_result: &TensorBuffer,
) -> Result<(), KernelError> {
    check_dim(dim, input_shape.len())?;
    let split = DimSplit::new(input_shape, dim);
    check_numel(grad, split.outer * split.axis * split.inner, "sum_backward")?;
    check_numel(grad_result, split.outer * split.inner, "sum_backward")?;
    schedule::broadcast_dim(grad_result.as_slice(), split, grad.as_mut_slice());
    Ok(())
}

// --- Tests ---
#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
