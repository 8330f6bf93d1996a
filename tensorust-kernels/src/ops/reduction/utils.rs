//! Shape arithmetic shared by the reduction kernels.

use crate::error::KernelError;

pub(crate) fn check_dim(dim: usize, rank: usize) -> Result<(), KernelError> {
    if dim >= rank {
        return Err(KernelError::InvalidDimension { dim, rank });
    }
    Ok(())
}

/// Output shape of a reduction along `dim`: the dimension is removed, or
/// collapsed to extent 1 when `keep_dim` is set.
pub(crate) fn reduced_shape(input_shape: &[usize], dim: usize, keep_dim: bool) -> Vec<usize> {
    let mut shape = Vec::with_capacity(input_shape.len());
    for (i, &extent) in input_shape.iter().enumerate() {
        if i != dim {
            shape.push(extent);
        } else if keep_dim {
            shape.push(1);
        }
    }
    shape
}
