//! Buffer constructors used by callers and tests.

use crate::buffer::{checked_numel, try_alloc, TensorBuffer};
use crate::error::KernelError;
use rand::Rng;
use rand_distr::StandardNormal;

/// Buffer of `shape` with every element set to `value`.
pub fn filled(value: f32, shape: Vec<usize>) -> Result<TensorBuffer, KernelError> {
    let numel = checked_numel(&shape)?;
    let mut data = try_alloc(numel, "filled")?;
    data.fill(value);
    TensorBuffer::new(data, shape)
}

/// Zero-filled buffer of `shape`.
pub fn zeros(shape: Vec<usize>) -> Result<TensorBuffer, KernelError> {
    TensorBuffer::zeros(shape)
}

/// One-filled buffer of `shape`.
pub fn ones(shape: Vec<usize>) -> Result<TensorBuffer, KernelError> {
    filled(1.0, shape)
}

/// Rank-1 buffer of `steps` evenly spaced values from `start` to `end`,
/// inclusive of both endpoints.
pub fn linspace(start: f32, end: f32, steps: usize) -> Result<TensorBuffer, KernelError> {
    if steps == 0 {
        return Err(KernelError::InvalidShape { shape: vec![0] });
    }
    let mut data = try_alloc(steps, "linspace")?;
    if steps == 1 {
        data[0] = start;
    } else {
        // Counting the spaces, not the nodes.
        let part = (end - start) / (steps - 1) as f32;
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = start + part * i as f32;
        }
    }
    TensorBuffer::new(data, vec![steps])
}

/// Buffer of `shape` with uniform samples from `[0, 1)`.
pub fn rand(shape: Vec<usize>) -> Result<TensorBuffer, KernelError> {
    let numel = checked_numel(&shape)?;
    let mut data = try_alloc(numel, "rand")?;
    let mut rng = rand::thread_rng();
    for slot in data.iter_mut() {
        *slot = rng.gen::<f32>();
    }
    TensorBuffer::new(data, shape)
}

/// Buffer of `shape` with standard-normal samples.
pub fn randn(shape: Vec<usize>) -> Result<TensorBuffer, KernelError> {
    let numel = checked_numel(&shape)?;
    let mut data = try_alloc(numel, "randn")?;
    let mut rng = rand::thread_rng();
    for slot in data.iter_mut() {
        *slot = rng.sample(StandardNormal);
    }
    TensorBuffer::new(data, shape)
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_filled() {
        let buf = filled(3.5, vec![2, 2]).unwrap();
        assert_eq!(buf.as_slice(), &[3.5, 3.5, 3.5, 3.5]);
    }

    #[test]
    fn test_ones() {
        let buf = ones(vec![3]).unwrap();
        assert_eq!(buf.as_slice(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_linspace_endpoints() {
        let buf = linspace(0.0, 1.0, 5).unwrap();
        assert_eq!(buf.shape(), &[5]);
        assert_relative_eq!(buf.as_slice()[0], 0.0);
        assert_relative_eq!(buf.as_slice()[2], 0.5);
        assert_relative_eq!(buf.as_slice()[4], 1.0);
    }

    #[test]
    fn test_linspace_single_step() {
        let buf = linspace(2.0, 9.0, 1).unwrap();
        assert_eq!(buf.as_slice(), &[2.0]);
    }

    #[test]
    fn test_rand_range() {
        let buf = rand(vec![100]).unwrap();
        assert!(buf.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    fn test_randn_shape() {
        let buf = randn(vec![4, 5]).unwrap();
        assert_eq!(buf.numel(), 20);
        assert!(buf.as_slice().iter().all(|x| x.is_finite()));
    }
}
