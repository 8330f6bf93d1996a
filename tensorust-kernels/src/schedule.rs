//! Data-parallel dispatch for kernel bodies.
//!
//! Every driver maps one logical unit of work to one output element (or, for
//! reductions, one output group). Buffers at or above `PAR_THRESHOLD` run on
//! rayon's work-stealing pool; smaller buffers run serially with the same
//! per-element body, so the result never depends on which path was taken.

use num_traits::Zero;
use rayon::prelude::*;
use std::ops::AddAssign;

/// Below this element count the pool overhead outweighs the work.
pub(crate) const PAR_THRESHOLD: usize = 1 << 12; // 4096 elements

/// `dst[i] = f(src[i])`.
pub(crate) fn unary_map<T, F>(src: &[T], dst: &mut [T], f: F)
where
    T: Copy + Send + Sync,
    F: Fn(T) -> T + Send + Sync,
{
    debug_assert_eq!(src.len(), dst.len());
    if dst.len() >= PAR_THRESHOLD {
        dst.par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(d, &s)| *d = f(s));
    } else {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = f(s);
        }
    }
}

/// `dst[i] = f(a[i], b[i])`.
pub(crate) fn binary_map<T, F>(a: &[T], b: &[T], dst: &mut [T], f: F)
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Send + Sync,
{
    debug_assert_eq!(a.len(), dst.len());
    debug_assert_eq!(b.len(), dst.len());
    if dst.len() >= PAR_THRESHOLD {
        dst.par_iter_mut()
            .zip(a.par_iter().zip(b.par_iter()))
            .for_each(|(d, (&x, &y))| *d = f(x, y));
    } else {
        for (d, (&x, &y)) in dst.iter_mut().zip(a.iter().zip(b)) {
            *d = f(x, y);
        }
    }
}

/// `dst[i] = f(a[i], b[i], c[i])`.
pub(crate) fn ternary_map<T, F>(a: &[T], b: &[T], c: &[T], dst: &mut [T], f: F)
where
    T: Copy + Send + Sync,
    F: Fn(T, T, T) -> T + Send + Sync,
{
    debug_assert_eq!(a.len(), dst.len());
    debug_assert_eq!(b.len(), dst.len());
    debug_assert_eq!(c.len(), dst.len());
    if dst.len() >= PAR_THRESHOLD {
        dst.par_iter_mut()
            .zip(a.par_iter().zip(b.par_iter().zip(c.par_iter())))
            .for_each(|(d, (&x, (&y, &z)))| *d = f(x, y, z));
    } else {
        for i in 0..dst.len() {
            dst[i] = f(a[i], b[i], c[i]);
        }
    }
}

/// Geometry of a reduction along one dimension of a row-major tensor.
///
/// Flattening `shape` around dimension `dim` gives
/// `outer x axis x inner`, with the reduced extent `axis` strided by
/// `inner` in the flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DimSplit {
    pub outer: usize,
    pub axis: usize,
    pub inner: usize,
}

impl DimSplit {
    pub(crate) fn new(shape: &[usize], dim: usize) -> Self {
        DimSplit {
            outer: shape[..dim].iter().product(),
            axis: shape[dim],
            inner: shape[dim + 1..].iter().product(),
        }
    }
}

/// Sums `src` over the reduced extent described by `split`, one output group
/// per `dst` element.
///
/// Each group accumulates sequentially in ascending index order, so repeated
/// calls on identical input are bit-identical regardless of how groups are
/// distributed over threads.
pub(crate) fn reduce_dim_sum<T>(src: &[T], split: DimSplit, dst: &mut [T])
where
    T: Copy + Send + Sync + Zero + AddAssign,
{
    debug_assert_eq!(src.len(), split.outer * split.axis * split.inner);
    debug_assert_eq!(dst.len(), split.outer * split.inner);
    let group = |(o, d): (usize, &mut T)| {
        let outer_idx = o / split.inner;
        let inner_idx = o % split.inner;
        let base = outer_idx * split.axis * split.inner + inner_idx;
        let mut acc = T::zero();
        for j in 0..split.axis {
            acc += src[base + j * split.inner];
        }
        *d = acc;
    };
    if dst.len() >= PAR_THRESHOLD {
        dst.par_iter_mut().enumerate().for_each(group);
    } else {
        dst.iter_mut().enumerate().for_each(group);
    }
}

/// Broadcast-copies `src` back along the reduced extent, one unit of work
/// per `dst` element: every position along the reduced dimension receives
/// the value at its corresponding reduced index.
pub(crate) fn broadcast_dim<T>(src: &[T], split: DimSplit, dst: &mut [T])
where
    T: Copy + Send + Sync,
{
    debug_assert_eq!(src.len(), split.outer * split.inner);
    debug_assert_eq!(dst.len(), split.outer * split.axis * split.inner);
    let stride = split.axis * split.inner;
    let body = |(i, d): (usize, &mut T)| {
        let outer_idx = i / stride;
        let inner_idx = i % split.inner;
        *d = src[outer_idx * split.inner + inner_idx];
    };
    if dst.len() >= PAR_THRESHOLD {
        dst.par_iter_mut().enumerate().for_each(body);
    } else {
        dst.iter_mut().enumerate().for_each(body);
    }
}
