//! Forward/backward compute kernels for the Tensorust autograd runtime.
//!
//! Each primitive operation ships as a pair: a forward kernel that allocates
//! and returns its value buffer, and a backward kernel that overwrites
//! caller-supplied gradient buffers with the operation's local chain-rule
//! contribution. The graph runtime sitting above this crate owns operation
//! history, buffer lifecycles, and gradient accumulation across edges.
//!
//! Numeric singularities (division by zero, `0^0`, exponential overflow) are
//! not errors: kernels propagate IEEE-754 `inf`/`NaN` and never trap.

// Declare the main crate modules
pub mod buffer;
pub mod creation;
pub mod error;
pub mod grad_check;
pub mod ops;
pub mod utils;

mod schedule;

// Re-export the core types so callers can reach them directly
pub use buffer::TensorBuffer;
pub use error::KernelError;
