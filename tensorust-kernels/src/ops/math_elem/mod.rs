// Element-wise transcendental kernels.

pub mod exp;
pub mod tanh;

// Re-export the primary operation functions
pub use exp::{exp_backward, exp_op};
pub use tanh::{tanh_backward, tanh_op};
