// Export foundational arithmetic operations directly
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

// Re-export the primary operation functions
pub use add::{add_backward, add_op};
pub use div::{div_backward, div_op};
pub use mul::{mul_backward, mul_op};
pub use neg::{neg_backward, neg_op};
pub use pow::{pow_backward, pow_op};
pub use sub::{sub_backward, sub_op};
