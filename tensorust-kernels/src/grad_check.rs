//! Finite-difference gradient checking for the kernel layer.
//!
//! The graph runtime above this crate reads analytic gradients off its tape;
//! here the caller passes them in directly (typically produced by the
//! backward kernel under test) and they are compared against a
//! central-difference estimate of `d loss / d input`, where
//! `loss = Σ output[i] * output_grad[i]` accumulated in f64.

use crate::buffer::TensorBuffer;
use crate::error::KernelError;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element {element_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}, element {element_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        value: f64,
    },

    #[error("Got {inputs} input buffers but {grads} analytic gradient buffers")]
    InputCountMismatch { inputs: usize, grads: usize },

    #[error("Analytic gradient for input {input_index} has {actual} elements, the input has {expected}")]
    AnalyticGradLengthMismatch {
        input_index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Output has {output} elements but the output gradient has {output_grad}")]
    OutputLengthMismatch { output: usize, output_grad: usize },

    #[error("Forward function failed during gradient check: {0}")]
    ForwardPassError(KernelError),

    #[error("Buffer error during gradient check: {0}")]
    BufferError(#[from] KernelError),
}

/// Checks analytic gradients against numerical gradients using central
/// finite differences.
///
/// `forward` recomputes the operation's output from a full input set;
/// `analytic_grads` holds one gradient buffer per input, as written by the
/// backward kernel for the upstream gradient `output_grad`. A mismatch is
/// reported when the difference exceeds `tolerance` both absolutely and
/// relative to the analytic magnitude.
pub fn check_grad<F>(
    forward: F,
    inputs: &[TensorBuffer],
    analytic_grads: &[TensorBuffer],
    output_grad: &TensorBuffer,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[TensorBuffer]) -> Result<TensorBuffer, KernelError>,
{
    if inputs.len() != analytic_grads.len() {
        return Err(GradCheckError::InputCountMismatch {
            inputs: inputs.len(),
            grads: analytic_grads.len(),
        });
    }

    // Baseline run: surfaces forward failures once and pins the output size.
    let baseline = forward(inputs).map_err(GradCheckError::ForwardPassError)?;
    if baseline.numel() != output_grad.numel() {
        return Err(GradCheckError::OutputLengthMismatch {
            output: baseline.numel(),
            output_grad: output_grad.numel(),
        });
    }

    for (input_index, (input, analytic)) in inputs.iter().zip(analytic_grads).enumerate() {
        if analytic.numel() != input.numel() {
            return Err(GradCheckError::AnalyticGradLengthMismatch {
                input_index,
                expected: input.numel(),
                actual: analytic.numel(),
            });
        }

        for element_index in 0..input.numel() {
            let loss_plus =
                perturbed_loss(&forward, inputs, input_index, element_index, epsilon, output_grad)?;
            let loss_minus = perturbed_loss(
                &forward,
                inputs,
                input_index,
                element_index,
                -epsilon,
                output_grad,
            )?;
            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            let analytical_grad = analytic.as_slice()[element_index] as f64;

            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    loss_plus,
                    loss_minus,
                });
            }
            if !analytical_grad.is_finite() {
                return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                    input_index,
                    element_index,
                    value: analytical_grad,
                });
            }

            let difference = (analytical_grad - numerical_grad).abs();
            if difference > tolerance
                && difference / (analytical_grad.abs() + epsilon) > tolerance
            {
                log::warn!(
                    "gradient mismatch for input {} element {}: analytical {} vs numerical {}",
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad
                );
                return Err(GradCheckError::GradientMismatch {
                    input_index,
                    element_index,
                    analytical_grad,
                    numerical_grad,
                    difference,
                });
            }
        }
    }

    Ok(())
}

/// Runs `forward` with one input element nudged by `delta` and reduces the
/// output to the scalar loss `Σ output[i] * output_grad[i]` in f64.
fn perturbed_loss<F>(
    forward: &F,
    inputs: &[TensorBuffer],
    input_index: usize,
    element_index: usize,
    delta: f64,
    output_grad: &TensorBuffer,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[TensorBuffer]) -> Result<TensorBuffer, KernelError>,
{
    let mut perturbed: Vec<TensorBuffer> = inputs.to_vec();
    let mut data = inputs[input_index].as_slice().to_vec();
    data[element_index] = (data[element_index] as f64 + delta) as f32;
    perturbed[input_index] = TensorBuffer::new(data, inputs[input_index].shape().to_vec())?;

    let output = forward(&perturbed).map_err(GradCheckError::ForwardPassError)?;
    Ok(output
        .as_slice()
        .iter()
        .zip(output_grad.as_slice())
        .map(|(&o, &g)| o as f64 * g as f64)
        .sum())
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{mul_backward, mul_op};

    fn buf(data: Vec<f32>, shape: Vec<usize>) -> TensorBuffer {
        TensorBuffer::new(data, shape).expect("test buffer creation failed")
    }

    #[test]
    fn test_correct_gradients_pass() -> Result<(), GradCheckError> {
        let a = buf(vec![2.0, 3.0], vec![2]);
        let b = buf(vec![4.0, 5.0], vec![2]);
        let output_grad = buf(vec![1.0, 1.0], vec![2]);
        let mut grad_a = a.zeros_like()?;
        let mut grad_b = b.zeros_like()?;
        mul_backward(&mut grad_a, &mut grad_b, &output_grad, &a, &b)?;
        check_grad(
            |inputs| mul_op(&inputs[0], &inputs[1]),
            &[a, b],
            &[grad_a, grad_b],
            &output_grad,
            1e-3,
            1e-3,
        )
    }

    #[test]
    fn test_wrong_gradient_is_caught() {
        let a = buf(vec![2.0, 3.0], vec![2]);
        let b = buf(vec![4.0, 5.0], vec![2]);
        let output_grad = buf(vec![1.0, 1.0], vec![2]);
        // Deliberately wrong: the gradient of a*b w.r.t. a is b, not a.
        let wrong_grad_a = a.clone();
        let grad_b = a.clone();
        let result = check_grad(
            |inputs| mul_op(&inputs[0], &inputs[1]),
            &[a, b],
            &[wrong_grad_a, grad_b],
            &output_grad,
            1e-3,
            1e-3,
        );
        assert!(matches!(
            result,
            Err(GradCheckError::GradientMismatch { input_index: 0, .. })
        ));
    }

    #[test]
    fn test_input_count_mismatch() {
        let a = buf(vec![1.0], vec![1]);
        let output_grad = buf(vec![1.0], vec![1]);
        let result = check_grad(
            |inputs| mul_op(&inputs[0], &inputs[1]),
            &[a.clone(), a],
            &[],
            &output_grad,
            1e-3,
            1e-3,
        );
        assert_eq!(
            result,
            Err(GradCheckError::InputCountMismatch { inputs: 2, grads: 0 })
        );
    }
}
