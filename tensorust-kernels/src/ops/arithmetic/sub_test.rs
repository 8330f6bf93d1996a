use super::*;
use crate::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::check_buffer_near;

fn buf(data: Vec<f32>, shape: Vec<usize>) -> TensorBuffer {
    TensorBuffer::new(data, shape).expect("test buffer creation failed")
}

#[test]
fn test_sub_ok() {
    let a = buf(vec![5.0, 7.0, 9.0], vec![3]);
    let b = buf(vec![4.0, 5.0, 6.0], vec![3]);
    let result = sub_op(&a, &b).unwrap();
    check_buffer_near(&result, &[3], &[1.0, 2.0, 3.0], 1e-6);
}

#[test]
fn test_sub_length_mismatch() {
    let a = buf(vec![1.0], vec![1]);
    let b = buf(vec![1.0, 2.0], vec![2]);
    assert!(matches!(
        sub_op(&a, &b),
        Err(KernelError::LengthMismatch { .. })
    ));
}

#[test]
fn test_sub_backward_negates_second_slot() {
    let grad_result = buf(vec![1.0, -0.5], vec![2]);
    let mut grad_a = TensorBuffer::zeros(vec![2]).unwrap();
    let mut grad_b = TensorBuffer::zeros(vec![2]).unwrap();
    sub_backward(&mut grad_a, &mut grad_b, &grad_result).unwrap();
    check_buffer_near(&grad_a, &[2], &[1.0, -0.5], 1e-6);
    check_buffer_near(&grad_b, &[2], &[-1.0, 0.5], 1e-6);
}

#[test]
fn test_sub_grad_check() -> Result<(), GradCheckError> {
    let a = buf(vec![2.0, -1.0, 0.5], vec![3]);
    let b = buf(vec![1.0, 3.0, -0.25], vec![3]);
    let output_grad = buf(vec![1.0, 1.0, 1.0], vec![3]);
    let mut grad_a = a.zeros_like()?;
    let mut grad_b = b.zeros_like()?;
    sub_backward(&mut grad_a, &mut grad_b, &output_grad)?;
    check_grad(
        |inputs| sub_op(&inputs[0], &inputs[1]),
        &[a, b],
        &[grad_a, grad_b],
        &output_grad,
        1e-3,
        1e-2,
    )
}
