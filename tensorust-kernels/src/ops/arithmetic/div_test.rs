use super::*;
use crate::grad_check::{check_grad, GradCheckError};
use crate::utils::testing::check_buffer_near;

fn buf(data: Vec<f32>, shape: Vec<usize>) -> TensorBuffer {
    TensorBuffer::new(data, shape).expect("test buffer creation failed")
}

#[test]
fn test_div_ok() {
    let a = buf(vec![8.0, 15.0], vec![2]);
    let b = buf(vec![4.0, 5.0], vec![2]);
    let result = div_op(&a, &b).unwrap();
    check_buffer_near(&result, &[2], &[2.0, 3.0], 1e-6);
}

#[test]
fn test_div_by_zero_is_inf() {
    let a = buf(vec![1.0], vec![1]);
    let b = buf(vec![0.0], vec![1]);
    let result = div_op(&a, &b).unwrap();
    assert_eq!(result.as_slice(), &[f32::INFINITY]);
}

#[test]
fn test_div_zero_by_zero_is_nan() {
    let a = buf(vec![0.0], vec![1]);
    let b = buf(vec![0.0], vec![1]);
    let result = div_op(&a, &b).unwrap();
    assert!(result.as_slice()[0].is_nan());
}

#[test]
fn test_div_backward_formulas() {
    let a = buf(vec![1.0, 4.0], vec![2]);
    let b = buf(vec![2.0, 8.0], vec![2]);
    let grad_result = buf(vec![1.0, 1.0], vec![2]);
    let mut grad_a = a.zeros_like().unwrap();
    let mut grad_b = b.zeros_like().unwrap();
    div_backward(&mut grad_a, &mut grad_b, &grad_result, &a, &b).unwrap();
    // grad_a = 1/b, grad_b = -a/b^2
    check_buffer_near(&grad_a, &[2], &[0.5, 0.125], 1e-6);
    check_buffer_near(&grad_b, &[2], &[-0.25, -0.0625], 1e-6);
}

#[test]
fn test_div_backward_zero_divisor_does_not_trap() {
    let a = buf(vec![1.0], vec![1]);
    let b = buf(vec![0.0], vec![1]);
    let grad_result = buf(vec![1.0], vec![1]);
    let mut grad_a = a.zeros_like().unwrap();
    let mut grad_b = b.zeros_like().unwrap();
    div_backward(&mut grad_a, &mut grad_b, &grad_result, &a, &b).unwrap();
    assert_eq!(grad_a.as_slice(), &[f32::INFINITY]);
    assert!(!grad_b.as_slice()[0].is_finite());
}

#[test]
fn test_div_grad_check() -> Result<(), GradCheckError> {
    let a = buf(vec![1.0, 4.0, -3.0], vec![3]);
    let b = buf(vec![2.0, 8.0, 4.0], vec![3]);
    let output_grad = buf(vec![1.0, 1.0, 1.0], vec![3]);
    let mut grad_a = a.zeros_like()?;
    let mut grad_b = b.zeros_like()?;
    div_backward(&mut grad_a, &mut grad_b, &output_grad, &a, &b)?;
    check_grad(
        |inputs| div_op(&inputs[0], &inputs[1]),
        &[a, b],
        &[grad_a, grad_b],
        &output_grad,
        1e-3,
        1e-2,
    )
}
