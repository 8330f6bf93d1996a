//! One neuron, one training step, driven straight through the kernel layer.
//!
//! The autograd graph that normally orchestrates this lives above this
//! crate; here the tape is unrolled by hand to show the calling convention:
//! forward kernels allocate and return their output, backward kernels
//! overwrite caller-supplied gradient buffers, and accumulation across
//! graph edges is done by the caller (the `add_op` merging the two squared-
//! error gradients below).
//!
//! Run with: `cargo run --example perceptron_step`

use tensorust_kernels::creation;
use tensorust_kernels::ops::arithmetic::{
    add_op, mul_backward, mul_op, sub_backward, sub_op,
};
use tensorust_kernels::ops::math_elem::{tanh_backward, tanh_op};
use tensorust_kernels::ops::reduction::{sum_backward, sum_op};
use tensorust_kernels::{KernelError, TensorBuffer};

const LEARNING_RATE: f32 = 0.5;

struct Forward {
    xw: TensorBuffer,
    pre_activation: TensorBuffer,
    prediction: TensorBuffer,
    error: TensorBuffer,
    loss: TensorBuffer,
}

/// prediction = tanh(sum(x * w)); loss = (prediction - target)^2
fn forward(
    x: &TensorBuffer,
    w: &TensorBuffer,
    target: &TensorBuffer,
) -> Result<Forward, KernelError> {
    let xw = mul_op(x, w)?;
    let pre_activation = sum_op(&xw, 0, false)?;
    let prediction = tanh_op(&pre_activation)?;
    let error = sub_op(&prediction, target)?;
    let loss = mul_op(&error, &error)?;
    Ok(Forward {
        xw,
        pre_activation,
        prediction,
        error,
        loss,
    })
}

fn main() -> Result<(), KernelError> {
    env_logger::init();

    let x = TensorBuffer::new(vec![0.5, -1.0, 2.0, 0.25], vec![4])?;
    let mut w = creation::filled(0.3, vec![4])?;
    let target = TensorBuffer::new(vec![0.8], vec![])?;

    let pass = forward(&x, &w, &target)?;
    println!(
        "before: prediction = {:.5}, loss = {:.5}",
        pass.prediction.as_slice()[0],
        pass.loss.as_slice()[0]
    );

    // Walk the tape backward, seeding with d(loss)/d(loss) = 1.
    let upstream = creation::ones(vec![])?;

    // loss = error * error: both slots feed the same tensor, so the caller
    // adds the two overwritten contributions into one gradient.
    let mut grad_err_lhs = pass.error.zeros_like()?;
    let mut grad_err_rhs = pass.error.zeros_like()?;
    mul_backward(
        &mut grad_err_lhs,
        &mut grad_err_rhs,
        &upstream,
        &pass.error,
        &pass.error,
    )?;
    let grad_error = add_op(&grad_err_lhs, &grad_err_rhs)?;

    // error = prediction - target
    let mut grad_prediction = pass.prediction.zeros_like()?;
    let mut grad_target = target.zeros_like()?;
    sub_backward(&mut grad_prediction, &mut grad_target, &grad_error)?;

    // prediction = tanh(pre_activation)
    let mut grad_pre_activation = pass.pre_activation.zeros_like()?;
    tanh_backward(
        &mut grad_pre_activation,
        &grad_prediction,
        &pass.pre_activation,
    )?;

    // pre_activation = sum(xw)
    let mut grad_xw = pass.xw.zeros_like()?;
    sum_backward(&[4], 0, &mut grad_xw, &grad_pre_activation)?;

    // xw = x * w
    let mut grad_x = x.zeros_like()?;
    let mut grad_w = w.zeros_like()?;
    mul_backward(&mut grad_x, &mut grad_w, &grad_xw, &x, &w)?;

    // Gradient-descent step on the weights.
    let lr = creation::filled(LEARNING_RATE, vec![4])?;
    let step = mul_op(&lr, &grad_w)?;
    w = sub_op(&w, &step)?;

    let pass = forward(&x, &w, &target)?;
    println!(
        "after:  prediction = {:.5}, loss = {:.5}",
        pass.prediction.as_slice()[0],
        pass.loss.as_slice()[0]
    );
    println!("weights: {:?}", w.as_slice());

    Ok(())
}
