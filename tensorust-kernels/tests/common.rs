use tensorust_kernels::TensorBuffer;

// Shared helpers for the integration tests. Allow(dead_code) because usage
// across different test crates isn't detected easily.

/// Initializes env_logger once; safe to call from every test.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn buffer(data: Vec<f32>, shape: Vec<usize>) -> TensorBuffer {
    TensorBuffer::new(data, shape).expect("Test buffer creation failed")
}
