use crate::buffer::TensorBuffer;

/// Checks that a buffer matches an expected shape and data within tolerance.
/// Panics if shapes differ or data differs significantly.
///
/// Comparison is by absolute difference, so identical infinities compare
/// equal (their difference is `NaN`, which never exceeds the tolerance)
/// while an infinity against a finite value panics.
pub fn check_buffer_near(
    actual: &TensorBuffer,
    expected_shape: &[usize],
    expected_data: &[f32],
    tolerance: f32,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");

    let actual_data = actual.as_slice();
    assert_eq!(
        actual_data.len(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual_data.iter().zip(expected_data.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
