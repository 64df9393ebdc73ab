use crate::{BufferView, ComputeError, DType};

/// Elementwise `a - b` over two f32 buffers of the same shape.
///
/// # Errors
///
/// Returns [`ComputeError::ShapeMismatch`] on a dtype or shape mismatch.
pub fn handle_sub(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 3 {
        // IN1, IN2, OUT per layout.rs
        return Err(ComputeError::ShapeMismatch(
            "Sub kernel expects 3 buffers (input_a, input_b, output_placeholder)",
        ));
    }
    let input_a_view = &binds[0];
    let input_b_view = &binds[1];

    if input_a_view.dtype != DType::F32
        || input_b_view.dtype != DType::F32
    {
        return Err(ComputeError::ShapeMismatch(
            "Sub kernel currently only supports f32 data for both inputs",
        ));
    }

    if input_a_view.data.len() != input_b_view.data.len() {
        return Err(ComputeError::ShapeMismatch(
            "Input buffers for Sub must have the same byte length",
        ));
    }
    if input_a_view.shape != input_b_view.shape {
        return Err(ComputeError::ShapeMismatch(
            "Input buffers for Sub must have the same shape",
        ));
    }

    let input_a_values: &[f32] = bytemuck::cast_slice(&input_a_view.data);
    let input_b_values: &[f32] = bytemuck::cast_slice(&input_b_view.data);

    let output_values: Vec<f32> = input_a_values
        .iter()
        .zip(input_b_values.iter())
        .map(|(&a, &b)| a - b)
        .collect();
    let out_bytes = bytemuck::cast_slice(&output_values).to_vec();
    Ok(vec![out_bytes])
}
