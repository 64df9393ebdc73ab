use crate::{BufferView, ComputeError, DType};

/// # Errors
///
/// Returns [`ComputeError::ShapeMismatch`] unless both masks are `u32` with the same shape.
pub fn handle_logical_and(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 3 {
        return Err(ComputeError::ShapeMismatch(
            "LogicalAnd kernel expects 3 buffers (mask_a, mask_b, output_placeholder)",
        ));
    }
    let a_view = &binds[0];
    let b_view = &binds[1];

    if a_view.dtype != DType::U32
        || b_view.dtype != DType::U32
    {
        return Err(ComputeError::ShapeMismatch(
            "LogicalAnd kernel only supports u32 masks",
        ));
    }
    if a_view.shape != b_view.shape {
        return Err(ComputeError::ShapeMismatch(
            "Input masks for LogicalAnd must have the same shape",
        ));
    }

    let a_values: &[u32] = bytemuck::cast_slice(&a_view.data);
    let b_values: &[u32] = bytemuck::cast_slice(&b_view.data);

    let mask: Vec<u32> = a_values
        .iter()
        .zip(b_values.iter())
        .map(|(&a, &b)| u32::from(a != 0 && b != 0))
        .collect();
    Ok(vec![bytemuck::cast_slice(&mask).to_vec()])
}
