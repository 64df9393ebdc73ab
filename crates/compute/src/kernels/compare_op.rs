use crate::{BufferView, ComputeError, DType};

fn compare(
    binds: &[BufferView],
    name: &'static str,
    op: fn(f32, f32) -> bool,
) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 3 {
        return Err(ComputeError::ShapeMismatch(name));
    }
    let lhs_view = &binds[0];
    let rhs_view = &binds[1];

    if lhs_view.dtype != DType::F32
        || rhs_view.dtype != DType::F32
    {
        return Err(ComputeError::ShapeMismatch(
            "comparison kernels only support f32 inputs",
        ));
    }
    if lhs_view.shape != rhs_view.shape {
        return Err(ComputeError::ShapeMismatch(
            "Input buffers for a comparison must have the same shape",
        ));
    }

    let lhs: &[f32] = bytemuck::cast_slice(&lhs_view.data);
    let rhs: &[f32] = bytemuck::cast_slice(&rhs_view.data);

    let mask: Vec<u32> = lhs
        .iter()
        .zip(rhs.iter())
        .map(|(&a, &b)| u32::from(op(a, b)))
        .collect();
    Ok(vec![bytemuck::cast_slice(&mask).to_vec()])
}

/// Strict `lhs < rhs`, written as a `u32` mask.
///
/// # Errors
///
/// Returns [`ComputeError::ShapeMismatch`] unless both inputs are f32 with the same shape.
pub fn handle_less_than(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    compare(binds, "LessThan kernel expects 3 buffers (lhs, rhs, output_placeholder)", |a, b| a < b)
}

/// Strict `lhs > rhs`, written as a `u32` mask.
///
/// # Errors
///
/// Returns [`ComputeError::ShapeMismatch`] unless both inputs are f32 with the same shape.
pub fn handle_greater_than(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    compare(binds, "GreaterThan kernel expects 3 buffers (lhs, rhs, output_placeholder)", |a, b| a > b)
}
