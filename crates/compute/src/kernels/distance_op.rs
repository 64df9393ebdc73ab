use crate::{BufferView, ComputeError, DType};

/// Euclidean distance between matching rows of two `[N, 3]` position buffers.
///
/// # Errors
///
/// Returns [`ComputeError::ShapeMismatch`] unless both inputs are f32 `[N, 3]`.
pub fn handle_distance3(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 3 {
        return Err(ComputeError::ShapeMismatch(
            "Distance3 kernel expects 3 buffers (points_a, points_b, output_placeholder)",
        ));
    }
    let a_view = &binds[0];
    let b_view = &binds[1];

    if a_view.dtype != DType::F32
        || b_view.dtype != DType::F32
    {
        return Err(ComputeError::ShapeMismatch(
            "Distance3 kernel only supports f32 positions",
        ));
    }
    if a_view.shape.len() != 2 || a_view.shape[1] != 3 {
        return Err(ComputeError::ShapeMismatch(
            "Distance3 inputs must have shape [N, 3]",
        ));
    }
    if a_view.shape != b_view.shape {
        return Err(ComputeError::ShapeMismatch(
            "Input buffers for Distance3 must have the same shape",
        ));
    }

    let a_values: &[f32] = bytemuck::cast_slice(&a_view.data);
    let b_values: &[f32] = bytemuck::cast_slice(&b_view.data);

    let output_values: Vec<f32> = a_values
        .chunks_exact(3)
        .zip(b_values.chunks_exact(3))
        .map(|(a, b)| {
            let dx = a[0] - b[0];
            let dy = a[1] - b[1];
            let dz = a[2] - b[2];
            (dx * dx + dy * dy + dz * dz).sqrt()
        })
        .collect();
    Ok(vec![bytemuck::cast_slice(&output_values).to_vec()])
}

#[cfg(test)]
mod tests {
    use crate::{BufferView, ComputeBackend, CpuBackend, DType, Kernel};

    #[test]
    fn test_distance3() {
        let cpu = CpuBackend::new();
        let a = BufferView::from_f32(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0], vec![2, 3]);
        let b = BufferView::from_f32(&[3.0, 4.0, 0.0, 1.0, 1.0, 1.0], vec![2, 3]);
        let out = BufferView::placeholder(2, DType::F32);

        let result_buffers = cpu.dispatch(&Kernel::Distance3, &[a, b, out], [1, 1, 1]).unwrap();

        let result: &[f32] = bytemuck::cast_slice(&result_buffers[0]);
        assert_eq!(result, &[5.0, 0.0]);
    }

    #[test]
    fn distance3_rejects_flat_input() {
        let cpu = CpuBackend::new();
        let a = BufferView::from_f32(&[0.0; 6], vec![6]);
        let out = BufferView::placeholder(2, DType::F32);
        assert!(cpu.dispatch(&Kernel::Distance3, &[a.clone(), a, out], [1, 1, 1]).is_err());
    }
}
