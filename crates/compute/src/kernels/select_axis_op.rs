use crate::{BufferView, ComputeError, DType};

/// Extracts one column of an `[N, 3]` position buffer.
///
/// The axis index is bound as a single `u32` in the second slot.
///
/// # Errors
///
/// Returns [`ComputeError::ShapeMismatch`] for a malformed input or an axis above 2.
pub fn handle_select_axis(binds: &[BufferView]) -> Result<Vec<Vec<u8>>, ComputeError> {
    if binds.len() < 3 {
        return Err(ComputeError::ShapeMismatch(
            "SelectAxis kernel expects 3 buffers (points, axis, output_placeholder)",
        ));
    }
    let points_view = &binds[0];
    let axis_view = &binds[1];

    if points_view.dtype != DType::F32 {
        return Err(ComputeError::ShapeMismatch(
            "SelectAxis kernel only supports f32 positions",
        ));
    }
    if points_view.shape.len() != 2 || points_view.shape[1] != 3 {
        return Err(ComputeError::ShapeMismatch(
            "SelectAxis input must have shape [N, 3]",
        ));
    }
    if axis_view.dtype != DType::U32 || axis_view.element_count() != 1 {
        return Err(ComputeError::ShapeMismatch(
            "SelectAxis expects a single u32 axis index",
        ));
    }

    let axis = bytemuck::cast_slice::<u8, u32>(&axis_view.data)[0] as usize;
    if axis > 2 {
        return Err(ComputeError::ShapeMismatch("SelectAxis axis must be 0, 1 or 2"));
    }

    let points: &[f32] = bytemuck::cast_slice(&points_view.data);
    let output_values: Vec<f32> = points.chunks_exact(3).map(|p| p[axis]).collect();
    Ok(vec![bytemuck::cast_slice(&output_values).to_vec()])
}

#[cfg(test)]
mod tests {
    use crate::{BufferView, ComputeBackend, CpuBackend, DType, Kernel};

    #[test]
    fn test_select_axis() {
        let cpu = CpuBackend::new();
        let points = BufferView::from_f32(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
        let out = BufferView::placeholder(2, DType::F32);

        for (axis, expected) in [(0u32, [1.0f32, 4.0]), (1, [2.0, 5.0]), (2, [3.0, 6.0])] {
            let axis_buf = BufferView::from_u32(&[axis], vec![1]);
            let result_buffers = cpu
                .dispatch(&Kernel::SelectAxis, &[points.clone(), axis_buf, out.clone()], [1, 1, 1])
                .unwrap();
            let result: &[f32] = bytemuck::cast_slice(&result_buffers[0]);
            assert_eq!(result, &expected);
        }
    }

    #[test]
    fn select_axis_rejects_out_of_range_axis() {
        let cpu = CpuBackend::new();
        let points = BufferView::from_f32(&[0.0; 3], vec![1, 3]);
        let axis = BufferView::from_u32(&[3], vec![1]);
        let out = BufferView::placeholder(1, DType::F32);
        assert!(cpu.dispatch(&Kernel::SelectAxis, &[points, axis, out], [1, 1, 1]).is_err());
    }
}
