use crate::{kernels, BufferView, ComputeBackend, ComputeError, Kernel};

#[derive(Default, Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ComputeBackend for CpuBackend {
    fn dispatch(
        &self,
        shader: &Kernel,
        binds: &[BufferView],
        _workgroups: [u32; 3],
    ) -> Result<Vec<Vec<u8>>, ComputeError> {
        if binds.len() < shader.binding_count() as usize {
            return Err(ComputeError::ShapeMismatch(
                "fewer buffers bound than the kernel layout requires",
            ));
        }
        for buffer_view in binds {
            let expected_bytes = buffer_view.element_count() * buffer_view.element_size_in_bytes();

            if buffer_view.data.len() != expected_bytes {
                return Err(ComputeError::ShapeMismatch(
                    "Buffer data length does not match product of shape dimensions and element size",
                ));
            }
        }
        match shader {
            Kernel::Sub => kernels::handle_sub(binds),
            Kernel::Distance3 => kernels::handle_distance3(binds),
            Kernel::SelectAxis => kernels::handle_select_axis(binds),
            Kernel::LessThan => kernels::handle_less_than(binds),
            Kernel::GreaterThan => kernels::handle_greater_than(binds),
            Kernel::LogicalAnd => kernels::handle_logical_and(binds),
        }
    }
}
