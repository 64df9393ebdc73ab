#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Batch compute kernels
//!
//! A thin dispatch layer for data-parallel kernels applied elementwise across
//! an environment batch. Callers pack their per-environment values into flat
//! byte buffers ([`BufferView`]), pick a [`Kernel`] and hand both to a
//! [`ComputeBackend`]. Every kernel is a single pass over N-length (or N×3)
//! buffers with no per-element branching on the caller side.
//!
//! Boolean masks travel as `u32` buffers (`0` = false, anything else = true),
//! which keeps them `Pod` and binding-compatible with a GPU backend.

use std::sync::Arc;
use thiserror::Error;

pub mod cpu_backend;
pub mod kernels;
pub mod layout;

pub use cpu_backend::CpuBackend;

#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("buffer shape mismatch: {0}")]
    ShapeMismatch(&'static str),
}

/// Element type of a [`BufferView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    F32,
    U32,
}

impl DType {
    #[must_use]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            DType::F32 => std::mem::size_of::<f32>(),
            DType::U32 => std::mem::size_of::<u32>(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kernel {
    // Element-wise arithmetic
    Sub,

    // Geometry over [N, 3] position buffers
    Distance3,
    SelectAxis,

    // Strict comparisons, f32 -> u32 mask
    LessThan,
    GreaterThan,

    // Mask combination
    LogicalAnd,
}

impl Kernel {
    #[must_use]
    pub const fn binding_count(&self) -> u32 {
        layout::binding_count(self)
    }
}

#[derive(Clone, Debug)]
pub struct BufferView {
    pub data: Arc<[u8]>,
    pub shape: Vec<usize>, // Number of elements per dimension
    pub dtype: DType,
}

impl BufferView {
    #[must_use]
    pub fn new(data: Arc<[u8]>, shape: Vec<usize>, dtype: DType) -> Self {
        Self { data, shape, dtype }
    }

    /// Packs `f32` values into a view with the given shape.
    #[must_use]
    pub fn from_f32(values: &[f32], shape: Vec<usize>) -> Self {
        let bytes: Arc<[u8]> = bytemuck::cast_slice(values).to_vec().into();
        Self::new(bytes, shape, DType::F32)
    }

    /// Packs `u32` values into a view with the given shape.
    #[must_use]
    pub fn from_u32(values: &[u32], shape: Vec<usize>) -> Self {
        let bytes: Arc<[u8]> = bytemuck::cast_slice(values).to_vec().into();
        Self::new(bytes, shape, DType::U32)
    }

    /// Zeroed output placeholder of `len` elements of `dtype`.
    #[must_use]
    pub fn placeholder(len: usize, dtype: DType) -> Self {
        let bytes: Arc<[u8]> = vec![0u8; len * dtype.size_in_bytes()].into();
        Self::new(bytes, vec![len], dtype)
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.shape.iter().product()
    }

    #[must_use]
    pub fn element_size_in_bytes(&self) -> usize {
        self.dtype.size_in_bytes()
    }
}

pub trait ComputeBackend: Send + Sync + 'static {
    /// Dispatches a kernel with the given bindings and workgroup configuration.
    ///
    /// # Arguments
    /// * `shader`: The kernel to dispatch.
    /// * `binds`: Input buffers followed by the output placeholder, in the
    ///            slot order given by [`layout`].
    /// * `workgroups`: The number of workgroups to dispatch.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Vec<Vec<u8>>)` where each inner `Vec<u8>` holds the bytes
    /// of one output buffer, in binding order.
    ///
    /// # Errors
    ///
    /// Returns `ComputeError::ShapeMismatch` if any input buffer is invalid.
    /// May return other `ComputeError` variants depending on the backend.
    fn dispatch(
        &self,
        shader: &Kernel,
        binds: &[BufferView],
        workgroups: [u32; 3],
    ) -> Result<Vec<Vec<u8>>, ComputeError>;
}

/// Number of 256-wide workgroups needed to cover `len` elements.
#[must_use]
pub fn workgroups_for(len: usize) -> [u32; 3] {
    let groups = u32::try_from(len.div_ceil(256)).unwrap_or(u32::MAX);
    [groups.max(1), 1, 1]
}

/// Returns the compute backend used for predicate evaluation.
///
/// Only the CPU backend is built in; GPU backends can be supplied by callers
/// through any [`ComputeBackend`] implementation.
#[must_use]
pub fn default_backend() -> Arc<dyn ComputeBackend> {
    tracing::debug!("Using CpuBackend.");
    Arc::new(CpuBackend::new())
}
