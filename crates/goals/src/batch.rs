//! Typed wrappers that pack batch values into [`BufferView`]s, dispatch one
//! kernel and unpack the result.

use compute::{BufferView, ComputeBackend, ComputeError, DType, Kernel};
use scene::Vec3;
use std::sync::Arc;

/// One boolean per environment.
pub type Mask = Vec<bool>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

#[derive(Clone)]
pub struct BatchOps {
    backend: Arc<dyn ComputeBackend>,
}

impl Default for BatchOps {
    fn default() -> Self {
        Self::new(compute::default_backend())
    }
}

fn points(values: &[Vec3]) -> BufferView {
    BufferView::from_f32(bytemuck::cast_slice(values), vec![values.len(), 3])
}

fn scalars(values: &[f32]) -> BufferView {
    BufferView::from_f32(values, vec![values.len()])
}

fn mask_view(mask: &[bool]) -> BufferView {
    let words: Vec<u32> = mask.iter().map(|&b| u32::from(b)).collect();
    BufferView::from_u32(&words, vec![words.len()])
}

fn decode<T: bytemuck::Pod>(bytes: &[u8], expected: usize) -> Result<Vec<T>, ComputeError> {
    let size = std::mem::size_of::<T>();
    if bytes.len() != expected * size {
        return Err(ComputeError::ShapeMismatch("kernel output has unexpected length"));
    }
    Ok(bytes.chunks_exact(size).map(bytemuck::pod_read_unaligned).collect())
}

impl BatchOps {
    #[must_use]
    pub fn new(backend: Arc<dyn ComputeBackend>) -> Self {
        Self { backend }
    }

    fn run(&self, kernel: Kernel, a: BufferView, b: BufferView, out: (usize, DType)) -> Result<Vec<u8>, ComputeError> {
        let (out_len, out_dtype) = out;
        let binds = [a, b, BufferView::placeholder(out_len, out_dtype)];
        let mut outputs = self
            .backend
            .dispatch(&kernel, &binds, compute::workgroups_for(out_len))?;
        if outputs.is_empty() {
            return Err(ComputeError::ShapeMismatch("kernel returned no output buffer"));
        }
        Ok(outputs.swap_remove(0))
    }

    /// Elementwise `a - b` over position batches.
    ///
    /// # Errors
    ///
    /// Fails if the batches differ in length.
    pub fn sub(&self, a: &[Vec3], b: &[Vec3]) -> Result<Vec<Vec3>, ComputeError> {
        let bytes = self.run(Kernel::Sub, points(a), points(b), (a.len() * 3, DType::F32))?;
        decode(&bytes, a.len())
    }

    /// Per-environment Euclidean distance between two position batches.
    ///
    /// # Errors
    ///
    /// Fails if the batches differ in length.
    pub fn distance(&self, a: &[Vec3], b: &[Vec3]) -> Result<Vec<f32>, ComputeError> {
        let bytes = self.run(Kernel::Distance3, points(a), points(b), (a.len(), DType::F32))?;
        decode(&bytes, a.len())
    }

    /// One coordinate of every position.
    ///
    /// # Errors
    ///
    /// Propagates kernel failures.
    pub fn axis(&self, values: &[Vec3], axis: Axis) -> Result<Vec<f32>, ComputeError> {
        let axis_buf = BufferView::from_u32(&[axis.index()], vec![1]);
        let bytes = self.run(Kernel::SelectAxis, points(values), axis_buf, (values.len(), DType::F32))?;
        decode(&bytes, values.len())
    }

    /// `values + offset`, computed as `values - (-offset)` on the backend.
    ///
    /// # Errors
    ///
    /// Propagates kernel failures.
    pub fn shift(&self, values: &[f32], offset: f32) -> Result<Vec<f32>, ComputeError> {
        let neg = vec![-offset; values.len()];
        let bytes = self.run(Kernel::Sub, scalars(values), scalars(&neg), (values.len(), DType::F32))?;
        decode(&bytes, values.len())
    }

    /// Strict `lhs < rhs`.
    ///
    /// # Errors
    ///
    /// Fails if the slices differ in length.
    pub fn less_than(&self, lhs: &[f32], rhs: &[f32]) -> Result<Mask, ComputeError> {
        let bytes = self.run(Kernel::LessThan, scalars(lhs), scalars(rhs), (lhs.len(), DType::U32))?;
        Ok(decode::<u32>(&bytes, lhs.len())?.into_iter().map(|w| w != 0).collect())
    }

    /// Strict `lhs > rhs`.
    ///
    /// # Errors
    ///
    /// Fails if the slices differ in length.
    pub fn greater_than(&self, lhs: &[f32], rhs: &[f32]) -> Result<Mask, ComputeError> {
        let bytes = self.run(Kernel::GreaterThan, scalars(lhs), scalars(rhs), (lhs.len(), DType::U32))?;
        Ok(decode::<u32>(&bytes, lhs.len())?.into_iter().map(|w| w != 0).collect())
    }

    /// Strict `lhs < threshold` against one scalar.
    ///
    /// # Errors
    ///
    /// Propagates kernel failures.
    pub fn below(&self, lhs: &[f32], threshold: f32) -> Result<Mask, ComputeError> {
        self.less_than(lhs, &vec![threshold; lhs.len()])
    }

    /// Strict `lhs > threshold` against one scalar.
    ///
    /// # Errors
    ///
    /// Propagates kernel failures.
    pub fn above(&self, lhs: &[f32], threshold: f32) -> Result<Mask, ComputeError> {
        self.greater_than(lhs, &vec![threshold; lhs.len()])
    }

    /// # Errors
    ///
    /// Fails if the masks differ in length.
    pub fn and(&self, a: &[bool], b: &[bool]) -> Result<Mask, ComputeError> {
        let bytes = self.run(Kernel::LogicalAnd, mask_view(a), mask_view(b), (a.len(), DType::U32))?;
        Ok(decode::<u32>(&bytes, a.len())?.into_iter().map(|w| w != 0).collect())
    }

    /// Folds masks with logical AND, starting from all-true over `num_envs`.
    ///
    /// # Errors
    ///
    /// Fails if any mask length differs from `num_envs`.
    pub fn all<'a, I>(&self, num_envs: usize, masks: I) -> Result<Mask, ComputeError>
    where
        I: IntoIterator<Item = &'a [bool]>,
    {
        masks
            .into_iter()
            .try_fold(vec![true; num_envs], |acc, mask| self.and(&acc, mask))
    }
}
