use compute::ComputeError;
use scene::SceneError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoalError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("kernel dispatch failed: {0}")]
    Compute(#[from] ComputeError),
    #[error("degenerate range: low {low} must be below high {high}")]
    DegenerateRange { low: f32, high: f32 },
    #[error("threshold `{name}` must be finite, got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },
    #[error("rest pose joint `{0}` is missing from the robot")]
    UnknownJoint(String),
    #[error("signal `{0}` is defined twice")]
    DuplicateSignal(String),
    #[error("batch size mismatch for `{name}`: expected {expected}, got {actual}")]
    BatchMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("invalid task config: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn finite(name: &'static str, value: f32) -> Result<f32, GoalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GoalError::InvalidThreshold { name, value })
    }
}
