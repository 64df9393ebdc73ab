use scene::SceneError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatagenError {
    #[error("offset range [{low}, {high}] is inverted")]
    InvertedOffsetRange { low: i32, high: i32 },
    #[error("action noise must be finite and non-negative, got {0}")]
    InvalidActionNoise(f32),
    #[error("selection kwarg `{key}` is invalid: {reason}")]
    InvalidKwarg { key: String, reason: &'static str },
    #[error("subtask sequence is empty")]
    EmptySequence,
    #[error("subtask {index} is not the last stage but has no termination signal")]
    MissingTermSignal { index: usize },
    #[error("termination signal `{0}` is used by more than one subtask")]
    DuplicateTermSignal(String),
    #[error("object reference `{0}` does not name a scene entity")]
    UnknownObject(String, #[source] SceneError),
    #[error("termination signal `{0}` is not produced by the task")]
    UnknownSignal(String),
    #[error("signal `{0}` is missing from the recorded trace")]
    MissingTrace(String),
    #[error("signal `{name}` has {actual} steps, expected {expected}")]
    TraceLength {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("signal `{0}` never rises from false to true")]
    NoTransition(String),
    #[error("subtask {index} would end at step {end}, not after step {start}")]
    OverlappingSegments { index: usize, start: usize, end: usize },
    #[error("invalid datagen config: {0}")]
    Json(#[from] serde_json::Error),
}
