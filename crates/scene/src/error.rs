use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("unknown entity `{0}`")]
    UnknownEntity(String),
    #[error("unknown articulation `{0}`")]
    UnknownArticulation(String),
    #[error("`{0}` is registered twice")]
    DuplicateName(String),
    #[error("handle {0} does not belong to this scene")]
    StaleHandle(usize),
    #[error("shape mismatch for `{name}`: expected {expected} values, got {actual}")]
    ShapeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("articulation `{0}` has no joints")]
    NoJoints(String),
    #[error("invalid scene snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
