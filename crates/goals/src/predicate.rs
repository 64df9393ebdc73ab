use crate::{BatchOps, GoalError, Mask};
use scene::EntityRegistry;

/// One named sub-condition of a predicate, evaluated over the whole batch.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub label: String,
    pub mask: Mask,
}

impl Condition {
    #[must_use]
    pub fn new(label: impl Into<String>, mask: Mask) -> Self {
        Self { label: label.into(), mask }
    }

    #[must_use]
    pub fn passing(&self) -> usize {
        self.mask.iter().filter(|&&b| b).count()
    }
}

/// A pure, batched boolean decision over the current scene state.
///
/// Implementors list their sub-conditions in a fixed order; the verdict is
/// the logical AND of all of them.
pub trait Predicate: Send + Sync {
    /// Evaluates each sub-condition separately.
    ///
    /// # Errors
    ///
    /// Fails on stale handles, batch size mismatches or kernel failures.
    fn conditions(&self, scene: &dyn EntityRegistry, ops: &BatchOps) -> Result<Vec<Condition>, GoalError>;

    /// Folds [`Predicate::conditions`] into one mask.
    ///
    /// # Errors
    ///
    /// See [`Predicate::conditions`].
    fn evaluate(&self, scene: &dyn EntityRegistry, ops: &BatchOps) -> Result<Mask, GoalError> {
        let conditions = self.conditions(scene, ops)?;
        for condition in &conditions {
            tracing::trace!(
                condition = %condition.label,
                passing = condition.passing(),
                "sub-condition evaluated"
            );
        }
        Ok(ops.all(scene.num_envs(), conditions.iter().map(|c| c.mask.as_slice()))?)
    }
}

/// Fails unless a per-environment buffer covers exactly the scene's batch.
pub(crate) fn expect_batch(scene: &dyn EntityRegistry, name: &str, actual: usize) -> Result<(), GoalError> {
    let expected = scene.num_envs();
    if actual == expected {
        Ok(())
    } else {
        Err(GoalError::BatchMismatch { name: name.to_string(), expected, actual })
    }
}
