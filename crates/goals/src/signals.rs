use crate::{BatchOps, GoalError, Mask, Predicate};
use scene::EntityRegistry;

/// Named predicates whose per-step values form the termination-signal trace.
///
/// A recorded trajectory is cut where each signal first rises from false to
/// true. Signals are kept and evaluated in insertion order.
#[derive(Default)]
pub struct TermSignals {
    signals: Vec<(String, Box<dyn Predicate>)>,
}

impl TermSignals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`GoalError::DuplicateSignal`] if `name` is already present.
    pub fn push(&mut self, name: impl Into<String>, predicate: Box<dyn Predicate>) -> Result<(), GoalError> {
        let name = name.into();
        if self.signals.iter().any(|(n, _)| *n == name) {
            return Err(GoalError::DuplicateSignal(name));
        }
        self.signals.push((name, predicate));
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.signals.iter().map(|(n, _)| n.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Evaluates every signal for the current step.
    ///
    /// # Errors
    ///
    /// Propagates the first predicate failure.
    pub fn evaluate(&self, scene: &dyn EntityRegistry, ops: &BatchOps) -> Result<Vec<(String, Mask)>, GoalError> {
        self.signals
            .iter()
            .map(|(name, predicate)| Ok((name.clone(), predicate.evaluate(scene, ops)?)))
            .collect()
    }
}
