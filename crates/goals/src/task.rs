//! # Task definition
//!
//! A [`TaskConfig`] names the scene entities and thresholds of a pick-and-place
//! task. Building it against a scene resolves every name once and yields a
//! [`PickPlaceTask`] that is evaluated every step.

use crate::{
    BatchOps, CompletionConfig, GoalError, GraspConfig, GraspPredicate, Mask, PlacementConfig,
    PlacementPredicate, Predicate, RestPoseCheck, RestPosePredicate, TaskCompletion, TermSignals,
};
use scene::EntityRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One termination signal of the task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalConfig {
    Grasp {
        name: String,
        object: String,
        #[serde(default)]
        config: GraspConfig,
    },
    Placement {
        name: String,
        object: String,
        container: String,
        #[serde(default)]
        config: PlacementConfig,
    },
}

impl SignalConfig {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            SignalConfig::Grasp { name, .. } | SignalConfig::Placement { name, .. } => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    pub robot: String,
    /// Frame whose position is the gripper's grasp point.
    pub ee_frame: String,
    /// Objects that must all end up in the container, in evaluation order.
    pub objects: Vec<String>,
    pub container: String,
    pub completion: CompletionConfig,
    pub signals: Vec<SignalConfig>,
}

impl Default for TaskConfig {
    /// The pen-on-plate task: grasp the pencil, release it over the plate,
    /// return to rest.
    fn default() -> Self {
        Self {
            robot: "robot".to_string(),
            ee_frame: "ee_frame".to_string(),
            objects: vec!["MechanicalPencil".to_string()],
            container: "Plate".to_string(),
            completion: CompletionConfig::default(),
            signals: vec![
                SignalConfig::Grasp {
                    name: "pick_pen".to_string(),
                    object: "MechanicalPencil".to_string(),
                    config: GraspConfig::default(),
                },
                SignalConfig::Placement {
                    name: "put_pen_to_plate".to_string(),
                    object: "MechanicalPencil".to_string(),
                    container: "Plate".to_string(),
                    config: PlacementConfig::default(),
                },
            ],
        }
    }
}

impl TaskConfig {
    /// # Errors
    ///
    /// Returns [`GoalError::Json`] for malformed input or invalid ranges.
    pub fn from_json(json: &str) -> Result<Self, GoalError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves every entity name against `scene`.
    ///
    /// # Errors
    ///
    /// Fails fast on unknown names, non-finite thresholds or duplicate
    /// signal names.
    pub fn build(&self, scene: &dyn EntityRegistry, rest: Arc<dyn RestPoseCheck>) -> Result<PickPlaceTask, GoalError> {
        let mut signals = TermSignals::new();
        for signal in &self.signals {
            let predicate: Box<dyn Predicate> = match signal {
                SignalConfig::Grasp { object, config, .. } => Box::new(GraspPredicate::resolve(
                    scene,
                    &self.robot,
                    &self.ee_frame,
                    object,
                    *config,
                )?),
                SignalConfig::Placement { object, container, config, .. } => Box::new(PlacementPredicate::resolve(
                    scene,
                    &self.robot,
                    &self.ee_frame,
                    object,
                    container,
                    *config,
                )?),
            };
            signals.push(signal.name(), predicate)?;
        }

        let rest = RestPosePredicate::resolve(scene, &self.robot, rest)?;
        let done = TaskCompletion::resolve(scene, &self.objects, &self.container, self.completion, rest)?;

        tracing::debug!(
            signals = signals.len(),
            objects = self.objects.len(),
            container = %self.container,
            "task resolved"
        );
        Ok(PickPlaceTask { signals, done })
    }
}

/// Per-step result: one mask per termination signal plus the done mask.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepOutcome {
    pub signals: Vec<(String, Mask)>,
    pub done: Mask,
}

impl StepOutcome {
    #[must_use]
    pub fn signal(&self, name: &str) -> Option<&Mask> {
        self.signals.iter().find(|(n, _)| n == name).map(|(_, m)| m)
    }
}

pub struct PickPlaceTask {
    signals: TermSignals,
    done: TaskCompletion,
}

impl PickPlaceTask {
    #[must_use]
    pub fn signals(&self) -> &TermSignals {
        &self.signals
    }

    #[must_use]
    pub fn completion(&self) -> &TaskCompletion {
        &self.done
    }

    /// Evaluates all signals and the done predicate for the current step.
    ///
    /// # Errors
    ///
    /// Propagates predicate failures.
    pub fn step(&self, scene: &dyn EntityRegistry, ops: &BatchOps) -> Result<StepOutcome, GoalError> {
        Ok(StepOutcome {
            signals: self.signals.evaluate(scene, ops)?,
            done: self.done.evaluate(scene, ops)?,
        })
    }
}
