//! Generator-level settings and the per-actor subtask table.

use crate::{DatagenError, SelectionStrategy, SubtaskSegment, SubtaskSequence};
use scene::EntityRegistry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Knobs for the demonstration generator itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatagenConfig {
    pub name: String,
    /// Keep generating until `generation_num_trials` successes are recorded.
    pub generation_guarantee: bool,
    pub generation_keep_failed: bool,
    pub generation_num_trials: u32,
    pub generation_select_src_per_subtask: bool,
    pub generation_transform_first_robot_pose: bool,
    pub generation_interpolate_from_last_target_pose: bool,
    pub generation_relative: bool,
    pub max_num_failures: u32,
    pub seed: u64,
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            generation_guarantee: true,
            generation_keep_failed: false,
            generation_num_trials: 10,
            generation_select_src_per_subtask: false,
            generation_transform_first_robot_pose: false,
            generation_interpolate_from_last_target_pose: true,
            generation_relative: false,
            max_num_failures: 50,
            seed: 1,
        }
    }
}

/// Everything the generator needs to know about one task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MimicTaskConfig {
    #[serde(default)]
    pub datagen_config: DatagenConfig,
    /// Subtask sequence per actor, keyed by actor name.
    pub subtask_configs: BTreeMap<String, SubtaskSequence>,
}

impl MimicTaskConfig {
    /// # Errors
    ///
    /// Returns [`DatagenError::Json`] on malformed input or when any segment
    /// or sequence fails validation.
    pub fn from_json(json: &str) -> Result<Self, DatagenError> {
        let config: Self = serde_json::from_str(json)?;
        tracing::debug!(
            name = %config.datagen_config.name,
            actors = config.subtask_configs.len(),
            "loaded mimic task config"
        );
        Ok(config)
    }

    /// The pen pick-and-place task for a single SO-101 follower arm.
    ///
    /// # Errors
    ///
    /// Only fails if the built-in table stops validating.
    pub fn pick_pen() -> Result<Self, DatagenError> {
        let approach = |object: &str, signal: &str, next: &str| {
            SubtaskSegment::builder()
                .object_ref(object)
                .term_signal(signal)
                .term_offset_range(10, 20)
                .selection_strategy(SelectionStrategy::NearestNeighborObject)
                .selection_kwarg("nn_k", 3)
                .action_noise(0.003)
                .num_interpolation_steps(5)
                .num_fixed_steps(0)
                .apply_noise_during_interpolation(false)
                .next_subtask_description(next)
        };

        let sequence = SubtaskSequence::new(vec![
            approach("MechanicalPencil", "pick_pen", "Put Pen to plate")
                .description("Pick pen")
                .build()?,
            approach("Plate", "put_pen_to_plate", "Rest robot").build()?,
            SubtaskSegment::builder()
                .action_noise(0.003)
                .num_interpolation_steps(5)
                .build()?,
        ])?;

        Ok(Self {
            datagen_config: DatagenConfig {
                name: "pick_pen_leisaac_task_v0".to_string(),
                generation_guarantee: true,
                generation_keep_failed: true,
                generation_num_trials: 10,
                generation_select_src_per_subtask: true,
                generation_transform_first_robot_pose: false,
                generation_interpolate_from_last_target_pose: true,
                generation_relative: true,
                max_num_failures: 25,
                seed: 42,
            },
            subtask_configs: BTreeMap::from([("so101_follower".to_string(), sequence)]),
        })
    }

    /// Checks every object reference against `scene` and every termination
    /// signal against the names the task produces.
    ///
    /// # Errors
    ///
    /// Returns [`DatagenError::UnknownObject`] or [`DatagenError::UnknownSignal`]
    /// for the first dangling name, in actor then stage order.
    pub fn validate_against<'a>(
        &self,
        scene: &dyn EntityRegistry,
        signals: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), DatagenError> {
        let known: HashSet<&str> = signals.into_iter().collect();
        for (actor, sequence) in &self.subtask_configs {
            for segment in sequence {
                if let Some(object) = segment.object_ref() {
                    scene
                        .resolve_entity(object)
                        .map_err(|e| DatagenError::UnknownObject(object.to_string(), e))?;
                }
                if let Some(signal) = segment.term_signal() {
                    if !known.contains(signal) {
                        return Err(DatagenError::UnknownSignal(signal.to_string()));
                    }
                }
            }
            tracing::trace!(actor = %actor, stages = sequence.len(), "subtasks validated");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_pen_preset_shape() {
        let config = MimicTaskConfig::pick_pen().unwrap();
        assert_eq!(config.datagen_config.name, "pick_pen_leisaac_task_v0");
        assert_eq!(config.datagen_config.seed, 42);

        let sequence = &config.subtask_configs["so101_follower"];
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.term_signals().collect::<Vec<_>>(), ["pick_pen", "put_pen_to_plate"]);
        assert_eq!(sequence.object_refs().collect::<Vec<_>>(), ["MechanicalPencil", "Plate"]);

        let last = &sequence.segments()[2];
        assert_eq!(last.term_signal(), None);
        assert_eq!(last.selection_strategy(), SelectionStrategy::Random);
        assert!(last.selection_kwargs().is_empty());
        assert_eq!(sequence.segments()[0].nn_k(), Some(3));
    }

    #[test]
    fn datagen_defaults_fill_missing_fields() {
        let config: DatagenConfig = serde_json::from_str(r#"{ "name": "x", "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.generation_num_trials, DatagenConfig::default().generation_num_trials);
    }
}
