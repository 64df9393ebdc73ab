//! # Subtask segments
//!
//! One [`SubtaskSegment`] describes one stage of a multi-stage task for the
//! demonstration generator: which object frame the stage is relative to,
//! which termination signal ends it, and how the generator should pick,
//! perturb and bridge into source data for it.
//!
//! Segments are immutable. They are built through [`SubtaskSegmentBuilder`]
//! or deserialised, and both paths run the same validation.

use crate::DatagenError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Inclusive range of signed step offsets added to a termination boundary.
/// Negative offsets move the boundary before the rising edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[i32; 2]", into = "[i32; 2]")]
pub struct OffsetRange {
    low: i32,
    high: i32,
}

impl OffsetRange {
    /// # Errors
    ///
    /// Returns [`DatagenError::InvertedOffsetRange`] if `low > high`.
    pub fn new(low: i32, high: i32) -> Result<Self, DatagenError> {
        if low > high {
            return Err(DatagenError::InvertedOffsetRange { low, high });
        }
        Ok(Self { low, high })
    }

    #[must_use]
    pub fn low(&self) -> i32 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Draws one offset uniformly from the inclusive range.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> i32 {
        rng.i32(self.low..=self.high)
    }
}

impl TryFrom<[i32; 2]> for OffsetRange {
    type Error = DatagenError;

    fn try_from(pair: [i32; 2]) -> Result<Self, Self::Error> {
        Self::new(pair[0], pair[1])
    }
}

impl From<OffsetRange> for [i32; 2] {
    fn from(range: OffsetRange) -> Self {
        [range.low, range.high]
    }
}

/// How the generator picks a source segment for a subtask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Uniformly at random.
    #[default]
    Random,
    /// Among the `nn_k` sources whose object pose is closest to the current one.
    NearestNeighborObject,
    /// Among the `nn_k` sources whose robot pose is closest to the current one.
    NearestNeighborRobotDistance,
}

/// Field-by-field description of a segment, validated into a [`SubtaskSegment`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubtaskSegmentBuilder {
    object_ref: Option<String>,
    subtask_term_signal: Option<String>,
    subtask_term_offset_range: [i32; 2],
    selection_strategy: SelectionStrategy,
    selection_strategy_kwargs: BTreeMap<String, Value>,
    action_noise: f32,
    num_interpolation_steps: u32,
    num_fixed_steps: u32,
    apply_noise_during_interpolation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_subtask_description: Option<String>,
}

impl Default for SubtaskSegmentBuilder {
    fn default() -> Self {
        Self {
            object_ref: None,
            subtask_term_signal: None,
            subtask_term_offset_range: [0, 0],
            selection_strategy: SelectionStrategy::Random,
            selection_strategy_kwargs: BTreeMap::new(),
            action_noise: 0.03,
            num_interpolation_steps: 5,
            num_fixed_steps: 0,
            apply_noise_during_interpolation: false,
            description: None,
            next_subtask_description: None,
        }
    }
}

impl SubtaskSegmentBuilder {
    #[must_use]
    pub fn object_ref(mut self, name: impl Into<String>) -> Self {
        self.object_ref = Some(name.into());
        self
    }

    #[must_use]
    pub fn term_signal(mut self, name: impl Into<String>) -> Self {
        self.subtask_term_signal = Some(name.into());
        self
    }

    #[must_use]
    pub fn term_offset_range(mut self, low: i32, high: i32) -> Self {
        self.subtask_term_offset_range = [low, high];
        self
    }

    #[must_use]
    pub fn selection_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.selection_strategy = strategy;
        self
    }

    #[must_use]
    pub fn selection_kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.selection_strategy_kwargs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn action_noise(mut self, noise: f32) -> Self {
        self.action_noise = noise;
        self
    }

    #[must_use]
    pub fn num_interpolation_steps(mut self, steps: u32) -> Self {
        self.num_interpolation_steps = steps;
        self
    }

    #[must_use]
    pub fn num_fixed_steps(mut self, steps: u32) -> Self {
        self.num_fixed_steps = steps;
        self
    }

    #[must_use]
    pub fn apply_noise_during_interpolation(mut self, apply: bool) -> Self {
        self.apply_noise_during_interpolation = apply;
        self
    }

    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    #[must_use]
    pub fn next_subtask_description(mut self, text: impl Into<String>) -> Self {
        self.next_subtask_description = Some(text.into());
        self
    }

    /// # Errors
    ///
    /// Fails on an inverted offset range, negative or non-finite noise, or a
    /// non-positive `nn_k`.
    pub fn build(self) -> Result<SubtaskSegment, DatagenError> {
        SubtaskSegment::try_from(self)
    }
}

/// One validated stage of a multi-stage task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubtaskSegmentBuilder", into = "SubtaskSegmentBuilder")]
pub struct SubtaskSegment {
    object_ref: Option<String>,
    term_signal: Option<String>,
    term_offset_range: OffsetRange,
    selection_strategy: SelectionStrategy,
    selection_kwargs: BTreeMap<String, Value>,
    action_noise: f32,
    num_interpolation_steps: u32,
    num_fixed_steps: u32,
    apply_noise_during_interpolation: bool,
    description: Option<String>,
    next_subtask_description: Option<String>,
}

impl SubtaskSegment {
    #[must_use]
    pub fn builder() -> SubtaskSegmentBuilder {
        SubtaskSegmentBuilder::default()
    }

    /// Object whose frame the stage is expressed in; `None` for robot-only
    /// stages such as returning to rest.
    #[must_use]
    pub fn object_ref(&self) -> Option<&str> {
        self.object_ref.as_deref()
    }

    /// Signal whose first rising edge ends the stage; `None` runs to the end
    /// of the episode.
    #[must_use]
    pub fn term_signal(&self) -> Option<&str> {
        self.term_signal.as_deref()
    }

    #[must_use]
    pub fn term_offset_range(&self) -> OffsetRange {
        self.term_offset_range
    }

    #[must_use]
    pub fn selection_strategy(&self) -> SelectionStrategy {
        self.selection_strategy
    }

    /// Strategy parameters exactly as configured.
    #[must_use]
    pub fn selection_kwargs(&self) -> &BTreeMap<String, Value> {
        &self.selection_kwargs
    }

    /// Neighbour count for the nearest-neighbour strategies, if set.
    #[must_use]
    pub fn nn_k(&self) -> Option<usize> {
        self.selection_kwargs
            .get("nn_k")
            .and_then(Value::as_u64)
            .and_then(|k| usize::try_from(k).ok())
    }

    #[must_use]
    pub fn action_noise(&self) -> f32 {
        self.action_noise
    }

    #[must_use]
    pub fn num_interpolation_steps(&self) -> u32 {
        self.num_interpolation_steps
    }

    #[must_use]
    pub fn num_fixed_steps(&self) -> u32 {
        self.num_fixed_steps
    }

    #[must_use]
    pub fn apply_noise_during_interpolation(&self) -> bool {
        self.apply_noise_during_interpolation
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn next_subtask_description(&self) -> Option<&str> {
        self.next_subtask_description.as_deref()
    }
}

impl TryFrom<SubtaskSegmentBuilder> for SubtaskSegment {
    type Error = DatagenError;

    fn try_from(b: SubtaskSegmentBuilder) -> Result<Self, Self::Error> {
        let [low, high] = b.subtask_term_offset_range;
        let term_offset_range = OffsetRange::new(low, high)?;

        if !(b.action_noise.is_finite() && b.action_noise >= 0.0) {
            return Err(DatagenError::InvalidActionNoise(b.action_noise));
        }

        if let Some(k) = b.selection_strategy_kwargs.get("nn_k") {
            if !k.as_u64().is_some_and(|k| k > 0) {
                return Err(DatagenError::InvalidKwarg {
                    key: "nn_k".to_string(),
                    reason: "must be a positive integer",
                });
            }
        }

        Ok(Self {
            object_ref: b.object_ref,
            term_signal: b.subtask_term_signal,
            term_offset_range,
            selection_strategy: b.selection_strategy,
            selection_kwargs: b.selection_strategy_kwargs,
            action_noise: b.action_noise,
            num_interpolation_steps: b.num_interpolation_steps,
            num_fixed_steps: b.num_fixed_steps,
            apply_noise_during_interpolation: b.apply_noise_during_interpolation,
            description: b.description,
            next_subtask_description: b.next_subtask_description,
        })
    }
}

impl From<SubtaskSegment> for SubtaskSegmentBuilder {
    fn from(s: SubtaskSegment) -> Self {
        Self {
            object_ref: s.object_ref,
            subtask_term_signal: s.term_signal,
            subtask_term_offset_range: s.term_offset_range.into(),
            selection_strategy: s.selection_strategy,
            selection_strategy_kwargs: s.selection_kwargs,
            action_noise: s.action_noise,
            num_interpolation_steps: s.num_interpolation_steps,
            num_fixed_steps: s.num_fixed_steps,
            apply_noise_during_interpolation: s.apply_noise_during_interpolation,
            description: s.description,
            next_subtask_description: s.next_subtask_description,
        }
    }
}
