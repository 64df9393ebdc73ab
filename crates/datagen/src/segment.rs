//! # Trajectory segmentation
//!
//! Cuts one recorded episode into per-subtask step ranges. Each stage with a
//! termination signal ends on the first rising edge of that signal, moved by
//! a signed random offset from the stage's range and clamped to the episode.
//! The last stage always runs to the end of the episode.

use crate::{DatagenError, SubtaskSequence};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-step boolean signals recorded over one episode, all the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<bool>>", into = "BTreeMap<String, Vec<bool>>")]
pub struct SignalTrace {
    signals: BTreeMap<String, Vec<bool>>,
    len: usize,
}

impl SignalTrace {
    /// # Errors
    ///
    /// Returns [`DatagenError::TraceLength`] if the signals disagree on the
    /// number of steps.
    pub fn new(signals: BTreeMap<String, Vec<bool>>) -> Result<Self, DatagenError> {
        let len = signals.values().next().map_or(0, Vec::len);
        if let Some((name, values)) = signals.iter().find(|(_, v)| v.len() != len) {
            return Err(DatagenError::TraceLength {
                name: name.clone(),
                expected: len,
                actual: values.len(),
            });
        }
        Ok(Self { signals, len })
    }

    /// # Errors
    ///
    /// Returns [`DatagenError::Json`] on malformed input or ragged signals.
    pub fn from_json(json: &str) -> Result<Self, DatagenError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[bool]> {
        self.signals.get(name).map(Vec::as_slice)
    }

    /// Index of the first false-to-true edge of `name`.
    ///
    /// A signal that is already true at step 0 has no edge there.
    ///
    /// # Errors
    ///
    /// Returns [`DatagenError::MissingTrace`] if `name` was not recorded.
    pub fn first_rise(&self, name: &str) -> Result<Option<usize>, DatagenError> {
        let values = self
            .get(name)
            .ok_or_else(|| DatagenError::MissingTrace(name.to_string()))?;
        Ok(values.windows(2).position(|w| !w[0] && w[1]).map(|i| i + 1))
    }
}

impl TryFrom<BTreeMap<String, Vec<bool>>> for SignalTrace {
    type Error = DatagenError;

    fn try_from(signals: BTreeMap<String, Vec<bool>>) -> Result<Self, Self::Error> {
        Self::new(signals)
    }
}

impl From<SignalTrace> for BTreeMap<String, Vec<bool>> {
    fn from(trace: SignalTrace) -> Self {
        trace.signals
    }
}

/// Half-open step range `[start, end)` of one subtask.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SegmentBounds {
    pub start: usize,
    pub end: usize,
}

impl SegmentBounds {
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Splits `trace` into one [`SegmentBounds`] per stage of `sequence`.
///
/// # Errors
///
/// Fails if a stage's signal was not recorded, never rises, or if the
/// resulting boundaries are not strictly increasing.
pub fn segment_trajectory(
    sequence: &SubtaskSequence,
    trace: &SignalTrace,
    rng: &mut fastrand::Rng,
) -> Result<Vec<SegmentBounds>, DatagenError> {
    let total = trace.len();
    let last = sequence.len() - 1;
    let mut bounds = Vec::with_capacity(sequence.len());
    let mut start = 0;

    for (index, segment) in sequence.iter().enumerate() {
        let end = match segment.term_signal() {
            Some(signal) if index != last => {
                let rise = trace
                    .first_rise(signal)?
                    .ok_or_else(|| DatagenError::NoTransition(signal.to_string()))?;
                let offset = segment.term_offset_range().sample(rng);
                let shift = offset.unsigned_abs() as usize;
                let end = if offset < 0 {
                    rise.saturating_sub(shift)
                } else {
                    rise.saturating_add(shift)
                };
                end.min(total)
            }
            _ => total,
        };

        if end <= start {
            return Err(DatagenError::OverlappingSegments { index, start, end });
        }
        tracing::trace!(index, start, end, "subtask segment");
        bounds.push(SegmentBounds { start, end });
        start = end;
    }

    Ok(bounds)
}
