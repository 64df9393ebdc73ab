use crate::{DatagenError, SubtaskSegment};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered subtasks for one actor.
///
/// Every stage except the last must end on a termination signal, and no two
/// stages may share one. The last stage runs to the end of the episode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SubtaskSegment>", into = "Vec<SubtaskSegment>")]
pub struct SubtaskSequence {
    segments: Vec<SubtaskSegment>,
}

impl SubtaskSequence {
    /// # Errors
    ///
    /// Returns [`DatagenError::EmptySequence`],
    /// [`DatagenError::MissingTermSignal`] or
    /// [`DatagenError::DuplicateTermSignal`].
    pub fn new(segments: Vec<SubtaskSegment>) -> Result<Self, DatagenError> {
        let Some(last) = segments.len().checked_sub(1) else {
            return Err(DatagenError::EmptySequence);
        };

        let mut seen = HashSet::new();
        for (index, segment) in segments.iter().enumerate() {
            match segment.term_signal() {
                Some(signal) => {
                    if !seen.insert(signal) {
                        return Err(DatagenError::DuplicateTermSignal(signal.to_string()));
                    }
                }
                None if index != last => return Err(DatagenError::MissingTermSignal { index }),
                None => {}
            }
        }
        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[SubtaskSegment] {
        &self.segments
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubtaskSegment> {
        self.segments.iter()
    }

    /// Termination signals in stage order.
    pub fn term_signals(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(SubtaskSegment::term_signal)
    }

    /// Object references in stage order, skipping robot-only stages.
    pub fn object_refs(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(SubtaskSegment::object_ref)
    }
}

impl TryFrom<Vec<SubtaskSegment>> for SubtaskSequence {
    type Error = DatagenError;

    fn try_from(segments: Vec<SubtaskSegment>) -> Result<Self, Self::Error> {
        Self::new(segments)
    }
}

impl From<SubtaskSequence> for Vec<SubtaskSegment> {
    fn from(sequence: SubtaskSequence) -> Self {
        sequence.segments
    }
}

impl<'a> IntoIterator for &'a SubtaskSequence {
    type Item = &'a SubtaskSegment;
    type IntoIter = std::slice::Iter<'a, SubtaskSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(signal: Option<&str>) -> SubtaskSegment {
        let builder = SubtaskSegment::builder();
        match signal {
            Some(name) => builder.term_signal(name),
            None => builder,
        }
        .build()
        .unwrap()
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert!(matches!(SubtaskSequence::new(vec![]), Err(DatagenError::EmptySequence)));
    }

    #[test]
    fn only_last_stage_may_omit_signal() {
        let ok = SubtaskSequence::new(vec![stage(Some("a")), stage(None)]);
        assert!(ok.is_ok());

        let err = SubtaskSequence::new(vec![stage(None), stage(Some("a"))]).unwrap_err();
        assert!(matches!(err, DatagenError::MissingTermSignal { index: 0 }));
    }

    #[test]
    fn last_stage_may_also_have_a_signal() {
        let sequence = SubtaskSequence::new(vec![stage(Some("a")), stage(Some("b"))]).unwrap();
        assert_eq!(sequence.len(), 2);
        assert!(!sequence.is_empty());
        assert_eq!(sequence.term_signals().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn duplicate_signals_are_rejected() {
        let err = SubtaskSequence::new(vec![stage(Some("a")), stage(Some("a")), stage(None)]).unwrap_err();
        assert!(matches!(err, DatagenError::DuplicateTermSignal(name) if name == "a"));
    }
}
