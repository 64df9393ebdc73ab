#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Demonstration generation config
//!
//! Describes how a recorded teleoperation episode is split into subtasks so
//! a generator can recombine and perturb them into new demonstrations.
//!
//! -   [`SubtaskSegment`]: one validated stage, with its object frame,
//!     termination signal and generation knobs.
//! -   [`SubtaskSequence`]: the ordered stages for one actor.
//! -   [`MimicTaskConfig`]: generator settings plus a sequence per actor,
//!     loadable from JSON or built from a preset.
//! -   [`segment_trajectory`]: cuts a recorded [`SignalTrace`] into step
//!     ranges following a sequence.

pub mod config;
pub mod error;
pub mod segment;
pub mod sequence;
pub mod subtask;

pub use config::{DatagenConfig, MimicTaskConfig};
pub use error::DatagenError;
pub use segment::{segment_trajectory, SegmentBounds, SignalTrace};
pub use sequence::SubtaskSequence;
pub use subtask::{OffsetRange, SelectionStrategy, SubtaskSegment, SubtaskSegmentBuilder};
