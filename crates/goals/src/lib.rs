#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Goal predicates
//!
//! Batched success checks for a pick-and-place manipulation task, evaluated
//! once per simulation step over every environment of the batch at the same
//! time.
//!
//! ## Key Components
//!
//! -   **Predicates:** [`GraspPredicate`], [`PlacementPredicate`] and
//!     [`RestPosePredicate`] each produce one boolean per environment. They
//!     implement [`Predicate`], which exposes their sub-conditions
//!     separately and folds them with logical AND.
//! -   **Completion:** [`TaskCompletion`] combines per-object box checks with
//!     the rest pose into the episode's done mask.
//! -   **Signals:** [`TermSignals`] holds the named predicates whose rising
//!     edges cut a recorded demonstration into subtasks.
//! -   **Configuration:** [`TaskConfig`] wires entity names and thresholds
//!     together and resolves them against a scene once.
//!
//! All arithmetic runs through [`BatchOps`], which dispatches compute kernels
//! on the backend given at construction.
//!
//! ```rust,ignore
//! let scene = SceneSnapshot::from_json(&json)?.into_batch()?;
//! let task = TaskConfig::default().build(&scene, Arc::new(JointRangeRest::so101_follower()))?;
//! let outcome = task.step(&scene, &BatchOps::default())?;
//! ```

pub mod batch;
pub mod completion;
pub mod error;
pub mod grasp;
pub mod placement;
pub mod predicate;
pub mod range;
pub mod rest;
pub mod signals;
pub mod task;

pub use batch::{Axis, BatchOps, Mask};
pub use completion::{CompletionConfig, TaskCompletion};
pub use error::GoalError;
pub use grasp::{GraspConfig, GraspPredicate};
pub use placement::{PlacementConfig, PlacementPredicate};
pub use predicate::{Condition, Predicate};
pub use range::ValueRange;
pub use rest::{JointRangeRest, RestPoseCheck, RestPosePredicate};
pub use signals::TermSignals;
pub use task::{PickPlaceTask, SignalConfig, StepOutcome, TaskConfig};
