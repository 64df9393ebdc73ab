#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Scene state
//!
//! The boundary between a running simulator and the goal predicates. A scene
//! holds, for a batch of N environments tiled in one world:
//!
//! -   **Entity poses:** world-frame positions and orientations of rigid
//!     objects and frames (pen, plate, end-effector target), as [`PoseBatch`].
//! -   **Joint state:** per-environment joint positions of articulated robots,
//!     as [`JointState`].
//! -   **Environment origins:** the world offset of each environment, needed
//!     to compare positions environment-locally.
//!
//! The [`EntityRegistry`] trait is the read-only capability the predicates
//! consume. [`SceneBatch`] is the owned implementation, and
//! [`SceneSnapshot`] loads one from JSON.

pub mod error;
pub mod joints;
pub mod registry;
pub mod snapshot;
pub mod types;

pub use error::SceneError;
pub use joints::JointState;
pub use registry::{ArticulationId, EntityId, EntityRegistry, SceneBatch};
pub use snapshot::{ArticulationSnapshot, EntitySnapshot, SceneSnapshot};
pub use types::{PoseBatch, Quat, Vec3, IDENTITY_QUAT};
