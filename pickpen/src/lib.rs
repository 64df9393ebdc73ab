//! # pickpen
//!
//! Success checks and demonstration segmentation for a batched pick-and-place
//! task: an SO-101 arm picks up a pen and puts it on a plate, across many
//! simulated environments at once.
//!
//! ## The Crates
//!
//! -   **[`compute`]:** Element-wise kernels over flat buffers behind a
//!     backend trait, with a CPU implementation.
//! -   **[`scene`]:** Entity poses, joint state and per-environment origins,
//!     resolved by name once.
//! -   **[`goals`]:** Grasp, placement, rest and completion predicates, and
//!     the task config that wires them together.
//! -   **[`datagen`]:** Subtask sequences for the demonstration generator and
//!     the segmenter that cuts recorded episodes with them.
//!
//! The binary drives all of this from JSON files; see [`app`].

pub mod app;

pub use compute;
pub use datagen;
pub use goals;
pub use scene;
