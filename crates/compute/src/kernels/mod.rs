// This module re-exports handlers for each kernel operation.

// Element-wise arithmetic
pub mod sub_op;
pub use sub_op::handle_sub;

// Geometry
pub mod distance_op;
pub use distance_op::handle_distance3;
pub mod select_axis_op;
pub use select_axis_op::handle_select_axis;

// Comparisons and masks
pub mod compare_op;
pub use compare_op::{handle_greater_than, handle_less_than};
pub mod logical_and_op;
pub use logical_and_op::handle_logical_and;
