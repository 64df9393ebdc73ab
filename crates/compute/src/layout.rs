pub const STORAGE_IN: u32 = 0;
pub const STORAGE_IN2: u32 = 1; // second operand, or the axis uniform for SelectAxis
pub const STORAGE_OUT: u32 = 2;

const _: () = assert!(STORAGE_OUT == 2);

/// Return expected number of bindings for each kernel.
#[must_use]
pub const fn binding_count(kernel: &crate::Kernel) -> u32 {
    match kernel {
        crate::Kernel::Sub
        | crate::Kernel::Distance3
        | crate::Kernel::SelectAxis
        | crate::Kernel::LessThan
        | crate::Kernel::GreaterThan
        | crate::Kernel::LogicalAnd => STORAGE_OUT + 1,
    }
}
