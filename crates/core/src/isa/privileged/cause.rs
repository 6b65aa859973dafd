//! RISC-V Trap Cause Codes.
//!
//! Exception codes as they appear in `mcause` (interrupt bit clear). The
//! engine never synthesises a cause of its own; these exist so collaborators
//! and tests can speak the same numbers.

/// Exception definitions (MSB = 0).
pub mod exception {
    /// Illegal instruction (2).
    pub const ILLEGAL_INSTRUCTION: u64 = 2;
    /// Load access fault (5).
    pub const LOAD_ACCESS_FAULT: u64 = 5;
    /// Instruction page fault (12).
    pub const INSTRUCTION_PAGE_FAULT: u64 = 12;
    /// Load page fault (13).
    pub const LOAD_PAGE_FAULT: u64 = 13;
}
