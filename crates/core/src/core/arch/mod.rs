//! RISC-V architectural state of a trapped hart.
//!
//! This module contains the register images the engine reads and writes:
//! 1. **Context:** The saved hart state borrowed for one trap.
//! 2. **CSRs:** Addresses and field masks of the inspected CSRs.
//! 3. **FPRs:** Floating-Point Register file with NaN boxing.
//! 4. **GPRs:** General-Purpose Register file with `x0` hardwired.

/// Saved hart state for one trap.
pub mod context;

/// Control and Status Register (CSR) definitions.
pub mod csr;

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;

pub use context::{TrapContext, Xlen};
