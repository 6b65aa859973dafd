//! Collaborator traits.
//!
//! All three are object safe; the engine holds them as `&mut dyn` for the
//! duration of a single trap.

use crate::common::{CsrError, RedirectError, TrapInfo};
use crate::core::arch::TrapContext;

/// CSR emulation collaborator.
pub trait CsrEmulator {
    /// Reads a CSR on behalf of the trapped context.
    ///
    /// # Arguments
    ///
    /// * `csr` - 12-bit CSR number.
    /// * `hart_id` - Hart that trapped.
    /// * `ctx` - Trapped register context.
    fn read(&mut self, csr: u16, hart_id: u32, ctx: &mut TrapContext) -> Result<u64, CsrError>;

    /// Writes a CSR on behalf of the trapped context.
    ///
    /// # Arguments
    ///
    /// * `csr` - 12-bit CSR number.
    /// * `hart_id` - Hart that trapped.
    /// * `ctx` - Trapped register context.
    /// * `value` - New CSR value.
    fn write(&mut self, csr: u16, hart_id: u32, ctx: &mut TrapContext, value: u64) -> Result<(), CsrError>;
}

/// Memory access performed with the trapped context's privileges.
pub trait UnprivilegedMemory {
    /// Loads a double word.
    ///
    /// # Returns
    ///
    /// The loaded value, or the trap the access raised (its cause and value
    /// are forwarded as-is).
    fn load_u64(&mut self, addr: u64) -> Result<u64, TrapInfo>;

    /// Fetches the instruction at `pc` (16 or 32 bits, zero-extended).
    fn fetch_insn(&mut self, pc: u64) -> Result<u32, TrapInfo>;
}

/// Re-raises a trap to the next lower privilege level.
pub trait TrapRedirector {
    /// Delivers `trap` on behalf of the trapped context.
    fn redirect(&mut self, ctx: &mut TrapContext, trap: &TrapInfo) -> Result<(), RedirectError>;
}
