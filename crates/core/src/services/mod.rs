//! Collaborator interfaces supplied by the surrounding firmware.
//!
//! The engine does not own CSR state, memory access or trap delivery. It
//! reaches them through the traits defined here:
//! 1. **CSR emulation:** [`CsrEmulator`], plus the [`FpCsrFile`] adapter that
//!    serves the floating-point CSRs from the trapped context.
//! 2. **Unprivileged memory:** [`UnprivilegedMemory`], loads and instruction
//!    fetches performed with the trapped context's privileges.
//! 3. **Trap redirection:** [`TrapRedirector`], the terminal call of every
//!    failure path.

/// Floating-point CSR adapter.
pub mod fp_csr;

/// Collaborator trait definitions.
pub mod traits;

pub use fp_csr::FpCsrFile;
pub use traits::{CsrEmulator, TrapRedirector, UnprivilegedMemory};

/// The collaborators serving one trap on one hart.
pub struct HartServices<'a> {
    /// CSR emulation collaborator.
    pub csr: &'a mut dyn CsrEmulator,
    /// Unprivileged memory access collaborator.
    pub memory: &'a mut dyn UnprivilegedMemory,
    /// Trap redirector.
    pub redirector: &'a mut dyn TrapRedirector,
}

impl<'a> HartServices<'a> {
    /// Bundles the three collaborators.
    pub fn new(
        csr: &'a mut dyn CsrEmulator,
        memory: &'a mut dyn UnprivilegedMemory,
        redirector: &'a mut dyn TrapRedirector,
    ) -> Self {
        Self {
            csr,
            memory,
            redirector,
        }
    }
}

impl std::fmt::Debug for HartServices<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HartServices").finish_non_exhaustive()
    }
}
