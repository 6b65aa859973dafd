//! Trap descriptors and error definitions.
//!
//! This module defines how emulation failures are reported. It provides:
//! 1. **Trap Descriptor:** [`TrapInfo`], built once per failed emulation attempt.
//! 2. **Emulation Errors:** [`EmulationError`], the reason an instruction was not emulated.
//! 3. **Collaborator Errors:** [`CsrError`] and [`RedirectError`].
//!
//! Every `EmulationError` collapses into exactly one `TrapInfo` through
//! [`EmulationError::into_trap`]. Only memory faults carry their own cause
//! and value; every other failure reuses the values captured at trap entry.

use thiserror::Error;

/// Trap descriptor forwarded to the trap redirector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrapInfo {
    /// Faulting program counter.
    pub epc: u64,
    /// Cause code (`mcause` encoding).
    pub cause: u64,
    /// Faulting value (`mtval` encoding).
    pub tval: u64,
}

impl TrapInfo {
    /// Creates a trap descriptor.
    pub const fn new(epc: u64, cause: u64, tval: u64) -> Self {
        Self { epc, cause, tval }
    }
}

/// Reason an instruction could not be emulated.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EmulationError {
    /// Field combination outside the emulated encodings.
    #[error("unsupported encoding {insn:#010x}: {reason}")]
    UnsupportedEncoding {
        /// Raw instruction word.
        insn: u32,
        /// Which check rejected it.
        reason: &'static str,
    },

    /// Rounding-mode field (or dynamic `frm`) holds a reserved value.
    #[error("reserved rounding mode {0:#05b}")]
    ReservedRoundingMode(u8),

    /// Precision tag other than single or double.
    #[error("unsupported precision tag {0:#04b}")]
    UnsupportedPrecision(u8),

    /// `mstatus.FS` is Off for the trapped context.
    #[error("floating point disabled in mstatus.FS")]
    FpDisabled,

    /// `WFI` executed while the hart was running a guest.
    #[error("wfi from virtualized context")]
    VirtualWfi,

    /// CSR collaborator refused the access.
    #[error("csr {csr:#05x} access failed: {source}")]
    CsrAccess {
        /// CSR number.
        csr: u16,
        /// Collaborator failure.
        source: CsrError,
    },

    /// Unprivileged memory access faulted.
    #[error("memory fault (cause {}, tval {:#x})", .0.cause, .0.tval)]
    MemoryFault(TrapInfo),
}

impl EmulationError {
    /// Shorthand for [`EmulationError::UnsupportedEncoding`].
    pub const fn unsupported(insn: u32, reason: &'static str) -> Self {
        Self::UnsupportedEncoding { insn, reason }
    }

    /// Converts the failure into the trap descriptor to forward.
    ///
    /// # Arguments
    ///
    /// * `original` - Descriptor built from the values saved at trap entry.
    ///
    /// # Returns
    ///
    /// `original` for every failure except memory faults, which keep their own
    /// cause and value. The program counter is always the original one.
    pub fn into_trap(self, original: TrapInfo) -> TrapInfo {
        match self {
            Self::MemoryFault(fault) => TrapInfo {
                epc: original.epc,
                cause: fault.cause,
                tval: fault.tval,
            },
            _ => original,
        }
    }
}

/// CSR collaborator failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CsrError {
    /// CSR number is not implemented.
    #[error("unimplemented csr")]
    Unimplemented,
    /// CSR exists but the trapped privilege level may not access it.
    #[error("access denied")]
    Denied,
    /// CSR is read-only.
    #[error("read-only csr")]
    ReadOnly,
}

/// Trap redirector failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RedirectError {
    /// No lower privilege level can accept the trap.
    #[error("no handler for cause {cause} at {epc:#x}")]
    NoHandler {
        /// Faulting program counter.
        epc: u64,
        /// Cause code.
        cause: u64,
    },
    /// Platform-specific failure reported by the redirector.
    #[error("redirect failed: {0}")]
    Platform(String),
}
