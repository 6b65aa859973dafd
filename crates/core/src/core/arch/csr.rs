//! Control and Status Register (CSR) definitions.
//!
//! Addresses and field masks for the registers the engine inspects or
//! updates while emulating a trapped instruction:
//! 1. **Floating-point CSRs:** `fflags`, `frm` and `fcsr`.
//! 2. **Status:** The `mstatus.FS` field and the virtualization (`MPV`) bit.

/// Floating-point accrued exceptions CSR address.
pub const FFLAGS: u16 = 0x001;

/// Floating-point dynamic rounding mode CSR address.
pub const FRM: u16 = 0x002;

/// Floating-point control and status register CSR address.
pub const FCSR: u16 = 0x003;

/// Floating-point state field mask in `mstatus` register.
pub const MSTATUS_FS: u64 = 3 << 13;

/// Floating-point state: off (no FPU state).
pub const MSTATUS_FS_OFF: u64 = 0;

/// Floating-point state: initial.
pub const MSTATUS_FS_INIT: u64 = 1 << 13;

/// Floating-point state: clean.
pub const MSTATUS_FS_CLEAN: u64 = 2 << 13;

/// Floating-point state: dirty (FPU state has been modified).
pub const MSTATUS_FS_DIRTY: u64 = 3 << 13;

/// Machine previous virtualization mode in `mstatus` (RV64).
pub const MSTATUS_MPV: u64 = 1 << 39;

/// Machine previous virtualization mode in `mstatush` (RV32).
pub const MSTATUSH_MPV: u64 = 1 << 7;

/// Accrued exception flags field of `fcsr` (bits 4:0).
pub const FCSR_FFLAGS_MASK: u32 = 0x1F;

/// Bit shift of the rounding mode field of `fcsr`.
pub const FCSR_FRM_SHIFT: u32 = 5;

/// Rounding mode field mask of `fcsr` (after shifting).
pub const FCSR_FRM_MASK: u32 = 0x7;

/// Writable bits of `fcsr`.
pub const FCSR_MASK: u32 = 0xFF;
