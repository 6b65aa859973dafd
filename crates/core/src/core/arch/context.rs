//! Trapped register context.
//!
//! The complete saved machine state of a hart for the duration of one trap.
//! The trap-entry code owns it; the engine borrows it mutably, reads operands
//! from it and commits results into it. It provides:
//! 1. **Register Access:** GPR reads/writes (x0 hardwired) and width-aware FPR access.
//! 2. **Status Inspection:** `mstatus.FS`, guest (`MPV`) detection and `fcsr` fields.
//! 3. **Trap Values:** The saved `mepc`/`mcause`/`mtval` used to build trap descriptors.

use super::csr::{
    FCSR_FFLAGS_MASK, FCSR_FRM_MASK, FCSR_FRM_SHIFT, MSTATUS_FS, MSTATUS_FS_DIRTY, MSTATUS_FS_OFF,
    MSTATUS_MPV, MSTATUSH_MPV,
};
use super::fpr::Fpr;
use super::gpr::Gpr;
use crate::common::TrapInfo;
use crate::core::units::fpu::exception_flags::FpFlags;
use crate::isa::rv64f::Precision;

/// Native integer register width of the trapped hart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Xlen {
    /// 32-bit harts.
    Rv32,
    /// 64-bit harts.
    #[default]
    Rv64,
}

impl Xlen {
    /// Truncates a value to the register width.
    pub const fn mask(self, val: u64) -> u64 {
        match self {
            Self::Rv32 => val & 0xFFFF_FFFF,
            Self::Rv64 => val,
        }
    }

    /// Returns true when the 64-bit integer conversion forms exist.
    pub const fn has_64bit_ints(self) -> bool {
        matches!(self, Self::Rv64)
    }
}

/// Saved state of the trapped hart.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrapContext {
    /// Integer register image.
    pub gpr: Gpr,
    /// Floating-point register image.
    pub fpr: Fpr,
    /// Faulting program counter.
    pub mepc: u64,
    /// Trap cause.
    pub mcause: u64,
    /// Trap value (the faulting instruction, or zero).
    pub mtval: u64,
    /// Machine status at trap time.
    pub mstatus: u64,
    /// Upper half of machine status (RV32 only).
    pub mstatush: u64,
    /// Floating-point control and status (`frm` and `fflags`).
    pub fcsr: u32,
    xlen: Xlen,
}

impl TrapContext {
    /// Creates a zeroed context for a hart of the given width.
    pub fn new(xlen: Xlen) -> Self {
        Self {
            xlen,
            ..Self::default()
        }
    }

    /// Native integer width of the hart.
    pub const fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Reads an integer register; `x0` reads as zero.
    pub fn read_gpr(&self, idx: usize) -> u64 {
        self.gpr.read(idx)
    }

    /// Writes an integer register, truncated to XLEN; writes to `x0` are dropped.
    pub fn write_gpr(&mut self, idx: usize, val: u64) {
        self.gpr.write(idx, self.xlen.mask(val));
    }

    /// Reads a floating-point operand at the given width (NaN-box checked).
    pub fn read_fpr(&self, precision: Precision, idx: usize) -> u64 {
        self.fpr.read_as(precision, idx)
    }

    /// Writes a floating-point register at the given width and marks FS dirty.
    pub fn write_fpr(&mut self, precision: Precision, idx: usize, val: u64) {
        self.fpr.write_as(precision, idx, val);
        self.mark_fs_dirty();
    }

    /// Returns true unless `mstatus.FS` is Off.
    pub const fn fp_enabled(&self) -> bool {
        self.mstatus & MSTATUS_FS != MSTATUS_FS_OFF
    }

    /// Sets `mstatus.FS` to Dirty.
    pub fn mark_fs_dirty(&mut self) {
        self.mstatus |= MSTATUS_FS_DIRTY;
    }

    /// Returns true when the trap came from a virtualized (guest) context.
    pub const fn in_guest(&self) -> bool {
        match self.xlen {
            Xlen::Rv64 => self.mstatus & MSTATUS_MPV != 0,
            Xlen::Rv32 => self.mstatush & MSTATUSH_MPV != 0,
        }
    }

    /// Dynamic rounding mode field (`fcsr.frm`).
    pub const fn frm(&self) -> u8 {
        ((self.fcsr >> FCSR_FRM_SHIFT) & FCSR_FRM_MASK) as u8
    }

    /// Accrued exception flags (`fcsr.fflags`).
    pub const fn fflags(&self) -> FpFlags {
        FpFlags::from_bits((self.fcsr & FCSR_FFLAGS_MASK) as u8)
    }

    /// ORs newly raised flags into `fcsr.fflags`, marking FS dirty when any are set.
    pub fn accrue_fflags(&mut self, flags: FpFlags) {
        if !flags.is_empty() {
            self.fcsr |= u32::from(flags.bits());
            self.mark_fs_dirty();
        }
    }

    /// Advances the saved program counter past an emulated instruction.
    pub fn advance_pc(&mut self, len: u64) {
        self.mepc = self.xlen.mask(self.mepc.wrapping_add(len));
    }

    /// Trap descriptor made of the values saved at trap entry.
    ///
    /// # Arguments
    ///
    /// * `insn` - The faulting instruction word (fetched when `mtval` was zero).
    pub const fn original_trap(&self, insn: u32) -> TrapInfo {
        TrapInfo::new(self.mepc, self.mcause, insn as u64)
    }
}
