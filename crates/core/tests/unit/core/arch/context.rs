//! # Trapped Context Tests
//!
//! Status inspection, XLEN truncation, flag accrual and the trap values
//! captured at entry.

use rvtrap_core::core::arch::csr::{
    MSTATUS_FS, MSTATUS_FS_CLEAN, MSTATUS_FS_DIRTY, MSTATUS_FS_INIT, MSTATUS_MPV, MSTATUSH_MPV,
};
use rvtrap_core::core::arch::{TrapContext, Xlen};
use rvtrap_core::core::units::fpu::FpFlags;
use rvtrap_core::isa::rv64f::Precision;

#[test]
fn test_fs_states() {
    let mut ctx = TrapContext::new(Xlen::Rv64);
    assert!(!ctx.fp_enabled(), "a zeroed context has FS off");
    for fs in [MSTATUS_FS_INIT, MSTATUS_FS_CLEAN, MSTATUS_FS_DIRTY] {
        ctx.mstatus = fs;
        assert!(ctx.fp_enabled());
    }
}

#[test]
fn test_fpr_write_marks_fs_dirty() {
    let mut ctx = TrapContext::new(Xlen::Rv64);
    ctx.mstatus = MSTATUS_FS_CLEAN;
    ctx.write_fpr(Precision::Double, 1, 0);
    assert_eq!(ctx.mstatus & MSTATUS_FS, MSTATUS_FS_DIRTY);
}

#[test]
fn test_guest_detection_per_xlen() {
    let mut rv64 = TrapContext::new(Xlen::Rv64);
    assert!(!rv64.in_guest());
    rv64.mstatus |= MSTATUS_MPV;
    assert!(rv64.in_guest());

    let mut rv32 = TrapContext::new(Xlen::Rv32);
    rv32.mstatus |= MSTATUS_MPV;
    assert!(!rv32.in_guest(), "RV32 keeps MPV in mstatush");
    rv32.mstatush = MSTATUSH_MPV;
    assert!(rv32.in_guest());
}

#[test]
fn test_rv32_gpr_writes_truncate() {
    let mut ctx = TrapContext::new(Xlen::Rv32);
    ctx.write_gpr(5, 0xFFFF_FFFF_8000_0000);
    assert_eq!(ctx.read_gpr(5), 0x8000_0000);

    let mut ctx = TrapContext::new(Xlen::Rv64);
    ctx.write_gpr(5, 0xFFFF_FFFF_8000_0000);
    assert_eq!(ctx.read_gpr(5), 0xFFFF_FFFF_8000_0000);
}

#[test]
fn test_accrue_fflags() {
    let mut ctx = TrapContext::new(Xlen::Rv64);
    ctx.mstatus = MSTATUS_FS_INIT;
    ctx.fcsr = 0b010_00001;

    ctx.accrue_fflags(FpFlags::NONE);
    assert_eq!(ctx.mstatus & MSTATUS_FS, MSTATUS_FS_INIT, "no flags, no dirtying");

    ctx.accrue_fflags(FpFlags::NV | FpFlags::DZ);
    assert_eq!(ctx.fflags(), FpFlags::NV | FpFlags::DZ | FpFlags::NX);
    assert_eq!(ctx.frm(), 0b010, "frm untouched");
    assert_eq!(ctx.mstatus & MSTATUS_FS, MSTATUS_FS_DIRTY);
}

#[test]
fn test_advance_pc_wraps_at_xlen() {
    let mut ctx = TrapContext::new(Xlen::Rv32);
    ctx.mepc = 0xFFFF_FFFE;
    ctx.advance_pc(4);
    assert_eq!(ctx.mepc, 2);
}

#[test]
fn test_original_trap() {
    let mut ctx = TrapContext::new(Xlen::Rv64);
    ctx.mepc = 0x8000_0000;
    ctx.mcause = 2;
    ctx.mtval = 0;
    let trap = ctx.original_trap(0x0000_3007);
    assert_eq!((trap.epc, trap.cause, trap.tval), (0x8000_0000, 2, 0x3007));
}
