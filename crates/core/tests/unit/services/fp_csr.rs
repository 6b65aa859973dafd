//! # Floating-Point CSR Adapter Tests
//!
//! `FpCsrFile` serves `fflags`, `frm` and `fcsr` from the context and hands
//! every other CSR to the wrapped emulator.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvtrap_core::common::CsrError;
use rvtrap_core::core::arch::csr::{FCSR, FFLAGS, FRM, MSTATUS_FS, MSTATUS_FS_DIRTY, MSTATUS_FS_INIT, MSTATUS_FS_OFF};
use rvtrap_core::core::arch::{TrapContext, Xlen};
use rvtrap_core::services::{CsrEmulator, FpCsrFile};

use crate::common::mocks::csr::{FakeCsr, MockCsr};

const HART: u32 = 0;

fn context(fcsr: u32) -> TrapContext {
    let mut ctx = TrapContext::new(Xlen::Rv64);
    ctx.mstatus = MSTATUS_FS_INIT;
    ctx.fcsr = fcsr;
    ctx
}

#[rstest]
#[case(FFLAGS, 0b1_0101)]
#[case(FRM, 0b110)]
#[case(FCSR, 0b110_10101)]
fn test_reads_fields_of_fcsr(#[case] csr: u16, #[case] expected: u64) {
    let mut file = FpCsrFile::new(FakeCsr::new());
    let mut ctx = context(0b110_10101);

    assert_eq!(file.read(csr, HART, &mut ctx), Ok(expected));
    assert!(file.inner().reads.is_empty());
}

#[test]
fn test_write_fflags_keeps_frm() {
    let mut file = FpCsrFile::new(FakeCsr::new());
    let mut ctx = context(0b010_00001);

    assert_eq!(file.write(FFLAGS, HART, &mut ctx, 0xFFFF_FF10), Ok(()));

    assert_eq!(ctx.fcsr, 0b010_10000);
    assert_eq!(ctx.mstatus & MSTATUS_FS, MSTATUS_FS_DIRTY);
}

#[test]
fn test_write_frm_keeps_fflags() {
    let mut file = FpCsrFile::new(FakeCsr::new());
    let mut ctx = context(0b000_00011);

    assert_eq!(file.write(FRM, HART, &mut ctx, 0b1_100), Ok(()));

    assert_eq!(ctx.fcsr, 0b100_00011);
}

#[test]
fn test_write_fcsr_masks_reserved_bits() {
    let mut file = FpCsrFile::new(FakeCsr::new());
    let mut ctx = context(0);

    assert_eq!(file.write(FCSR, HART, &mut ctx, 0xABCD), Ok(()));

    assert_eq!(ctx.fcsr, 0xCD);
    assert!(file.inner().writes.is_empty());
}

#[rstest]
#[case(FFLAGS)]
#[case(FRM)]
#[case(FCSR)]
fn test_fs_off_denies_access(#[case] csr: u16) {
    let mut file = FpCsrFile::new(FakeCsr::new());
    let mut ctx = context(0x1F);
    ctx.mstatus = MSTATUS_FS_OFF;

    assert_eq!(file.read(csr, HART, &mut ctx), Err(CsrError::Denied));
    assert_eq!(file.write(csr, HART, &mut ctx, 0), Err(CsrError::Denied));
    assert_eq!(ctx.fcsr, 0x1F, "nothing written");
    assert_eq!(ctx.mstatus & MSTATUS_FS, MSTATUS_FS_OFF);
}

#[test]
fn test_other_csrs_are_forwarded() {
    let mut fake = FakeCsr::new();
    fake.define(0x7C0, 9);
    let mut file = FpCsrFile::new(fake);
    let mut ctx = context(0);

    assert_eq!(file.read(0x7C0, HART, &mut ctx), Ok(9));
    assert_eq!(file.write(0x7C0, HART, &mut ctx, 10), Ok(()));
    assert_eq!(file.read(0x7FF, HART, &mut ctx), Err(CsrError::Unimplemented));

    let inner = file.into_inner();
    assert_eq!(inner.reads, vec![0x7C0, 0x7FF]);
    assert_eq!(inner.writes, vec![(0x7C0, 10)]);
    assert_eq!(ctx.mstatus & MSTATUS_FS, MSTATUS_FS_INIT, "forwarded writes leave FS alone");
}

#[test]
#[allow(unused_results)]
fn test_forwarding_ignores_fs_state() {
    let mut inner = MockCsr::new();
    inner.expect_read().times(1).returning(|csr, _, _| {
        assert_eq!(csr, 0x300);
        Ok(0x1800)
    });
    let mut file = FpCsrFile::new(inner);
    let mut ctx = context(0);
    ctx.mstatus = MSTATUS_FS_OFF;

    assert_eq!(file.read(0x300, HART, &mut ctx), Ok(0x1800));
}
