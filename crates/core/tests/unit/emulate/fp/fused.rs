//! # Fused Multiply-Add Tests

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvtrap_core::core::units::fpu::FpFlags;
use rvtrap_core::isa::rv64f::opcodes::{OP_FMADD, OP_FMSUB, OP_FNMADD, OP_FNMSUB};

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::{TRAP_PC, TestHart};

fn fused_d(opcode: u32) -> u32 {
    InstructionBuilder::fused(opcode).double().rd(8).rs1(1).rs2(2).rs3(3).build()
}

fn fused_s(opcode: u32) -> u32 {
    InstructionBuilder::fused(opcode).single().rd(8).rs1(1).rs2(2).rs3(3).build()
}

#[rstest]
#[case(OP_FMADD, 7.0)]
#[case(OP_FMSUB, 5.0)]
#[case(OP_FNMSUB, -5.0)]
#[case(OP_FNMADD, -7.0)]
fn test_sign_variants(#[case] opcode: u32, #[case] expected: f64) {
    let mut hart = TestHart::new();
    hart.set_f64(1, 2.0);
    hart.set_f64(2, 3.0);
    hart.set_f64(3, 1.0);

    hart.fp_ok(fused_d(opcode));

    assert_eq!(hart.f64(8), expected);
    assert_eq!(hart.ctx.mepc, TRAP_PC + 4);
}

#[rstest]
#[case(OP_FMADD, 7.0)]
#[case(OP_FMSUB, 5.0)]
#[case(OP_FNMSUB, -5.0)]
#[case(OP_FNMADD, -7.0)]
fn test_sign_variants_single(#[case] opcode: u32, #[case] expected: f32) {
    let mut hart = TestHart::new();
    hart.set_f32(1, 2.0);
    hart.set_f32(2, 3.0);
    hart.set_f32(3, 1.0);

    hart.fp_ok(fused_s(opcode));

    assert_eq!(hart.f32(8), expected);
}

#[test]
fn test_single_rounding() {
    // (1 + 2^-12)^2 - (1 + 2^-11) is exactly 2^-24; a separate multiply
    // would round the product first and give zero.
    let a = 1.0 + 2.0_f32.powi(-12);
    let mut hart = TestHart::new();
    hart.set_f32(1, a);
    hart.set_f32(2, a);
    hart.set_f32(3, 1.0 + 2.0_f32.powi(-11));

    hart.fp_ok(fused_s(OP_FMSUB));

    assert_eq!(hart.f32(8), 2.0_f32.powi(-24));
    assert_eq!(hart.fflags(), FpFlags::NONE);
}

#[test]
fn test_infinity_times_zero_is_invalid() {
    let mut hart = TestHart::new();
    hart.set_f64(1, f64::INFINITY);
    hart.set_f64(2, 0.0);
    hart.set_f64(3, 1.0);

    hart.fp_ok(fused_d(OP_FMADD));

    assert_eq!(hart.f_raw(8), 0x7FF8_0000_0000_0000);
    assert_eq!(hart.fflags(), FpFlags::NV);
}

#[test]
fn test_fused_counted_in_stats() {
    let mut hart = TestHart::new();
    hart.fp_ok(fused_d(OP_FNMADD));
    assert_eq!(hart.engine.stats().fp_fused, 1);
    assert_eq!(hart.engine.stats().fp_arith, 0);
}
