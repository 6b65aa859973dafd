//! Arithmetic handlers.
//!
//! Each one checks the precision tag, resolves the rounding mode, reads its
//! operands at that width and makes one provider call.

use super::{pin_rounding, precision};
use crate::common::EmulationError;
use crate::core::arch::TrapContext;
use crate::core::units::fpu::SoftFloat;
use crate::emulate::Writeback;
use crate::isa::decode::Decoded;
use crate::isa::rv64f::Precision;
use crate::isa::rv64f::opcodes::{FUSED_NEGATE_ADDEND_BIT, FUSED_NEGATE_PRODUCT_BIT};

/// `FADD` / `FSUB`.
///
/// # Arguments
///
/// * `negate` - Single-precision sign mask XORed into the second operand
///   (shifted into the double-precision sign position for doubles).
pub fn add_sub<F: SoftFloat>(
    fpu: &mut F,
    ctx: &TrapContext,
    decoded: &Decoded,
    negate: u32,
) -> Result<Writeback, EmulationError> {
    let p = precision(decoded)?;
    pin_rounding(fpu, ctx, decoded)?;
    let flip = match p {
        Precision::Single => u64::from(negate),
        Precision::Double => u64::from(negate) << 32,
    };
    let a = ctx.read_fpr(p, decoded.rs1);
    let b = ctx.read_fpr(p, decoded.rs2) ^ flip;
    Ok(fp_result(p, decoded, fpu.add(p, a, b)))
}

/// `FMUL`.
pub fn mul<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    let p = precision(decoded)?;
    pin_rounding(fpu, ctx, decoded)?;
    let a = ctx.read_fpr(p, decoded.rs1);
    let b = ctx.read_fpr(p, decoded.rs2);
    Ok(fp_result(p, decoded, fpu.mul(p, a, b)))
}

/// `FDIV`.
pub fn div<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    let p = precision(decoded)?;
    pin_rounding(fpu, ctx, decoded)?;
    let a = ctx.read_fpr(p, decoded.rs1);
    let b = ctx.read_fpr(p, decoded.rs2);
    Ok(fp_result(p, decoded, fpu.div(p, a, b)))
}

/// `FSQRT`; the rs2 field must be zero.
pub fn sqrt<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    if decoded.rs2 != 0 {
        return Err(EmulationError::unsupported(decoded.raw, "fsqrt with non-zero rs2"));
    }
    let p = precision(decoded)?;
    pin_rounding(fpu, ctx, decoded)?;
    let a = ctx.read_fpr(p, decoded.rs1);
    Ok(fp_result(p, decoded, fpu.sqrt(p, a)))
}

/// `FMADD`, `FMSUB`, `FNMSUB`, `FNMADD`.
///
/// Opcode bit 3 negates the product (via rs1), bit 2 negates the addend.
/// Reachable from the illegal-instruction path as well, so FS is checked
/// again here.
pub fn fused<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    if !ctx.fp_enabled() {
        return Err(EmulationError::FpDisabled);
    }
    let p = precision(decoded)?;
    pin_rounding(fpu, ctx, decoded)?;

    let sign = p.sign_mask();
    let negate_product = if decoded.raw & FUSED_NEGATE_PRODUCT_BIT != 0 { sign } else { 0 };
    let negate_addend = if decoded.raw & FUSED_NEGATE_ADDEND_BIT != 0 { sign } else { 0 };

    let a = ctx.read_fpr(p, decoded.rs1) ^ negate_product;
    let b = ctx.read_fpr(p, decoded.rs2);
    let c = ctx.read_fpr(p, decoded.rs3) ^ negate_addend;
    Ok(fp_result(p, decoded, fpu.mul_add(p, a, b, c)))
}

const fn fp_result(precision: Precision, decoded: &Decoded, value: u64) -> Writeback {
    Writeback::Fpr {
        precision,
        rd: decoded.rd,
        value,
    }
}
