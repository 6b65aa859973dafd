//! Comparison handlers.

use super::precision;
use crate::common::EmulationError;
use crate::core::arch::TrapContext;
use crate::core::units::fpu::SoftFloat;
use crate::core::units::fpu::nan_handling::{canonical_nan, is_nan};
use crate::emulate::Writeback;
use crate::isa::decode::Decoded;
use crate::isa::rv64f::funct3::{Comparison, FMAX, FMIN};

/// `FLE` (funct3 0), `FLT` (1), `FEQ` (2); funct3 3 and above are illegal.
///
/// `FEQ` is quiet; `FLT` and `FLE` raise invalid for any NaN operand. The
/// result (0 or 1) goes to an integer register.
pub fn compare<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    let mode = Comparison::from_rm(decoded.rm)
        .ok_or_else(|| EmulationError::unsupported(decoded.raw, "reserved comparison"))?;
    let p = precision(decoded)?;
    let a = ctx.read_fpr(p, decoded.rs1);
    let b = ctx.read_fpr(p, decoded.rs2);

    let result = match mode {
        Comparison::Le => fpu.fle(p, a, b),
        Comparison::Lt => fpu.flt(p, a, b),
        Comparison::Eq => fpu.feq(p, a, b),
    };
    Ok(Writeback::Gpr {
        rd: decoded.rd,
        value: u64::from(result),
    })
}

/// `FMIN` (funct3 0) / `FMAX` (1); funct3 2 and above are illegal.
///
/// `FMAX` compares with the operands swapped. rs1 wins when it is strictly
/// smaller (quiet comparison) or when rs2 is NaN; otherwise rs2 wins, so a
/// NaN in rs1 yields rs2. Two NaNs yield the canonical NaN.
pub fn min_max<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    if decoded.rm != FMIN && decoded.rm != FMAX {
        return Err(EmulationError::unsupported(decoded.raw, "reserved min/max"));
    }
    let p = precision(decoded)?;
    let rs1 = ctx.read_fpr(p, decoded.rs1);
    let rs2 = ctx.read_fpr(p, decoded.rs2);

    let (arg1, arg2) = if decoded.rm == FMAX { (rs2, rs1) } else { (rs1, rs2) };
    let use_rs1 = fpu.flt_quiet(p, arg1, arg2) || is_nan(p, rs2);
    let value = if is_nan(p, rs1) && is_nan(p, rs2) {
        canonical_nan(p)
    } else if use_rs1 {
        rs1
    } else {
        rs2
    };

    Ok(Writeback::Fpr {
        precision: p,
        rd: decoded.rd,
        value,
    })
}
