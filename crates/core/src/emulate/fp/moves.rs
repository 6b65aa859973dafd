//! Moves between the register files and `FCLASS`.

use super::precision;
use crate::common::EmulationError;
use crate::core::arch::TrapContext;
use crate::core::units::fpu::SoftFloat;
use crate::emulate::Writeback;
use crate::isa::decode::Decoded;
use crate::isa::rv64f::Precision;
use crate::isa::rv64f::funct3::{FCLASS, FMV_X};
use crate::isa::rv64f::opcodes::{MASK_FMV, MATCH_FMV_D_X, MATCH_FMV_W_X};

/// `FMV.X.W`, `FMV.X.D` (funct3 0) and `FCLASS.fmt` (funct3 1).
///
/// rs2 must be zero. `FMV.X.W` moves the raw low 32 bits of the slot,
/// sign-extended, without a NaN-boxing check; `FCLASS` classifies the
/// NaN-box checked operand. `FMV.X.D` needs a 64-bit hart.
pub fn to_int<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    if decoded.rs2 != 0 {
        return Err(EmulationError::unsupported(decoded.raw, "fmv/fclass with non-zero rs2"));
    }
    let p = precision(decoded)?;

    let value = match decoded.rm {
        FMV_X => match p {
            Precision::Single => ctx.fpr.read(decoded.rs1) as u32 as i32 as u64,
            Precision::Double if ctx.xlen().has_64bit_ints() => ctx.fpr.read(decoded.rs1),
            Precision::Double => {
                return Err(EmulationError::unsupported(decoded.raw, "fmv.x.d on a 32-bit hart"));
            }
        },
        FCLASS => u64::from(fpu.classify(p, ctx.read_fpr(p, decoded.rs1))),
        _ => return Err(EmulationError::unsupported(decoded.raw, "reserved fmv/fclass funct3")),
    };
    Ok(Writeback::Gpr { rd: decoded.rd, value })
}

/// `FMV.W.X` and `FMV.D.X`, matched exactly.
///
/// No precision-tag check: anything but the two encodings is illegal.
/// `FMV.D.X` needs a 64-bit hart.
pub fn from_int(ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    let value = ctx.read_gpr(decoded.rs1);
    let precision = match decoded.raw & MASK_FMV {
        MATCH_FMV_W_X => Precision::Single,
        MATCH_FMV_D_X if ctx.xlen().has_64bit_ints() => Precision::Double,
        _ => return Err(EmulationError::unsupported(decoded.raw, "not fmv.w.x/fmv.d.x")),
    };
    Ok(Writeback::Fpr {
        precision,
        rd: decoded.rd,
        value,
    })
}
