//! Conversion handlers.
//!
//! Integer conversions work on magnitudes: the sign is split off, the
//! provider converts the unsigned magnitude with the rounding mode mirrored
//! for negative values (`RoundingMode::for_magnitude`), and the sign is
//! re-applied afterwards.
//!
//! The rs2 field selects the integer type:
//!
//! | rs2 | Type   | RV32 |
//! |-----|--------|------|
//! | 0   | int32  | yes  |
//! | 1   | uint32 | yes  |
//! | 2   | int64  | no   |
//! | 3   | uint64 | no   |

use super::{pin_rounding, precision, resolve_rounding};
use crate::common::EmulationError;
use crate::core::arch::TrapContext;
use crate::core::units::fpu::nan_handling::is_nan;
use crate::core::units::fpu::{FpFlags, SoftFloat};
use crate::emulate::Writeback;
use crate::isa::decode::Decoded;
use crate::isa::rv64f::Precision;

/// Integer operand or result type of a conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntType {
    /// Signed 32-bit.
    I32,
    /// Unsigned 32-bit.
    U32,
    /// Signed 64-bit.
    I64,
    /// Unsigned 64-bit.
    U64,
}

impl IntType {
    /// Decodes the rs2 field; the 64-bit types need a 64-bit hart.
    pub const fn from_rs2(rs2: usize, has_64bit_ints: bool) -> Option<Self> {
        match rs2 {
            0 => Some(Self::I32),
            1 => Some(Self::U32),
            2 if has_64bit_ints => Some(Self::I64),
            3 if has_64bit_ints => Some(Self::U64),
            _ => None,
        }
    }

    /// Largest representable magnitude on the given side of zero.
    const fn limit(self, negative: bool) -> u64 {
        match (self, negative) {
            (Self::I32, false) => i32::MAX as u64,
            (Self::I32, true) => 1 << 31,
            (Self::I64, false) => i64::MAX as u64,
            (Self::I64, true) => 1 << 63,
            (Self::U32, false) => u32::MAX as u64,
            (Self::U64, false) => u64::MAX,
            (Self::U32 | Self::U64, true) => 0,
        }
    }

    /// Saturated result on the given side of zero, sign-extended to 64 bits.
    const fn saturated(self, negative: bool) -> u64 {
        match (self, negative) {
            (Self::I32, false) => i32::MAX as u64,
            (Self::I32, true) => i32::MIN as u64,
            (Self::I64, false) => i64::MAX as u64,
            (Self::I64, true) => i64::MIN as u64,
            (Self::U32, false) => u32::MAX as i32 as u64,
            (Self::U64, false) => u64::MAX,
            (Self::U32 | Self::U64, true) => 0,
        }
    }

    /// Applies the sign to an in-range magnitude and sign-extends 32-bit results.
    const fn finish(self, negative: bool, magnitude: u64) -> u64 {
        let value = if negative { magnitude.wrapping_neg() } else { magnitude };
        match self {
            Self::I32 | Self::U32 => value as i32 as u64,
            Self::I64 | Self::U64 => value,
        }
    }
}

/// `FCVT.S.D` (rs2 must be 1) and `FCVT.D.S` (rs2 must be 0).
///
/// The precision tag names the destination; the source is the other width.
pub fn float_to_float<F: SoftFloat>(
    fpu: &mut F,
    ctx: &TrapContext,
    decoded: &Decoded,
) -> Result<Writeback, EmulationError> {
    let p = precision(decoded)?;
    let value = match p {
        Precision::Single => {
            if decoded.rs2 != 1 {
                return Err(EmulationError::unsupported(decoded.raw, "fcvt.s source is not double"));
            }
            pin_rounding(fpu, ctx, decoded)?;
            fpu.narrow(ctx.read_fpr(Precision::Double, decoded.rs1))
        }
        Precision::Double => {
            if decoded.rs2 != 0 {
                return Err(EmulationError::unsupported(decoded.raw, "fcvt.d source is not single"));
            }
            pin_rounding(fpu, ctx, decoded)?;
            fpu.widen(ctx.read_fpr(Precision::Single, decoded.rs1))
        }
    };
    Ok(Writeback::Fpr {
        precision: p,
        rd: decoded.rd,
        value,
    })
}

/// `FCVT.fmt.{W,WU,L,LU}`: integer register to float.
pub fn int_to_float<F: SoftFloat>(
    fpu: &mut F,
    ctx: &TrapContext,
    decoded: &Decoded,
) -> Result<Writeback, EmulationError> {
    let p = precision(decoded)?;
    let ty = IntType::from_rs2(decoded.rs2, ctx.xlen().has_64bit_ints())
        .ok_or_else(|| EmulationError::unsupported(decoded.raw, "integer type not available"))?;
    let rm = resolve_rounding(ctx, decoded)?;

    let raw = ctx.read_gpr(decoded.rs1);
    let (negative, magnitude) = match ty {
        IntType::I32 => {
            let v = raw as i32;
            (v < 0, u64::from(v.unsigned_abs()))
        }
        IntType::U32 => (false, u64::from(raw as u32)),
        IntType::I64 => {
            let v = raw as i64;
            (v < 0, v.unsigned_abs())
        }
        IntType::U64 => (false, raw),
    };

    fpu.set_rounding_mode(rm.for_magnitude(negative));
    let bits = fpu.from_u64(p, magnitude);
    let value = if negative { bits ^ p.sign_mask() } else { bits };
    Ok(Writeback::Fpr {
        precision: p,
        rd: decoded.rd,
        value,
    })
}

/// `FCVT.{W,WU,L,LU}.fmt`: float to integer register, saturating.
///
/// NaN converts as +∞. Out-of-range values saturate and raise invalid; in
/// range values raise inexact when rounding was needed. Negative values
/// headed for an unsigned type give 0 (invalid unless they round to zero).
/// 32-bit results are sign-extended, `uint32` included.
pub fn float_to_int<F: SoftFloat>(
    fpu: &mut F,
    ctx: &TrapContext,
    decoded: &Decoded,
) -> Result<Writeback, EmulationError> {
    let ty = IntType::from_rs2(decoded.rs2, ctx.xlen().has_64bit_ints())
        .ok_or_else(|| EmulationError::unsupported(decoded.raw, "integer type not available"))?;
    let p = precision(decoded)?;
    let rm = resolve_rounding(ctx, decoded)?;

    let a = ctx.read_fpr(p, decoded.rs1);
    let sign = p.sign_mask();
    let negative = !is_nan(p, a) && a & sign != 0;
    let magnitude = if is_nan(p, a) { infinity(p) } else { a & !sign };

    fpu.set_rounding_mode(rm.for_magnitude(negative));
    let conv = fpu.to_u64(p, magnitude);

    let value = if conv.out_of_range || conv.value > ty.limit(negative) {
        fpu.raise(FpFlags::NV);
        ty.saturated(negative)
    } else {
        if conv.inexact {
            fpu.raise(FpFlags::NX);
        }
        ty.finish(negative, conv.value)
    };
    Ok(Writeback::Gpr { rd: decoded.rd, value })
}

const fn infinity(precision: Precision) -> u64 {
    match precision {
        Precision::Single => 0x7f80_0000,
        Precision::Double => 0x7ff0_0000_0000_0000,
    }
}

