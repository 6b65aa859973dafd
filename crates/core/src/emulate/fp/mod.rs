//! Floating-point emulation dispatcher.
//!
//! Invoked when the hardware traps a floating-point opcode it cannot execute.
//! The FS check comes first; a disabled FPU is forwarded to whichever layer
//! manages FPU enablement. `OP-FP` instructions are then routed by `funct5`
//! ([`FpFunct`]) and the fused family goes to [`arith::fused`].
//!
//! Handlers validate, compute through the [`SoftFloat`] provider and return a
//! [`Writeback`]. Nothing is committed here: the flags the provider raised are
//! attached to the result and dropped if the handler fails.
//!
//! # Handlers
//!
//! - [`arith`]: add/subtract, multiply, divide, square root, fused multiply-add.
//! - [`compare`]: `FEQ`/`FLT`/`FLE`, `FMIN`/`FMAX`.
//! - [`sign`]: sign injection.
//! - [`convert`]: float/float and float/integer conversions.
//! - [`moves`]: raw moves between register files, classify.

/// Arithmetic handlers.
pub mod arith;

/// Comparison and min/max handlers.
pub mod compare;

/// Conversion handlers.
pub mod convert;

/// Register-file moves and classify.
pub mod moves;

/// Sign injection.
pub mod sign;

use tracing::trace;

use super::{INSN_LEN, Retired, Writeback};
use crate::common::EmulationError;
use crate::core::arch::TrapContext;
use crate::core::units::fpu::{RoundingMode, SoftFloat};
use crate::isa::decode::{Decoded, MajorOpcode};
use crate::isa::rv64f::{FpFunct, Precision};
use crate::stats::InstructionClass;

/// Sign mask passed to [`arith::add_sub`] for `FADD`.
pub const KEEP_SIGN: u32 = 0;

/// Sign mask passed to [`arith::add_sub`] for `FSUB` (single-precision sign bit).
pub const FLIP_SIGN: u32 = 1 << 31;

/// Emulates one floating-point instruction without committing it.
///
/// # Arguments
///
/// * `fpu` - Soft-float provider.
/// * `ctx` - Trapped context (read only).
/// * `decoded` - Fields of the faulting instruction.
///
/// # Returns
///
/// The retired instruction, carrying the exception flags raised while
/// computing it, or why it must be redirected.
pub fn emulate<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<Retired, EmulationError> {
    if !ctx.fp_enabled() {
        return Err(EmulationError::FpDisabled);
    }

    let _ = fpu.take_flags();
    let result = dispatch(fpu, ctx, decoded);
    let flags = fpu.take_flags();
    let (writeback, class) = result?;
    Ok(Retired::new(writeback, INSN_LEN, class).with_flags(flags))
}

fn dispatch<F: SoftFloat>(
    fpu: &mut F,
    ctx: &TrapContext,
    decoded: &Decoded,
) -> Result<(Writeback, InstructionClass), EmulationError> {
    match decoded.major {
        MajorOpcode::OpFp => {}
        major if major.is_fused() => {
            return arith::fused(fpu, ctx, decoded).map(|wb| (wb, InstructionClass::FpFused));
        }
        _ => return Err(EmulationError::unsupported(decoded.raw, "not a floating-point opcode")),
    }

    let funct = FpFunct::from_funct5(decoded.funct5);
    trace!(insn = decoded.raw, ?funct, "op-fp");
    let (writeback, class) = match funct {
        FpFunct::Add => (arith::add_sub(fpu, ctx, decoded, KEEP_SIGN)?, InstructionClass::FpArith),
        FpFunct::Sub => (arith::add_sub(fpu, ctx, decoded, FLIP_SIGN)?, InstructionClass::FpArith),
        FpFunct::Mul => (arith::mul(fpu, ctx, decoded)?, InstructionClass::FpArith),
        FpFunct::Div => (arith::div(fpu, ctx, decoded)?, InstructionClass::FpArith),
        FpFunct::Sqrt => (arith::sqrt(fpu, ctx, decoded)?, InstructionClass::FpArith),
        FpFunct::SignInject => (sign::inject(ctx, decoded)?, InstructionClass::FpArith),
        FpFunct::MinMax => (compare::min_max(fpu, ctx, decoded)?, InstructionClass::FpArith),
        FpFunct::Compare => (compare::compare(fpu, ctx, decoded)?, InstructionClass::FpArith),
        FpFunct::ConvertFloat => (convert::float_to_float(fpu, ctx, decoded)?, InstructionClass::FpConvert),
        FpFunct::ToInt => (convert::float_to_int(fpu, ctx, decoded)?, InstructionClass::FpConvert),
        FpFunct::FromInt => (convert::int_to_float(fpu, ctx, decoded)?, InstructionClass::FpConvert),
        FpFunct::MoveToInt => (moves::to_int(fpu, ctx, decoded)?, InstructionClass::FpMove),
        FpFunct::MoveFromInt => (moves::from_int(ctx, decoded)?, InstructionClass::FpMove),
        FpFunct::Unassigned(_) => {
            return Err(EmulationError::unsupported(decoded.raw, "unassigned funct5"));
        }
    };
    Ok((writeback, class))
}

/// Operand width from the format field; half and quad are rejected.
pub fn precision(decoded: &Decoded) -> Result<Precision, EmulationError> {
    Precision::from_fmt(decoded.fmt).ok_or(EmulationError::UnsupportedPrecision(decoded.fmt))
}

/// Resolves the instruction's rounding mode.
///
/// # Returns
///
/// The effective mode, or [`EmulationError::ReservedRoundingMode`] for field
/// values 5 and 6 and for a dynamic field with `frm` 5-7.
pub fn resolve_rounding(ctx: &TrapContext, decoded: &Decoded) -> Result<RoundingMode, EmulationError> {
    RoundingMode::resolve(decoded.rm, ctx.frm()).map_err(EmulationError::ReservedRoundingMode)
}

/// Resolves the instruction's rounding mode and pins it on the provider.
pub fn pin_rounding<F: SoftFloat>(fpu: &mut F, ctx: &TrapContext, decoded: &Decoded) -> Result<(), EmulationError> {
    fpu.set_rounding_mode(resolve_rounding(ctx, decoded)?);
    Ok(())
}
