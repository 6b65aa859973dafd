//! Soft-float provider backed by the `simple_soft_float` crate.
//!
//! Every operation runs on a fresh [`FPState`] set up the way RISC-V
//! reports exceptions: tininess is detected after rounding with an unbounded
//! exponent, and underflow is only raised together with inexact.
//!
//! NaN operands are resolved here before the library is called, so results
//! never depend on its NaN propagation rules. Any NaN the library produces
//! from non-NaN operands (`0/0`, `∞ - ∞`, `sqrt(-1)`) is replaced by the
//! canonical NaN of the destination width.

use std::cmp::Ordering;

use simple_soft_float::{
    self as sf, ExceptionHandlingMode, F32, F64, FPState, FloatClass, StatusFlags, TininessDetectionMode,
};

use super::exception_flags::FpFlags;
use super::nan_handling::{canonical_nan, is_nan, is_snan};
use super::rounding_modes::RoundingMode;
use super::{
    CLASS_NEG_INF, CLASS_NEG_NORMAL, CLASS_NEG_SUBNORMAL, CLASS_NEG_ZERO, CLASS_POS_INF, CLASS_POS_NORMAL,
    CLASS_POS_SUBNORMAL, CLASS_POS_ZERO, CLASS_QNAN, CLASS_SNAN, IntConversion, SoftFloat,
};
use crate::isa::rv64f::Precision;

/// Library status flag for each RISC-V exception flag.
const FLAG_MAP: [(StatusFlags, FpFlags); 5] = [
    (StatusFlags::INVALID_OPERATION, FpFlags::NV),
    (StatusFlags::DIVISION_BY_ZERO, FpFlags::DZ),
    (StatusFlags::OVERFLOW, FpFlags::OF),
    (StatusFlags::UNDERFLOW, FpFlags::UF),
    (StatusFlags::INEXACT, FpFlags::NX),
];

/// Maps a RISC-V rounding mode onto the library's.
const fn library_mode(rm: RoundingMode) -> sf::RoundingMode {
    match rm {
        RoundingMode::Rne => sf::RoundingMode::TiesToEven,
        RoundingMode::Rtz => sf::RoundingMode::TowardZero,
        RoundingMode::Rdn => sf::RoundingMode::TowardNegative,
        RoundingMode::Rup => sf::RoundingMode::TowardPositive,
        RoundingMode::Rmm => sf::RoundingMode::TiesToAway,
    }
}

/// Returns `(infinite, zero)` for an operand of the given width.
const fn inf_or_zero(precision: Precision, bits: u64) -> (bool, bool) {
    match precision {
        Precision::Single => {
            let magnitude = bits as u32 & 0x7FFF_FFFF;
            (magnitude == 0x7F80_0000, magnitude == 0)
        }
        Precision::Double => {
            let magnitude = bits & 0x7FFF_FFFF_FFFF_FFFF;
            (magnitude == 0x7FF0_0000_0000_0000, magnitude == 0)
        }
    }
}

fn single(bits: u64) -> F32 {
    F32::from_bits(bits as u32)
}

fn double(bits: u64) -> F64 {
    F64::from_bits(bits)
}

/// IEEE 754 provider computing every result in software.
#[derive(Clone, Copy, Debug, Default)]
pub struct IeeeFloat {
    rm: RoundingMode,
    flags: FpFlags,
}

impl IeeeFloat {
    /// Creates a provider rounding to nearest-even with no flags raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh library state carrying the ambient rounding mode.
    fn state(&self) -> FPState {
        let mut state = FPState::default();
        state.rounding_mode = library_mode(self.rm);
        state.tininess_detection_mode = TininessDetectionMode::AfterRounding;
        state.exception_handling_mode = ExceptionHandlingMode::IgnoreExactUnderflow;
        state
    }

    /// Accrues the library's status flags.
    fn absorb(&mut self, state: &FPState) {
        for (status, flag) in FLAG_MAP {
            if state.status_flags.contains(status) {
                self.flags |= flag;
            }
        }
    }

    /// Accrues `state` and encodes a single result, canonicalizing NaNs.
    fn commit_single(&mut self, state: &FPState, result: F32) -> u64 {
        self.absorb(state);
        if result.is_nan() { canonical_nan(Precision::Single) } else { u64::from(result.into_bits()) }
    }

    /// Accrues `state` and encodes a double result, canonicalizing NaNs.
    fn commit_double(&mut self, state: &FPState, result: F64) -> u64 {
        self.absorb(state);
        if result.is_nan() { canonical_nan(Precision::Double) } else { result.into_bits() }
    }

    /// NaN propagation shared by the arithmetic operations.
    ///
    /// Raises invalid for signaling operands and returns the canonical NaN
    /// when any operand is a NaN.
    fn propagate_nan(&mut self, precision: Precision, operands: &[u64]) -> Option<u64> {
        if operands.iter().any(|&op| is_snan(precision, op)) {
            self.flags |= FpFlags::NV;
        }
        operands
            .iter()
            .any(|&op| is_nan(precision, op))
            .then_some(canonical_nan(precision))
    }

    /// Runs a two-operand library operation at the given width.
    fn binary(
        &mut self,
        precision: Precision,
        a: u64,
        b: u64,
        on_single: impl FnOnce(&F32, &F32, Option<sf::RoundingMode>, Option<&mut FPState>) -> F32,
        on_double: impl FnOnce(&F64, &F64, Option<sf::RoundingMode>, Option<&mut FPState>) -> F64,
    ) -> u64 {
        if let Some(nan) = self.propagate_nan(precision, &[a, b]) {
            return nan;
        }
        let mut state = self.state();
        let rm = Some(state.rounding_mode);
        match precision {
            Precision::Single => {
                let result = on_single(&single(a), &single(b), rm, Some(&mut state));
                self.commit_single(&state, result)
            }
            Precision::Double => {
                let result = on_double(&double(a), &double(b), rm, Some(&mut state));
                self.commit_double(&state, result)
            }
        }
    }

    /// Ordered comparison; `signaling` raises invalid on quiet NaNs too.
    fn compare(&mut self, precision: Precision, a: u64, b: u64, signaling: bool) -> Option<Ordering> {
        let mut state = self.state();
        let ordering = match (precision, signaling) {
            (Precision::Single, false) => single(a).compare_quiet(&single(b), Some(&mut state)),
            (Precision::Single, true) => single(a).compare_signaling(&single(b), Some(&mut state)),
            (Precision::Double, false) => double(a).compare_quiet(&double(b), Some(&mut state)),
            (Precision::Double, true) => double(a).compare_signaling(&double(b), Some(&mut state)),
        };
        self.absorb(&state);
        ordering
    }
}

impl SoftFloat for IeeeFloat {
    fn rounding_mode(&self) -> RoundingMode {
        self.rm
    }

    fn set_rounding_mode(&mut self, rm: RoundingMode) {
        self.rm = rm;
    }

    fn raise(&mut self, flags: FpFlags) {
        self.flags |= flags;
    }

    fn take_flags(&mut self) -> FpFlags {
        std::mem::take(&mut self.flags)
    }

    fn add(&mut self, precision: Precision, a: u64, b: u64) -> u64 {
        self.binary(precision, a, b, |x, y, rm, st| x.add(y, rm, st), |x, y, rm, st| x.add(y, rm, st))
    }

    fn mul(&mut self, precision: Precision, a: u64, b: u64) -> u64 {
        self.binary(precision, a, b, |x, y, rm, st| x.mul(y, rm, st), |x, y, rm, st| x.mul(y, rm, st))
    }

    fn div(&mut self, precision: Precision, a: u64, b: u64) -> u64 {
        self.binary(precision, a, b, |x, y, rm, st| x.div(y, rm, st), |x, y, rm, st| x.div(y, rm, st))
    }

    fn sqrt(&mut self, precision: Precision, a: u64) -> u64 {
        if let Some(nan) = self.propagate_nan(precision, &[a]) {
            return nan;
        }
        let mut state = self.state();
        let rm = Some(state.rounding_mode);
        match precision {
            Precision::Single => {
                let result = single(a).sqrt(rm, Some(&mut state));
                self.commit_single(&state, result)
            }
            Precision::Double => {
                let result = double(a).sqrt(rm, Some(&mut state));
                self.commit_double(&state, result)
            }
        }
    }

    fn mul_add(&mut self, precision: Precision, a: u64, b: u64, c: u64) -> u64 {
        let (a_inf, a_zero) = inf_or_zero(precision, a);
        let (b_inf, b_zero) = inf_or_zero(precision, b);
        if let Some(nan) = self.propagate_nan(precision, &[a, b, c]) {
            // ∞ × 0 is invalid even when the addend is a quiet NaN.
            if (a_inf && b_zero) || (b_inf && a_zero) {
                self.flags |= FpFlags::NV;
            }
            return nan;
        }
        let mut state = self.state();
        let rm = Some(state.rounding_mode);
        match precision {
            Precision::Single => {
                let result = single(a).fused_mul_add(&single(b), &single(c), rm, Some(&mut state));
                self.commit_single(&state, result)
            }
            Precision::Double => {
                let result = double(a).fused_mul_add(&double(b), &double(c), rm, Some(&mut state));
                self.commit_double(&state, result)
            }
        }
    }

    fn feq(&mut self, precision: Precision, a: u64, b: u64) -> bool {
        self.compare(precision, a, b, false) == Some(Ordering::Equal)
    }

    fn flt(&mut self, precision: Precision, a: u64, b: u64) -> bool {
        self.compare(precision, a, b, true) == Some(Ordering::Less)
    }

    fn fle(&mut self, precision: Precision, a: u64, b: u64) -> bool {
        matches!(self.compare(precision, a, b, true), Some(Ordering::Less | Ordering::Equal))
    }

    fn flt_quiet(&mut self, precision: Precision, a: u64, b: u64) -> bool {
        self.compare(precision, a, b, false) == Some(Ordering::Less)
    }

    fn classify(&self, precision: Precision, a: u64) -> u16 {
        // Bit-level NaN tests keep the quiet bit convention fixed to RISC-V's.
        if is_nan(precision, a) {
            return if is_snan(precision, a) { CLASS_SNAN } else { CLASS_QNAN };
        }
        let class = match precision {
            Precision::Single => single(a).class(),
            Precision::Double => double(a).class(),
        };
        match class {
            FloatClass::NegativeInfinity => CLASS_NEG_INF,
            FloatClass::NegativeNormal => CLASS_NEG_NORMAL,
            FloatClass::NegativeSubnormal => CLASS_NEG_SUBNORMAL,
            FloatClass::NegativeZero => CLASS_NEG_ZERO,
            FloatClass::PositiveZero => CLASS_POS_ZERO,
            FloatClass::PositiveSubnormal => CLASS_POS_SUBNORMAL,
            FloatClass::PositiveNormal => CLASS_POS_NORMAL,
            FloatClass::PositiveInfinity => CLASS_POS_INF,
            FloatClass::SignalingNaN => CLASS_SNAN,
            FloatClass::QuietNaN => CLASS_QNAN,
        }
    }

    fn narrow(&mut self, a: u64) -> u64 {
        if self.propagate_nan(Precision::Double, &[a]).is_some() {
            return canonical_nan(Precision::Single);
        }
        let mut state = self.state();
        let rm = Some(state.rounding_mode);
        let result = F32::convert_from_float(&double(a), rm, Some(&mut state));
        self.commit_single(&state, result)
    }

    fn widen(&mut self, a: u64) -> u64 {
        if self.propagate_nan(Precision::Single, &[a]).is_some() {
            return canonical_nan(Precision::Double);
        }
        let mut state = self.state();
        let rm = Some(state.rounding_mode);
        let result = F64::convert_from_float(&single(a), rm, Some(&mut state));
        self.commit_double(&state, result)
    }

    fn from_u64(&mut self, precision: Precision, value: u64) -> u64 {
        let mut state = self.state();
        let rm = Some(state.rounding_mode);
        match precision {
            Precision::Single => {
                let result = F32::from_u64(value, rm, Some(&mut state));
                self.commit_single(&state, result)
            }
            Precision::Double => {
                let result = F64::from_u64(value, rm, Some(&mut state));
                self.commit_double(&state, result)
            }
        }
    }

    fn to_u64(&mut self, precision: Precision, a: u64) -> IntConversion {
        if is_nan(precision, a) {
            return IntConversion {
                value: u64::MAX,
                inexact: false,
                out_of_range: true,
            };
        }
        // Scratch state: the caller picks between inexact and invalid.
        let mut scratch = self.state();
        let rm = Some(scratch.rounding_mode);
        let (converted, negative) = match precision {
            Precision::Single => {
                let x = single(a);
                (x.to_u64(true, rm, Some(&mut scratch)), a as u32 >> 31 != 0)
            }
            Precision::Double => {
                let x = double(a);
                (x.to_u64(true, rm, Some(&mut scratch)), a >> 63 != 0)
            }
        };
        match converted {
            Some(value) => IntConversion {
                value,
                inexact: scratch.status_flags.contains(StatusFlags::INEXACT),
                out_of_range: false,
            },
            None => IntConversion {
                value: if negative { 0 } else { u64::MAX },
                inexact: false,
                out_of_range: true,
            },
        }
    }
}
