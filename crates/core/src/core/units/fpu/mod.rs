//! Floating-Point arithmetic provider.
//!
//! The emulation handlers never compute IEEE 754 results themselves; they call
//! a [`SoftFloat`] provider on raw bit patterns. The provider carries the
//! ambient rounding mode and the sticky exception flags for one instruction.
//!
//! Operations are organized into submodules:
//! - [`nan_handling`]: NaN boxing/unboxing and canonical NaN values.
//! - [`rounding_modes`]: Rounding mode decoding and dynamic resolution.
//! - [`exception_flags`]: Accrued exception flag set.
//! - [`ieee`]: [`IeeeFloat`], the default provider built on `simple_soft_float`.

/// Accrued exception flag set.
pub mod exception_flags;

/// Provider backed by a software IEEE 754 implementation.
pub mod ieee;

/// NaN boxing, unboxing, and canonical NaN values.
pub mod nan_handling;

/// Rounding mode definitions and dynamic resolution.
pub mod rounding_modes;

pub use self::exception_flags::FpFlags;
pub use self::ieee::IeeeFloat;
pub use self::rounding_modes::RoundingMode;

use crate::isa::rv64f::Precision;

/// `fclass` result bit: negative infinity.
pub const CLASS_NEG_INF: u16 = 1 << 0;
/// `fclass` result bit: negative normal number.
pub const CLASS_NEG_NORMAL: u16 = 1 << 1;
/// `fclass` result bit: negative subnormal number.
pub const CLASS_NEG_SUBNORMAL: u16 = 1 << 2;
/// `fclass` result bit: negative zero.
pub const CLASS_NEG_ZERO: u16 = 1 << 3;
/// `fclass` result bit: positive zero.
pub const CLASS_POS_ZERO: u16 = 1 << 4;
/// `fclass` result bit: positive subnormal number.
pub const CLASS_POS_SUBNORMAL: u16 = 1 << 5;
/// `fclass` result bit: positive normal number.
pub const CLASS_POS_NORMAL: u16 = 1 << 6;
/// `fclass` result bit: positive infinity.
pub const CLASS_POS_INF: u16 = 1 << 7;
/// `fclass` result bit: signaling NaN.
pub const CLASS_SNAN: u16 = 1 << 8;
/// `fclass` result bit: quiet NaN.
pub const CLASS_QNAN: u16 = 1 << 9;

/// Result of converting a non-negative float magnitude to an unsigned integer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntConversion {
    /// Rounded magnitude, `u64::MAX` when out of range.
    pub value: u64,
    /// The operand was not an integer.
    pub inexact: bool,
    /// The operand was NaN, infinite, negative after rounding, or at least 2^64.
    pub out_of_range: bool,
}

/// IEEE 754 arithmetic on raw bit patterns.
///
/// Single-precision operands and results occupy the low 32 bits of a `u64`.
/// Every arithmetic result that is a NaN is the canonical NaN of its width.
/// Operations round with the ambient mode and accumulate exception flags
/// until [`SoftFloat::take_flags`] is called.
pub trait SoftFloat {
    /// Current ambient rounding mode.
    fn rounding_mode(&self) -> RoundingMode;

    /// Pins the ambient rounding mode for subsequent operations.
    fn set_rounding_mode(&mut self, rm: RoundingMode);

    /// Raises exception flags.
    fn raise(&mut self, flags: FpFlags);

    /// Returns and clears the accumulated exception flags.
    fn take_flags(&mut self) -> FpFlags;

    /// `a + b`.
    fn add(&mut self, precision: Precision, a: u64, b: u64) -> u64;

    /// `a * b`.
    fn mul(&mut self, precision: Precision, a: u64, b: u64) -> u64;

    /// `a / b`.
    fn div(&mut self, precision: Precision, a: u64, b: u64) -> u64;

    /// Square root of `a`.
    fn sqrt(&mut self, precision: Precision, a: u64) -> u64;

    /// `a * b + c` with a single rounding.
    fn mul_add(&mut self, precision: Precision, a: u64, b: u64, c: u64) -> u64;

    /// Quiet equality; raises invalid only for signaling NaN operands.
    fn feq(&mut self, precision: Precision, a: u64, b: u64) -> bool;

    /// Signaling less-than; raises invalid for any NaN operand.
    fn flt(&mut self, precision: Precision, a: u64, b: u64) -> bool;

    /// Signaling less-than-or-equal; raises invalid for any NaN operand.
    fn fle(&mut self, precision: Precision, a: u64, b: u64) -> bool;

    /// Quiet less-than; raises invalid only for signaling NaN operands.
    fn flt_quiet(&mut self, precision: Precision, a: u64, b: u64) -> bool;

    /// IEEE 754 class of `a` as a one-hot `fclass` mask.
    fn classify(&self, precision: Precision, a: u64) -> u16;

    /// Double to single conversion.
    fn narrow(&mut self, a: u64) -> u64;

    /// Single to double conversion (exact for non-NaN values).
    fn widen(&mut self, a: u64) -> u64;

    /// Unsigned 64-bit integer to float.
    fn from_u64(&mut self, precision: Precision, value: u64) -> u64;

    /// Float to unsigned 64-bit integer with the ambient rounding mode.
    ///
    /// Does not raise flags; the caller decides between inexact and invalid
    /// once it knows the destination range.
    fn to_u64(&mut self, precision: Precision, a: u64) -> IntConversion;
}
