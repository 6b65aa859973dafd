//! NaN boxing, unboxing, and canonical NaN values.
//!
//! RISC-V stores single-precision (f32) values in 64-bit floating-point
//! registers using "NaN boxing": the upper 32 bits must be all 1s.
//!
//! - **Boxing** ([`box_f32_bits`]): Sets upper 32 bits to 1s when writing an f32
//!   result into a 64-bit register.
//! - **Unboxing** ([`unbox_f32_bits`]): Checks that the upper 32 bits are all 1s.
//!   If not, the value is treated as canonical NaN.
//! - **Classification** ([`is_nan`], [`is_snan`]): Bit-level NaN tests that do
//!   not depend on host float behaviour.

use crate::isa::rv64f::Precision;

/// Canonical quiet NaN for IEEE 754 single-precision (positive, quiet, zero payload).
pub const CANONICAL_NAN_F32: u32 = 0x7fc0_0000;

/// Canonical quiet NaN for IEEE 754 double-precision (positive, quiet, zero payload).
pub const CANONICAL_NAN_F64: u64 = 0x7ff8_0000_0000_0000;

/// Upper-32-bit mask used for NaN boxing validation.
pub const NAN_BOX_MASK: u64 = 0xFFFF_FFFF_0000_0000;

/// Exponent mask of a single-precision value.
const F32_EXP_MASK: u32 = 0x7f80_0000;
/// Fraction mask of a single-precision value.
const F32_FRAC_MASK: u32 = 0x007f_ffff;
/// Quiet bit of a single-precision NaN.
const F32_QUIET_BIT: u32 = 0x0040_0000;
/// Exponent mask of a double-precision value.
const F64_EXP_MASK: u64 = 0x7ff0_0000_0000_0000;
/// Fraction mask of a double-precision value.
const F64_FRAC_MASK: u64 = 0x000f_ffff_ffff_ffff;
/// Quiet bit of a double-precision NaN.
const F64_QUIET_BIT: u64 = 0x0008_0000_0000_0000;

/// Boxes an f32 bit pattern into a 64-bit NaN-boxed slot value.
#[inline]
pub const fn box_f32_bits(bits: u32) -> u64 {
    (bits as u64) | NAN_BOX_MASK
}

/// Unboxes a 64-bit slot value to an f32 bit pattern.
///
/// # Returns
///
/// The low 32 bits when the slot is properly NaN-boxed, otherwise the
/// canonical single NaN.
#[inline]
pub const fn unbox_f32_bits(val: u64) -> u32 {
    if (val & NAN_BOX_MASK) == NAN_BOX_MASK {
        val as u32
    } else {
        CANONICAL_NAN_F32
    }
}

/// Canonical quiet NaN of the given width.
#[inline]
pub const fn canonical_nan(precision: Precision) -> u64 {
    match precision {
        Precision::Single => CANONICAL_NAN_F32 as u64,
        Precision::Double => CANONICAL_NAN_F64,
    }
}

/// Returns true if `bits` encodes any NaN of the given width.
#[inline]
pub const fn is_nan(precision: Precision, bits: u64) -> bool {
    match precision {
        Precision::Single => {
            let v = bits as u32;
            v & F32_EXP_MASK == F32_EXP_MASK && v & F32_FRAC_MASK != 0
        }
        Precision::Double => bits & F64_EXP_MASK == F64_EXP_MASK && bits & F64_FRAC_MASK != 0,
    }
}

/// Returns true if `bits` encodes a signaling NaN of the given width.
#[inline]
pub const fn is_snan(precision: Precision, bits: u64) -> bool {
    is_nan(precision, bits)
        && match precision {
            Precision::Single => bits as u32 & F32_QUIET_BIT == 0,
            Precision::Double => bits & F64_QUIET_BIT == 0,
        }
}
