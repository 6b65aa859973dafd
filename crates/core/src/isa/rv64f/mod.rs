//! RISC-V Floating-Point Extensions (F and D).
//!
//! Defines the encodings the floating-point emulator recognises.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes and exact-match encodings (`FLD`, moves).
//! - `funct3`: Sub-opcodes carried in the rounding-mode field.
//! - `funct5`: Operation families selected by bits 31:27.

/// Sub-opcodes carried in the funct3 / rounding-mode field.
pub mod funct3;

/// Operation families selected by bits 31:27 of `OP-FP`.
pub mod funct5;

/// Floating-point opcodes and exact-match encodings.
pub mod opcodes;

pub use funct5::FpFunct;

/// Operand width selected by the format field (bits 26:25).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// IEEE 754 binary32 (`fmt = 00`).
    Single,
    /// IEEE 754 binary64 (`fmt = 01`).
    Double,
}

impl Precision {
    /// Decodes the 2-bit format field; half (`10`) and quad (`11`) are rejected.
    pub const fn from_fmt(fmt: u8) -> Option<Self> {
        match fmt & 0x3 {
            0b00 => Some(Self::Single),
            0b01 => Some(Self::Double),
            _ => None,
        }
    }

    /// Sign bit of a value of this width, positioned within a `u64`.
    pub const fn sign_mask(self) -> u64 {
        match self {
            Self::Single => 1 << 31,
            Self::Double => 1 << 63,
        }
    }
}
