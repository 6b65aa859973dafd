//! RISC-V Compressed Extension (C).
//!
//! Only the two double-precision float loads are emulated from the 16-bit
//! space; everything else compressed is redirected as illegal.
//!
//! # Structure
//!
//! - `constants`: Quadrants, funct3 codes and the exact-match encodings.
//! - `fields`: Compressed register and scaled-offset extraction.

/// Compressed instruction quadrant and opcode constants.
pub mod constants;

/// Compressed register and immediate field extraction.
pub mod fields;

pub use fields::{CompressedBits, CompressedLoad, decode_float_load};
