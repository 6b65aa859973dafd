//! Compressed instruction field extraction.
//!
//! The 3-bit register fields of the CL format name `x8`-`x15` / `f8`-`f15`.
//! Offsets are unsigned and scaled by 8 for double-word loads; their bits are
//! scattered across the encoding as listed on each accessor.

use super::constants::{CREG_BASE, MASK_C_FLD, MATCH_C_FLD, MATCH_C_FLDSP, REG_SP};

/// Field accessors for 16-bit encodings (held in the low half of a `u32`).
pub trait CompressedBits {
    /// `rs1'` (bits 9:7) mapped onto registers 8-15.
    fn rs1_prime(&self) -> usize;

    /// `rs2'` / `rd'` (bits 4:2) mapped onto registers 8-15.
    fn rs2_prime(&self) -> usize;

    /// Full 5-bit `rd` of the CI format (bits 11:7).
    fn ci_rd(&self) -> usize;

    /// `C.FLD` offset: bits 12:10 → offset 5:3, bits 6:5 → offset 7:6.
    fn cl_ld_offset(&self) -> u64;

    /// `C.FLDSP` offset: bit 12 → offset 5, bits 6:5 → offset 4:3, bits 4:2 → offset 8:6.
    fn ci_ldsp_offset(&self) -> u64;
}

impl CompressedBits for u32 {
    #[inline(always)]
    fn rs1_prime(&self) -> usize {
        CREG_BASE + ((self >> 7) & 0x7) as usize
    }

    #[inline(always)]
    fn rs2_prime(&self) -> usize {
        CREG_BASE + ((self >> 2) & 0x7) as usize
    }

    #[inline(always)]
    fn ci_rd(&self) -> usize {
        ((self >> 7) & 0x1F) as usize
    }

    #[inline(always)]
    fn cl_ld_offset(&self) -> u64 {
        let x = u64::from(*self);
        (((x >> 10) & 0x7) << 3) | (((x >> 5) & 0x3) << 6)
    }

    #[inline(always)]
    fn ci_ldsp_offset(&self) -> u64 {
        let x = u64::from(*self);
        (((x >> 12) & 0x1) << 5) | (((x >> 5) & 0x3) << 3) | (((x >> 2) & 0x7) << 6)
    }
}

/// A recognised compressed double-precision load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressedLoad {
    /// Base integer register.
    pub base: usize,
    /// Unsigned byte offset.
    pub offset: u64,
    /// Destination floating-point register.
    pub rd: usize,
}

/// Matches `C.FLD` and `C.FLDSP`.
///
/// # Returns
///
/// The base register, offset and destination, or `None` for any other
/// compressed encoding.
pub fn decode_float_load(insn: u32) -> Option<CompressedLoad> {
    match insn & MASK_C_FLD {
        MATCH_C_FLD => Some(CompressedLoad {
            base: insn.rs1_prime(),
            offset: insn.cl_ld_offset(),
            rd: insn.rs2_prime(),
        }),
        MATCH_C_FLDSP => Some(CompressedLoad {
            base: REG_SP,
            offset: insn.ci_ldsp_offset(),
            rd: insn.ci_rd(),
        }),
        _ => None,
    }
}
