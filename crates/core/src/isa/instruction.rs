//! Instruction encoding bit extraction utilities.
//!
//! Provides the field accessors used to take a raw 32-bit RISC-V instruction
//! apart. None of them fail: legality is always judged by the caller against
//! the extracted values.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for any 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the funct3 / rounding-mode field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for the floating-point format field (bits 25-26).
pub const FMT_MASK: u32 = 0x3;
/// Bit mask for the funct5 field (bits 27-31).
pub const FUNCT5_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the CSR address field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;
/// Low two bits of every 32-bit (non-compressed) encoding.
pub const UNCOMPRESSED_LOW_BITS: u32 = 0b11;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the major-opcode index (bits 2-6), the 32-way table key.
    fn major_index(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    ///
    /// Conversion and move instructions reuse this field as a sub-opcode.
    fn rs2(&self) -> usize;

    /// Extracts the third source register field (bits 27-31, R4-type only).
    fn rs3(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the rounding-mode field (bits 12-14).
    ///
    /// Same bits as [`InstructionBits::funct3`]; compare, min/max and
    /// sign-injection use it as a sub-opcode instead.
    fn rm(&self) -> u8;

    /// Extracts the floating-point format field (bits 25-26).
    ///
    /// `00` single, `01` double, `10` half, `11` quad.
    fn fmt(&self) -> u8;

    /// Extracts the funct5 field (bits 27-31) selecting the FP operation family.
    fn funct5(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the CSR address field (bits 20-31).
    fn csr(&self) -> u16;

    /// Extracts the sign-extended I-type immediate (bits 20-31).
    fn imm_i(&self) -> i64;

    /// Returns true when the low two bits mark a 16-bit compressed encoding.
    fn is_compressed(&self) -> bool;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn major_index(&self) -> u32 {
        (self & OPCODE_MASK) >> 2
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs3(&self) -> usize {
        ((self >> 27) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn rm(&self) -> u8 {
        ((self >> 12) & FUNCT3_MASK) as u8
    }

    #[inline(always)]
    fn fmt(&self) -> u8 {
        ((self >> 25) & FMT_MASK) as u8
    }

    #[inline(always)]
    fn funct5(&self) -> u32 {
        (self >> 27) & FUNCT5_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn csr(&self) -> u16 {
        ((self >> 20) & CSR_MASK) as u16
    }

    #[inline(always)]
    fn imm_i(&self) -> i64 {
        i64::from((*self as i32) >> 20)
    }

    #[inline(always)]
    fn is_compressed(&self) -> bool {
        self & UNCOMPRESSED_LOW_BITS != UNCOMPRESSED_LOW_BITS
    }
}
