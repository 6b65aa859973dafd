//! RISC-V Instruction Decoder.
//!
//! Turns a raw 32-bit instruction word into the `Decoded` field set consumed by
//! the emulation handlers, and classifies the major opcode (bits 6:2) into the
//! families the illegal-instruction dispatcher cares about.

use crate::isa::instruction::InstructionBits;
use crate::isa::privileged::opcodes::MAJOR_SYSTEM;
use crate::isa::rv64f::opcodes::{MAJOR_FMADD, MAJOR_FMSUB, MAJOR_FNMADD, MAJOR_FNMSUB, MAJOR_LOAD_FP, MAJOR_OP_FP};

/// Major-opcode family of a 32-bit instruction.
///
/// Replaces a 32-entry handler table: every index not named here lands in
/// [`MajorOpcode::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MajorOpcode {
    /// Floating-point loads (`FLW`, `FLD`).
    LoadFp,
    /// `FMADD.fmt`.
    Fmadd,
    /// `FMSUB.fmt`.
    Fmsub,
    /// `FNMSUB.fmt`.
    Fnmsub,
    /// `FNMADD.fmt`.
    Fnmadd,
    /// Floating-point computational (`OP-FP`).
    OpFp,
    /// CSR access, `WFI` and the rest of `SYSTEM`.
    System,
    /// Any other major opcode, carrying the raw 5-bit index.
    Other(u8),
}

impl MajorOpcode {
    /// Classifies the major opcode of `insn`.
    pub const fn of(insn: u32) -> Self {
        match (insn & 0x7F) >> 2 {
            MAJOR_LOAD_FP => Self::LoadFp,
            MAJOR_FMADD => Self::Fmadd,
            MAJOR_FMSUB => Self::Fmsub,
            MAJOR_FNMSUB => Self::Fnmsub,
            MAJOR_FNMADD => Self::Fnmadd,
            MAJOR_OP_FP => Self::OpFp,
            MAJOR_SYSTEM => Self::System,
            other => Self::Other(other as u8),
        }
    }

    /// Returns true for the four fused multiply-add opcodes.
    pub const fn is_fused(self) -> bool {
        matches!(self, Self::Fmadd | Self::Fmsub | Self::Fnmsub | Self::Fnmadd)
    }
}

/// Fields of one trapped instruction.
///
/// Computed fresh per trap and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw instruction word.
    pub raw: u32,
    /// Major-opcode family.
    pub major: MajorOpcode,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index, or conversion/move sub-opcode.
    pub rs2: usize,
    /// Third source register index (fused multiply-add only).
    pub rs3: usize,
    /// Rounding-mode / funct3 field.
    pub rm: u8,
    /// Floating-point format field.
    pub fmt: u8,
    /// FP operation family (bits 31:27).
    pub funct5: u32,
    /// Sign-extended I-type immediate.
    pub imm: i64,
}

/// Decodes the fields of a 32-bit instruction.
///
/// # Arguments
///
/// * `insn` - The raw 32-bit instruction word.
///
/// # Returns
///
/// A `Decoded` value; decoding itself never fails.
pub fn decode(insn: u32) -> Decoded {
    Decoded {
        raw: insn,
        major: MajorOpcode::of(insn),
        rd: insn.rd(),
        rs1: insn.rs1(),
        rs2: insn.rs2(),
        rs3: insn.rs3(),
        rm: insn.rm(),
        fmt: insn.fmt(),
        funct5: insn.funct5(),
        imm: insn.imm_i(),
    }
}
