//! RISC-V Privileged Architecture Opcodes.
//!
//! `SYSTEM` encodings: CSR access sub-opcodes and `WFI`.

/// System instruction opcode (0b1110011).
pub const OP_SYSTEM: u32 = 0b111_0011;

/// Table index of `SYSTEM`.
pub const MAJOR_SYSTEM: u32 = OP_SYSTEM >> 2;

/// Wait for Interrupt (WFI).
pub const WFI: u32 = 0x1050_0073;

/// Mask applied before comparing against [`WFI`].
pub const MASK_WFI: u32 = 0xFFFF_FFFF;

/// Atomic Read/Write CSR (CSRRW).
pub const CSRRW: u32 = 0b001;
/// Atomic Read and Set Bits in CSR (CSRRS).
pub const CSRRS: u32 = 0b010;
/// Atomic Read and Clear Bits in CSR (CSRRC).
pub const CSRRC: u32 = 0b011;
/// Atomic Read/Write CSR Immediate (CSRRWI).
pub const CSRRWI: u32 = 0b101;
/// Atomic Read and Set Bits in CSR Immediate (CSRRSI).
pub const CSRRSI: u32 = 0b110;
/// Atomic Read and Clear Bits in CSR Immediate (CSRRCI).
pub const CSRRCI: u32 = 0b111;

/// Read-modify-write operation of a CSR instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsrOp {
    /// Replace the CSR with the operand.
    Write,
    /// Set the operand's bits.
    Set,
    /// Clear the operand's bits.
    Clear,
}

/// Decoded CSR sub-opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsrAccess {
    /// Read-modify-write operation.
    pub op: CsrOp,
    /// The operand is the 5-bit rs1 field itself rather than `x[rs1]`.
    pub immediate: bool,
}

impl CsrAccess {
    /// Decodes funct3; 0 (`ECALL`/`xRET`/`WFI`) and 4 are not CSR accesses.
    pub const fn from_funct3(funct3: u32) -> Option<Self> {
        let op = match funct3 & 0x3 {
            0b01 => CsrOp::Write,
            0b10 => CsrOp::Set,
            0b11 => CsrOp::Clear,
            _ => return None,
        };
        Some(Self {
            op,
            immediate: funct3 & 0b100 != 0,
        })
    }

    /// Whether the CSR is written, given the raw rs1 field.
    ///
    /// Writes always happen for `CSRRW[I]`; set/clear forms only write when
    /// the rs1 field is non-zero.
    pub const fn writes(self, rs1_field: usize) -> bool {
        matches!(self.op, CsrOp::Write) || rs1_field != 0
    }

    /// Computes the new CSR value.
    pub const fn apply(self, old: u64, operand: u64) -> u64 {
        match self.op {
            CsrOp::Write => operand,
            CsrOp::Set => old | operand,
            CsrOp::Clear => old & !operand,
        }
    }
}
