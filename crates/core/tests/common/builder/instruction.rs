use rvtrap_core::isa::privileged::opcodes::OP_SYSTEM;
use rvtrap_core::isa::rv64f::opcodes::{OP_FP, OP_LOAD_FP};

/// `fmt` field value for single precision.
pub const FMT_S: u32 = 0b00;
/// `fmt` field value for double precision.
pub const FMT_D: u32 = 0b01;
/// `fmt` field value for half precision (never emulated).
pub const FMT_H: u32 = 0b10;
/// `fmt` field value for quad precision (never emulated).
pub const FMT_Q: u32 = 0b11;

/// Rounding-mode field value selecting `fcsr.frm`.
pub const RM_DYN: u32 = 0b111;

/// Fluent encoder for 32-bit R-type and R4-type instructions.
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    rs3: u32,
    fmt: u32,
    funct5: u32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rd: 0,
            funct3: 0,
            rs1: 0,
            rs2: 0,
            rs3: 0,
            fmt: 0,
            funct5: 0,
        }
    }

    /// Starts an `OP-FP` instruction of the given operation family.
    pub fn op_fp(funct5: u32) -> Self {
        Self::new().opcode(OP_FP).funct5(funct5)
    }

    /// Starts a fused multiply-add family instruction.
    pub fn fused(opcode: u32) -> Self {
        Self::new().opcode(opcode)
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn rs3(mut self, rs3: u32) -> Self {
        self.rs3 = rs3;
        self
    }

    /// Rounding mode, or the sub-opcode of compare/min-max/sign/move.
    pub fn rm(mut self, rm: u32) -> Self {
        self.funct3 = rm;
        self
    }

    pub fn fmt(mut self, fmt: u32) -> Self {
        self.fmt = fmt;
        self
    }

    pub fn funct5(mut self, funct5: u32) -> Self {
        self.funct5 = funct5;
        self
    }

    pub fn single(self) -> Self {
        self.fmt(FMT_S)
    }

    pub fn double(self) -> Self {
        self.fmt(FMT_D)
    }

    pub fn build(self) -> u32 {
        let top = if self.opcode == OP_FP { self.funct5 } else { self.rs3 };
        ((top & 0x1F) << 27)
            | ((self.fmt & 0x3) << 25)
            | ((self.rs2 & 0x1F) << 20)
            | ((self.rs1 & 0x1F) << 15)
            | ((self.funct3 & 0x7) << 12)
            | ((self.rd & 0x1F) << 7)
            | (self.opcode & 0x7F)
    }
}

/// CSR instruction: `csr` number, funct3 sub-opcode, `rs1` field (register or uimm).
pub fn csr(funct3: u32, rd: u32, rs1: u32, csr: u16) -> u32 {
    (u32::from(csr) << 20) | ((rs1 & 0x1F) << 15) | ((funct3 & 0x7) << 12) | ((rd & 0x1F) << 7) | OP_SYSTEM
}

/// `FLD rd, imm(rs1)`.
pub fn fld(rd: u32, rs1: u32, imm: i32) -> u32 {
    ((imm as u32 & 0xFFF) << 20) | ((rs1 & 0x1F) << 15) | (0b011 << 12) | ((rd & 0x1F) << 7) | OP_LOAD_FP
}

/// `FLW rd, imm(rs1)` (not emulated).
pub fn flw(rd: u32, rs1: u32, imm: i32) -> u32 {
    ((imm as u32 & 0xFFF) << 20) | ((rs1 & 0x1F) << 15) | (0b010 << 12) | ((rd & 0x1F) << 7) | OP_LOAD_FP
}

/// `C.FLD rd', off(rs1')`; registers must be in 8..=15, `off` a multiple of 8 below 256.
pub fn c_fld(rd: u32, rs1: u32, off: u32) -> u32 {
    0x2000 | (((off >> 3) & 0x7) << 10) | ((rs1 - 8) << 7) | (((off >> 6) & 0x3) << 5) | ((rd - 8) << 2)
}

/// `C.FLDSP rd, off(sp)`; `off` a multiple of 8 below 512.
pub fn c_fldsp(rd: u32, off: u32) -> u32 {
    0x2002 | (((off >> 5) & 0x1) << 12) | ((rd & 0x1F) << 7) | (((off >> 3) & 0x3) << 5) | (((off >> 6) & 0x7) << 2)
}
