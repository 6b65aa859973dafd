//! RISC-V Floating-Point (F/D) Opcodes.
//!
//! Defines the major opcodes for floating-point loads and arithmetic, their
//! 5-bit table indices (bits 6:2), and the exact encodings matched by the
//! emulator.

/// Floating-point Load (FLW, FLD).
pub const OP_LOAD_FP: u32 = 0b000_0111;

/// Floating-point Arithmetic (FADD, FSUB, etc.).
pub const OP_FP: u32 = 0b101_0011;

/// Fused Multiply-Add (FMADD).
pub const OP_FMADD: u32 = 0b100_0011;

/// Fused Multiply-Subtract (FMSUB).
pub const OP_FMSUB: u32 = 0b100_0111;

/// Fused Negated Multiply-Subtract (FNMSUB).
pub const OP_FNMSUB: u32 = 0b100_1011;

/// Fused Negated Multiply-Add (FNMADD).
pub const OP_FNMADD: u32 = 0b100_1111;

/// Table index of `LOAD-FP`.
pub const MAJOR_LOAD_FP: u32 = OP_LOAD_FP >> 2;
/// Table index of `OP-FP`.
pub const MAJOR_OP_FP: u32 = OP_FP >> 2;
/// Table index of `FMADD`.
pub const MAJOR_FMADD: u32 = OP_FMADD >> 2;
/// Table index of `FMSUB`.
pub const MAJOR_FMSUB: u32 = OP_FMSUB >> 2;
/// Table index of `FNMSUB`.
pub const MAJOR_FNMSUB: u32 = OP_FNMSUB >> 2;
/// Table index of `FNMADD`.
pub const MAJOR_FNMADD: u32 = OP_FNMADD >> 2;

/// Opcode plus funct3 mask for `FLD`.
pub const MASK_FLD: u32 = 0x707F;
/// `FLD` (funct3 = 011 under `LOAD-FP`).
pub const MATCH_FLD: u32 = 0x3007;

/// Mask for the register-to-register move encodings (rs1 and rd free).
pub const MASK_FMV: u32 = 0xFFF0_707F;
/// `FMV.W.X`: integer register to single-precision FP register.
pub const MATCH_FMV_W_X: u32 = 0xF000_0053;
/// `FMV.D.X`: integer register to double-precision FP register.
pub const MATCH_FMV_D_X: u32 = 0xF200_0053;

/// Instruction bit selecting a negated product in the fused family.
pub const FUSED_NEGATE_PRODUCT_BIT: u32 = 1 << 3;
/// Instruction bit selecting a negated addend in the fused family.
pub const FUSED_NEGATE_ADDEND_BIT: u32 = 1 << 2;
