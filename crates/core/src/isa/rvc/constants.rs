//! RISC-V Compressed (C) Extension Constants.
//!
//! Compressed instructions are divided into three quadrants (0, 1, 2) by the
//! lowest 2 bits and into sub-opcodes by bits 15:13.

/// Quadrant 0 (bits 1:0 = 00).
pub const QUADRANT_0: u16 = 0b00;
/// Quadrant 2 (bits 1:0 = 10).
pub const QUADRANT_2: u16 = 0b10;

/// Compressed Floating-point Load Double (C.FLD), quadrant 0.
pub const C_FLD: u16 = 0b001;
/// Compressed Floating-point Load Double from SP (C.FLDSP), quadrant 2.
pub const C_FLDSP: u16 = 0b001;

/// funct3 plus quadrant mask shared by both float loads.
pub const MASK_C_FLD: u32 = 0xE003;
/// `C.FLD` encoding under [`MASK_C_FLD`].
pub const MATCH_C_FLD: u32 = ((C_FLD as u32) << 13) | QUADRANT_0 as u32;
/// `C.FLDSP` encoding under [`MASK_C_FLD`].
pub const MATCH_C_FLDSP: u32 = ((C_FLDSP as u32) << 13) | QUADRANT_2 as u32;

/// First register reachable through a 3-bit compressed register field.
pub const CREG_BASE: usize = 8;
/// Stack pointer (`x2`), implicit base of the SP-relative forms.
pub const REG_SP: usize = 2;
