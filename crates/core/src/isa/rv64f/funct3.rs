//! RISC-V Floating-Point (F/D) Function Codes (funct3).
//!
//! Compare, min/max, sign-injection and move/classify instructions carry a
//! sub-opcode in the rounding-mode field instead of a rounding mode.

/// Floating-point Sign Injection (copy sign).
pub const FSGNJ: u8 = 0b000;
/// Floating-point Sign Injection Negate.
pub const FSGNJN: u8 = 0b001;
/// Floating-point Sign Injection XOR.
pub const FSGNJX: u8 = 0b010;

/// Floating-point Minimum.
pub const FMIN: u8 = 0b000;
/// Floating-point Maximum.
pub const FMAX: u8 = 0b001;

/// Floating-point Less Than or Equal (FLE).
pub const FLE: u8 = 0b000;
/// Floating-point Less Than (FLT).
pub const FLT: u8 = 0b001;
/// Floating-point Equal (FEQ).
pub const FEQ: u8 = 0b010;

/// Raw move to integer register (FMV.X.W / FMV.X.D).
pub const FMV_X: u8 = 0b000;
/// Floating-point Classify (FCLASS).
pub const FCLASS: u8 = 0b001;

/// Sign-injection variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInjection {
    /// Result takes the sign of rs2.
    Copy,
    /// Result takes the inverted sign of rs2.
    Negate,
    /// Result sign is the XOR of both signs.
    Xor,
}

impl SignInjection {
    /// Decodes the funct3 field; 3 and above are illegal.
    pub const fn from_rm(rm: u8) -> Option<Self> {
        match rm {
            FSGNJ => Some(Self::Copy),
            FSGNJN => Some(Self::Negate),
            FSGNJX => Some(Self::Xor),
            _ => None,
        }
    }
}

/// Comparison variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// Equal, else less-than (signaling).
    Le,
    /// Strict less-than (signaling).
    Lt,
    /// Equal (quiet).
    Eq,
}

impl Comparison {
    /// Decodes the funct3 field; 3 and above are illegal.
    pub const fn from_rm(rm: u8) -> Option<Self> {
        match rm {
            FLE => Some(Self::Le),
            FLT => Some(Self::Lt),
            FEQ => Some(Self::Eq),
            _ => None,
        }
    }
}
