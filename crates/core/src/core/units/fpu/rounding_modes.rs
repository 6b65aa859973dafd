//! Floating-point rounding mode support.
//!
//! RISC-V defines five rounding modes:
//!
//! | Value | Mode | Description                             |
//! |-------|------|-----------------------------------------|
//! | 0b000 | RNE  | Round to Nearest, ties to Even          |
//! | 0b001 | RTZ  | Round towards Zero                      |
//! | 0b010 | RDN  | Round Down (towards −∞)                 |
//! | 0b011 | RUP  | Round Up (towards +∞)                   |
//! | 0b100 | RMM  | Round to Nearest, ties to Max Magnitude |
//!
//! Encodings `0b101` and `0b110` are reserved. `0b111` in an instruction
//! selects the dynamic mode held in `fcsr.frm`; in `frm` itself it is
//! reserved as well.

/// Instruction rounding-mode field value selecting `fcsr.frm`.
pub const RM_DYNAMIC: u8 = 0b111;

/// RISC-V rounding mode encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    #[default]
    Rne = 0b000,
    /// Round towards Zero.
    Rtz = 0b001,
    /// Round Down (towards −∞).
    Rdn = 0b010,
    /// Round Up (towards +∞).
    Rup = 0b011,
    /// Round to Nearest, ties to Max Magnitude.
    Rmm = 0b100,
}

impl RoundingMode {
    /// Decodes a 3-bit rounding mode field from an instruction or `fcsr.frm`.
    ///
    /// Returns `None` for reserved encodings (0b101, 0b110) and the dynamic
    /// sentinel (0b111), which must be resolved to `fcsr.frm` by the caller.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::Rne),
            0b001 => Some(Self::Rtz),
            0b010 => Some(Self::Rdn),
            0b011 => Some(Self::Rup),
            0b100 => Some(Self::Rmm),
            _ => None,
        }
    }

    /// Resolves an instruction's rounding-mode field.
    ///
    /// # Arguments
    ///
    /// * `field` - The instruction's 3-bit rounding-mode field.
    /// * `frm` - The dynamic rounding mode from `fcsr.frm`.
    ///
    /// # Returns
    ///
    /// The effective mode, or `Err` carrying the offending reserved value
    /// (from the instruction, or from `frm` when the field is dynamic).
    pub const fn resolve(field: u8, frm: u8) -> Result<Self, u8> {
        let bits = if field & 0x7 == RM_DYNAMIC { frm & 0x7 } else { field & 0x7 };
        match Self::from_bits(bits) {
            Some(mode) => Ok(mode),
            None => Err(bits),
        }
    }

    /// Mode to apply to a magnitude so the signed value rounds as `self`.
    ///
    /// Rounding down a negative value rounds its magnitude up, and vice versa.
    pub const fn for_magnitude(self, negative: bool) -> Self {
        match (self, negative) {
            (Self::Rdn, true) => Self::Rup,
            (Self::Rup, true) => Self::Rdn,
            (mode, _) => mode,
        }
    }
}
