//! RISC-V Floating-Point Register File.
//!
//! Saved floating-point register image of the trapped hart. Every slot is 64
//! bits wide; single-precision values live NaN-boxed in the low half.
//! 1. **Storage:** 32 raw 64-bit slots (`f0`-`f31`), bit patterns preserved exactly.
//! 2. **Width Selection:** Reads and writes choose single or double width by [`Precision`].
//! 3. **NaN Boxing:** Single writes box; checked single reads unbox.

use crate::core::units::fpu::nan_handling::{box_f32_bits, unbox_f32_bits};
use crate::isa::rv64f::Precision;

/// Floating-Point Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fpr {
    fregs: [u64; 32],
}

impl Fpr {
    /// Creates a register file with all slots zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the raw 64-bit slot.
    pub fn read(&self, idx: usize) -> u64 {
        self.fregs[idx & 0x1F]
    }

    /// Writes the raw 64-bit slot.
    pub fn write(&mut self, idx: usize, val: u64) {
        self.fregs[idx & 0x1F] = val;
    }

    /// Reads a value at the given width.
    ///
    /// Single-precision reads return the low 32 bits when the slot is
    /// properly NaN-boxed and the canonical single NaN otherwise.
    ///
    /// # Arguments
    ///
    /// * `precision` - Operand width.
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The value's bit pattern, zero-extended into a `u64`.
    pub fn read_as(&self, precision: Precision, idx: usize) -> u64 {
        match precision {
            Precision::Single => u64::from(unbox_f32_bits(self.read(idx))),
            Precision::Double => self.read(idx),
        }
    }

    /// Writes a value at the given width, NaN-boxing single-precision values.
    ///
    /// # Arguments
    ///
    /// * `precision` - Operand width.
    /// * `idx` - Register index (0-31).
    /// * `val` - Bit pattern; only the low 32 bits are used for single precision.
    pub fn write_as(&mut self, precision: Precision, idx: usize, val: u64) {
        let slot = match precision {
            Precision::Single => box_f32_bits(val as u32),
            Precision::Double => val,
        };
        self.write(idx, slot);
    }
}
