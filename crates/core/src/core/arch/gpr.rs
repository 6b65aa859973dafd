//! RISC-V General-Purpose Register File.
//!
//! Saved integer register image of the trapped hart:
//! 1. **Storage:** 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Register `x0` reads as zero and ignores writes.

/// General-Purpose Register file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u64; 32],
}

impl Gpr {
    /// Creates a register file with all registers zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The stored value. Register `x0` always returns 0.
    pub fn read(&self, idx: usize) -> u64 {
        match idx & 0x1F {
            0 => 0,
            i => self.regs[i],
        }
    }

    /// Writes a value to a general-purpose register; writes to `x0` are dropped.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The value to write.
    pub fn write(&mut self, idx: usize, val: u64) {
        let i = idx & 0x1F;
        if i != 0 {
            self.regs[i] = val;
        }
    }
}
