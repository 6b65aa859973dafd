//! Emulation statistics collection and reporting.
//!
//! This module tracks what the engine did with the traps it was handed. It provides:
//! 1. **Instruction mix:** Emulated instructions by family (CSR, FP load, FP arithmetic,
//!    conversions, moves, fused multiply-add).
//! 2. **Failures:** Traps redirected to the next lower privilege level.
//! 3. **Side traffic:** Instruction fetches and instructions that raised exception flags.
//!
//! Counters only grow; the firmware reads them through [`EmulationStats::to_json`]
//! or prints the [`std::fmt::Display`] report.

use std::fmt;

use serde::Serialize;

/// Instruction family an emulated instruction is counted under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// CSR read-modify-write.
    Csr,
    /// `FLD`, `C.FLD`, `C.FLDSP`.
    FloatLoad,
    /// Add, subtract, multiply, divide, square root, compare, min/max, sign injection.
    FpArith,
    /// Float-to-float and float/integer conversions.
    FpConvert,
    /// Register moves and classify.
    FpMove,
    /// `FMADD`, `FMSUB`, `FNMSUB`, `FNMADD`.
    FpFused,
}

/// Counters kept by a [`crate::TrapEngine`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EmulationStats {
    /// CSR instructions emulated.
    pub csr: u64,
    /// Floating-point loads emulated.
    pub float_load: u64,
    /// FP arithmetic, compare and sign instructions emulated.
    pub fp_arith: u64,
    /// FP conversions emulated.
    pub fp_convert: u64,
    /// FP moves and classifications emulated.
    pub fp_move: u64,
    /// Fused multiply-add instructions emulated.
    pub fp_fused: u64,
    /// Traps forwarded to the redirector.
    pub redirects: u64,
    /// Instructions fetched because `mtval` was zero.
    pub fetches: u64,
    /// Emulated instructions that accrued at least one exception flag.
    pub flag_events: u64,
}

impl EmulationStats {
    /// Counts one emulated instruction.
    pub fn record(&mut self, class: InstructionClass) {
        let counter = match class {
            InstructionClass::Csr => &mut self.csr,
            InstructionClass::FloatLoad => &mut self.float_load,
            InstructionClass::FpArith => &mut self.fp_arith,
            InstructionClass::FpConvert => &mut self.fp_convert,
            InstructionClass::FpMove => &mut self.fp_move,
            InstructionClass::FpFused => &mut self.fp_fused,
        };
        *counter += 1;
    }

    /// Total instructions emulated across all families.
    pub const fn emulated(&self) -> u64 {
        self.csr + self.float_load + self.fp_arith + self.fp_convert + self.fp_move + self.fp_fused
    }

    /// Serializes the counters as a JSON object.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` failures (not expected for plain counters).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for EmulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TRAP EMULATION STATISTICS")?;
        writeln!(f, "  emulated               {}", self.emulated())?;
        writeln!(f, "    csr                  {}", self.csr)?;
        writeln!(f, "    fp.load              {}", self.float_load)?;
        writeln!(f, "    fp.arith             {}", self.fp_arith)?;
        writeln!(f, "    fp.convert           {}", self.fp_convert)?;
        writeln!(f, "    fp.move              {}", self.fp_move)?;
        writeln!(f, "    fp.fused             {}", self.fp_fused)?;
        writeln!(f, "  redirects              {}", self.redirects)?;
        writeln!(f, "  fetches                {}", self.fetches)?;
        write!(f, "  flag_events            {}", self.flag_events)
    }
}
