//! Floating-point load emulation.
//!
//! `FLD` (32-bit) and `C.FLD` / `C.FLDSP` (16-bit) on harts without a
//! double-precision load path. The load goes through the unprivileged memory
//! collaborator; a fault it reports is forwarded with its own cause and value.

use super::Writeback;
use crate::common::EmulationError;
use crate::config::EngineConfig;
use crate::core::arch::TrapContext;
use crate::isa::decode::Decoded;
use crate::isa::rv64f::Precision;
use crate::isa::rv64f::opcodes::{MASK_FLD, MATCH_FLD};
use crate::isa::rvc::decode_float_load;
use crate::services::UnprivilegedMemory;

/// Emulates `FLD rd, imm(rs1)`.
///
/// Requires `mstatus.FS` != Off; `FLW` and the other `LOAD-FP` widths are
/// rejected.
pub fn fld(
    ctx: &TrapContext,
    memory: &mut dyn UnprivilegedMemory,
    decoded: &Decoded,
) -> Result<Writeback, EmulationError> {
    if !ctx.fp_enabled() {
        return Err(EmulationError::FpDisabled);
    }
    if decoded.raw & MASK_FLD != MATCH_FLD {
        return Err(EmulationError::unsupported(decoded.raw, "load-fp width other than fld"));
    }

    let addr = ctx.xlen().mask(ctx.read_gpr(decoded.rs1).wrapping_add(decoded.imm as u64));
    load_double(memory, addr, decoded.rd)
}

/// Emulates `C.FLD` and `C.FLDSP`.
///
/// The FS check only applies when
/// [`EngineConfig::compressed_loads_require_fs`] is set.
pub fn compressed(
    config: &EngineConfig,
    ctx: &TrapContext,
    memory: &mut dyn UnprivilegedMemory,
    insn: u32,
) -> Result<Writeback, EmulationError> {
    let load = decode_float_load(insn)
        .ok_or_else(|| EmulationError::unsupported(insn, "compressed encoding other than c.fld/c.fldsp"))?;
    if config.compressed_loads_require_fs && !ctx.fp_enabled() {
        return Err(EmulationError::FpDisabled);
    }

    let addr = ctx.xlen().mask(ctx.read_gpr(load.base).wrapping_add(load.offset));
    load_double(memory, addr, load.rd)
}

fn load_double(memory: &mut dyn UnprivilegedMemory, addr: u64, rd: usize) -> Result<Writeback, EmulationError> {
    let value = memory.load_u64(addr).map_err(EmulationError::MemoryFault)?;
    Ok(Writeback::Fpr {
        precision: Precision::Double,
        rd,
        value,
    })
}
