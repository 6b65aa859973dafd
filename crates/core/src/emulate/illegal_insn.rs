//! Illegal-instruction dispatcher.
//!
//! Classifies the faulting word and routes it:
//! - 16-bit encodings: only `C.FLD` / `C.FLDSP` are emulated.
//! - `SYSTEM`: CSR read-modify-write, guest `WFI` forwarding.
//! - `LOAD-FP`: `FLD` when the FPU is enabled.
//! - `OP-FP` and the fused family: forwarded to the floating-point dispatcher
//!   when [`EngineConfig::route_fp_opcodes`] is set.
//!
//! Every other major opcode is truly illegal.

use tracing::trace;

use super::{COMPRESSED_INSN_LEN, INSN_LEN, Retired, fp, load, system};
use crate::common::EmulationError;
use crate::config::EngineConfig;
use crate::core::arch::TrapContext;
use crate::core::units::fpu::SoftFloat;
use crate::isa::decode::{MajorOpcode, decode};
use crate::isa::instruction::InstructionBits;
use crate::services::HartServices;
use crate::stats::InstructionClass;

/// Emulates one illegal instruction without committing it.
///
/// # Arguments
///
/// * `config` - Engine configuration.
/// * `fpu` - Soft-float provider (used when FP opcodes are routed here).
/// * `hart_id` - Hart that trapped.
/// * `ctx` - Trapped context; only the CSR collaborator may modify it.
/// * `services` - Collaborators for this trap.
/// * `insn` - The faulting instruction word.
///
/// # Returns
///
/// The retired instruction to commit, or why it must be redirected.
pub fn emulate<F: SoftFloat>(
    config: &EngineConfig,
    fpu: &mut F,
    hart_id: u32,
    ctx: &mut TrapContext,
    services: &mut HartServices<'_>,
    insn: u32,
) -> Result<Retired, EmulationError> {
    if insn.is_compressed() {
        trace!(insn, "compressed encoding");
        let writeback = load::compressed(config, ctx, &mut *services.memory, insn)?;
        return Ok(Retired::new(writeback, COMPRESSED_INSN_LEN, InstructionClass::FloatLoad));
    }

    let decoded = decode(insn);
    trace!(insn, major = ?decoded.major, "standard encoding");
    match decoded.major {
        MajorOpcode::System => system::emulate(hart_id, ctx, &mut *services.csr, &decoded)
            .map(|writeback| Retired::new(writeback, INSN_LEN, InstructionClass::Csr)),
        MajorOpcode::LoadFp => load::fld(ctx, &mut *services.memory, &decoded)
            .map(|writeback| Retired::new(writeback, INSN_LEN, InstructionClass::FloatLoad)),
        MajorOpcode::OpFp | MajorOpcode::Fmadd | MajorOpcode::Fmsub | MajorOpcode::Fnmsub | MajorOpcode::Fnmadd
            if config.route_fp_opcodes =>
        {
            fp::emulate(fpu, ctx, &decoded)
        }
        _ => Err(EmulationError::unsupported(insn, "major opcode not emulated")),
    }
}
