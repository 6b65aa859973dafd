//! `SYSTEM` opcode emulation.
//!
//! Two cases reach here:
//! 1. `WFI` from a virtualized context, which always traps and is forwarded.
//! 2. CSR instructions naming a CSR the hardware does not implement, which are
//!    emulated through the CSR collaborator.

use super::Writeback;
use crate::common::EmulationError;
use crate::core::arch::TrapContext;
use crate::isa::decode::Decoded;
use crate::isa::instruction::InstructionBits;
use crate::isa::privileged::opcodes::{CsrAccess, MASK_WFI, WFI};
use crate::services::CsrEmulator;

/// Emulates a `SYSTEM` instruction.
///
/// The sub-opcode is validated before the CSR is read, so `ECALL`, `xRET`,
/// non-guest `WFI` and funct3 = 4 never reach the collaborator. The CSR is
/// written before the destination register; the old value lands in `rd`.
///
/// # Arguments
///
/// * `hart_id` - Hart that trapped.
/// * `ctx` - Trapped context, handed to the collaborator.
/// * `csr` - CSR emulation collaborator.
/// * `decoded` - Fields of the faulting instruction.
///
/// # Returns
///
/// The `rd` write-back carrying the CSR's previous value.
pub fn emulate(
    hart_id: u32,
    ctx: &mut TrapContext,
    csr: &mut dyn CsrEmulator,
    decoded: &Decoded,
) -> Result<Writeback, EmulationError> {
    let insn = decoded.raw;
    if ctx.in_guest() && insn & MASK_WFI == WFI {
        return Err(EmulationError::VirtualWfi);
    }

    let access = CsrAccess::from_funct3(insn.funct3())
        .ok_or_else(|| EmulationError::unsupported(insn, "system funct3 is not a csr access"))?;
    let number = insn.csr();
    let operand = if access.immediate {
        decoded.rs1 as u64
    } else {
        ctx.read_gpr(decoded.rs1)
    };

    let old = csr
        .read(number, hart_id, ctx)
        .map_err(|source| EmulationError::CsrAccess { csr: number, source })?;
    if access.writes(decoded.rs1) {
        csr.write(number, hart_id, ctx, access.apply(old, operand))
            .map_err(|source| EmulationError::CsrAccess { csr: number, source })?;
    }

    Ok(Writeback::Gpr {
        rd: decoded.rd,
        value: old,
    })
}
