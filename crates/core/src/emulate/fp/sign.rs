//! Sign injection (`FSGNJ`, `FSGNJN`, `FSGNJX`).
//!
//! Pure bit manipulation: no provider call, no flags, NaN payloads kept.

use super::precision;
use crate::common::EmulationError;
use crate::core::arch::TrapContext;
use crate::emulate::Writeback;
use crate::isa::decode::Decoded;
use crate::isa::rv64f::funct3::SignInjection;

/// Replaces the sign of rs1 according to the funct3 variant.
pub fn inject(ctx: &TrapContext, decoded: &Decoded) -> Result<Writeback, EmulationError> {
    let variant = SignInjection::from_rm(decoded.rm)
        .ok_or_else(|| EmulationError::unsupported(decoded.raw, "reserved sign injection"))?;
    let p = precision(decoded)?;
    let sign = p.sign_mask();
    let rs1 = ctx.read_fpr(p, decoded.rs1);
    let rs2 = ctx.read_fpr(p, decoded.rs2);

    let new_sign = match variant {
        SignInjection::Copy => rs2 & sign,
        SignInjection::Negate => !rs2 & sign,
        SignInjection::Xor => (rs1 ^ rs2) & sign,
    };
    Ok(Writeback::Fpr {
        precision: p,
        rd: decoded.rd,
        value: (rs1 & !sign) | new_sign,
    })
}
