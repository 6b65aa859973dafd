//! Privileged Architecture Definitions.
//!
//! Trap cause codes and the `SYSTEM` encodings the illegal-instruction
//! dispatcher distinguishes.
//!
//! # Modules
//!
//! - `cause`: Exception cause codes.
//! - `opcodes`: `SYSTEM` major opcode, `WFI` and CSR sub-opcodes.

/// Exception cause code definitions.
pub mod cause;

/// System instruction opcodes and CSR sub-opcodes.
pub mod opcodes;
