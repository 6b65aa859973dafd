//! Trap-and-emulate instruction engine for RISC-V M-mode firmware.
//!
//! This crate services the synchronous traps a hart raises when it meets an
//! instruction its hardware cannot execute. It provides:
//! 1. **ISA:** Field extraction and classification for 16- and 32-bit encodings.
//! 2. **Core:** The trapped register context and a soft-float provider seam.
//! 3. **Emulation:** The illegal-instruction and floating-point dispatchers with
//!    one handler per floating-point operation family.
//! 4. **Services:** Collaborator traits for CSR emulation, unprivileged memory
//!    access and trap redirection.
//! 5. **Support:** Configuration and emulation statistics.

/// Common types (trap descriptors and error taxonomy).
pub mod common;
/// Engine configuration (defaults and JSON loading).
pub mod config;
/// Trapped hart state and the floating-point arithmetic provider.
pub mod core;
/// Dispatchers and per-operation handlers.
pub mod emulate;
/// Instruction set definitions (field decoding, opcodes, RVC, privileged).
pub mod isa;
/// Collaborator interfaces supplied by the surrounding firmware.
pub mod services;
/// Emulation statistics collection and reporting.
pub mod stats;

/// Engine configuration; use `EngineConfig::default()` or load from JSON.
pub use crate::config::EngineConfig;
/// Saved register image of the trapped hart.
pub use crate::core::arch::TrapContext;
/// Engine entry point and its result type.
pub use crate::emulate::{Outcome, TrapEngine};
/// Collaborators bundled for one trap.
pub use crate::services::HartServices;
