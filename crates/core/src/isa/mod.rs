//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the field extractors, encoding constants and classification enums
//! the engine needs to judge a trapped instruction word.
//!
//! # Structure
//!
//! * `instruction`: Bit-field accessors for 32-bit encodings.
//! * `decode`: Per-trap `Decoded` field set and major-opcode classification.
//! * `rv64f`: Floating-point (F/D) opcodes, funct codes and the precision tag.
//! * `rvc`: Compressed float-load encodings and their field layout.
//! * `privileged`: Cause codes, `WFI` and CSR sub-opcodes.

/// Per-trap decoded fields and major-opcode classification.
pub mod decode;

/// Instruction encoding bit extraction utilities.
pub mod instruction;

/// Privileged architecture definitions (causes, system instructions).
pub mod privileged;

/// Floating-point extension definitions (single and double precision).
pub mod rv64f;

/// Compressed instruction extension (16-bit float loads).
pub mod rvc;
