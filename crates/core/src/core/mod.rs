//! Core hart state and arithmetic.
//!
//! This module contains the trapped hart's architectural state and the
//! floating-point arithmetic provider the emulation handlers call into.

/// Architectural state (register images, CSR fields, trap values).
pub mod arch;

/// Arithmetic units (the soft-float provider).
pub mod units;
