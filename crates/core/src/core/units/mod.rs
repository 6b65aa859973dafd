//! Arithmetic units.
//!
//! The engine emulates floating-point instructions only, so the sole unit is
//! the soft-float provider.

/// Floating-point arithmetic provider for IEEE 754 operations.
pub mod fpu;
