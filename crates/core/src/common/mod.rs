//! Common types shared by every part of the engine.
//!
//! This module provides:
//! 1. **Trap Descriptor:** The `{pc, cause, value}` triple handed to the redirector.
//! 2. **Error Handling:** The failure taxonomy for emulation, CSR access and redirection.

/// Trap descriptor and error types.
pub mod error;

pub use error::{CsrError, EmulationError, RedirectError, TrapInfo};
