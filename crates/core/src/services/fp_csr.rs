//! Floating-point CSR adapter.
//!
//! When the hart has no usable FPU, accesses to `fflags`, `frm` and `fcsr`
//! trap as illegal instructions too. [`FpCsrFile`] answers them from the
//! trapped context's `fcsr` image and forwards every other CSR to the wrapped
//! emulator.

use super::traits::CsrEmulator;
use crate::common::CsrError;
use crate::core::arch::TrapContext;
use crate::core::arch::csr::{FCSR, FCSR_FFLAGS_MASK, FCSR_FRM_MASK, FCSR_FRM_SHIFT, FCSR_MASK, FFLAGS, FRM};

/// CSR emulator serving the floating-point CSRs locally.
#[derive(Debug)]
pub struct FpCsrFile<C> {
    inner: C,
}

impl<C: CsrEmulator> FpCsrFile<C> {
    /// Wraps the emulator that handles every other CSR.
    pub const fn new(inner: C) -> Self {
        Self { inner }
    }

    /// The wrapped emulator.
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// The wrapped emulator, mutably.
    pub const fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Returns the wrapped emulator.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Fails the access when `mstatus.FS` is Off.
    const fn check_enabled(ctx: &TrapContext) -> Result<(), CsrError> {
        if ctx.fp_enabled() { Ok(()) } else { Err(CsrError::Denied) }
    }
}

impl<C: CsrEmulator> CsrEmulator for FpCsrFile<C> {
    fn read(&mut self, csr: u16, hart_id: u32, ctx: &mut TrapContext) -> Result<u64, CsrError> {
        let fcsr = ctx.fcsr;
        let value = match csr {
            FFLAGS => fcsr & FCSR_FFLAGS_MASK,
            FRM => (fcsr >> FCSR_FRM_SHIFT) & FCSR_FRM_MASK,
            FCSR => fcsr & FCSR_MASK,
            _ => return self.inner.read(csr, hart_id, ctx),
        };
        Self::check_enabled(ctx)?;
        Ok(u64::from(value))
    }

    fn write(&mut self, csr: u16, hart_id: u32, ctx: &mut TrapContext, value: u64) -> Result<(), CsrError> {
        let bits = value as u32;
        let fcsr = match csr {
            FFLAGS => (ctx.fcsr & !FCSR_FFLAGS_MASK) | (bits & FCSR_FFLAGS_MASK),
            FRM => {
                let frm_field = FCSR_FRM_MASK << FCSR_FRM_SHIFT;
                (ctx.fcsr & !frm_field) | ((bits & FCSR_FRM_MASK) << FCSR_FRM_SHIFT)
            }
            FCSR => bits & FCSR_MASK,
            _ => return self.inner.write(csr, hart_id, ctx, value),
        };
        Self::check_enabled(ctx)?;
        ctx.fcsr = fcsr;
        ctx.mark_fs_dirty();
        Ok(())
    }
}
