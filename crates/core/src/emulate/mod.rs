//! Trap-and-emulate engine.
//!
//! This module is the entry point the trap vector calls with the trapped
//! hart's saved state. It provides:
//! 1. **Entry Points:** [`TrapEngine::handle_illegal_insn`] and [`TrapEngine::handle_fp_insn`].
//! 2. **Dispatch:** Major-opcode routing in [`illegal_insn`], `funct5` routing in [`fp`].
//! 3. **Commit:** Handlers describe their result as a [`Writeback`]; the engine
//!    writes it, accrues exception flags and advances `mepc` only once the
//!    whole instruction has been validated and computed.
//! 4. **Redirection:** Every failure becomes exactly one [`TrapInfo`] built
//!    from the values saved at trap entry and is handed to the redirector.

/// Floating-point emulation dispatcher and per-operation handlers.
pub mod fp;

/// Illegal-instruction dispatcher.
pub mod illegal_insn;

/// Floating-point loads (`FLD`, `C.FLD`, `C.FLDSP`).
pub mod load;

/// `SYSTEM` opcode: CSR read-modify-write and guest `WFI`.
pub mod system;

use tracing::{debug, trace, warn};

use crate::common::{EmulationError, RedirectError, TrapInfo};
use crate::config::EngineConfig;
use crate::core::arch::TrapContext;
use crate::core::units::fpu::{FpFlags, IeeeFloat, SoftFloat};
use crate::isa::decode::decode;
use crate::isa::rv64f::Precision;
use crate::services::{HartServices, TrapRedirector, UnprivilegedMemory};
use crate::stats::{EmulationStats, InstructionClass};

/// Length of a standard instruction.
pub const INSN_LEN: u64 = 4;

/// Length of a compressed instruction.
pub const COMPRESSED_INSN_LEN: u64 = 2;

/// How a trap was disposed of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The instruction was emulated; the context holds its result and `mepc`
    /// points past it.
    Emulated,
    /// The trap was forwarded to the redirector with this descriptor.
    Redirected(TrapInfo),
}

/// The single destination register write of an emulated instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Writeback {
    /// Integer destination.
    Gpr {
        /// Register index.
        rd: usize,
        /// Value (truncated to XLEN on commit).
        value: u64,
    },
    /// Floating-point destination.
    Fpr {
        /// Width of the value (singles are NaN-boxed on commit).
        precision: Precision,
        /// Register index.
        rd: usize,
        /// Bit pattern.
        value: u64,
    },
}

/// A successfully emulated instruction, not yet committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Destination write.
    pub writeback: Writeback,
    /// Instruction length in bytes.
    pub len: u64,
    /// Statistics bucket.
    pub class: InstructionClass,
    /// Exception flags to accrue into `fflags`.
    pub flags: FpFlags,
}

impl Retired {
    /// A retired instruction that raised no exception flags.
    pub const fn new(writeback: Writeback, len: u64, class: InstructionClass) -> Self {
        Self {
            writeback,
            len,
            class,
            flags: FpFlags::NONE,
        }
    }

    /// Attaches the exception flags raised while computing the result.
    #[must_use]
    pub const fn with_flags(mut self, flags: FpFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// Trap-and-emulate engine for one hart.
///
/// Holds no per-trap state: the trapped context and the collaborators are
/// borrowed for the duration of a single call.
///
/// # Examples
///
/// ```no_run
/// use rvtrap_core::{EngineConfig, HartServices, TrapContext, TrapEngine};
/// # fn run(ctx: &mut TrapContext, services: &mut HartServices<'_>) {
/// let mut engine = TrapEngine::new(EngineConfig::default());
/// let _ = engine.handle_illegal_insn(0, ctx, services);
/// # }
/// ```
#[derive(Debug)]
pub struct TrapEngine<F: SoftFloat = IeeeFloat> {
    config: EngineConfig,
    fpu: F,
    stats: EmulationStats,
}

impl TrapEngine<IeeeFloat> {
    /// Creates an engine using the software IEEE 754 provider.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_fpu(config, IeeeFloat::new())
    }
}

impl Default for TrapEngine<IeeeFloat> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<F: SoftFloat> TrapEngine<F> {
    /// Creates an engine with a caller-supplied soft-float provider.
    pub fn with_fpu(config: EngineConfig, fpu: F) -> Self {
        Self {
            config,
            fpu,
            stats: EmulationStats::default(),
        }
    }

    /// Active configuration.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> &EmulationStats {
        &self.stats
    }

    /// The soft-float provider.
    pub const fn fpu(&self) -> &F {
        &self.fpu
    }

    /// Services an illegal-instruction trap.
    ///
    /// # Arguments
    ///
    /// * `hart_id` - Hart that trapped (passed through to the CSR collaborator).
    /// * `ctx` - Saved state of the trapped hart.
    /// * `services` - Collaborators for this trap.
    ///
    /// # Returns
    ///
    /// The disposition of the trap, or the redirector's own failure.
    pub fn handle_illegal_insn(
        &mut self,
        hart_id: u32,
        ctx: &mut TrapContext,
        services: &mut HartServices<'_>,
    ) -> Result<Outcome, RedirectError> {
        let insn = match self.trapped_insn(ctx, &mut *services.memory) {
            Ok(insn) => insn,
            Err(fault) => return self.fail(ctx, &mut *services.redirector, 0, fault),
        };
        trace!(hart_id, insn, pc = ctx.mepc, "illegal instruction trap");

        let result = illegal_insn::emulate(&self.config, &mut self.fpu, hart_id, ctx, services, insn);
        self.complete(ctx, &mut *services.redirector, insn, result)
    }

    /// Services a trap raised by a floating-point opcode the hardware cannot execute.
    ///
    /// # Arguments
    ///
    /// * `hart_id` - Hart that trapped.
    /// * `ctx` - Saved state of the trapped hart.
    /// * `services` - Collaborators for this trap.
    ///
    /// # Returns
    ///
    /// The disposition of the trap, or the redirector's own failure.
    pub fn handle_fp_insn(
        &mut self,
        hart_id: u32,
        ctx: &mut TrapContext,
        services: &mut HartServices<'_>,
    ) -> Result<Outcome, RedirectError> {
        let insn = match self.trapped_insn(ctx, &mut *services.memory) {
            Ok(insn) => insn,
            Err(fault) => return self.fail(ctx, &mut *services.redirector, 0, fault),
        };
        trace!(hart_id, insn, pc = ctx.mepc, "floating-point trap");

        let result = fp::emulate(&mut self.fpu, ctx, &decode(insn));
        self.complete(ctx, &mut *services.redirector, insn, result)
    }

    /// The faulting instruction: `mtval`, or fetched from `mepc` when `mtval` is zero.
    fn trapped_insn(
        &mut self,
        ctx: &TrapContext,
        memory: &mut dyn UnprivilegedMemory,
    ) -> Result<u32, EmulationError> {
        if ctx.mtval != 0 {
            return Ok(ctx.mtval as u32);
        }
        self.stats.fetches += 1;
        trace!(pc = ctx.mepc, "mtval is zero, fetching instruction");
        memory.fetch_insn(ctx.mepc).map_err(EmulationError::MemoryFault)
    }

    fn complete(
        &mut self,
        ctx: &mut TrapContext,
        redirector: &mut dyn TrapRedirector,
        insn: u32,
        result: Result<Retired, EmulationError>,
    ) -> Result<Outcome, RedirectError> {
        match result {
            Ok(retired) => {
                self.commit(ctx, retired);
                debug!(insn, class = ?retired.class, "emulated");
                Ok(Outcome::Emulated)
            }
            Err(err) => self.fail(ctx, redirector, insn, err),
        }
    }

    fn commit(&mut self, ctx: &mut TrapContext, retired: Retired) {
        match retired.writeback {
            Writeback::Gpr { rd, value } => ctx.write_gpr(rd, value),
            Writeback::Fpr { precision, rd, value } => ctx.write_fpr(precision, rd, value),
        }
        if !retired.flags.is_empty() {
            self.stats.flag_events += 1;
            ctx.accrue_fflags(retired.flags);
        }
        ctx.advance_pc(retired.len);
        self.stats.record(retired.class);
    }

    fn fail(
        &mut self,
        ctx: &mut TrapContext,
        redirector: &mut dyn TrapRedirector,
        insn: u32,
        err: EmulationError,
    ) -> Result<Outcome, RedirectError> {
        let trap = err.clone().into_trap(ctx.original_trap(insn));
        debug!(insn, cause = trap.cause, tval = trap.tval, reason = %err, "redirecting trap");
        self.stats.redirects += 1;
        redirector
            .redirect(ctx, &trap)
            .map(|()| Outcome::Redirected(trap))
            .inspect_err(|e| warn!(epc = trap.epc, error = %e, "trap redirect failed"))
    }
}
