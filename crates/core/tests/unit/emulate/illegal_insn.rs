//! # Illegal-Instruction Dispatcher Tests
//!
//! Routing by encoding length and major opcode, instruction fetch when
//! `mtval` is zero, and the shape of every redirected trap.

use pretty_assertions::assert_eq;
use rvtrap_core::common::{RedirectError, TrapInfo};
use rvtrap_core::config::EngineConfig;
use rvtrap_core::core::arch::csr::MSTATUS_MPV;
use rvtrap_core::isa::privileged::cause::exception::{ILLEGAL_INSTRUCTION, INSTRUCTION_PAGE_FAULT};
use rvtrap_core::isa::privileged::opcodes::{CSRRS, WFI};
use rvtrap_core::isa::rv64f::funct5::FADD;
use rvtrap_core::isa::rv64f::opcodes::OP_FMADD;
use rvtrap_core::services::HartServices;
use rvtrap_core::{Outcome, TrapEngine};

use crate::common::builder::instruction::{InstructionBuilder, csr};
use crate::common::harness::{HART_ID, TRAP_PC, TestHart};
use crate::common::mocks::csr::MockCsr;
use crate::common::mocks::memory::MockMemory;
use crate::common::mocks::redirector::{MockRedirector, RecordingRedirector};

/// `csrrs x5, 0x7c0, x0`: reads a platform CSR.
const READ_CUSTOM_CSR: u32 = 0x7C00_22F3;

#[test]
fn test_truly_illegal_opcode_redirects_original_trap() {
    let mut hart = TestHart::new();
    let before = hart.ctx.clone();
    // add x1, x2, x3
    let insn = 0x0031_00B3;

    let outcome = hart.illegal(insn).expect("redirector accepts");

    let expected = TrapInfo::new(TRAP_PC, ILLEGAL_INSTRUCTION, u64::from(insn));
    assert_eq!(outcome, Outcome::Redirected(expected));
    assert_eq!(hart.redirector.single(), expected);
    assert_eq!(hart.ctx.mepc, TRAP_PC, "pc must not advance on failure");
    assert_eq!(hart.ctx.gpr, before.gpr);
    assert_eq!(hart.ctx.fpr, before.fpr);
}

#[test]
fn test_unsupported_compressed_encoding_redirects() {
    let mut hart = TestHart::new();
    // c.addi x1, 1
    let outcome = hart.illegal(0x0085).expect("redirector accepts");
    assert_eq!(outcome, Outcome::Redirected(TrapInfo::new(TRAP_PC, ILLEGAL_INSTRUCTION, 0x0085)));
}

#[test]
fn test_zero_mtval_fetches_instruction() {
    let mut hart = TestHart::new();
    hart.csr.inner_mut().define(0x7C0, 0x55);
    hart.memory.store_insn(TRAP_PC, READ_CUSTOM_CSR);
    hart.ctx.mtval = 0;

    let outcome = hart.handle_illegal().expect("no redirect");

    assert_eq!(outcome, Outcome::Emulated);
    assert_eq!(hart.memory.fetches, vec![TRAP_PC]);
    assert_eq!(hart.x(5), 0x55);
    assert_eq!(hart.engine.stats().fetches, 1);
}

#[test]
fn test_nonzero_mtval_skips_fetch() {
    let mut hart = TestHart::new();
    hart.csr.inner_mut().define(0x7C0, 1);
    let _ = hart.illegal(READ_CUSTOM_CSR).expect("no redirect");
    assert!(hart.memory.fetches.is_empty());
    assert_eq!(hart.engine.stats().fetches, 0);
}

#[test]
fn test_fetch_fault_redirects_with_fault_cause() {
    let mut hart = TestHart::new();
    hart.memory.inject_fault(TRAP_PC, INSTRUCTION_PAGE_FAULT);
    hart.ctx.mtval = 0;

    let outcome = hart.handle_illegal().expect("redirector accepts");

    let expected = TrapInfo::new(TRAP_PC, INSTRUCTION_PAGE_FAULT, TRAP_PC);
    assert_eq!(outcome, Outcome::Redirected(expected));
    assert_eq!(hart.redirector.single(), expected);
}

#[test]
fn test_guest_wfi_is_forwarded() {
    let mut hart = TestHart::new();
    hart.ctx.mstatus |= MSTATUS_MPV;

    let outcome = hart.illegal(WFI).expect("redirector accepts");

    assert_eq!(outcome, Outcome::Redirected(TrapInfo::new(TRAP_PC, ILLEGAL_INSTRUCTION, u64::from(WFI))));
    assert!(hart.csr.inner().reads.is_empty(), "wfi never reaches the csr file");
}

#[test]
fn test_host_wfi_is_not_a_csr_access() {
    let mut hart = TestHart::new();
    let outcome = hart.illegal(WFI).expect("redirector accepts");
    assert!(matches!(outcome, Outcome::Redirected(_)));
    assert!(hart.csr.inner().reads.is_empty());
}

#[test]
fn test_op_fp_redirects_unless_routed() {
    let fadd = InstructionBuilder::op_fp(FADD).single().rd(3).rs1(1).rs2(2).build();

    let mut hart = TestHart::new();
    hart.set_f32(1, 1.0);
    hart.set_f32(2, 2.0);
    let outcome = hart.illegal(fadd).expect("redirector accepts");
    assert!(matches!(outcome, Outcome::Redirected(_)));

    let mut hart = TestHart::with_config(EngineConfig {
        route_fp_opcodes: true,
        ..EngineConfig::default()
    });
    hart.set_f32(1, 1.0);
    hart.set_f32(2, 2.0);
    assert_eq!(hart.illegal(fadd), Ok(Outcome::Emulated));
    assert_eq!(hart.f32(3), 3.0);
    assert_eq!(hart.ctx.mepc, TRAP_PC + 4);
}

#[test]
fn test_routed_fused_opcode() {
    let mut hart = TestHart::with_config(EngineConfig {
        route_fp_opcodes: true,
        ..EngineConfig::default()
    });
    hart.set_f64(1, 2.0);
    hart.set_f64(2, 3.0);
    hart.set_f64(3, 1.0);
    let fmadd = InstructionBuilder::fused(OP_FMADD).double().rd(4).rs1(1).rs2(2).rs3(3).build();

    assert_eq!(hart.illegal(fmadd), Ok(Outcome::Emulated));
    assert_eq!(hart.f64(4), 7.0);
    assert_eq!(hart.engine.stats().fp_fused, 1);
}

#[test]
fn test_redirector_failure_is_returned() {
    let mut hart = TestHart::new();
    hart.redirector = RecordingRedirector::failing();

    let result = hart.illegal(0x0000_0013);

    assert_eq!(result, Err(RedirectError::Platform("no supervisor".to_string())));
    assert_eq!(hart.redirector.traps.len(), 1, "the redirect was still attempted");
}

#[test]
#[allow(unused_results)]
fn test_collaborators_through_mocks() {
    let mut ctx = TestHart::new().ctx;
    ctx.mtval = u64::from(csr(CSRRS, 7, 0, 0x7C0));

    let mut csr_file = MockCsr::new();
    csr_file.expect_read().times(1).returning(|number, hart_id, _| {
        assert_eq!(number, 0x7C0);
        assert_eq!(hart_id, HART_ID);
        Ok(0xABCD)
    });
    csr_file.expect_write().never();
    let mut memory = MockMemory::new();
    memory.expect_fetch_insn().never();
    memory.expect_load_u64().never();
    let mut redirector = MockRedirector::new();
    redirector.expect_redirect().never();

    let mut engine: TrapEngine = TrapEngine::default();
    let mut services = HartServices::new(&mut csr_file, &mut memory, &mut redirector);
    let outcome = engine.handle_illegal_insn(HART_ID, &mut ctx, &mut services);

    assert_eq!(outcome, Ok(Outcome::Emulated));
    assert_eq!(ctx.read_gpr(7), 0xABCD);
}

#[test]
#[allow(unused_results)]
fn test_mock_redirector_receives_one_trap() {
    let mut ctx = TestHart::new().ctx;
    ctx.mtval = 0x0000_0013;

    let mut csr_file = MockCsr::new();
    csr_file.expect_read().never();
    let mut memory = MockMemory::new();
    memory.expect_fetch_insn().never();
    let mut redirector = MockRedirector::new();
    redirector.expect_redirect().times(1).returning(|_, trap| {
        assert_eq!(*trap, TrapInfo::new(TRAP_PC, ILLEGAL_INSTRUCTION, 0x13));
        Ok(())
    });

    let mut engine: TrapEngine = TrapEngine::default();
    let mut services = HartServices::new(&mut csr_file, &mut memory, &mut redirector);
    let outcome = engine.handle_illegal_insn(HART_ID, &mut ctx, &mut services);

    assert!(matches!(outcome, Ok(Outcome::Redirected(_))));
}
