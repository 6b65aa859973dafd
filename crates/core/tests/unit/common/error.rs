//! # Error Taxonomy Tests
//!
//! Every failure collapses into exactly one trap descriptor. Only memory
//! faults replace the cause and value captured at trap entry.

use pretty_assertions::assert_eq;
use rvtrap_core::common::{CsrError, EmulationError, RedirectError, TrapInfo};
use rvtrap_core::isa::privileged::cause::exception::{ILLEGAL_INSTRUCTION, LOAD_PAGE_FAULT};

const ORIGINAL: TrapInfo = TrapInfo::new(0x8000_0040, ILLEGAL_INSTRUCTION, 0x0000_3007);

#[test]
fn test_non_memory_errors_keep_original_trap() {
    let errors = [
        EmulationError::unsupported(0x3007, "reason"),
        EmulationError::ReservedRoundingMode(5),
        EmulationError::UnsupportedPrecision(2),
        EmulationError::FpDisabled,
        EmulationError::VirtualWfi,
        EmulationError::CsrAccess {
            csr: 0x7C0,
            source: CsrError::Denied,
        },
    ];
    for err in errors {
        assert_eq!(err.clone().into_trap(ORIGINAL), ORIGINAL, "{err} should forward the original trap");
    }
}

#[test]
fn test_memory_fault_keeps_own_cause_and_value() {
    let fault = TrapInfo::new(0xdead, LOAD_PAGE_FAULT, 0x1000_0008);
    let trap = EmulationError::MemoryFault(fault).into_trap(ORIGINAL);
    assert_eq!(trap, TrapInfo::new(ORIGINAL.epc, LOAD_PAGE_FAULT, 0x1000_0008));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        EmulationError::unsupported(0x53, "unassigned funct5").to_string(),
        "unsupported encoding 0x00000053: unassigned funct5"
    );
    assert_eq!(EmulationError::ReservedRoundingMode(5).to_string(), "reserved rounding mode 0b101");
    assert_eq!(EmulationError::FpDisabled.to_string(), "floating point disabled in mstatus.FS");
    assert_eq!(
        EmulationError::CsrAccess {
            csr: 0x7C0,
            source: CsrError::ReadOnly
        }
        .to_string(),
        "csr 0x7c0 access failed: read-only csr"
    );
    assert_eq!(
        RedirectError::NoHandler {
            epc: 0x8000_1000,
            cause: 2
        }
        .to_string(),
        "no handler for cause 2 at 0x80001000"
    );
}

#[test]
fn test_csr_access_error_exposes_source() {
    use std::error::Error;

    let err = EmulationError::CsrAccess {
        csr: 0x001,
        source: CsrError::Denied,
    };
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("access denied"));
}
