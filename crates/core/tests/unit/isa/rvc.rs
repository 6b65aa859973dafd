//! # Compressed Float-Load Tests
//!
//! `C.FLD` / `C.FLDSP` recognition and their scattered offset fields.

use proptest::prelude::*;
use rvtrap_core::isa::rvc::constants::REG_SP;
use rvtrap_core::isa::rvc::{CompressedBits, CompressedLoad, decode_float_load};

use crate::common::builder::instruction::{c_fld, c_fldsp};

#[test]
fn test_c_fld_decoding() {
    // c.fld f9, 200(x10)
    let insn = c_fld(9, 10, 200);
    assert_eq!(
        decode_float_load(insn),
        Some(CompressedLoad {
            base: 10,
            offset: 200,
            rd: 9
        })
    );
}

#[test]
fn test_c_fldsp_decoding() {
    // c.fldsp f1, 16(sp)
    let insn = c_fldsp(1, 16);
    assert_eq!(
        decode_float_load(insn),
        Some(CompressedLoad {
            base: REG_SP,
            offset: 16,
            rd: 1
        })
    );
}

#[test]
fn test_c_fldsp_max_offset() {
    let insn = c_fldsp(31, 504);
    assert_eq!(insn.ci_ldsp_offset(), 504);
    assert_eq!(insn.ci_rd(), 31);
}

#[test]
fn test_other_compressed_encodings_rejected() {
    // c.lw (quadrant 0, funct3 010) and c.fsdsp (quadrant 2, funct3 101)
    assert_eq!(decode_float_load(0x4000), None);
    assert_eq!(decode_float_load(0xA002), None);
    // c.fld funct3 in quadrant 1 is c.jal/c.addiw, not a load.
    assert_eq!(decode_float_load(0x2001), None);
}

#[test]
fn test_prime_registers() {
    let insn = c_fld(15, 8, 0);
    assert_eq!(insn.rs1_prime(), 8);
    assert_eq!(insn.rs2_prime(), 15);
}

proptest! {
    #[test]
    fn prop_c_fld_offset_round_trip(scaled in 0..32_u32, rd in 8..16_u32, rs1 in 8..16_u32) {
        let off = scaled * 8;
        let load = decode_float_load(c_fld(rd, rs1, off));
        prop_assert_eq!(load, Some(CompressedLoad { base: rs1 as usize, offset: u64::from(off), rd: rd as usize }));
    }

    #[test]
    fn prop_c_fldsp_offset_round_trip(scaled in 0..64_u32, rd in 0..32_u32) {
        let off = scaled * 8;
        let load = decode_float_load(c_fldsp(rd, off));
        prop_assert_eq!(load, Some(CompressedLoad { base: REG_SP, offset: u64::from(off), rd: rd as usize }));
    }
}
