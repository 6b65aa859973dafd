//! RISC-V Floating-Point (F/D) Operation Families (funct5).
//!
//! Bits 31:27 of an `OP-FP` instruction select the operation family. The
//! format bits 26:25 that complete funct7 are decoded separately as the
//! precision tag.

/// Add.
pub const FADD: u32 = 0b00000;
/// Subtract.
pub const FSUB: u32 = 0b00001;
/// Multiply.
pub const FMUL: u32 = 0b00010;
/// Divide.
pub const FDIV: u32 = 0b00011;
/// Sign injection.
pub const FSGNJ: u32 = 0b00100;
/// Minimum / maximum.
pub const FMINMAX: u32 = 0b00101;
/// Float-to-float conversion.
pub const FCVT_FF: u32 = 0b01000;
/// Square root.
pub const FSQRT: u32 = 0b01011;
/// Comparison.
pub const FCMP: u32 = 0b10100;
/// Float-to-integer conversion.
pub const FCVT_INT_FROM_FP: u32 = 0b11000;
/// Integer-to-float conversion.
pub const FCVT_FP_FROM_INT: u32 = 0b11010;
/// Move to integer register / classify.
pub const FMV_TO_INT: u32 = 0b11100;
/// Move from integer register.
pub const FMV_FROM_INT: u32 = 0b11110;

/// Operation family selected by funct5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpFunct {
    /// `FADD.fmt`.
    Add,
    /// `FSUB.fmt`.
    Sub,
    /// `FMUL.fmt`.
    Mul,
    /// `FDIV.fmt`.
    Div,
    /// `FSGNJ[N|X].fmt`.
    SignInject,
    /// `FMIN.fmt` / `FMAX.fmt`.
    MinMax,
    /// `FCVT.S.D` / `FCVT.D.S`.
    ConvertFloat,
    /// `FSQRT.fmt`.
    Sqrt,
    /// `FEQ` / `FLT` / `FLE`.
    Compare,
    /// `FCVT.{W,WU,L,LU}.fmt`.
    ToInt,
    /// `FCVT.fmt.{W,WU,L,LU}`.
    FromInt,
    /// `FMV.X.{W,D}` / `FCLASS.fmt`.
    MoveToInt,
    /// `FMV.{W,D}.X`.
    MoveFromInt,
    /// Unassigned slot, carrying the raw index.
    Unassigned(u8),
}

impl FpFunct {
    /// Classifies a funct5 value.
    pub const fn from_funct5(funct5: u32) -> Self {
        match funct5 & 0x1F {
            FADD => Self::Add,
            FSUB => Self::Sub,
            FMUL => Self::Mul,
            FDIV => Self::Div,
            FSGNJ => Self::SignInject,
            FMINMAX => Self::MinMax,
            FCVT_FF => Self::ConvertFloat,
            FSQRT => Self::Sqrt,
            FCMP => Self::Compare,
            FCVT_INT_FROM_FP => Self::ToInt,
            FCVT_FP_FROM_INT => Self::FromInt,
            FMV_TO_INT => Self::MoveToInt,
            FMV_FROM_INT => Self::MoveFromInt,
            other => Self::Unassigned(other as u8),
        }
    }
}
