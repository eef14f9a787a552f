use num_derive::FromPrimitive;
use static_assertions::const_assert;
use std::fmt::Display;
use strum_macros::EnumIter;

pub type Word = u16;

pub const REG_COUNT: usize = 4;

pub const OPCODE_WIDTH: u32 = 6;
pub const IMM_WIDTH: u32 = 4;
pub const REG_WIDTH: u32 = 2;

pub const IMM_SHIFT: u32 = 6;
pub const RD_SHIFT: u32 = 8;
pub const RT_SHIFT: u32 = 10;
pub const RS_SHIFT: u32 = 12;

// The operand fields sit directly above the opcode bits.
const_assert!(IMM_SHIFT == OPCODE_WIDTH);
const_assert!(REG_COUNT <= 1 << REG_WIDTH);
const_assert!((Imm::MAX as usize) < 1 << IMM_WIDTH);

/// A register of the 4-entry register file. Written `r0`..`r3` in
/// assembly source, and held here post-validation: an out-of-range
/// index is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, EnumIter)]
pub enum Reg {
    R0,
    R1,
    R2,
    R3,
}

impl Reg {
    pub fn index(self) -> Word {
        self as Word
    }
}

impl Display for Reg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}", self.index())
    }
}

/// A 4-bit unsigned immediate. Construction is the only validation
/// point; every held value already fits the encoding field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Imm(u8);

impl Imm {
    pub const MAX: u8 = 0xF;

    pub const ZERO: Imm = Imm(0);

    pub fn new(value: i64) -> Option<Self> {
        if (0..=Imm::MAX as i64).contains(&value) {
            Some(Imm(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> Word {
        Word::from(self.0)
    }
}

impl Display for Imm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
