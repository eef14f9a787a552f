use crate::spec::hw::{Imm, Reg};
use std::fmt::Display;

/// A single parsed operand. Both variants are validated on
/// construction, so a held value is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(Reg),
    Immediate(Imm),
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Register(r) => write!(f, "{}", r),
            Operand::Immediate(imm) => write!(f, "{}", imm),
        }
    }
}

/// The typed operand fields of an instruction, tagged by structural
/// class. Field counts and types are fixed per class, so a well-formed
/// value always encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstKind {
    RegReg { rd: Reg, rs: Reg, rt: Reg },
    RegImm { rt: Reg, rs: Reg, imm: Imm },
    Branch { rt: Reg, rs: Reg, imm: Imm },
    Mem { dest: Reg, base: Reg, offset: Imm },
    Zero,
}

/// One assembled source line: created once by a class handler,
/// consumed once by the encoder. The comment is display-only and never
/// affects encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub mnemonic: String,
    pub opcode: u8,
    pub kind: InstKind,
    pub comment: Option<String>,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic)?;
        match self.kind {
            InstKind::RegReg { rd, rs, rt } => write!(f, " {}, {}, {}", rd, rs, rt)?,
            InstKind::RegImm { rt, rs, imm } | InstKind::Branch { rt, rs, imm } => {
                write!(f, " {}, {}, {}", rt, rs, imm)?
            }
            InstKind::Mem { dest, base, offset } => write!(f, " {}, {}({})", dest, offset, base)?,
            InstKind::Zero => (),
        }
        if let Some(comment) = &self.comment {
            write!(f, "  # {}", comment)?;
        }
        Ok(())
    }
}
