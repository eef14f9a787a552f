use super::tokenize::SourceLine;
use crate::assembler::lang::{InstClass, Lang};
use crate::assembler::model::{InstKind, Instruction, Operand};
use crate::spec::hw::{Imm, Reg};
use num_traits::FromPrimitive;
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MalformedOperand(String, &'static str),
    OperandOutOfRange(String, &'static str),
    OperandArityMismatch(String, usize, usize),
    OperandTypeMismatch(String, &'static str),
    MalformedMemoryOperand(String),
    UnexpectedOperands(String),
    UnknownOpcode(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedOperand(raw, msg) => write!(f, "Malformed operand '{}': {}", raw, msg),
            Error::OperandOutOfRange(raw, msg) => {
                write!(f, "Operand '{}' out of range: {}", raw, msg)
            }
            Error::OperandArityMismatch(mnemonic, expected, found) => write!(
                f,
                "Instruction '{}' expects {} operands, found {}",
                mnemonic, expected, found
            ),
            Error::OperandTypeMismatch(raw, expected) => {
                write!(f, "Operand '{}' should be a {}", raw, expected)
            }
            Error::MalformedMemoryOperand(raw) => write!(
                f,
                "Malformed memory operand '{}': expected 'offset(base)'",
                raw
            ),
            Error::UnexpectedOperands(rest) => write!(
                f,
                "Unexpected operands '{}' after zero-operand instruction",
                rest
            ),
            Error::UnknownOpcode(mnemonic) => write!(f, "Unknown opcode '{}'", mnemonic),
        }
    }
}

/// Parses one code line into a typed instruction: mnemonic lookup,
/// then class dispatch, then per-operand validation. Matching is
/// case-insensitive, so the whole code text is lowercased up front.
pub fn parse(line: &SourceLine<'_>) -> Result<Instruction, Error> {
    let code = line.code.to_lowercase();
    let (mnemonic, rest) = split_mnemonic(&code);

    let def = Lang::get()
        .lookup(mnemonic)
        .ok_or_else(|| Error::UnknownOpcode(mnemonic.to_owned()))?;

    let kind = match def.class {
        InstClass::RegReg => parse_reg_reg(mnemonic, rest),
        InstClass::RegImm | InstClass::Branch => parse_reg_imm(def.class, mnemonic, rest),
        InstClass::Mem => parse_mem(mnemonic, rest),
        InstClass::Zero => parse_zero(rest),
    }?;

    Ok(Instruction {
        mnemonic: mnemonic.to_owned(),
        opcode: def.opcode,
        kind,
        comment: line.comment.map(str::to_owned),
    })
}

fn split_mnemonic(code: &str) -> (&str, &str) {
    match code.find(char::is_whitespace) {
        Some(idx) => {
            let (mnemonic, rest) = code.split_at(idx);
            (mnemonic, rest.trim_start())
        }
        None => (code, ""),
    }
}

fn parse_reg_reg(mnemonic: &str, rest: &str) -> Result<InstKind, Error> {
    let ops = parse_operand_list(rest)?;
    check_arity(mnemonic, ops.len(), 3)?;
    Ok(InstKind::RegReg {
        rd: expect_register(&ops[0])?,
        rs: expect_register(&ops[1])?,
        rt: expect_register(&ops[2])?,
    })
}

fn parse_reg_imm(class: InstClass, mnemonic: &str, rest: &str) -> Result<InstKind, Error> {
    let ops = parse_operand_list(rest)?;
    check_arity(mnemonic, ops.len(), 3)?;
    let rt = expect_register(&ops[0])?;
    let rs = expect_register(&ops[1])?;
    let imm = expect_immediate(&ops[2])?;
    Ok(match class {
        InstClass::Branch => InstKind::Branch { rt, rs, imm },
        _ => InstKind::RegImm { rt, rs, imm },
    })
}

fn parse_mem(mnemonic: &str, rest: &str) -> Result<InstKind, Error> {
    let pieces: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split(',').collect()
    };
    check_arity(mnemonic, pieces.len(), 2)?;

    let dest = parse_register(pieces[0].trim())?;
    let (offset, base) = parse_mem_operand(pieces[1].trim())?;
    Ok(InstKind::Mem { dest, base, offset })
}

fn parse_zero(rest: &str) -> Result<InstKind, Error> {
    if !rest.is_empty() {
        return Err(Error::UnexpectedOperands(rest.to_owned()));
    }
    Ok(InstKind::Zero)
}

fn check_arity(mnemonic: &str, found: usize, expected: usize) -> Result<(), Error> {
    if found != expected {
        return Err(Error::OperandArityMismatch(
            mnemonic.to_owned(),
            expected,
            found,
        ));
    }
    Ok(())
}

fn expect_register(op: &Operand) -> Result<Reg, Error> {
    match op {
        Operand::Register(reg) => Ok(*reg),
        Operand::Immediate(_) => Err(Error::OperandTypeMismatch(op.to_string(), "register")),
    }
}

fn expect_immediate(op: &Operand) -> Result<Imm, Error> {
    match op {
        Operand::Immediate(imm) => Ok(*imm),
        Operand::Register(_) => Err(Error::OperandTypeMismatch(op.to_string(), "immediate")),
    }
}

fn parse_operand_list(rest: &str) -> Result<Vec<Operand>, Error> {
    if rest.is_empty() {
        return Ok(Vec::new());
    }
    rest.split(',')
        .map(|raw| parse_operand(raw.trim()))
        .collect()
}

/// Kind dispatch is by leading character: `r` means register,
/// anything else is tried as an immediate.
fn parse_operand(raw: &str) -> Result<Operand, Error> {
    if raw.starts_with('r') {
        Ok(Operand::Register(parse_register(raw)?))
    } else {
        Ok(Operand::Immediate(parse_immediate(raw)?))
    }
}

fn parse_register(raw: &str) -> Result<Reg, Error> {
    let digits = raw
        .strip_prefix('r')
        .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
        .ok_or_else(|| {
            Error::MalformedOperand(raw.to_owned(), "expected 'r' then a decimal index")
        })?;

    digits
        .parse::<usize>()
        .ok()
        .and_then(Reg::from_usize)
        .ok_or_else(|| Error::OperandOutOfRange(raw.to_owned(), "no such register"))
}

fn parse_immediate(raw: &str) -> Result<Imm, Error> {
    let value = if let Some(hex) = raw.strip_prefix("0x") {
        i64::from_str_radix(hex, 16)
    } else if let Some(oct) = raw.strip_prefix("0o") {
        i64::from_str_radix(oct, 8)
    } else if let Some(bin) = raw.strip_prefix("0b") {
        i64::from_str_radix(bin, 2)
    } else {
        i64::from_str_radix(raw, 10)
    }
    .map_err(|_| Error::MalformedOperand(raw.to_owned(), "could not parse numeric"))?;

    Imm::new(value).ok_or_else(|| Error::OperandOutOfRange(raw.to_owned(), "immediates are 0-15"))
}

/// The composite memory operand: an optional run of decimal offset
/// digits, then `(`, a register token, `)`. Whitespace is tolerated
/// around the parentheses and the base register, nowhere else.
fn parse_mem_operand(raw: &str) -> Result<(Imm, Reg), Error> {
    let malformed = || Error::MalformedMemoryOperand(raw.to_owned());

    let digits_end = raw
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(malformed)?;
    let (digits, rest) = raw.split_at(digits_end);

    let base = rest
        .trim_start()
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .ok_or_else(malformed)?
        .trim();

    let base = parse_register(base).map_err(|err| match err {
        Error::MalformedOperand(..) => malformed(),
        err => err,
    })?;

    let offset = if digits.is_empty() {
        Imm::ZERO
    } else {
        parse_immediate(digits)?
    };

    Ok((offset, base))
}
