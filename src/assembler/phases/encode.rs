use crate::assembler::model::{InstKind, Instruction};
use crate::spec::hw::{Word, IMM_SHIFT, RD_SHIFT, RS_SHIFT, RT_SHIFT};

/// Packs a validated instruction into its machine word. All operand
/// ranges were enforced at parse time, so encoding is pure and total.
pub fn encode(inst: &Instruction) -> Word {
    let fields = match inst.kind {
        InstKind::RegReg { rd, rs, rt } => {
            (rd.index() << RD_SHIFT) | (rs.index() << RS_SHIFT) | (rt.index() << RT_SHIFT)
        }
        InstKind::RegImm { rt, rs, imm } | InstKind::Branch { rt, rs, imm } => {
            (rt.index() << RT_SHIFT) | (rs.index() << RS_SHIFT) | (imm.value() << IMM_SHIFT)
        }
        // Memory reuses the immediate layout: dest and base take the
        // rt and rs slots, the offset takes the immediate field.
        InstKind::Mem { dest, base, offset } => {
            (dest.index() << RT_SHIFT) | (base.index() << RS_SHIFT) | (offset.value() << IMM_SHIFT)
        }
        InstKind::Zero => 0,
    };

    Word::from(inst.opcode) | fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::hw::{Imm, Reg};

    fn inst(mnemonic: &str, opcode: u8, kind: InstKind) -> Instruction {
        Instruction {
            mnemonic: String::from(mnemonic),
            opcode,
            kind,
            comment: None,
        }
    }

    #[test]
    fn encode_reg_reg() {
        let and = inst(
            "and",
            0x10,
            InstKind::RegReg {
                rd: Reg::R0,
                rs: Reg::R1,
                rt: Reg::R2,
            },
        );
        assert_eq!(encode(&and), 0x1810);
    }

    #[test]
    fn encode_reg_imm() {
        let addi = inst(
            "addi",
            0x15,
            InstKind::RegImm {
                rt: Reg::R1,
                rs: Reg::R0,
                imm: Imm::new(5).unwrap(),
            },
        );
        assert_eq!(encode(&addi), 0x0555);
    }

    #[test]
    fn encode_branch() {
        let blt = inst(
            "blt",
            0x0D,
            InstKind::Branch {
                rt: Reg::R1,
                rs: Reg::R2,
                imm: Imm::new(15).unwrap(),
            },
        );
        assert_eq!(encode(&blt), 0x27CD);
    }

    #[test]
    fn encode_mem() {
        let lw = inst(
            "lw",
            0x35,
            InstKind::Mem {
                dest: Reg::R2,
                base: Reg::R0,
                offset: Imm::new(3).unwrap(),
            },
        );
        assert_eq!(encode(&lw), 0x08F5);
    }

    #[test]
    fn encode_zero() {
        let halt = inst("halt", 0x0F, InstKind::Zero);
        assert_eq!(encode(&halt), 0x000F);
    }

    #[test]
    fn encode_is_pure() {
        let lw = inst(
            "lw",
            0x35,
            InstKind::Mem {
                dest: Reg::R2,
                base: Reg::R0,
                offset: Imm::new(3).unwrap(),
            },
        );
        assert_eq!(encode(&lw), encode(&lw));
    }

    #[test]
    fn comment_never_affects_encoding() {
        let mut halt = inst("halt", 0x0F, InstKind::Zero);
        let bare = encode(&halt);
        halt.comment = Some(String::from("stop here"));
        assert_eq!(encode(&halt), bare);
    }
}
