use crate::spec::hw::{Word, IMM_SHIFT};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static STORAGE: Lazy<Lang> = Lazy::new(Lang::new);

/// The structural shape of an instruction: operand count/types and the
/// bit layout are both fixed per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstClass {
    RegReg,
    RegImm,
    Branch,
    Mem,
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstDef {
    pub opcode: u8,
    pub class: InstClass,
}

/// The instruction set: a process-wide, read-only mnemonic table,
/// built once and never mutated.
pub struct Lang {
    defs: HashMap<&'static str, InstDef>,
}

impl Lang {
    fn new() -> Self {
        let mut builder = Builder::new();

        builder.register("and", 0x10, InstClass::RegReg);
        builder.register("or", 0x12, InstClass::RegReg);
        builder.register("add", 0x14, InstClass::RegReg);
        builder.register("sub", 0x1C, InstClass::RegReg);
        builder.register("slt", 0x1E, InstClass::RegReg);

        builder.register("andi", 0x11, InstClass::RegImm);
        builder.register("ori", 0x13, InstClass::RegImm);
        builder.register("addi", 0x15, InstClass::RegImm);
        builder.register("subi", 0x1D, InstClass::RegImm);

        builder.register("blt", 0x0D, InstClass::Branch);

        builder.register("lw", 0x35, InstClass::Mem);
        builder.register("sw", 0x25, InstClass::Mem);

        builder.register("halt", 0x0F, InstClass::Zero);

        builder.build()
    }

    pub fn get() -> &'static Lang {
        Lazy::force(&STORAGE)
    }

    /// Lookup expects the mnemonic to already be lowercased; matching
    /// is case-insensitive at the source level, not here.
    pub fn lookup(&self, mnemonic: &str) -> Option<InstDef> {
        self.defs.get(mnemonic).copied()
    }
}

struct Builder {
    defs: HashMap<&'static str, InstDef>,
}

impl Builder {
    fn new() -> Self {
        Builder {
            defs: HashMap::new(),
        }
    }

    fn register(&mut self, mnemonic: &'static str, opcode: u8, class: InstClass) {
        // Opcodes live in the low bits, below every operand field.
        assert!((opcode as Word) < (1 << IMM_SHIFT));
        assert!(self
            .defs
            .insert(mnemonic, InstDef { opcode, class })
            .is_none());
    }

    fn build(self) -> Lang {
        Lang { defs: self.defs }
    }
}
