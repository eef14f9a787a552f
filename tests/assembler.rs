use tasm::assembler::{self, Error};

#[test]
fn worked_examples() {
    let assembly = assembler::assemble(
        "and r0, r1, r2\n\
         addi r1, r0, 5\n\
         lw r2, 3(r0)\n\
         sw r2, 3(r0)\n\
         blt r0, r1, 2\n\
         halt\n",
    );
    assert!(assembly.diagnostics.is_empty());
    assert_eq!(
        assembly.words,
        vec![0x1810, 0x0555, 0x08F5, 0x08E5, 0x108D, 0x000F]
    );
}

#[test]
fn comments_do_not_change_encoding() {
    let with = assembler::assemble("add r0, r1, r2 # sum");
    let without = assembler::assemble("add r0, r1, r2");
    assert_eq!(with.words, without.words);
    assert!(with.diagnostics.is_empty());
}

#[test]
fn bad_middle_line_is_isolated() {
    let assembly = assembler::assemble(
        "and r0, r1, r2\n\
         add r0, r9, r1\n\
         halt\n",
    );
    assert_eq!(assembly.words, vec![0x1810, 0x000F]);
    assert_eq!(assembly.diagnostics.len(), 1);
    assert_eq!(
        assembly.diagnostics[0].to_string(),
        "Line 2: Operand 'r9' out of range: no such register"
    );
}

#[test]
fn unknown_opcode_contributes_nothing() {
    let assembly = assembler::assemble("foo r0, r1, r2\nhalt\n");
    assert_eq!(assembly.words, vec![0x000F]);
    assert_eq!(
        assembly.diagnostics[0].to_string(),
        "Line 1: Unknown opcode 'foo'"
    );
}

#[test]
fn diagnostics_carry_source_line_numbers() {
    // Blank and comment-only lines still advance the line count.
    let assembly = assembler::assemble("# header\n\nhalt r0\n");
    let diagnostic = assembly.diagnostics.into_iter().next().unwrap();
    assert_eq!(diagnostic.loc().line(), 3);
    assert!(matches!(diagnostic.value(), Error::UnexpectedOperands(..)));
}

#[test]
fn blank_and_comment_lines_are_silently_skipped() {
    let assembly = assembler::assemble("\n   \n# nothing here\n");
    assert!(assembly.words.is_empty());
    assert!(assembly.diagnostics.is_empty());
}

#[test]
fn case_insensitive_source() {
    let upper = assembler::assemble("AND R0, R1, R2\nHALT\n");
    let lower = assembler::assemble("and r0, r1, r2\nhalt\n");
    assert_eq!(upper.words, lower.words);
}

#[test]
fn assembly_is_deterministic() {
    let source = "lw r2, 3(r0)\nsubi r3, r2, 0xf\nhalt\n";
    assert_eq!(
        assembler::assemble(source).words,
        assembler::assemble(source).words
    );
}

#[test]
fn memory_offset_defaults_to_zero() {
    let explicit = assembler::assemble("lw r2, 0(r1)");
    let implicit = assembler::assemble("lw r2, (r1)");
    assert_eq!(explicit.words, implicit.words);
}

#[test]
fn output_order_matches_source_order() {
    let assembly = assembler::assemble(
        "halt\n\
         bogus\n\
         and r0, r1, r2\n",
    );
    assert_eq!(assembly.words, vec![0x000F, 0x1810]);
    assert_eq!(assembly.diagnostics.len(), 1);
    assert_eq!(assembly.diagnostics[0].loc().line(), 2);
}
