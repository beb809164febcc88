use pretty_assertions::assert_eq;

use metag_asm::assemble;

#[test]
fn backward_branch() {
    // L1:          (0x0)
    //   NOP        (0x0)
    //   B L1       (0x2, displacement -2)
    let program = assemble("L1:\nNOP\nB L1").unwrap();
    assert_eq!(program.bytes, vec![0xfe, 0x93, 0xff, 0x97, 0xfe, 0x93]);
}

#[test]
fn forward_branch_keeps_reservation() {
    // B reserves 4 bytes; when it collapses to a core form the gap is
    // filled with a NOP so later addresses stay valid.
    //   B fwd      (0x0, displacement +6)
    //   NOP        (0x4)
    // fwd:         (0x6)
    //   NOP        (0x6)
    let program = assemble("B fwd\nNOP\nfwd:\nNOP").unwrap();
    assert_eq!(
        program.bytes,
        vec![0x03, 0x94, 0xfe, 0x93, 0xfe, 0x93, 0xfe, 0x93]
    );
    let addresses: Vec<u32> = program.statements.iter().map(|s| s.address).collect();
    assert_eq!(addresses, vec![0, 2, 4, 6]);
}

#[test]
fn conditional_backward_branch() {
    // loop:        (0x0)
    //   NOP        (0x0)
    //   BEQ loop   (0x2, displacement -2)
    let program = assemble("loop:\nNOP\nBEQ loop").unwrap();
    assert_eq!(program.bytes, vec![0xfe, 0x93, 0xe2, 0x93, 0xfe, 0x93]);
}

#[test]
fn align_directive_pads_with_nop() {
    //   NOP        (0x0)
    //   .align4    (inserts NOP at 0x2)
    // lab:         (0x4)
    //   B lab      (0x4, displacement 0)
    let program = assemble("NOP\n.align4\nlab:\nB lab").unwrap();
    assert_eq!(
        program.bytes,
        vec![0xfe, 0x93, 0xfe, 0x93, 0x00, 0x94, 0xfe, 0x93]
    );
}

#[test]
fn align_directive_noop_on_boundary() {
    let program = assemble(".align4\nNOP").unwrap();
    assert_eq!(program.bytes, vec![0xfe, 0x93]);
}

#[test]
fn comments_and_blank_lines() {
    let source = "! whole line comment\n\nNOP ! trailing comment\n   \n";
    let program = assemble(source).unwrap();
    assert_eq!(program.bytes, vec![0xfe, 0x93]);
}

#[test]
fn unknown_directive_is_ignored() {
    let program = assemble(".foobar 12\nNOP").unwrap();
    assert_eq!(program.bytes, vec![0xfe, 0x93]);
}

#[test]
fn label_operand_beside_plain_statements() {
    // instructions without labels encode in the first pass, the branch
    // in the second, and the listing comes out in address order
    let source = "MOV D0.0, #1\nstart:\nMOV D0.0, #2\nB start";
    let program = assemble(source).unwrap();
    let addresses: Vec<u32> = program.statements.iter().map(|s| s.address).collect();
    assert_eq!(addresses, vec![0, 2, 4, 6]);
    // B at 0x4 targets 0x2, and the collapsed branch gets a NOP filler at 0x6
    let branch = &program.statements[2];
    assert_eq!(branch.mnemonic, "B");
    assert_eq!(branch.value, 0x97FF);
}
