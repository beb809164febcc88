use metag_asm::{assemble, AsmError};

#[test]
fn duplicate_label() {
    let err = assemble("here:\nNOP\nhere:").unwrap_err();
    assert!(matches!(err, AsmError::DuplicateLabel { address: 0, .. }));
}

#[test]
fn undefined_label() {
    let err = assemble("B nowhere").unwrap_err();
    assert!(matches!(err, AsmError::UndefinedLabel { .. }));
}

#[test]
fn immediate_out_of_every_range() {
    let err = assemble("MOV A0.0, #0x12345678").unwrap_err();
    assert!(matches!(err, AsmError::NoMatchingEncoding { .. }));
}

#[test]
fn unparseable_modifier_suffix() {
    let err = assemble("ADDQQ D0.0, D0.1, D0.2").unwrap_err();
    assert!(matches!(err, AsmError::NoMatchingEncoding { .. }));
}

#[test]
fn modifier_not_admitted_by_any_encoding() {
    // X is a DSP-only flag, plain ADD has no encoding carrying it
    let err = assemble("ADDX D0.0, D0.1, D0.2").unwrap_err();
    assert!(matches!(err, AsmError::NoMatchingEncoding { .. }));
}

#[test]
fn misaligned_memory_offset() {
    let err = assemble("GETD D0.0, [A0.0+#2]").unwrap_err();
    assert!(matches!(
        err,
        AsmError::MisalignedMemoryOffset {
            offset: 2,
            multiple: 4,
        }
    ));
}

#[test]
fn unknown_memory_base() {
    let err = assemble("GETD D0.0, [Q0.0]").unwrap_err();
    assert!(matches!(err, AsmError::UnknownRegister { .. }));
}

#[test]
fn more_than_one_label_operand() {
    let err = assemble("B one two").unwrap_err();
    assert!(matches!(err, AsmError::MultipleLabelOperands { .. }));
}
