use std::collections::HashMap;

use metag_asm::error::AsmError;
use metag_asm::operand::{Extract, Operand};
use metag_asm::registers::{self, RegUnit, Register};

#[test]
fn register_names_and_aliases() {
    assert_eq!(
        registers::lookup("D0.7"),
        Some(Register::new(RegUnit::Data0, 7))
    );
    assert_eq!(
        registers::lookup("A1.15"),
        Some(Register::new(RegUnit::Address1, 15))
    );
    // ABI aliases map onto the low registers
    assert_eq!(
        registers::lookup("D1RtP"),
        Some(Register::new(RegUnit::Data1, 4))
    );
    assert_eq!(
        registers::lookup("A0StP"),
        Some(Register::new(RegUnit::Address0, 0))
    );
    assert_eq!(
        registers::lookup("TXMODE"),
        Some(Register::new(RegUnit::Control, 1))
    );
    assert_eq!(registers::lookup("PCX"), Some(Register::new(RegUnit::Pc, 1)));
    assert_eq!(registers::lookup("D0.32"), None);
}

#[test]
fn constants_and_half_extraction() {
    assert_eq!(Operand::parse("#5").unwrap(), Operand::Constant(5));
    assert_eq!(Operand::parse("#-12").unwrap(), Operand::Constant(-12));
    assert_eq!(Operand::parse("#0x40").unwrap(), Operand::Constant(0x40));
    assert_eq!(
        Operand::parse("#HI(0x12345678)").unwrap(),
        Operand::Constant(0x1234)
    );
    assert_eq!(
        Operand::parse("#LO(0x12345678)").unwrap(),
        Operand::Constant(0x5678)
    );
}

#[test]
fn memory_references() {
    assert_eq!(
        Operand::parse("[A0.2+#4]").unwrap(),
        Operand::Memory {
            base: Register::new(RegUnit::Address0, 2),
            offset: Box::new(Operand::Constant(4)),
            post_increment: false,
        }
    );
    // bare post-increment falls back to a unit step
    assert_eq!(
        Operand::parse("[A1.0++]").unwrap(),
        Operand::Memory {
            base: Register::new(RegUnit::Address1, 0),
            offset: Box::new(Operand::Constant(1)),
            post_increment: true,
        }
    );
    assert_eq!(
        Operand::parse("[A1.0--]").unwrap(),
        Operand::Memory {
            base: Register::new(RegUnit::Address1, 0),
            offset: Box::new(Operand::Constant(-1)),
            post_increment: true,
        }
    );
    assert!(matches!(
        Operand::parse("[Q0.0]"),
        Err(AsmError::UnknownRegister { .. })
    ));
}

#[test]
fn labels_resolve_pc_relative() {
    let mut labels = HashMap::new();
    labels.insert("loop".to_string(), 0x40u32);
    labels.insert("far".to_string(), 0x12345678u32);

    let op = Operand::parse("loop").unwrap();
    assert!(op.is_label());
    assert_eq!(op.resolve(&labels, 0x10).unwrap(), Operand::Constant(0x30));
    // backward reference gives a negative displacement
    assert_eq!(op.resolve(&labels, 0x44).unwrap(), Operand::Constant(-4));

    let hi = Operand::parse("#HI(far)").unwrap();
    assert_eq!(
        hi,
        Operand::Label {
            name: "far".to_string(),
            extract: Extract::Top,
        }
    );
    assert_eq!(hi.resolve(&labels, 0).unwrap(), Operand::Constant(0x1234));

    assert!(matches!(
        op.resolve(&HashMap::new(), 0),
        Err(AsmError::UndefinedLabel { .. })
    ));
}

#[test]
fn operand_display() {
    assert_eq!(Operand::parse("[A0.2+#4]").unwrap().to_string(), "[A0.2+#4]");
    assert_eq!(Operand::parse("#-3").unwrap().to_string(), "#-3");
    assert_eq!(Operand::parse("D1.5").unwrap().to_string(), "D1.5");
    assert_eq!(
        Operand::parse("#HI(target)").unwrap().to_string(),
        "#HI(target)"
    );
}
