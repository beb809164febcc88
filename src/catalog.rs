//! Instruction catalog: every mnemonic with its candidate encodings in
//! preference order. Selection takes the first encoding whose constraints
//! accept the operand list, so Core forms are declared before their
//! Extended and Long counterparts.

use std::sync::OnceLock;

use crate::constraint::UnitRule::{self, Address, Address0, Any, Control, Data, O2r, Other, Same};
use crate::encoding::{Encoding, Width};
use crate::field::{ImmediateField, MemoryField, OffsetField, PieceImmediateField, RegisterField};
use crate::modifiers::Modifier::{C, M, P, R, S, T, U, X};
use crate::registers::{RegUnit, Register};

pub struct Instruction {
    pub name: &'static str,
    pub encodings: Vec<Encoding>,
    /// Store forms take the register last in assembly but first in the
    /// encoding's operand order.
    pub swap_operands: bool,
}

impl Instruction {
    fn new(name: &'static str, encodings: Vec<Encoding>) -> Self {
        Self {
            name,
            encodings,
            swap_operands: false,
        }
    }

    fn swapped(name: &'static str, encodings: Vec<Encoding>) -> Self {
        Self {
            name,
            encodings,
            swap_operands: true,
        }
    }
}

fn reg(rule: UnitRule, base: u32, size: u32) -> RegisterField {
    RegisterField::at(rule, base, size)
}

fn imm(base: u32, size: u32) -> ImmediateField {
    ImmediateField::at(base, size)
}

// Control unit move, long form.
fn enc_1r16ictl(bits: u32) -> Encoding {
    Encoding::new(Width::Long, bits)
        .fields(vec![
            reg(Control, 5, 3).into(),
            imm(19, 11).split(0, 5).signed_at(17).into(),
        ])
        .modifier(T, 16)
}

// Address unit arithmetic.

fn enc_3ra(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(1).fields(vec![
        reg(Same, 7, 2).into(),
        reg(Address, 4, 2).unit_bits(9, 1).pc_bit(6).into(),
        reg(Same, 1, 2).pc_bit(3).into(),
    ])
}

fn enc_3rae(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(1).fields(vec![
        reg(Same, 23, 2).split(12, 1).into(),
        reg(Address, 20, 2)
            .unit_bits(25, 1)
            .pc_bit(22)
            .split(10, 2)
            .into(),
        reg(Same, 17, 2).pc_bit(19).split(8, 2).into(),
    ])
}

fn enc_2ra(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(1).fields(vec![
        reg(Same, 7, 2).into(),
        reg(Address, 1, 2).unit_bits(9, 1).pc_bit(3).into(),
    ])
}

fn enc_2rae(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(1).fields(vec![
        reg(Same, 23, 2).split(12, 1).into(),
        reg(Address, 17, 2)
            .split(8, 2)
            .unit_bits(25, 1)
            .pc_bit(19)
            .into(),
    ])
}

fn enc_2ria(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(1).fields(vec![
        RegisterField::carried(Same).into(),
        reg(Address, 7, 2).unit_bits(9, 1).into(),
        imm(2, 5).signed_at(0).into(),
    ])
}

fn enc_2riae(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(1)
        .fields(vec![
            RegisterField::carried(Same).into(),
            reg(Address, 23, 2).unit_bits(25, 1).pc_bit(12).into(),
            imm(18, 5).split(1, 11).signed_at(16).into(),
        ])
        .modifier(T, 0)
}

fn enc_1ria(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(0).fields(vec![
        reg(Address, 7, 2).unit_bits(9, 1).into(),
        imm(2, 5).signed_at(0).into(),
    ])
}

fn enc_1riae(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(0)
        .fields(vec![
            reg(Address, 23, 2).unit_bits(25, 1).pc_bit(12).into(),
            imm(18, 5).split(1, 11).signed_at(16).into(),
        ])
        .modifier(T, 0)
}

// Data unit arithmetic.

fn enc_3r(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits)
        .main_reg(1)
        .fields(vec![
            reg(Same, 7, 3).into(),
            reg(Data, 4, 3).unit_bits(10, 1).into(),
            reg(Same, 1, 3).into(),
        ])
        .l2(0)
}

fn enc_3re(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(1)
        .fields(vec![
            reg(Same, 23, 3).into(),
            reg(Data, 20, 3).unit_bits(26, 1).split(10, 2).into(),
            reg(Same, 17, 3).split(8, 2).into(),
        ])
        .modifier(S, 13)
        .modifier(P, 0)
        .l2(16)
}

fn enc_2r(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(1).fields(vec![
        reg(Same, 7, 3).into(),
        reg(Data, 1, 3).unit_bits(10, 1).into(),
    ])
}

fn enc_2re(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(1)
        .fields(vec![
            reg(Same, 23, 3).into(),
            reg(Data, 17, 3).unit_bits(26, 1).split(8, 2).into(),
        ])
        .modifier(P, 7)
        .modifier(S, 13)
        .l2(3)
}

fn enc_2rs(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(0).fields(vec![
        reg(Data, 6, 3).unit_bits(9, 1).into(),
        reg(Same, 1, 5).into(),
    ])
}

fn enc_2rse(bits: u32) -> Encoding {
    // split base 8 disagrees with the manual but matches hardware
    Encoding::new(Width::Extended, bits).main_reg(0).fields(vec![
        reg(Data, 22, 3).unit_bits(25, 1).split(8, 2).into(),
        reg(Same, 17, 5).into(),
    ])
}

fn enc_2ri(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits)
        .main_reg(1)
        .fields(vec![
            RegisterField::carried(Same).into(),
            reg(Data, 7, 3).unit_bits(10, 1).into(),
            imm(2, 5).signed_at(0).into(),
        ])
        .modifier(M, 1)
        .l2(1)
}

fn enc_2rie(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(1)
        .fields(vec![
            RegisterField::carried(Same).into(),
            reg(Data, 23, 3).unit_bits(26, 1).into(),
            imm(18, 5).split(1, 11).signed_at(16).into(),
        ])
        .modifier(M, 17)
        .modifier(P, 0)
        .modifier(S, 13)
        .modifier(T, 0)
        .l2(17)
}

fn enc_1ri(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).fields(vec![
        reg(Data, 7, 3).unit_bits(10, 1).into(),
        imm(2, 5).signed_at(0).into(),
    ])
}

fn enc_1rie(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .fields(vec![
            reg(Data, 23, 3).unit_bits(26, 1).into(),
            imm(18, 5).split(1, 11).signed_at(16).into(),
        ])
        .modifier(S, 13)
        .modifier(T, 0)
}

fn enc_1ric(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).fields(vec![
        reg(Data, 6, 3).unit_bits(9, 1).into(),
        imm(1, 5).signed_at(0).into(),
    ])
}

fn enc_1riec(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .fields(vec![
            reg(Data, 22, 3).unit_bits(25, 1).into(),
            imm(17, 5).split(2, 11).signed_at(16).into(),
        ])
        .modifier(M, 1)
        .modifier(T, 0)
}

// Data unit operations with the wide source layout.

fn enc_3redu(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(1).fields(vec![
        reg(Same, 10, 3).into(),
        reg(Data, 22, 3).unit_bits(25, 1).split(8, 2).into(),
        reg(Same, 17, 5).into(),
    ])
}

fn enc_2redu(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(1).fields(vec![
        reg(Same, 10, 3).into(),
        reg(Data, 22, 3).unit_bits(25, 1).split(8, 2).into(),
    ])
}

// Cross-unit forms.

fn enc_2rcue(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).fields(vec![
        reg(Any, 16, 2).split(8, 3).unit_bits(0, 4).into(),
        reg(Any, 18, 2).split(11, 3).unit_bits(4, 4).into(),
    ])
}

fn enc_2riacue(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(1).fields(vec![
        reg(Any, 23, 2).split(12, 1).unit_bits(0, 4).into(),
        reg(Address, 20, 2)
            .split(10, 2)
            .unit_bits(25, 1)
            .pc_bit(22)
            .into(),
        imm(17, 3).split(5, 5).signed_at(0).into(),
    ])
}

// Second-operand-replace forms.

fn enc_3reduo2r(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(1).fields(vec![
        reg(Same, 10, 3).into(),
        reg(Data, 22, 3).unit_bits(25, 1).split(8, 2).into(),
        reg(O2r, 17, 5).into(),
    ])
}

fn enc_2rso2r(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(0).fields(vec![
        reg(Data, 6, 3).unit_bits(9, 1).into(),
        reg(O2r, 1, 5).into(),
    ])
}

fn enc_2rso2re(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(0).fields(vec![
        reg(Data, 22, 3).unit_bits(25, 1).split(8, 2).into(),
        reg(O2r, 17, 5).into(),
    ])
}

// Shifts.

fn enc_3rs(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(1).fields(vec![
        reg(Same, 7, 3).into(),
        reg(Data, 5, 2).unit_bits(10, 1).into(),
        reg(Same, 2, 3).into(),
    ])
}

fn enc_2ri5s(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).main_reg(1).fields(vec![
        RegisterField::carried(Same).into(),
        reg(Data, 7, 3).unit_bits(10, 1).into(),
        imm(2, 5).signed_at(0).into(),
    ])
}

fn enc_3rse(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(1)
        .fields(vec![
            reg(Same, 23, 3).into(),
            reg(Data, 21, 2).split(9, 3).unit_bits(26, 1).into(),
            reg(Same, 18, 3).split(7, 2).into(),
        ])
        .modifier(P, 6)
        .modifier(S, 13)
        .l2(4)
}

fn enc_2ri5se(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(1)
        .fields(vec![
            reg(Same, 23, 3).into(),
            reg(Data, 7, 5).unit_bits(26, 1).into(),
            imm(18, 5).signed_at(0).into(),
        ])
        .modifier(P, 6)
        .modifier(S, 13)
        .l2(4)
}

// DSP forms.

fn enc_3rdspe(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(1)
        .fields(vec![
            reg(Same, 23, 3).into(),
            reg(Data, 20, 3).unit_bits(26, 1).split(10, 2).into(),
            reg(Same, 17, 3).split(8, 2).into(),
        ])
        .modifier(C, 3)
        .modifier(S, 13)
        .modifier(U, 16)
        .modifier(X, 6)
        .l2(4)
}

fn enc_3rdsp8e(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .main_reg(1)
        .fields(vec![
            reg(Same, 23, 3).into(),
            reg(Data, 20, 3).unit_bits(26, 1).split(10, 2).into(),
            reg(Same, 17, 3).split(8, 2).into(),
        ])
        .modifier(P, 7)
        .modifier(S, 13)
        .modifier(T, 16)
        .modifier(U, 5)
        .modifier(X, 6)
        .l2(3)
}

// Branches and calls. Displacements are halved, so the fields carry a
// one-bit shift.

fn enc_10i(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits)
        .fields(vec![imm(0, 10).force_signed().shifted(1).into()])
}

fn enc_19ie(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .fields(vec![imm(21, 5)
            .split(0, 14)
            .force_signed()
            .shifted(1)
            .into()])
        .modifier(R, 16)
        .conditional(17)
}

fn enc_5i(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits)
        .fields(vec![imm(5, 5).force_signed().shifted(1).into()])
        .modifier(R, 0)
        .conditional(1)
}

fn enc_1r5i(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).fields(vec![
        RegisterField::fixed(Register::new(RegUnit::Data1, 4)).into(),
        imm(0, 10).force_signed().shifted(1).into(),
    ])
}

fn enc_1r19ie(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).fields(vec![
        reg(Any, 0, 3).unit_bits(3, 2).into(),
        imm(16, 10).split(5, 9).force_signed().shifted(1).into(),
    ])
}

// Memory access.

fn enc_1r3im(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).fields(vec![
        reg(Any, 7, 3).unit_bits(0, 2).into(),
        MemoryField::new(
            reg(Address0, 5, 2),
            OffsetField::Imm(imm(2, 3).force_signed()),
        )
        .transfer_size(2)
        .into(),
    ])
}

fn wide_mem_reg() -> RegisterField {
    reg(Any, 23, 3)
        .split(10, 1)
        .unit_bits(16, 2)
        .split_unit(1, 2)
}

fn wide_mem_imm() -> MemoryField {
    MemoryField::new(
        reg(Any, 21, 2).split(9, 1).unit_bits(3, 2),
        OffsetField::Imm(imm(18, 3).split(6, 3).force_signed()),
    )
    .transfer_bits(11, 13)
    .increment(5, 0)
}

fn wide_mem_indexed() -> MemoryField {
    MemoryField::new(
        reg(Any, 21, 2).split(9, 1).unit_bits(18, 2),
        OffsetField::Reg(reg(Same, 4, 5)),
    )
    .transfer_bits(11, 13)
    .increment(3, 0)
}

fn enc_1r6ime(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .fields(vec![wide_mem_reg().into(), wide_mem_imm().into()])
}

fn enc_2r6ime(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(0).fields(vec![
        wide_mem_reg().into(),
        RegisterField::carried(Other).into(),
        wide_mem_imm().into(),
    ])
}

fn enc_1rmoe(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits)
        .fields(vec![wide_mem_reg().into(), wide_mem_indexed().into()])
}

fn enc_2rmoe(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).main_reg(0).fields(vec![
        wide_mem_reg().into(),
        RegisterField::carried(Other).into(),
        wide_mem_indexed().into(),
    ])
}

// Thread switch. The operand is an interrupt descriptor whose bits scatter
// across the word.

fn enc_switch(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits).fields(vec![PieceImmediateField::new(vec![
        (1, 0, 3),
        (9, 3, 1),
        (16, 4, 2),
        (22, 6, 2),
    ])
    .extra_map(0xffffff, 0xc3020e)
    .into()])
}

fn enc_switche(bits: u32) -> Encoding {
    Encoding::new(Width::Extended, bits).fields(vec![PieceImmediateField::new(vec![
        (0, 0, 1),
        (1, 16, 3),
        (4, 1, 4),
        (8, 5, 1),
        (9, 19, 1),
        (10, 6, 4),
        (16, 20, 2),
        (18, 10, 4),
        (22, 22, 2),
    ])
    .into()])
}

fn enc_n(bits: u32) -> Encoding {
    Encoding::new(Width::Core, bits)
}

fn build() -> Vec<Instruction> {
    vec![
        Instruction::new(
            "ADD",
            vec![
                enc_3ra(0x8000),
                enc_3rae(0x8000_0000),
                enc_2ria(0x8400),
                enc_2riae(0x8400_0000).keep(&[T]),
                enc_3r(0x0000),
                enc_3re(0x0000_0000).keep(&[S]),
                enc_2ri(0x0800),
                enc_2rie(0x0800_0000).keep(&[S, T]),
                enc_2riacue(0x8400_2010),
            ],
        ),
        Instruction::new(
            "AND",
            vec![
                enc_3r(0x2000),
                enc_3re(0x2000_0000).keep(&[S]),
                enc_3rdsp8e(0x2000_0000).keep(&[P, S]),
                enc_2ri(0x2800).keep(&[M]),
                enc_2rie(0x2800_0000).keep(&[M, S, T]),
                enc_2rie(0x2801_0001).keep(&[P, S]),
            ],
        ),
        Instruction::new(
            "B",
            vec![
                enc_10i(0x9400),
                enc_5i(0x9000).keep(&[R]),
                enc_19ie(0x9000_0000).keep(&[R]),
            ],
        ),
        Instruction::new("CALLR", vec![enc_1r5i(0x9800), enc_1r19ie(0x9800_0000)]),
        Instruction::new(
            "CMP",
            vec![
                enc_2rs(0x7000),
                enc_2rse(0x7000_0000),
                enc_1ric(0x7400),
                enc_1riec(0x7400_0000).keep(&[M, T]),
                enc_2rso2r(0x7001),
                enc_2rso2re(0x7001_0000),
            ],
        ),
        Instruction::new("GETD", vec![enc_1r3im(0xa800)]),
        Instruction::new(
            "GET",
            vec![
                enc_1r6ime(0xa800_1000),
                enc_2r6ime(0xa800_1000),
                enc_1rmoe(0xa800_0000),
                enc_2rmoe(0xa800_0000),
            ],
        ),
        Instruction::new(
            "MOV",
            vec![
                enc_2ra(0x8001),
                enc_2rae(0x8001_0000),
                enc_1ria(0x8402),
                enc_1riae(0x8402_0000),
                enc_2r(0x0001),
                enc_2re(0x0001_0000).keep(&[S, P]),
                enc_1ri(0x0802),
                enc_1rie(0x0802_0000).keep(&[S]),
                // unit-to-unit move, extended form only
                enc_2rcue(0x9c80_0000),
                enc_1r16ictl(0x4000_0900),
            ],
        ),
        Instruction::new(
            "MUL",
            vec![
                enc_3r(0x6000),
                enc_3re(0x6000_0000),
                enc_2ri(0x6800),
                enc_2rie(0x6800_0000).keep(&[T]),
            ],
        ),
        Instruction::new(
            "NEG",
            vec![
                enc_2ra(0x8801),
                enc_2rae(0x8801_0000),
                enc_1ria(0x8c02),
                enc_1riae(0x8c02_0000),
                enc_2r(0x1001),
                enc_2re(0x1001_0000).keep(&[S]),
                enc_1ri(0x1802),
                enc_1rie(0x1802_0000).keep(&[S]),
            ],
        ),
        Instruction::new("NOP", vec![enc_n(0x93fe)]),
        Instruction::new(
            "OR",
            vec![
                enc_3r(0x3000),
                enc_3re(0x3000_0000).keep(&[S]),
                enc_3rdsp8e(0x3000_0000).keep(&[P, S]),
                enc_2ri(0x3800).keep(&[M]),
                enc_2rie(0x3800_0000).keep(&[M, S, T]),
                enc_2rie(0x3801_0001).keep(&[P, S]),
            ],
        ),
        Instruction::new("RTH", vec![enc_n(0x9cef)]),
        Instruction::new("RTI", vec![enc_n(0x9cff)]),
        Instruction::swapped("SETD", vec![enc_1r3im(0xa000)]),
        Instruction::swapped(
            "SET",
            vec![
                enc_1r6ime(0xa000_1000),
                enc_2r6ime(0xa000_1000),
                enc_1rmoe(0xa000_0000),
                enc_2rmoe(0xa000_0000),
            ],
        ),
        Instruction::new(
            "SUB",
            vec![
                enc_3ra(0x8800),
                enc_3rae(0x8800_0000),
                enc_2ria(0x8c00),
                enc_2riae(0x8c00_0000).keep(&[T]),
                enc_3r(0x1000),
                enc_3re(0x1000_0000).keep(&[S]),
                enc_2ri(0x1800),
                enc_2rie(0x1800_0000).keep(&[S, T]),
            ],
        ),
        Instruction::new("SWAP", vec![enc_2rcue(0x9cc0_0000)]),
        Instruction::new("SWITCH", vec![enc_switch(0x9f00), enc_switche(0x9f00_0000)]),
        Instruction::new(
            "TST",
            vec![
                enc_2rs(0x7800),
                enc_2rse(0x7800_0000),
                enc_1ric(0x7c00),
                enc_1riec(0x7c00_0000).keep(&[M, T]),
                enc_2rso2r(0x7801),
                enc_2rso2re(0x7801_0000),
            ],
        ),
        Instruction::new(
            "XOR",
            vec![
                enc_3r(0x4000),
                enc_3re(0x4000_0000).keep(&[S]),
                enc_2ri(0x4800).keep(&[M]),
                enc_2rie(0x4800_0000).keep(&[M, S, T]),
            ],
        ),
        Instruction::new(
            "LSL",
            vec![
                enc_3rs(0x5000),
                enc_2ri5s(0x5800),
                enc_3rse(0x5000_0000).keep(&[P, S]),
                enc_2ri5se(0x5800_0000).keep(&[P, S]),
            ],
        ),
        Instruction::new(
            "LSR",
            vec![
                enc_3rs(0x5001),
                enc_2ri5s(0x5801),
                enc_3rse(0x5001_0000).keep(&[P, S]),
                enc_2ri5se(0x5801_0000).keep(&[P, S]),
            ],
        ),
        Instruction::new(
            "ASL",
            vec![
                enc_3rs(0x5002),
                enc_2ri5s(0x5802),
                enc_3rse(0x5002_0000).keep(&[P, S]),
                enc_2ri5se(0x5802_0000).keep(&[P, S]),
            ],
        ),
        Instruction::new(
            "ASR",
            vec![
                enc_3rs(0x5003),
                enc_2ri5s(0x5803),
                enc_3rse(0x5003_0000).keep(&[P, S]),
                enc_2ri5se(0x5803_0000).keep(&[P, S]),
            ],
        ),
        Instruction::new("ABS", vec![enc_2redu(0x7000_0014)]),
        Instruction::new("FFB", vec![enc_2redu(0x7000_0002)]),
        Instruction::new("MAX", vec![enc_3redu(0x7000_0012)]),
        Instruction::new("MIN", vec![enc_3redu(0x7000_0010)]),
        Instruction::new(
            "MORT",
            vec![enc_3redu(0x7000_004c), enc_3reduo2r(0x7001_004c)],
        ),
        Instruction::new("NMIN", vec![enc_3redu(0x7000_0016)]),
        Instruction::new("NORM", vec![enc_2redu(0x7000_0004)]),
        Instruction::new(
            "VPACK",
            vec![enc_3redu(0x7000_000c), enc_3reduo2r(0x7001_000c)],
        ),
        Instruction::new("DSPMUL8", vec![enc_3rdsp8e(0x4000_0084)]),
        Instruction::new("DSPMUL", vec![enc_3rdspe(0x6000_0080)]),
    ]
}

/// Full catalog in declaration order. Longer mnemonics shadow their
/// prefixes (GETD before GET), so selection scans in this order.
pub fn instructions() -> &'static [Instruction] {
    static CATALOG: OnceLock<Vec<Instruction>> = OnceLock::new();
    CATALOG.get_or_init(build)
}
