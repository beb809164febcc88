use crate::constraint::{
    Constraint, ImmConstraint, MemConstraint, OffsetConstraint, PieceImmConstraint, RegConstraint,
    UnitRule,
};
use crate::modifiers::{effective_transfer, Modifier};
use crate::operand::Operand;
use crate::registers::{RegUnit, Register};

fn mask(bits: u32) -> u32 {
    (1u32 << bits) - 1
}

fn mask64(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

/// Wide unit field lookup shared by the 2-bit base-unit encodings.
fn base_unit_code(unit: RegUnit) -> u32 {
    match unit {
        RegUnit::Address1 => 0,
        RegUnit::Data0 => 1,
        RegUnit::Data1 => 2,
        RegUnit::Address0 => 3,
        other => other.ordinal(),
    }
}

/// Directional 3-bit hint for an operand unit relative to the main unit.
/// The table is asymmetric; the given values are observed-correct.
fn o2r_code(main: RegUnit, unit: RegUnit) -> u32 {
    use RegUnit::*;
    match (main, unit) {
        (Data0, Address1) => 0,
        (Data0, Data1) => 1,
        (Data0, Address0) => 3,
        (Data1, Address1) => 0,
        (Data1, Data0) => 1,
        (Data1, Address0) => 3,
        (Address0, Address1) => 0,
        (Address0, Data0) => 1,
        (Address0, Data1) => 3,
        (Address1, Data1) => 0,
        (Address1, Data0) => 1,
        (Address1, Address0) => 3,
        _ => 0,
    }
}

/// Bit placement for one register operand.
#[derive(Debug, Clone)]
pub struct RegisterField {
    pub unit: UnitRule,
    pub base: Option<u32>,
    pub size: Option<u32>,
    pub unit_base: Option<u32>,
    pub unit_size: Option<u32>,
    pub split_base: Option<u32>,
    pub split_size: Option<u32>,
    pub split_unit_base: Option<u32>,
    pub split_unit_size: Option<u32>,
    pub pc_bit: Option<u32>,
    pub fixed: Option<Register>,
}

impl RegisterField {
    pub fn at(unit: UnitRule, base: u32, size: u32) -> Self {
        Self {
            unit,
            base: Some(base),
            size: Some(size),
            unit_base: None,
            unit_size: None,
            split_base: None,
            split_size: None,
            split_unit_base: None,
            split_unit_size: None,
            pc_bit: None,
            fixed: None,
        }
    }

    /// Field with no bit placement: the register is carried by the main
    /// operand's field and only constrained to match it.
    pub fn carried(unit: UnitRule) -> Self {
        Self {
            unit,
            base: None,
            size: None,
            unit_base: None,
            unit_size: None,
            split_base: None,
            split_size: None,
            split_unit_base: None,
            split_unit_size: None,
            pc_bit: None,
            fixed: None,
        }
    }

    /// Field pinned to one concrete register, contributing no bits.
    pub fn fixed(reg: Register) -> Self {
        let mut field = Self::carried(UnitRule::Exact(reg.unit));
        field.fixed = Some(reg);
        field
    }

    pub fn unit_bits(mut self, base: u32, size: u32) -> Self {
        self.unit_base = Some(base);
        self.unit_size = Some(size);
        self
    }

    pub fn split(mut self, base: u32, size: u32) -> Self {
        self.split_base = Some(base);
        self.split_size = Some(size);
        self
    }

    pub fn split_unit(mut self, base: u32, size: u32) -> Self {
        self.split_unit_base = Some(base);
        self.split_unit_size = Some(size);
        self
    }

    pub fn pc_bit(mut self, bit: u32) -> Self {
        self.pc_bit = Some(bit);
        self
    }

    pub fn encode(&self, reg: Register, main: Option<Register>) -> u32 {
        let Some(base) = self.base else {
            // carried by another operand's field
            return 0;
        };
        if reg.unit == RegUnit::Pc {
            if let Some(bit) = self.pc_bit {
                return 1 << bit;
            }
        }
        let mut word = 0u32;
        if let (Some(unit_base), Some(unit_size)) = (self.unit_base, self.unit_size) {
            let ordinal = reg.unit.ordinal();
            if let (Some(split_base), Some(split_size)) =
                (self.split_unit_base, self.split_unit_size)
            {
                word |= (ordinal & mask(unit_size)) << unit_base;
                word |= ((ordinal >> unit_size) & mask(split_size)) << split_base;
            } else if unit_size == 1 {
                if matches!(reg.unit, RegUnit::Data1 | RegUnit::Address1) {
                    word |= 1 << unit_base;
                }
            } else if unit_size == 2 {
                word |= base_unit_code(reg.unit) << unit_base;
            } else {
                word |= ordinal << unit_base;
            }
        }
        let number = reg.number as u32;
        let size;
        let low;
        if self.unit == UnitRule::O2r {
            size = 3;
            let hint = match main {
                Some(m) => o2r_code(m.unit, reg.unit),
                None => 0,
            };
            low = (number & mask(size)) | (hint << 3);
        } else {
            size = self.size.unwrap_or(0);
            low = number & mask(size);
        }
        word |= low << base;
        if let (Some(split_base), Some(split_size)) = (self.split_base, self.split_size) {
            word |= ((number >> size) & mask(split_size)) << split_base;
        }
        word
    }

    pub fn constraint(&self, main: Option<&RegisterField>) -> RegConstraint {
        if let Some(reg) = self.fixed {
            return RegConstraint {
                unit: UnitRule::Exact(reg.unit),
                num: reg.number..reg.number + 1,
                same_num: false,
                pc: false,
            };
        }
        let size = match self.size {
            Some(size) => size + self.split_size.unwrap_or(0),
            None => main
                .map(|m| m.size.unwrap_or(0) + m.split_size.unwrap_or(0))
                .unwrap_or(0),
        };
        // top two bits of an O2R field carry the unit hint
        let size = if self.unit == UnitRule::O2r { 3 } else { size };
        RegConstraint {
            unit: self.unit,
            num: 0..(1u8 << size),
            same_num: self.base.is_none(),
            pc: self.pc_bit.is_some(),
        }
    }
}

/// Bit placement for one immediate operand.
#[derive(Debug, Clone)]
pub struct ImmediateField {
    pub base: u32,
    pub size: u32,
    pub sign_extend: Option<u32>,
    pub force_signed: bool,
    pub split_base: Option<u32>,
    pub split_size: Option<u32>,
    pub shift: u32,
}

impl ImmediateField {
    pub fn at(base: u32, size: u32) -> Self {
        Self {
            base,
            size,
            sign_extend: None,
            force_signed: false,
            split_base: None,
            split_size: None,
            shift: 0,
        }
    }

    /// Negative values set this sign-extend bit instead of widening the field.
    pub fn signed_at(mut self, bit: u32) -> Self {
        self.sign_extend = Some(bit);
        self
    }

    /// Two's-complement value written as-is, no separate sign bit.
    pub fn force_signed(mut self) -> Self {
        self.force_signed = true;
        self
    }

    pub fn split(mut self, base: u32, size: u32) -> Self {
        self.split_base = Some(base);
        self.split_size = Some(size);
        self
    }

    pub fn shifted(mut self, shift: u32) -> Self {
        self.shift = shift;
        self
    }

    pub fn encode(&self, value: i64) -> u32 {
        let value = value >> self.shift;
        let mut word = (((value as u64) & mask64(self.size)) as u32) << self.base;
        if let (Some(split_base), Some(split_size)) = (self.split_base, self.split_size) {
            word |= ((((value >> self.size) as u64) & mask64(split_size)) as u32) << split_base;
        }
        if value < 0 && !self.force_signed {
            if let Some(bit) = self.sign_extend {
                word |= 1 << bit;
            }
        }
        word
    }

    pub fn constraint(&self) -> ImmConstraint {
        let size = self.size + self.split_size.unwrap_or(0);
        let min = if self.sign_extend.is_some() || self.force_signed {
            -(1i64 << (size - 1))
        } else {
            0
        };
        let max = if self.force_signed {
            1i64 << (size - 1)
        } else {
            1i64 << size
        };
        ImmConstraint {
            min,
            max,
            shift: self.shift,
        }
    }
}

/// Immediate whose bits are scattered over discontiguous positions.
#[derive(Debug, Clone)]
pub struct PieceImmediateField {
    /// (source bit, destination bit, width) tuples.
    pub mapping: Vec<(u32, u32, u32)>,
    /// Substitute this source value with its destination value before
    /// scattering; the source is always accepted by the constraint.
    pub extra_map: Option<(i64, i64)>,
}

impl PieceImmediateField {
    pub fn new(mapping: Vec<(u32, u32, u32)>) -> Self {
        Self {
            mapping,
            extra_map: None,
        }
    }

    pub fn extra_map(mut self, src: i64, dst: i64) -> Self {
        self.extra_map = Some((src, dst));
        self
    }

    pub fn encode(&self, value: i64) -> u32 {
        let mut value = value;
        if let Some((src, dst)) = self.extra_map {
            if value == src {
                value = dst;
            }
        }
        let mut word = 0u32;
        for &(src, dst, width) in &self.mapping {
            word |= ((((value >> src) as u64) & mask64(width)) as u32) << dst;
        }
        word
    }

    pub fn constraint(&self) -> PieceImmConstraint {
        let mut field_mask = 0i64;
        for &(src, _, width) in &self.mapping {
            field_mask |= ((1i64 << width) - 1) << src;
        }
        PieceImmConstraint {
            mask: field_mask,
            extra_map: self.extra_map,
        }
    }
}

#[derive(Debug, Clone)]
pub enum OffsetField {
    Reg(RegisterField),
    Imm(ImmediateField),
}

/// Placement for a memory operand: nested base register field, offset field,
/// transfer-size bits, and address-update/post-increment bits.
#[derive(Debug, Clone)]
pub struct MemoryField {
    pub base: RegisterField,
    pub offset: OffsetField,
    pub transfer_bits: Option<(u32, u32)>,
    pub transfer_size: Option<u8>,
    pub increment: Option<(u32, u32)>,
}

impl MemoryField {
    pub fn new(base: RegisterField, offset: OffsetField) -> Self {
        Self {
            base,
            offset,
            transfer_bits: None,
            transfer_size: None,
            increment: None,
        }
    }

    pub fn transfer_bits(mut self, low: u32, high: u32) -> Self {
        self.transfer_bits = Some((low, high));
        self
    }

    pub fn transfer_size(mut self, size: u8) -> Self {
        self.transfer_size = Some(size);
        self
    }

    pub fn increment(mut self, update: u32, post: u32) -> Self {
        self.increment = Some((update, post));
        self
    }

    pub fn encode(
        &self,
        base: Register,
        offset: &Operand,
        post_increment: bool,
        mods: &[Modifier],
        main: Option<Register>,
    ) -> u32 {
        // a successful constraint match guarantees a transfer size
        let size = effective_transfer(self.transfer_size, mods).unwrap_or(0) as u32;
        let mut word = 0u32;
        if let Some((low, high)) = self.transfer_bits {
            word |= (size & 1) << low;
            word |= (size >> 1) << high;
        }
        word |= self.base.encode(base, main);
        match (offset, &self.offset) {
            (Operand::Constant(val), OffsetField::Imm(field)) => {
                let mut val = *val;
                if post_increment && (val == 1 || val == -1) {
                    val *= 1i64 << size;
                }
                word |= field.encode(val >> size);
            }
            (Operand::Register(reg), OffsetField::Reg(field)) => {
                word |= field.encode(*reg, main);
            }
            _ => {}
        }
        if post_increment {
            if let Some((update, post)) = self.increment {
                word |= 1 << update;
                word |= 1 << post;
            }
        }
        word
    }

    pub fn constraint(&self, main: Option<&RegisterField>) -> MemConstraint {
        MemConstraint {
            base: self.base.constraint(main),
            offset: match &self.offset {
                OffsetField::Reg(field) => OffsetConstraint::Reg(field.constraint(main)),
                OffsetField::Imm(field) => OffsetConstraint::Imm(field.constraint()),
            },
            transfer_size: self.transfer_size,
            post_increment: self.increment.is_some(),
        }
    }
}

/// Placement and serialization rule for one operand of an encoding.
#[derive(Debug, Clone)]
pub enum Field {
    Register(RegisterField),
    Immediate(ImmediateField),
    PieceImmediate(PieceImmediateField),
    Memory(MemoryField),
}

impl Field {
    pub fn constraint(&self, main: Option<&Field>) -> Constraint {
        let main_field = match main {
            Some(Field::Register(f)) => Some(f),
            _ => None,
        };
        match self {
            Field::Register(f) => Constraint::Reg(f.constraint(main_field)),
            Field::Immediate(f) => Constraint::Imm(f.constraint()),
            Field::PieceImmediate(f) => Constraint::Piece(f.constraint()),
            Field::Memory(f) => Constraint::Mem(f.constraint(main_field)),
        }
    }

    pub fn encode(&self, op: &Operand, mods: &[Modifier], main: Option<Register>) -> u32 {
        match (self, op) {
            (Field::Register(f), Operand::Register(reg)) => f.encode(*reg, main),
            (Field::Immediate(f), Operand::Constant(val)) => f.encode(*val),
            (Field::PieceImmediate(f), Operand::Constant(val)) => f.encode(*val),
            (
                Field::Memory(f),
                Operand::Memory {
                    base,
                    offset,
                    post_increment,
                },
            ) => f.encode(*base, offset, *post_increment, mods, main),
            // shape mismatches are ruled out by a successful constraint match
            _ => 0,
        }
    }
}

impl From<RegisterField> for Field {
    fn from(f: RegisterField) -> Self {
        Field::Register(f)
    }
}

impl From<ImmediateField> for Field {
    fn from(f: ImmediateField) -> Self {
        Field::Immediate(f)
    }
}

impl From<PieceImmediateField> for Field {
    fn from(f: PieceImmediateField) -> Self {
        Field::PieceImmediate(f)
    }
}

impl From<MemoryField> for Field {
    fn from(f: MemoryField) -> Self {
        Field::Memory(f)
    }
}
