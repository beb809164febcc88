use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constraint::Constraint;
use crate::error::AsmError;
use crate::field::Field;
use crate::modifiers::Modifier;
use crate::operand::Operand;
use crate::registers::Register;

/// Instruction word width class. The width tag is folded into the encoded
/// word so Core, Extended and Long forms stay disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Width {
    Core,
    Extended,
    Long,
}

impl Width {
    pub fn bytes(self) -> u8 {
        match self {
            Width::Core => 2,
            Width::Extended | Width::Long => 4,
        }
    }

    fn tag(self) -> u32 {
        match self {
            Width::Core => 0,
            Width::Extended => 0xc000,
            Width::Long => 0xb000,
        }
    }
}

/// One concrete bit layout of an instruction: constant opcode bits plus
/// per-operand fields, the modifier flags it admits, and the optional
/// condition and long-transfer bit positions.
#[derive(Debug, Clone)]
pub struct Encoding {
    const_bits: u32,
    width: Width,
    fields: Vec<Field>,
    constraints: Vec<Constraint>,
    main_reg: Option<usize>,
    modifiers: Vec<(Modifier, u32)>,
    conditional: bool,
    condition_base: Option<u32>,
    l2: Option<u32>,
}

impl Encoding {
    pub fn new(width: Width, const_bits: u32) -> Self {
        Self {
            const_bits,
            width,
            fields: Vec::new(),
            constraints: Vec::new(),
            main_reg: None,
            modifiers: Vec::new(),
            conditional: false,
            condition_base: None,
            l2: None,
        }
    }

    /// Operand fields in operand order. Constraints are derived here against
    /// the current main register field, so call after `main_reg`.
    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        let main = self.main_reg.and_then(|i| fields.get(i)).cloned();
        self.constraints = fields
            .iter()
            .map(|field| field.constraint(main.as_ref()))
            .collect();
        self.fields = fields;
        self
    }

    /// Operand index that establishes the unit reference frame.
    pub fn main_reg(mut self, index: usize) -> Self {
        self.main_reg = Some(index);
        self
    }

    pub fn modifier(mut self, modifier: Modifier, bit: u32) -> Self {
        self.modifiers.push((modifier, bit));
        self
    }

    /// Restrict the declared flag modifiers to a subset.
    pub fn keep(mut self, kept: &[Modifier]) -> Self {
        self.modifiers.retain(|(m, _)| kept.contains(m));
        self
    }

    pub fn conditional(mut self, base: u32) -> Self {
        self.conditional = true;
        self.condition_base = Some(base);
        self
    }

    pub fn l2(mut self, bit: u32) -> Self {
        self.l2 = Some(bit);
        self
    }

    pub fn width(&self) -> Width {
        self.width
    }

    fn main_register(&self, operands: &[Operand]) -> Option<Register> {
        match self.main_reg.and_then(|i| operands.get(i)) {
            Some(Operand::Register(reg)) => Some(*reg),
            _ => None,
        }
    }

    /// Whether the operand list and modifier set fit this layout. The main
    /// register constraint is checked first so the remaining unit rules have
    /// their reference frame.
    pub fn matches(&self, operands: &[Operand], mods: &[Modifier]) -> Result<bool, AsmError> {
        if operands.len() != self.constraints.len() {
            return Ok(false);
        }
        let mut main = None;
        if let Some(index) = self.main_reg {
            if !self.constraints[index].matches(&operands[index], mods, None)? {
                debug!(index, "main register constraint rejected");
                return Ok(false);
            }
            if let Operand::Register(reg) = &operands[index] {
                main = Some(*reg);
            }
        }
        for (index, (constraint, operand)) in
            self.constraints.iter().zip(operands.iter()).enumerate()
        {
            if Some(index) == self.main_reg {
                continue;
            }
            if !constraint.matches(operand, mods, main)? {
                debug!(index, "operand constraint rejected");
                return Ok(false);
            }
        }
        for modifier in mods {
            let ok = match modifier {
                Modifier::Transfer(_) => true,
                Modifier::Cond(_) => self.conditional,
                flag => self.modifiers.iter().any(|(m, _)| m == flag),
            };
            if !ok {
                debug!(?modifier, "modifier not admitted by this layout");
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Serialize operands into the instruction word. Only valid after a
    /// successful `matches` on the same operands and modifiers.
    pub fn encode(&self, operands: &[Operand], mods: &[Modifier]) -> u32 {
        let main = self.main_register(operands);
        let mut word = self.const_bits;
        for (field, operand) in self.fields.iter().zip(operands.iter()) {
            word |= field.encode(operand, mods, main);
        }
        for modifier in mods {
            match modifier {
                Modifier::Transfer(2) => {
                    if let Some(bit) = self.l2 {
                        word |= 1 << bit;
                    }
                }
                Modifier::Transfer(_) => {}
                Modifier::Cond(value) => {
                    if let Some(base) = self.condition_base {
                        word |= (*value as u32) << base;
                    }
                }
                flag => {
                    if let Some((_, bit)) = self.modifiers.iter().find(|(m, _)| m == flag) {
                        word |= 1 << bit;
                    }
                }
            }
        }
        word | self.width.tag()
    }
}
