use std::ops::Range;
use tracing::debug;

use crate::error::AsmError;
use crate::modifiers::{effective_transfer, Modifier};
use crate::operand::Operand;
use crate::registers::{RegUnit, Register};

/// Which register units an operand may come from, possibly relative to the
/// encoding's main register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRule {
    Any,
    /// Same unit as the main register.
    Same,
    /// The other unit of the main register's address or data pair.
    Other,
    Control,
    Address,
    Data,
    /// Unit differs from the main register's; encoded as a 3-bit relative
    /// hint instead of a literal unit id.
    O2r,
    Address0,
    Exact(RegUnit),
}

impl UnitRule {
    fn matches(self, unit: RegUnit, main: Option<RegUnit>) -> bool {
        match self {
            UnitRule::Any => true,
            UnitRule::Same => main == Some(unit),
            UnitRule::Other => match main {
                Some(m) => {
                    unit != m
                        && ((unit.is_address() && m.is_address())
                            || (unit.is_data() && m.is_data()))
                }
                None => false,
            },
            UnitRule::Control => unit == RegUnit::Control,
            UnitRule::O2r => match main {
                // Only the four GP units appear in the relative hint table.
                Some(m) => {
                    unit != m
                        && (unit.is_address() || unit.is_data())
                        && (m.is_address() || m.is_data())
                }
                None => false,
            },
            UnitRule::Address => unit.is_address(),
            UnitRule::Data => unit.is_data(),
            UnitRule::Address0 => unit == RegUnit::Address0,
            UnitRule::Exact(u) => unit == u,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegConstraint {
    pub unit: UnitRule,
    pub num: Range<u8>,
    /// Field has no bit placement of its own; the number is carried by the
    /// main operand and must match it.
    pub same_num: bool,
    /// Program-counter shorthand accepted regardless of the unit rule.
    pub pc: bool,
}

impl RegConstraint {
    pub fn matches_reg(&self, reg: Register, main: Option<Register>) -> bool {
        if self.pc && reg.unit == RegUnit::Pc {
            return true;
        }
        if !self.unit.matches(reg.unit, main.map(|r| r.unit)) {
            debug!(?reg, rule = ?self.unit, "unit rule rejected register");
            return false;
        }
        if self.same_num {
            return match main {
                Some(m) if m.number == reg.number => true,
                _ => {
                    debug!(?reg, "register number must match the main operand");
                    false
                }
            };
        }
        if self.num.contains(&reg.number) {
            true
        } else {
            debug!(?reg, range = ?self.num, "register number out of range");
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImmConstraint {
    pub min: i64,
    pub max: i64,
    pub shift: u32,
}

impl ImmConstraint {
    pub fn matches_val(&self, val: i64) -> bool {
        if val & ((1i64 << self.shift) - 1) != 0 {
            debug!(val, shift = self.shift, "low bits set under shift");
            return false;
        }
        let val = val >> self.shift;
        if val < self.min || val >= self.max {
            debug!(val, min = self.min, max = self.max, "immediate out of range");
            return false;
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct PieceImmConstraint {
    pub mask: i64,
    pub extra_map: Option<(i64, i64)>,
}

impl PieceImmConstraint {
    pub fn matches_val(&self, val: i64) -> bool {
        if let Some((src, _)) = self.extra_map {
            if val == src {
                return true;
            }
        }
        if val & !self.mask != 0 {
            debug!(val, mask = self.mask, "value has bits outside the scatter mask");
            return false;
        }
        if let Some((_, dst)) = self.extra_map {
            if val == dst {
                debug!(val, "value collides with the extra-map destination");
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone)]
pub enum OffsetConstraint {
    Reg(RegConstraint),
    Imm(ImmConstraint),
}

#[derive(Debug, Clone)]
pub struct MemConstraint {
    pub base: RegConstraint,
    pub offset: OffsetConstraint,
    pub transfer_size: Option<u8>,
    pub post_increment: bool,
}

impl MemConstraint {
    pub fn matches(&self, op: &Operand, mods: &[Modifier]) -> Result<bool, AsmError> {
        let Operand::Memory {
            base,
            offset,
            post_increment,
        } = op
        else {
            return Ok(false);
        };
        if !self.base.matches_reg(*base, None) {
            debug!("memory base register rejected");
            return Ok(false);
        }
        let Some(size) = effective_transfer(self.transfer_size, mods) else {
            debug!("no transfer size available for memory operand");
            return Ok(false);
        };
        match offset.as_ref() {
            Operand::Constant(val) => {
                let mut val = *val;
                if *post_increment && (val == 1 || val == -1) {
                    // auto-increment shorthand steps by one transfer unit
                    val *= 1i64 << size;
                }
                let multiple = 1i64 << size;
                if val % multiple != 0 {
                    return Err(AsmError::MisalignedMemoryOffset {
                        offset: val,
                        multiple,
                    });
                }
                val >>= size;
                let ok = match &self.offset {
                    OffsetConstraint::Imm(c) => c.matches_val(val),
                    OffsetConstraint::Reg(_) => false,
                };
                if !ok {
                    debug!(val, "memory offset rejected");
                    return Ok(false);
                }
            }
            Operand::Register(reg) => {
                // a register-indexed offset is constrained relative to the base
                let ok = match &self.offset {
                    OffsetConstraint::Reg(c) => c.matches_reg(*reg, Some(*base)),
                    OffsetConstraint::Imm(_) => false,
                };
                if !ok {
                    debug!(?reg, "memory index register rejected");
                    return Ok(false);
                }
            }
            _ => return Ok(false),
        }
        if *post_increment && !self.post_increment {
            debug!("post-increment not supported by this encoding");
            return Ok(false);
        }
        Ok(true)
    }
}

/// Operand-shape predicate derived from a field descriptor.
#[derive(Debug, Clone)]
pub enum Constraint {
    Reg(RegConstraint),
    Imm(ImmConstraint),
    Piece(PieceImmConstraint),
    Mem(MemConstraint),
}

impl Constraint {
    pub fn matches(
        &self,
        op: &Operand,
        mods: &[Modifier],
        main: Option<Register>,
    ) -> Result<bool, AsmError> {
        match (self, op) {
            (Constraint::Reg(c), Operand::Register(reg)) => Ok(c.matches_reg(*reg, main)),
            (Constraint::Imm(c), Operand::Constant(val)) => Ok(c.matches_val(*val)),
            (Constraint::Piece(c), Operand::Constant(val)) => Ok(c.matches_val(*val)),
            (Constraint::Mem(c), _) => c.matches(op, mods),
            _ => {
                debug!(?op, "operand kind does not fit this field");
                Ok(false)
            }
        }
    }
}
