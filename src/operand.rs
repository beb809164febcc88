use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::error::AsmError;
use crate::registers::{self, Register};

/// 16-bit-half extraction tag carried by `#HI(...)`/`#LO(...)` operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Extract {
    All,
    Bottom,
    Top,
}

impl Extract {
    pub fn apply(self, val: i64) -> i64 {
        match self {
            Extract::All => val,
            Extract::Bottom => val & 0xFFFF,
            Extract::Top => val >> 16,
        }
    }
}

/// One parsed operand. A `Label` is the unresolved form; resolution against
/// the label table is a one-way transition producing a `Constant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Register(Register),
    Constant(i64),
    Memory {
        base: Register,
        offset: Box<Operand>,
        post_increment: bool,
    },
    Label {
        name: String,
        extract: Extract,
    },
}

impl Operand {
    /// Parse one operand token. Grammar: `#value`, `#HI(value)`, `#LO(value)`,
    /// a catalog register name, `[Reg(+offset)?(++|--)?]`, and anything else
    /// falls through as a label reference.
    pub fn parse(token: &str) -> Result<Operand, AsmError> {
        if let Some(rest) = token.strip_prefix('#') {
            let (extract, text) = if let Some(inner) =
                rest.strip_prefix("HI(").and_then(|s| s.strip_suffix(')'))
            {
                (Extract::Top, inner)
            } else if let Some(inner) = rest.strip_prefix("LO(").and_then(|s| s.strip_suffix(')')) {
                (Extract::Bottom, inner)
            } else {
                (Extract::All, rest)
            };
            return Ok(match parse_int(text) {
                Some(val) => Operand::Constant(extract.apply(val)),
                None => {
                    debug!(text, "not an integer literal, treating as label");
                    Operand::Label {
                        name: text.to_string(),
                        extract,
                    }
                }
            });
        }

        if let Some(inner) = token.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return Self::parse_memory(inner);
        }

        if let Some(reg) = registers::lookup(token) {
            return Ok(Operand::Register(reg));
        }

        Ok(Operand::Label {
            name: token.to_string(),
            extract: Extract::All,
        })
    }

    fn parse_memory(inner: &str) -> Result<Operand, AsmError> {
        // `++`/`--` with no explicit offset falls back to a signed unit step,
        // rescaled to the transfer size at encode time.
        let (inner, post_increment, fallback) = if let Some(s) = inner.strip_suffix("++") {
            (s, true, 1)
        } else if let Some(s) = inner.strip_suffix("--") {
            (s, true, -1)
        } else {
            (inner, false, 0)
        };
        let mut parts = inner.splitn(2, '+');
        let base_name = parts.next().unwrap_or("");
        let base = registers::lookup(base_name).ok_or_else(|| AsmError::UnknownRegister {
            name: base_name.to_string(),
        })?;
        let offset = match parts.next() {
            Some(text) => Operand::parse(text)?,
            None => Operand::Constant(fallback),
        };
        Ok(Operand::Memory {
            base,
            offset: Box::new(offset),
            post_increment,
        })
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Operand::Label { .. })
    }

    /// Resolve a label operand PC-relative to the referencing instruction's
    /// own address. Non-label operands pass through unchanged.
    pub fn resolve(&self, labels: &HashMap<String, u32>, address: u32) -> Result<Operand, AsmError> {
        match self {
            Operand::Label { name, extract } => {
                let target = labels
                    .get(name)
                    .copied()
                    .ok_or_else(|| AsmError::UndefinedLabel { name: name.clone() })?;
                let displacement = target as i64 - address as i64;
                Ok(Operand::Constant(extract.apply(displacement)))
            }
            other => Ok(other.clone()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register(reg) => write!(f, "{reg}"),
            Operand::Constant(val) => write!(f, "#{val}"),
            Operand::Memory {
                base,
                offset,
                post_increment,
            } => {
                let inc = if *post_increment { "++" } else { "" };
                write!(f, "[{base}+{offset}{inc}]")
            }
            Operand::Label { name, extract } => match extract {
                Extract::All => write!(f, "{name}"),
                Extract::Top => write!(f, "#HI({name})"),
                Extract::Bottom => write!(f, "#LO({name})"),
            },
        }
    }
}

fn parse_int(text: &str) -> Option<i64> {
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let val = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else {
        text.parse::<i64>().ok()?
    };
    Some(if negative { -val } else { val })
}
