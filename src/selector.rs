use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::catalog;
use crate::error::AsmError;
use crate::modifiers::parse_modifiers;
use crate::operand::Operand;

/// One instruction statement: mnemonic, parsed operands, and after `encode`
/// the selected instruction word and its byte size.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub address: u32,
    pub mnemonic: String,
    pub operands: Vec<Operand>,
    /// Index of the label operand, if the statement has one.
    pub label: Option<usize>,
    pub value: u32,
    pub size: u8,
}

impl Statement {
    pub fn new(address: u32, mnemonic: &str) -> Self {
        Self {
            address,
            mnemonic: mnemonic.to_string(),
            operands: Vec::new(),
            label: None,
            value: 0,
            size: 0,
        }
    }

    pub fn parse_operands(&mut self, tokens: &[&str]) -> Result<(), AsmError> {
        self.operands = Vec::with_capacity(tokens.len());
        for token in tokens {
            let operand = Operand::parse(token.trim_matches(','))?;
            if operand.is_label() {
                if self.label.is_some() {
                    return Err(AsmError::MultipleLabelOperands {
                        mnemonic: self.mnemonic.clone(),
                    });
                }
                self.label = Some(self.operands.len());
            }
            self.operands.push(operand);
        }
        Ok(())
    }

    /// Replace the label operand with its PC-relative displacement.
    pub fn resolve(&mut self, labels: &HashMap<String, u32>) -> Result<(), AsmError> {
        if let Some(index) = self.label {
            self.operands[index] = self.operands[index].resolve(labels, self.address)?;
        }
        Ok(())
    }

    /// Select and apply the first matching encoding. The catalog is scanned
    /// in declaration order and the mnemonic remainder after an instruction
    /// name must parse entirely as modifier suffixes.
    pub fn encode(&mut self) -> Result<(), AsmError> {
        for instruction in catalog::instructions() {
            let Some(suffix) = self.mnemonic.strip_prefix(instruction.name) else {
                continue;
            };
            let Some(mods) = parse_modifiers(suffix) else {
                debug!(
                    mnemonic = %self.mnemonic,
                    candidate = instruction.name,
                    "suffix does not parse as modifiers"
                );
                continue;
            };
            let operands: Vec<Operand> = if instruction.swap_operands {
                self.operands.iter().rev().cloned().collect()
            } else {
                self.operands.clone()
            };
            for encoding in &instruction.encodings {
                if encoding.matches(&operands, &mods)? {
                    self.value = encoding.encode(&operands, &mods);
                    self.size = encoding.width().bytes();
                    return Ok(());
                }
            }
            debug!(
                candidate = instruction.name,
                "no encoding fits, trying other instructions"
            );
        }
        Err(AsmError::NoMatchingEncoding {
            mnemonic: self.mnemonic.clone(),
            operands: self
                .operands
                .iter()
                .map(|op| op.to_string())
                .collect::<Vec<_>>()
                .join(","),
        })
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = if self.size == 2 {
            format!("{:#06x}", self.value)
        } else {
            format!("{:#06x} {:#06x}", self.value & 0xFFFF, self.value >> 16)
        };
        let operands = self
            .operands
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(
            f,
            "{:#06x}: {:13} {} {}",
            self.address, data, self.mnemonic, operands
        )
    }
}
