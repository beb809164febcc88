use serde::Serialize;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::error::AsmError;
use crate::selector::Statement;

/// Assembled program: the statement listing in address order plus the
/// serialized little-endian image.
#[derive(Debug, Serialize)]
pub struct Program {
    pub statements: Vec<Statement>,
    pub bytes: Vec<u8>,
}

struct Assembler {
    cursor: u32,
    labels: HashMap<String, u32>,
    statements: Vec<Statement>,
}

impl Assembler {
    fn new() -> Self {
        Self {
            cursor: 0,
            labels: HashMap::new(),
            statements: Vec::new(),
        }
    }

    fn define_label(&mut self, name: &str) -> Result<(), AsmError> {
        if let Some(address) = self.labels.get(name) {
            return Err(AsmError::DuplicateLabel {
                name: name.to_string(),
                address: *address,
            });
        }
        self.labels.insert(name.to_string(), self.cursor);
        Ok(())
    }

    fn directive(&mut self, command: &str) -> Result<(), AsmError> {
        match command {
            // labels land on 4-byte boundaries to keep jump targets simple
            "align4" => {
                if self.cursor & 2 != 0 {
                    self.process_line("NOP")?;
                }
                Ok(())
            }
            other => {
                warn!(directive = other, "unknown directive ignored");
                Ok(())
            }
        }
    }

    fn process_line(&mut self, line: &str) -> Result<(), AsmError> {
        let line = line.split('!').next().unwrap_or("").trim();
        if line.is_empty() {
            return Ok(());
        }

        if let Some(name) = line.strip_suffix(':') {
            return self.define_label(name);
        }

        if let Some(rest) = line.strip_prefix('.') {
            let command = rest.split_whitespace().next().unwrap_or("");
            return self.directive(command);
        }

        let mut parts = line.split_whitespace();
        let mnemonic = parts.next().unwrap_or("");
        let tokens: Vec<&str> = parts.collect();
        info!(mnemonic, ?tokens, address = self.cursor, "statement");

        let mut statement = Statement::new(self.cursor, mnemonic);
        statement.parse_operands(&tokens)?;

        if statement.label.is_none() {
            statement.encode()?;
            self.cursor += statement.size as u32;
        } else {
            // label displacement unknown yet, reserve the widest form
            self.cursor += 4;
        }
        self.statements.push(statement);
        Ok(())
    }

    /// Second pass: resolve deferred label operands, re-encode, and pad
    /// statements that collapsed to a Core form so later addresses hold.
    fn finish(mut self) -> Result<Program, AsmError> {
        let mut fillers = Vec::new();
        for statement in &mut self.statements {
            if statement.label.is_none() {
                continue;
            }
            statement.resolve(&self.labels)?;
            statement.encode()?;
            if statement.size == 2 {
                let mut filler = Statement::new(statement.address + 2, "NOP");
                filler.encode()?;
                fillers.push(filler);
            }
        }
        self.statements.extend(fillers);
        self.statements.sort_by_key(|s| s.address);

        let mut bytes = Vec::new();
        for statement in &self.statements {
            bytes.extend_from_slice(&statement.value.to_le_bytes()[..statement.size as usize]);
        }
        Ok(Program {
            statements: self.statements,
            bytes,
        })
    }
}

/// Assemble a source listing into a program image.
pub fn assemble(source: &str) -> Result<Program, AsmError> {
    let mut assembler = Assembler::new();
    for line in source.lines() {
        assembler.process_line(line)?;
    }
    assembler.finish()
}
