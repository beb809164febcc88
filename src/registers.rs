use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Register files of the thread unit. Declaration order fixes the unit
/// ordinal used by the wide unit encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegUnit {
    Control,
    Data0,
    Data1,
    Address0,
    Address1,
    Pc,
    Ports,
    Tr,
    Tt,
}

impl RegUnit {
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    pub fn is_address(self) -> bool {
        matches!(self, RegUnit::Address0 | RegUnit::Address1)
    }

    pub fn is_data(self) -> bool {
        matches!(self, RegUnit::Data0 | RegUnit::Data1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Register {
    pub unit: RegUnit,
    pub number: u8,
}

impl Register {
    pub const fn new(unit: RegUnit, number: u8) -> Self {
        Self { unit, number }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.unit {
            RegUnit::Control => "CT",
            RegUnit::Data0 => "D0",
            RegUnit::Data1 => "D1",
            RegUnit::Address0 => "A0",
            RegUnit::Address1 => "A1",
            RegUnit::Pc => "PC",
            RegUnit::Ports => "PORT",
            RegUnit::Tr => "TR",
            RegUnit::Tt => "TT",
        };
        write!(f, "{}.{}", prefix, self.number)
    }
}

// Control unit registers in numbering order.
const CONTROL_NAMES: [&str; 32] = [
    "TXENABLE", "TXMODE", "TXSTATUS", "TXRPT", "TXTIMER", "TXL1START", "TXL1END", "TXL1COUNT",
    "TXL2START", "TXL2END", "TXL2COUNT", "TXBPOBITS", "TXMRSIZE", "TXTIMERI", "TXDRCTRL",
    "TXDRSIZE", "TXCATCH0", "TXCATCH1", "TXCATCH2", "TXCATCH3", "TXDEFR", "CT.21", "TXCLKCTRL",
    "TXINTERN0", "TXAMAREG0", "TXAMAREG1", "TXAMAREG2", "TXAMAREG3", "TXDIVTIME", "TXPRIVEXT",
    "TXTACTCYC", "TXIDLECYC",
];

// ABI aliases for the low address and data registers.
const ABI_ALIASES: [(&str, RegUnit, u8); 14] = [
    ("A0StP", RegUnit::Address0, 0),
    ("A0FrP", RegUnit::Address0, 1),
    ("A1GbP", RegUnit::Address1, 0),
    ("A1LbP", RegUnit::Address1, 1),
    ("D0Re0", RegUnit::Data0, 0),
    ("D0Ar6", RegUnit::Data0, 1),
    ("D0Ar4", RegUnit::Data0, 2),
    ("D0Ar2", RegUnit::Data0, 3),
    ("D0FrT", RegUnit::Data0, 4),
    ("D1Re0", RegUnit::Data1, 0),
    ("D1Ar5", RegUnit::Data1, 1),
    ("D1Ar3", RegUnit::Data1, 2),
    ("D1Ar1", RegUnit::Data1, 3),
    ("D1RtP", RegUnit::Data1, 4),
];

fn build_registers() -> HashMap<String, Register> {
    let mut map = HashMap::new();
    for (number, name) in CONTROL_NAMES.iter().enumerate() {
        map.insert(
            name.to_string(),
            Register::new(RegUnit::Control, number as u8),
        );
    }
    for (name, unit, number) in ABI_ALIASES {
        map.insert(name.to_string(), Register::new(unit, number));
    }
    for n in 0..16u8 {
        map.insert(format!("A0.{n}"), Register::new(RegUnit::Address0, n));
        map.insert(format!("A1.{n}"), Register::new(RegUnit::Address1, n));
    }
    for n in 0..32u8 {
        map.insert(format!("D0.{n}"), Register::new(RegUnit::Data0, n));
        map.insert(format!("D1.{n}"), Register::new(RegUnit::Data1, n));
    }
    map.insert("PC".to_string(), Register::new(RegUnit::Pc, 0));
    map.insert("PCX".to_string(), Register::new(RegUnit::Pc, 1));
    map
}

/// Look up an architectural register by any of its names.
pub fn lookup(name: &str) -> Option<Register> {
    static TABLE: OnceLock<HashMap<String, Register>> = OnceLock::new();
    TABLE.get_or_init(build_registers).get(name).copied()
}
