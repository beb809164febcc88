use serde::{Deserialize, Serialize};

/// One mnemonic suffix token. Flag modifiers map to per-encoding bit
/// positions; transfer-size and condition modifiers use fixed global
/// positions declared by the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    /// Set condition flags.
    S,
    /// Top 16-bit half.
    T,
    /// Mask.
    M,
    /// Repeat.
    R,
    /// DSP mode.
    P,
    /// Complex-number variant.
    C,
    /// Split-8 multiply source.
    X,
    /// Unsigned.
    U,
    /// Transfer size: B=0, W=1, D=2, L=3.
    Transfer(u8),
    /// Condition code value.
    Cond(u8),
}

// Token scan order matters: single-letter conditions come after the
// two-letter ones, and MT/MB expand to their flag combinations.
const TOKENS: &[(&str, &[Modifier])] = &[
    ("S", &[Modifier::S]),
    ("B", &[Modifier::Transfer(0)]),
    ("W", &[Modifier::Transfer(1)]),
    ("D", &[Modifier::Transfer(2)]),
    ("L", &[Modifier::Transfer(3)]),
    ("EQ", &[Modifier::Cond(1)]),
    ("NE", &[Modifier::Cond(2)]),
    ("NZ", &[Modifier::Cond(2)]),
    ("CS", &[Modifier::Cond(3)]),
    ("LO", &[Modifier::Cond(3)]),
    ("CC", &[Modifier::Cond(4)]),
    ("HS", &[Modifier::Cond(4)]),
    ("MI", &[Modifier::Cond(5)]),
    ("PL", &[Modifier::Cond(6)]),
    ("NC", &[Modifier::Cond(6)]),
    ("VS", &[Modifier::Cond(7)]),
    ("VC", &[Modifier::Cond(8)]),
    ("HI", &[Modifier::Cond(9)]),
    ("LS", &[Modifier::Cond(10)]),
    ("GE", &[Modifier::Cond(11)]),
    ("LT", &[Modifier::Cond(12)]),
    ("GT", &[Modifier::Cond(13)]),
    ("LE", &[Modifier::Cond(14)]),
    ("NV", &[Modifier::Cond(15)]),
    ("Z", &[Modifier::Cond(1)]),
    ("N", &[Modifier::Cond(5)]),
    ("T", &[Modifier::T]),
    ("MT", &[Modifier::M, Modifier::T]),
    ("MB", &[Modifier::M]),
    ("R", &[Modifier::R]),
    ("P", &[Modifier::P]),
    ("C", &[Modifier::C]),
    ("X", &[Modifier::X]),
    ("U", &[Modifier::U]),
];

/// Parse a mnemonic suffix into modifier tokens with one ordered pass over
/// the token table. Returns `None` when the suffix does not fully parse, so
/// the caller can reject the mnemonic candidate.
pub fn parse_modifiers(raw: &str) -> Option<Vec<Modifier>> {
    let mut rest = raw;
    let mut mods = Vec::new();
    for (token, expansion) in TOKENS {
        if let Some(r) = rest.strip_prefix(token) {
            rest = r;
            mods.extend_from_slice(expansion);
        }
    }
    if rest.is_empty() {
        Some(mods)
    } else {
        None
    }
}

/// Transfer size given by an explicit suffix, if any.
pub fn transfer_size(mods: &[Modifier]) -> Option<u8> {
    mods.iter().find_map(|m| match m {
        Modifier::Transfer(size) => Some(*size),
        _ => None,
    })
}

/// Effective transfer size for a memory encoding: an explicit suffix
/// overrides the encoding's default; with neither, the encoding cannot match.
pub fn effective_transfer(default: Option<u8>, mods: &[Modifier]) -> Option<u8> {
    transfer_size(mods).or(default)
}
