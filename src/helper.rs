use crate::error::PearsonError;

/// enums

/// An enum determining when the permutation table is generated.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TableMode {
    /// A fresh table is drawn for every digest. Equal inputs usually give different digests.
    PerCall,
    /// One table is drawn when the hasher is built and reused. Equal inputs give equal digests.
    Fixed,
}

/// An enum determining the case of rendered hex digits.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default)]
pub enum HexCase {
    /// `0-9A-F`.
    #[default]
    Upper,
    /// `0-9a-f`.
    Lower,
}

/// Renders two hex digits per byte of `bytes`.
pub(crate) fn encode_hex(bytes: &[u8], case: HexCase) -> String {
    match case {
        HexCase::Upper => hex::encode_upper(bytes),
        HexCase::Lower => hex::encode(bytes),
    }
}

/// Parses a string of hex digit pairs into bytes. Whitespace between pairs is ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, PearsonError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(compact)?)
}
