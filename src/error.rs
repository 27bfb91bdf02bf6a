use std::fmt::Display;

use hex::FromHexError;

/// An enum for possible errors that might occur while building tables or calculating digests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PearsonError {
    /// The permutation table could not be allocated.
    TableAllocation,
    /// A table of byte values can hold at most 256 entries.
    InvalidTableSize(usize),
    /// The supplied bytes are not a permutation of `0..=255`.
    InvalidTable,
    /// Pearson hashing derives its offsets from the first byte, so the input must not be empty.
    EmptyInput,
    /// The hex string contains a character that is not a hex digit.
    ParseHexFailed,
    /// A hex string must contain two digits per byte.
    OddHexLength,
}

impl From<FromHexError> for PearsonError {
    fn from(err: FromHexError) -> Self {
        match err {
            FromHexError::OddLength => Self::OddHexLength,
            FromHexError::InvalidHexCharacter { .. } | FromHexError::InvalidStringLength => {
                Self::ParseHexFailed
            }
        }
    }
}

impl Display for PearsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PearsonError::TableAllocation => {
                write!(f, "Failed to allocate the permutation table.")
            }
            PearsonError::InvalidTableSize(n) => {
                write!(f, "Can't build a byte table with {n} entries, maximum is 256.")
            }
            PearsonError::InvalidTable => {
                write!(f, "Table is not a permutation of the 256 byte values.")
            }
            PearsonError::EmptyInput => write!(f, "Pearson hashing requires at least one byte."),
            PearsonError::ParseHexFailed => write!(f, "Can't convert hex string to bytes"),
            PearsonError::OddHexLength => {
                write!(f, "Hex string has an odd number of digits.")
            }
        }
    }
}

impl std::error::Error for PearsonError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_errors_map_to_their_variants() {
        let err: PearsonError = hex::decode("zz").unwrap_err().into();
        assert_eq!(err, PearsonError::ParseHexFailed);
        let err: PearsonError = hex::decode("abc").unwrap_err().into();
        assert_eq!(err, PearsonError::OddHexLength);
    }

    #[test]
    fn display_mentions_offending_size() {
        let msg = PearsonError::InvalidTableSize(300).to_string();
        assert!(msg.contains("300"));
    }
}
