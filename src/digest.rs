use crate::consts::{DIGEST_LEN, HEX_LEN};
use crate::error::PearsonError;
use crate::helper::{encode_hex, HexCase};
use crate::table::PearsonTable;

use rand::RngCore;
use tracing::trace;

/// An 8 byte Pearson digest.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Digest64([u8; DIGEST_LEN]);

impl Digest64 {
    /// Wraps raw digest bytes, e.g. ones stored from an earlier `as_bytes`.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The digest read as a big-endian integer, so that its hex form matches `to_hex`.
    pub fn as_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    /// Renders the digest as 16 uppercase hex digits.
    pub fn to_hex(&self) -> String {
        self.to_hex_with(HexCase::Upper)
    }

    pub fn to_hex_with(&self, case: HexCase) -> String {
        encode_hex(&self.0, case)
    }

    /// Writes the uppercase hex digest into `out` followed by a NUL terminator.
    ///
    /// At most `out.len() - 1` digits are written so the terminator always fits; an empty
    /// buffer is left untouched. Returns the number of digits written.
    pub fn write_hex(&self, out: &mut [u8]) -> usize {
        if out.is_empty() {
            return 0;
        }

        let hex = self.to_hex();
        let written = HEX_LEN.min(out.len() - 1);
        out[..written].copy_from_slice(&hex.as_bytes()[..written]);
        out[written] = 0;
        written
    }
}

impl std::fmt::Display for Digest64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::UpperHex for Digest64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_with(HexCase::Upper))
    }
}

impl std::fmt::LowerHex for Digest64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_with(HexCase::Lower))
    }
}

/// Pearson hash of `input` under `table`, run once per output byte.
///
/// Output byte `j` starts from `table[(input[0] + j) mod 256]` and folds in `input[1..]` as
/// `h = table[h ^ b]`.
pub fn pearson_64bit_with_table(
    table: &PearsonTable,
    input: &[u8],
) -> Result<Digest64, PearsonError> {
    let (&first, rest) = input.split_first().ok_or(PearsonError::EmptyInput)?;

    let mut result = [0u8; DIGEST_LEN];
    for (jj, out) in result.iter_mut().enumerate() {
        let mut h = table.lookup(first.wrapping_add(jj as u8));
        for &b in rest {
            h = table.lookup(h ^ b);
        }
        *out = h;
    }

    let digest = Digest64(result);
    trace!(len = input.len(), %digest, "computed pearson digest");
    Ok(digest)
}

/// Hashes `input` under a table freshly drawn from `rng`. The table is dropped on return.
pub fn pearson_64bit_with_rng<R: RngCore + ?Sized>(
    rng: &mut R,
    input: &[u8],
) -> Result<Digest64, PearsonError> {
    if input.is_empty() {
        return Err(PearsonError::EmptyInput);
    }
    let table = PearsonTable::generate(rng)?;
    pearson_64bit_with_table(&table, input)
}

/// Hashes `input` under a fresh table drawn from the thread-local RNG.
///
/// Each call uses a new table, so hashing the same input twice will normally give different
/// digests. Use a `PearsonHasher` in `TableMode::Fixed` for repeatable digests.
pub fn pearson_64bit(input: &[u8]) -> Result<Digest64, PearsonError> {
    pearson_64bit_with_rng(&mut rand::thread_rng(), input)
}

/// Hashes `input` and writes the NUL-terminated uppercase hex digest into `out`,
/// truncating to its capacity. Returns the number of digits written.
pub fn pearson_64bit_into(input: &[u8], out: &mut [u8]) -> Result<usize, PearsonError> {
    Ok(pearson_64bit(input)?.write_hex(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reversed() -> PearsonTable {
        let bytes: Vec<u8> = (0..=255u8).rev().collect();
        PearsonTable::from_bytes(&bytes).unwrap()
    }

    fn hex(table: &PearsonTable, input: &[u8]) -> String {
        pearson_64bit_with_table(table, input).unwrap().to_hex()
    }

    #[test]
    fn identity_table_two_bytes() {
        // byte j = ((1 + j) ^ 2)
        assert_eq!(hex(&PearsonTable::identity(), &[0x01, 0x02]), "030001060704050A");
    }

    #[test]
    fn identity_table_offset_wraps() {
        assert_eq!(hex(&PearsonTable::identity(), &[0xFE]), "FEFF000102030405");
    }

    #[test]
    fn reversed_table_single_byte() {
        // byte j = 255 - (0x10 + j)
        assert_eq!(hex(&reversed(), &[0x10]), "EFEEEDECEBEAE9E8");
    }

    #[test]
    fn reversed_table_two_bytes() {
        // table[(255 - j) ^ 0xFF] == table[j] == 255 - j
        assert_eq!(hex(&reversed(), &[0x00, 0xFF]), "FFFEFDFCFBFAF9F8");
    }

    #[test]
    fn single_byte_input_reads_the_table_directly() {
        let table = PearsonTable::from_seed(5).unwrap();
        let digest = pearson_64bit_with_table(&table, &[0x80]).unwrap();
        for (jj, &b) in digest.as_bytes().iter().enumerate() {
            assert_eq!(b, table.as_bytes()[0x80 + jj]);
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            pearson_64bit_with_table(&PearsonTable::identity(), &[]),
            Err(PearsonError::EmptyInput)
        );
        assert_eq!(pearson_64bit(&[]), Err(PearsonError::EmptyInput));
    }

    #[test]
    fn output_shape() {
        let digest = pearson_64bit(&[0x55, 0xAA, 0x02, 0x03, 0x07, 0x60, 0x90, 0x04]).unwrap();
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 16);
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));
        assert_eq!(format!("{digest}"), hex);
        assert_eq!(format!("{digest:x}"), hex.to_lowercase());
        assert_eq!(format!("{:016X}", digest.as_u64()), hex);
    }

    #[test]
    fn raw_bytes_render_in_order() {
        let digest = Digest64::from_bytes([0x00, 0x01, 0x0A, 0x7F, 0x80, 0xAB, 0xCD, 0xFF]);
        assert_eq!(digest.to_hex(), "00010A7F80ABCDFF");
        assert_eq!(digest.to_hex_with(HexCase::Lower), "00010a7f80abcdff");
        assert_eq!(digest.as_u64(), 0x0001_0A7F_80AB_CDFF);
        assert_eq!(Digest64::from_bytes(*digest.as_bytes()), digest);
    }

    #[test]
    fn same_rng_state_same_digest() {
        let input = b"pearson";
        let a = pearson_64bit_with_rng(&mut StdRng::seed_from_u64(99), input).unwrap();
        let b = pearson_64bit_with_rng(&mut StdRng::seed_from_u64(99), input).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn write_hex_fills_a_full_buffer() {
        let digest = pearson_64bit_with_table(&PearsonTable::identity(), &[0x01, 0x02]).unwrap();
        let mut out = [0xAAu8; 25];
        assert_eq!(digest.write_hex(&mut out), 16);
        assert_eq!(&out[..16], b"030001060704050A");
        assert_eq!(out[16], 0);
        assert_eq!(out[17], 0xAA);
    }

    #[test]
    fn write_hex_truncates_to_capacity() {
        let digest = pearson_64bit_with_table(&PearsonTable::identity(), &[0x01, 0x02]).unwrap();

        let mut out = [0xAAu8; 5];
        assert_eq!(digest.write_hex(&mut out), 4);
        assert_eq!(&out, b"0300\0");

        let mut one = [0xAAu8; 1];
        assert_eq!(digest.write_hex(&mut one), 0);
        assert_eq!(one, [0]);

        let mut none: [u8; 0] = [];
        assert_eq!(digest.write_hex(&mut none), 0);
    }

    #[test]
    fn into_writes_terminated_hex() {
        let mut out = [0xAAu8; 17];
        assert_eq!(pearson_64bit_into(b"abc", &mut out).unwrap(), 16);
        assert_eq!(out[16], 0);
        assert!(out[..16].iter().all(u8::is_ascii_hexdigit));
    }
}
