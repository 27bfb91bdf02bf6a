/// Number of entries in a Pearson substitution table, one per byte value.
pub const TABLE_SIZE: usize = 256;

/// Number of output bytes in a digest.
pub const DIGEST_LEN: usize = 8;

/// Number of hex characters in a rendered digest.
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// Seed used by `stable_builder` when no other seed is given.
pub const STABLE_SEED: u64 = 0x5045_4152_534f_4e36;

/// Input hashed by the demonstration binary when none is supplied.
pub const DEMO_INPUT: [u8; 8] = [0x55, 0xAA, 0x02, 0x03, 0x07, 0x60, 0x90, 0x04];

/// Width of the range produced by `RngCore::next_u32`.
pub(crate) const SOURCE_RANGE: u64 = 1 << 32;
