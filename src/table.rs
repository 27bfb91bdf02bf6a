use crate::consts::TABLE_SIZE;
use crate::error::PearsonError;
use crate::sampler::uniform_below;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

/// Fisher-Yates shuffle of `items` in place.
///
/// Walks from the last index down to 1 and swaps each element with one drawn uniformly from
/// `[0, i]`. Slices of length 0 or 1 are left untouched and consume no randomness.
pub fn fy_shuffle<T, R: RngCore + ?Sized>(rng: &mut R, items: &mut [T]) {
    if items.len() > 1 {
        for ii in (1..items.len()).rev() {
            let jj = uniform_below(rng, ii + 1);
            items.swap(ii, jj);
        }
    }
}

/// Generates a random permutation of `0..n` as bytes.
///
/// The returned buffer is owned by the caller and released when dropped. Allocation failure is
/// reported as `PearsonError::TableAllocation`.
pub fn generate_table<R: RngCore + ?Sized>(
    rng: &mut R,
    n: usize,
) -> Result<Vec<u8>, PearsonError> {
    if n > TABLE_SIZE {
        return Err(PearsonError::InvalidTableSize(n));
    }

    let mut table = Vec::new();
    table
        .try_reserve_exact(n)
        .map_err(|_| PearsonError::TableAllocation)?;
    table.extend((0..n).map(|ii| ii as u8));

    fy_shuffle(rng, &mut table);
    debug!(entries = n, "generated permutation table");

    Ok(table)
}

/// A substitution table mapping every byte value to a distinct byte value.
#[derive(Clone, PartialEq, Eq)]
pub struct PearsonTable([u8; TABLE_SIZE]);

impl PearsonTable {
    /// The table mapping every byte to itself.
    pub fn identity() -> Self {
        let mut table = [0u8; TABLE_SIZE];
        for (ii, slot) in table.iter_mut().enumerate() {
            *slot = ii as u8;
        }
        Self(table)
    }

    /// Draws a fresh random table from `rng`.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, PearsonError> {
        let table = generate_table(rng, TABLE_SIZE)?;
        Self::from_bytes(&table)
    }

    /// Deterministic table for a given seed.
    pub fn from_seed(seed: u64) -> Result<Self, PearsonError> {
        Self::generate(&mut StdRng::seed_from_u64(seed))
    }

    /// Deterministic table derived from an arbitrary key, seeded with the key's xxh3 digest.
    pub fn from_key(key: &[u8]) -> Result<Self, PearsonError> {
        Self::from_seed(xxh3_64(key))
    }

    /// Wraps `bytes` after checking it is a permutation of all 256 byte values.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PearsonError> {
        if bytes.len() != TABLE_SIZE {
            return Err(PearsonError::InvalidTable);
        }

        let mut seen = [false; TABLE_SIZE];
        for &b in bytes {
            if std::mem::replace(&mut seen[b as usize], true) {
                return Err(PearsonError::InvalidTable);
            }
        }

        let mut table = [0u8; TABLE_SIZE];
        table.copy_from_slice(bytes);
        Ok(Self(table))
    }

    pub fn as_bytes(&self) -> &[u8; TABLE_SIZE] {
        &self.0
    }

    #[inline]
    pub fn lookup(&self, b: u8) -> u8 {
        self.0[b as usize]
    }
}

impl std::fmt::Debug for PearsonTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PearsonTable").field(&&self.0[..]).finish()
    }
}
