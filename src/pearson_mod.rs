use crate::digest::{pearson_64bit_with_rng, pearson_64bit_with_table, Digest64};
use crate::error::PearsonError;
use crate::helper::{HexCase, TableMode};
use crate::table::PearsonTable;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;
use xxhash_rust::xxh3::xxh3_64;

/// A builder for configuring a `PearsonHasher`.
#[derive(Clone, Debug)]
pub struct PearsonBuilder {
    mode: TableMode,
    case: HexCase,
    seed: Option<u64>,
    table: Option<PearsonTable>,
}

impl PearsonBuilder {
    pub fn new(mode: TableMode, case: HexCase) -> Self {
        Self {
            mode,
            case,
            seed: None,
            table: None,
        }
    }

    /// Seeds the random source. Without a seed it is seeded from OS entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Seeds the random source from the xxh3 digest of `key`.
    pub fn key(self, key: &[u8]) -> Self {
        self.seed(xxh3_64(key))
    }

    /// Uses `table` for every digest. Implies `TableMode::Fixed`.
    pub fn table(mut self, table: PearsonTable) -> Self {
        self.mode = TableMode::Fixed;
        self.table = Some(table);
        self
    }

    pub fn build(self) -> Result<PearsonHasher, PearsonError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let source = match (self.mode, self.table) {
            (TableMode::Fixed, Some(table)) => TableSource::Fixed(table),
            (TableMode::Fixed, None) => TableSource::Fixed(PearsonTable::generate(&mut rng)?),
            (TableMode::PerCall, _) => TableSource::PerCall(rng),
        };

        debug!(
            mode = ?self.mode,
            case = ?self.case,
            seeded = self.seed.is_some(),
            "built pearson hasher"
        );

        Ok(PearsonHasher {
            mode: self.mode,
            case: self.case,
            source,
        })
    }
}

#[derive(Clone, Debug)]
enum TableSource {
    PerCall(StdRng),
    Fixed(PearsonTable),
}

/// Computes 64-bit Pearson digests under a configured table policy.
#[derive(Clone, Debug)]
pub struct PearsonHasher {
    mode: TableMode,
    case: HexCase,
    source: TableSource,
}

impl PearsonHasher {
    pub fn mode(&self) -> TableMode {
        self.mode
    }

    pub fn case(&self) -> HexCase {
        self.case
    }

    /// The reused table, if the hasher runs in `TableMode::Fixed`.
    pub fn table(&self) -> Option<&PearsonTable> {
        match &self.source {
            TableSource::Fixed(table) => Some(table),
            TableSource::PerCall(_) => None,
        }
    }

    pub fn hash(&mut self, input: &[u8]) -> Result<Digest64, PearsonError> {
        match &mut self.source {
            TableSource::PerCall(rng) => pearson_64bit_with_rng(rng, input),
            TableSource::Fixed(table) => pearson_64bit_with_table(table, input),
        }
    }

    /// Hashes `input` and renders it in the configured case.
    pub fn hash_hex(&mut self, input: &[u8]) -> Result<String, PearsonError> {
        let case = self.case;
        Ok(self.hash(input)?.to_hex_with(case))
    }
}
