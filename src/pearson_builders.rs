use crate::consts::STABLE_SEED;
use crate::PearsonBuilder;
use crate::{HexCase, TableMode};

/// A fresh table per digest, as `pearson_64bit` does.
pub fn default_builder() -> PearsonBuilder {
    PearsonBuilder::new(TableMode::PerCall, HexCase::Upper)
}

/// One table shared by every hasher built from it, so digests are stable across runs.
pub fn stable_builder() -> PearsonBuilder {
    PearsonBuilder::new(TableMode::Fixed, HexCase::Upper).seed(STABLE_SEED)
}

pub fn keyed_builder(key: &[u8]) -> PearsonBuilder {
    PearsonBuilder::new(TableMode::Fixed, HexCase::Upper).key(key)
}
