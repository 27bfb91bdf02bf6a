//! 64-bit Pearson hashing.
//!
//! A digest is eight independent passes of the single-byte Pearson hash over the input, each
//! starting at a different offset into a 256-entry permutation table. Tables are produced by a
//! Fisher-Yates shuffle driven by an unbiased sampler over a caller-supplied random source.
//!
//! ```
//! use pearson64::{pearson_64bit_with_table, PearsonTable};
//!
//! let digest = pearson_64bit_with_table(&PearsonTable::identity(), &[0x01, 0x02]).unwrap();
//! assert_eq!(digest.to_hex(), "030001060704050A");
//! ```

mod consts;
pub use crate::consts::{DEMO_INPUT, DIGEST_LEN, HEX_LEN, TABLE_SIZE};

mod helper;
pub use crate::helper::{parse_hex, HexCase, TableMode};

mod error;
pub use error::PearsonError;

mod sampler;
pub use crate::sampler::uniform_below;

mod table;
pub use crate::table::{fy_shuffle, generate_table, PearsonTable};

mod digest;
pub use crate::digest::{
    pearson_64bit, pearson_64bit_into, pearson_64bit_with_rng, pearson_64bit_with_table, Digest64,
};

mod pearson_mod;
pub use crate::pearson_mod::{PearsonBuilder, PearsonHasher};

pub mod pearson_builders;

#[cfg(feature = "python")]
mod python {
    use pyo3::exceptions::{PyMemoryError, PyValueError};
    use pyo3::prelude::*;

    use crate::PearsonError;

    impl From<PearsonError> for PyErr {
        fn from(err: PearsonError) -> PyErr {
            match err {
                PearsonError::TableAllocation => PyMemoryError::new_err(err.to_string()),
                _ => PyValueError::new_err(err.to_string()),
            }
        }
    }

    /// 64-bit Pearson digest of `data` under a fresh random table, as uppercase hex.
    #[pyfunction]
    fn pearson_64bit(data: &[u8]) -> PyResult<String> {
        Ok(crate::pearson_64bit(data)?.to_hex())
    }

    /// 64-bit Pearson digest of `data` under the table generated from `seed`.
    #[pyfunction]
    fn pearson_64bit_seeded(data: &[u8], seed: u64) -> PyResult<String> {
        let table = crate::PearsonTable::from_seed(seed)?;
        Ok(crate::pearson_64bit_with_table(&table, data)?.to_hex())
    }

    /// Random permutation of `0..n`.
    #[pyfunction]
    fn pearson_table(n: usize) -> PyResult<Vec<u8>> {
        Ok(crate::generate_table(&mut rand::thread_rng(), n)?)
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    fn pearson64(_py: Python, m: &PyModule) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(pearson_64bit, m)?)?;
        m.add_function(wrap_pyfunction!(pearson_64bit_seeded, m)?)?;
        m.add_function(wrap_pyfunction!(pearson_table, m)?)?;
        Ok(())
    }
}
