use crate::consts::SOURCE_RANGE;
use rand::RngCore;

/// Returns an integer uniformly distributed over `[0, n - 1]`.
///
/// Draws from `rng` are rejected while they fall in the tail of the source range that would
/// make `draw % n` favour small values. The loop has no iteration cap; each draw is accepted
/// with probability above one half, and for `n == 1` nothing is ever rejected.
///
/// # Panics
/// If `n` is zero or larger than `2^32`.
pub fn uniform_below<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> usize {
    assert!(n > 0, "sampler bound must be positive");
    let n = n as u64;
    assert!(n <= SOURCE_RANGE, "sampler bound exceeds the random source range");

    let limit = SOURCE_RANGE - SOURCE_RANGE % n;
    loop {
        let draw = u64::from(rng.next_u32());
        if draw < limit {
            return (draw % n) as usize;
        }
    }
}
