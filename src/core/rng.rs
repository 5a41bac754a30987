// Copyright @yucwang 2026

use crate::math::constants::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

pub type SensorRng = StdRng;

pub fn seeded(seed: u64) -> SensorRng {
    StdRng::seed_from_u64(seed)
}

/// Independent stream for one block of rays. Depends only on the capture
/// seed and the block index, never on which worker runs the block.
pub fn block_rng(seed: u64, block_index: usize) -> SensorRng {
    // splitmix64 finalizer spreads neighbouring indices apart.
    let mut z = seed ^ (block_index as u64).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    StdRng::seed_from_u64(z ^ (z >> 31))
}

/// One draw from `N(0, std_dev)`. A zero deviation returns exactly zero and
/// consumes no randomness.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, std_dev: Float) -> Float {
    if std_dev == 0.0 {
        return 0.0;
    }
    match Normal::new(0.0, std_dev) {
        Ok(normal) => normal.sample(rng),
        Err(_) => 0.0,
    }
}
