//! Coin flips for rotation transitions.

use std::hash::{BuildHasher, RandomState};

/// xorshift64* generator used to pick a rotation direction.
#[derive(Clone, Debug)]
pub(crate) struct SignSource {
    state: u64,
}

impl SignSource {
    pub fn seeded(seed: u64) -> Self {
        // xorshift has a fixed point at zero.
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    pub fn from_entropy() -> Self {
        Self::seeded(RandomState::new().hash_one(0x5eed_u64))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    /// `1.0` or `-1.0` with equal probability.
    pub fn sign(&mut self) -> f32 {
        if self.next_u64() >> 63 == 0 { 1.0 } else { -1.0 }
    }
}
