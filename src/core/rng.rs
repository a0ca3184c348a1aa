//! Session random number generation.
//!
//! The only randomness the board needs is the unique part of export file
//! names. Seeding makes those names reproducible.
//!
//! ```
//! use solo_board::core::SessionRng;
//!
//! let mut a = SessionRng::new(42);
//! let mut b = SessionRng::new(42);
//!
//! assert_eq!(a.next_uuid(), b.next_uuid());
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::{Builder, Uuid};

/// Seedable RNG owned by a session.
#[derive(Clone, Debug)]
pub struct SessionRng {
    inner: ChaCha8Rng,
}

impl SessionRng {
    /// Create an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create from an optional seed, falling back to entropy.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    /// Draw a random (version 4) UUID.
    pub fn next_uuid(&mut self) -> Uuid {
        let mut bytes = [0u8; 16];
        self.inner.fill_bytes(&mut bytes);
        Builder::from_random_bytes(bytes).into_uuid()
    }
}
