use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// A source of randomness that is passed explicitly to everything that needs it,
/// so a game or a whole training run can be replayed from a seed.
pub trait RandomGenerator: Default {
    fn next(&mut self) -> i32;
    fn next_range(&mut self, from: i32, to: i32) -> i32;

    /// Returns a value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Picks one element uniformly, or `None` for an empty slice.
    fn choose<'a, K>(&mut self, items: &'a [K]) -> Option<&'a K> {
        if items.is_empty() {
            return None;
        }
        items.get(self.next_range(0, items.len() as i32) as usize)
    }
}

/// `StdRng`-backed generator. Seeded from the OS unless a seed is given.
pub struct SeededRandomGenerator {
    rng: StdRng,
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }
}

impl SeededRandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uses `seed` when present, OS entropy otherwise.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map(Self::new).unwrap_or_default()
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next(&mut self) -> i32 {
        self.rng.random()
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        self.rng.random_range(from..to)
    }

    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Linear congruential generator; identical sequences on every platform.
pub struct CustomNumberGenerator {
    seed: i64,
}

impl Default for CustomNumberGenerator {
    fn default() -> Self {
        CustomNumberGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for CustomNumberGenerator {
    fn next(&mut self) -> i32 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed as i32
    }

    fn next_range(&mut self, from: i32, to: i32) -> i32 {
        (self.next() % (to - from)).abs() + from
    }

    fn next_f64(&mut self) -> f64 {
        (self.next() as f64).abs() / i32::MAX as f64
    }
}

impl CustomNumberGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }
}
