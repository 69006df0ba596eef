//! Injectable random sources.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed integers, shared across requests.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `[0, bound)`. `bound` is never zero.
    fn next_below(&self, bound: u32) -> u32;
}

/// Draws from the calling thread's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// A reproducible generator behind a mutex.
///
/// Meant for tests and local experiments; the service itself always runs
/// on [`ThreadRandom`].
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&self, bound: u32) -> u32 {
        let mut rng = self.rng.lock().expect("seeded rng mutex poisoned");
        rng.gen_range(0..bound)
    }
}

/// Replays a fixed sequence, cycling when it runs out.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<u32>,
    next: AtomicUsize,
}

impl SequenceRandom {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self {
            values,
            next: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_below(&self, bound: u32) -> u32 {
        let i = self.next.fetch_add(1, Ordering::Relaxed) % self.values.len();
        self.values[i] % bound
    }
}
