//! Pool pickers for quiz selection.
//!
//! Both pickers choose uniformly. [`SeededPicker`] is reproducible across
//! runs with the same seed; [`UniformPicker`] draws from the thread RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use tracing::info;
use trivia_domain::PoolPicker;

/// Uniform choice from the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformPicker;

impl PoolPicker for UniformPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform choice from a seeded generator shared by all requests
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PoolPicker for SeededPicker {
    fn pick_index(&self, len: usize) -> usize {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            // A panic mid-draw leaves the generator usable
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        }
    }
}

/// Seeded picker when a seed is configured, thread RNG otherwise
pub fn picker_for_seed(seed: Option<u64>) -> Arc<dyn PoolPicker> {
    match seed {
        Some(seed) => {
            info!("Quiz selection seeded with {}", seed);
            Arc::new(SeededPicker::new(seed))
        }
        None => Arc::new(UniformPicker),
    }
}
