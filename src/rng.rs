// src/rng.rs
//! Random Number Generation for the pricing lanes
//!
//! # Design Philosophy
//!
//! The simulation needs Gaussian variates with specific properties:
//! 1. **Reproducibility**: Same seed -> same results (the benchmark's
//!    reproducibility contract)
//! 2. **Parallel safety**: Each lane owns its own stream, seeded
//!    `base_seed + lane`, independent by construction
//! 3. **Continuity**: A lane's stream is never reset between options, so
//!    the draws for option k depend on the exhaustion state left by
//!    option k-1
//! 4. **Bounded memory**: Variates are produced in fixed-size blocks
//!    into a caller-owned scratch buffer
//!
//! Given an identical configuration, the full sequence of draws for a
//! lane is deterministic and repeatable regardless of how the lanes are
//! scheduled.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// A lane's private standard-normal stream
///
/// Exclusively owned by one lane; no two lanes may share a stream.
#[derive(Debug, Clone)]
pub struct LaneStream {
    rng: StdRng,
}

impl LaneStream {
    pub fn new(base_seed: u32, lane: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(base_seed as u64 + lane as u64),
        }
    }

    /// Draw one standard-normal variate, advancing the stream
    pub fn next_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.rng)
    }

    /// Fill `block` with standard-normal variates, advancing the stream
    pub fn fill_block(&mut self, block: &mut [f64]) {
        for z in block.iter_mut() {
            *z = StandardNormal.sample(&mut self.rng);
        }
    }
}

/// Factory handing out one independent stream per lane
pub struct StreamFactory {
    base_seed: u32,
}

impl StreamFactory {
    pub fn new(base_seed: u32) -> Self {
        Self { base_seed }
    }

    pub fn for_lane(&self, lane: usize) -> LaneStream {
        LaneStream::new(self.base_seed, lane)
    }
}
