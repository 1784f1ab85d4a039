// src/config.rs
//! Run configuration and fixed model constants.
//!
//! The pricing model itself is not configurable: risk-free rate and
//! volatility are benchmark constants, so every run prices the same
//! model and differs only in workload shape (lanes, options, path and
//! block lengths). The configuration is constructed once, validated at
//! startup and never mutated afterwards; lanes receive it by shared
//! reference.

use crate::error::{validation::*, BenchError, BenchResult};
use std::f64::consts::LOG2_E;

/// Annualized risk-free rate of the pricing model
pub const RISK_FREE_RATE: f64 = 0.06;

/// Annualized volatility of the pricing model
pub const VOLATILITY: f64 = 0.10;

/// Default base seed; lane `i` draws from a stream seeded `BASE_SEED + i`
pub const BASE_SEED: u32 = 777;

/// Hard upper bound on the worker lane count
pub const MAX_LANES: usize = 288;

/// Default capacity of the ranked result list
pub const DEFAULT_TOP_K: usize = 20;

// Log-domain model scalars. The kernel evaluates the GBM terminal ratio
// and the discount factor with exp2, so drift, volatility and rate are
// pre-multiplied by log2(e) once here.
pub const R_LOG2E: f64 = -RISK_FREE_RATE * LOG2_E;
pub const MU_LOG2E: f64 = LOG2_E * (RISK_FREE_RATE - 0.5 * VOLATILITY * VOLATILITY);
pub const V_LOG2E: f64 = LOG2_E * VOLATILITY;

/// Immutable run configuration, constructed after CLI validation
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Number of concurrent worker lanes (1..=MAX_LANES)
    pub lanes: usize,
    /// Total number of options requested; `options mod lanes` trailing
    /// options are never assigned (see `partition`)
    pub options: usize,
    /// Gaussian variates drawn per option (>= 16)
    pub path_length: usize,
    /// Variates per sampling block (>= 16, multiple of 16, divides
    /// `path_length` evenly)
    pub block_length: usize,
    /// Run the closed-form accuracy pass and report error statistics
    pub verbose: bool,
    /// Base seed for the per-lane Gaussian streams
    pub seed: u32,
    /// Capacity of the ranked result list
    pub top_k: usize,
}

impl RunConfig {
    /// Validate the full configuration
    ///
    /// Every violation is fatal at startup; nothing past this point is
    /// allowed to fail on configuration grounds.
    pub fn validate(&self) -> BenchResult<()> {
        validate_lanes(self.lanes)?;
        validate_options_per_lane(self.options, self.lanes)?;
        validate_path_length(self.path_length)?;
        validate_block_length(self.block_length, self.path_length)?;
        validate_top_k(self.top_k)?;
        Ok(())
    }

    /// Options assigned to each lane: `floor(options / lanes)`
    pub fn options_per_lane(&self) -> usize {
        self.options / self.lanes
    }

    /// Sampling blocks consumed per option
    pub fn blocks_per_option(&self) -> usize {
        self.path_length / self.block_length
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            lanes: 1,
            options: 1,
            path_length: 4096,
            block_length: 64,
            verbose: false,
            seed: BASE_SEED,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Parse an integer with an optional binary/decimal scale suffix
///
/// Trailing `k`/`m`/`g` scale by 1024/1024^2/1024^3; `K`/`M`/`G` scale by
/// 1000/10^6/10^9. Anything else must parse as a plain integer.
///
/// ```
/// use mc_options_bench::config::parse_scaled;
/// assert_eq!(parse_scaled("noptions", "64k").unwrap(), 65536);
/// assert_eq!(parse_scaled("noptions", "1M").unwrap(), 1_000_000);
/// ```
pub fn parse_scaled(argument: &str, text: &str) -> BenchResult<i64> {
    let invalid = |constraint: &str| BenchError::InvalidArgument {
        argument: argument.to_string(),
        value: text.to_string(),
        constraint: constraint.to_string(),
    };

    if text.is_empty() {
        return Err(invalid("empty argument"));
    }

    let (prefix, multiplier) = match text.as_bytes()[text.len() - 1] {
        b'k' => (&text[..text.len() - 1], 1024i64),
        b'K' => (&text[..text.len() - 1], 1000),
        b'm' => (&text[..text.len() - 1], 1024 * 1024),
        b'M' => (&text[..text.len() - 1], 1_000_000),
        b'g' => (&text[..text.len() - 1], 1024 * 1024 * 1024),
        b'G' => (&text[..text.len() - 1], 1_000_000_000),
        _ => (text, 1),
    };

    let base: i64 = prefix
        .parse()
        .map_err(|_| invalid("not a valid integer"))?;

    base.checked_mul(multiplier)
        .ok_or_else(|| invalid("overflows a 64-bit integer"))
}

/// Parse a scaled integer that must be non-negative and fit in `usize`
pub fn parse_scaled_usize(argument: &str, text: &str) -> BenchResult<usize> {
    let value = parse_scaled(argument, text)?;
    usize::try_from(value).map_err(|_| BenchError::InvalidArgument {
        argument: argument.to_string(),
        value: text.to_string(),
        constraint: "must be non-negative".to_string(),
    })
}
