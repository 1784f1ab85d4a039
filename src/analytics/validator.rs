// src/analytics/validator.rs
//! Verbose-mode accuracy pass: aggregate error of the Monte Carlo batch
//! against the closed-form reference.
//!
//! Accumulators are built per lane and combined with an associative
//! (sum, sum, max, sum) reduction after the join barrier; they are never
//! read concurrently with lane writes.

use crate::analytics::bs_analytic::bs_call_price;
use crate::config::{RISK_FREE_RATE, VOLATILITY};
use crate::input::OptionRecord;
use crate::mc::kernel::SimulationResult;

/// Deltas below this threshold are excluded from the reserve ratio to
/// keep the division well-conditioned.
const RESERVE_DELTA_FLOOR: f64 = 1e-6;

/// Aggregate error accumulators across a set of priced options
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccuracyStats {
    pub sum_abs_delta: f64,
    pub sum_abs_reference: f64,
    pub max_abs_delta: f64,
    pub sum_reserve: f64,
}

impl AccuracyStats {
    /// Fold one priced option into the accumulators
    pub fn record(&mut self, option: &OptionRecord, result: &SimulationResult) {
        let reference = bs_call_price(
            option.stock_price,
            option.strike_price,
            RISK_FREE_RATE,
            VOLATILITY,
            option.years_to_expiry,
        );
        let delta = (reference - result.call_price).abs();

        self.sum_abs_delta += delta;
        self.sum_abs_reference += reference.abs();
        if delta > RESERVE_DELTA_FLOOR {
            self.sum_reserve += result.confidence_radius / delta;
        }
        self.max_abs_delta = self.max_abs_delta.max(delta);
    }

    /// Associative, commutative combination of two accumulator sets
    pub fn combine(self, other: AccuracyStats) -> AccuracyStats {
        AccuracyStats {
            sum_abs_delta: self.sum_abs_delta + other.sum_abs_delta,
            sum_abs_reference: self.sum_abs_reference + other.sum_abs_reference,
            max_abs_delta: self.max_abs_delta.max(other.max_abs_delta),
            sum_reserve: self.sum_reserve + other.sum_reserve,
        }
    }

    /// Relative L1 error norm over the whole batch
    pub fn l1_norm(&self) -> f64 {
        self.sum_abs_delta / self.sum_abs_reference
    }

    /// Mean reserve (confidence radius over pricing error) per requested
    /// option; the run passes when this exceeds 1.0
    pub fn average_reserve(&self, total_options: usize) -> f64 {
        self.sum_reserve / total_options as f64
    }

    pub fn passed(&self, total_options: usize) -> bool {
        self.average_reserve(total_options) > 1.0
    }
}
