// src/mc/kernel.rs
//! Per-option pricing kernel and estimator.
//!
//! # Math Framework
//!
//! Terminal prices under the risk-neutral GBM measure follow the exact
//! solution of the SDE:
//! ```text
//! S_T = S_0 * exp((r - sigma^2/2)T + sigma*sqrt(T) * Z),  Z ~ N(0,1)
//! ```
//! The kernel evaluates the exponent in base 2 (drift, volatility and
//! rate pre-multiplied by log2(e), see `config`), so each sample costs a
//! single `exp2`. For each drawn variate the call payoff
//! `max(S_0 * ratio - K, 0)` is accumulated into two running sums, the
//! first and second moment; nothing else is retained per option.
//!
//! # Estimator
//!
//! With n samples and discount `exp(-rT)`:
//! ```text
//! price  = discount * v0 / n
//! stddev = sqrt((n*v1 - v0^2) / (n*(n-1)))
//! radius = discount * stddev * 1.96 / sqrt(n)
//! ```
//! `radius` is the half-width of the 95% confidence interval around the
//! discounted mean payoff.

use crate::config::{MU_LOG2E, R_LOG2E, V_LOG2E};
use crate::input::OptionRecord;

/// Monte Carlo estimate for one option, transient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Discounted expected call payoff
    pub call_price: f64,
    /// 95% confidence interval half-width of the price estimate
    pub confidence_radius: f64,
}

/// Payoff accumulator for a single option
///
/// Created per option, fed every sampling block drawn for that option,
/// then collapsed into a [`SimulationResult`].
#[derive(Debug, Clone)]
pub struct OptionPricer {
    mu_by_t: f64,
    v_by_sqrt_t: f64,
    discount: f64,
    stock: f64,
    strike: f64,
    v0: f64,
    v1: f64,
}

impl OptionPricer {
    pub fn new(record: &OptionRecord) -> Self {
        let t = record.years_to_expiry;
        Self {
            mu_by_t: MU_LOG2E * t,
            v_by_sqrt_t: V_LOG2E * t.sqrt(),
            discount: (R_LOG2E * t).exp2(),
            stock: record.stock_price,
            strike: record.strike_price,
            v0: 0.0,
            v1: 0.0,
        }
    }

    /// Accumulate one block of standard-normal variates
    pub fn consume_block(&mut self, block: &[f64]) {
        let mut v0 = self.v0;
        let mut v1 = self.v1;
        for &z in block {
            let exponent = self.mu_by_t + self.v_by_sqrt_t * z;
            let payoff = self.stock * exponent.exp2() - self.strike;

            // Equivalent to accumulating max(payoff, 0) and its square:
            // a skipped non-positive payoff contributes the same zero.
            if payoff > 0.0 {
                v0 += payoff;
                v1 += payoff * payoff;
            }
        }
        self.v0 = v0;
        self.v1 = v1;
    }

    /// Collapse the accumulated moments into a price and confidence radius
    ///
    /// `samples` is the total variate count for this option; it is at
    /// least 16 by startup validation, so `n - 1` never vanishes.
    pub fn estimate(&self, samples: usize) -> SimulationResult {
        let n = samples as f64;
        let call_price = self.discount * self.v0 / n;

        // Tiny negative numerators from floating point cancel to zero.
        let numerator = (n * self.v1 - self.v0 * self.v0).max(0.0);
        let std_dev = (numerator / (n * (n - 1.0))).sqrt();
        let confidence_radius = self.discount * std_dev * 1.96 / n.sqrt();

        SimulationResult {
            call_price,
            confidence_radius,
        }
    }
}
