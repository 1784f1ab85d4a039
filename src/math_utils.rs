// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::SQRT_2;

/// High-accuracy standard normal CDF via the error function.
///
/// Reference implementation that the polynomial approximation in
/// `analytics::bs_analytic` is pinned against.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf::erf(x / SQRT_2))
}

/// Wall-clock timer for the simulation phase
pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf_known_values() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
        assert!((norm_cdf(1.96) - 0.975).abs() < 1e-3);
        assert!(norm_cdf(-8.0) < 1e-14);
        assert!(norm_cdf(8.0) > 1.0 - 1e-14);
    }

    #[test]
    fn test_timer_is_monotone() {
        let timer = Timer::new();
        let first = timer.elapsed_secs();
        let second = timer.elapsed_secs();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
