// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes reference price for European calls
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + sigma S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives the closed form:
//! ```text
//! C(S,K,r,sigma,T) = S*Phi(d1) - K*e^(-rT)*Phi(d2)
//! d1 = [ln(S/K) + (r + sigma^2/2)T] / (sigma*sqrt(T))
//! d2 = d1 - sigma*sqrt(T)
//! ```
//!
//! This price exists solely as a verification oracle for the Monte Carlo
//! estimates: it never feeds back into the simulation.

/// Zelen-Severo polynomial approximation of the standard normal CDF
///
/// Five-term expansion, accurate to about 1e-7 over the whole line (see
/// the test pinning it against the erf-based `math_utils::norm_cdf`).
pub fn cnd(d: f64) -> f64 {
    const A1: f64 = 0.31938153;
    const A2: f64 = -0.356563782;
    const A3: f64 = 1.781477937;
    const A4: f64 = -1.821255978;
    const A5: f64 = 1.330274429;
    const RSQRT2PI: f64 = 0.39894228040143267793994605993438;

    let k = 1.0 / (1.0 + 0.2316419 * d.abs());

    let cnd = RSQRT2PI
        * (-0.5 * d * d).exp()
        * (k * (A1 + k * (A2 + k * (A3 + k * (A4 + k * A5)))));

    if d > 0.0 {
        1.0 - cnd
    } else {
        cnd
    }
}

/// Black-Scholes European call option price
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    let sqrt_t = t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;
    s * cnd(d1) - k * (-r * t).exp() * cnd(d2)
}
