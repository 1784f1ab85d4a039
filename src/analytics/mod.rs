// src/analytics/mod.rs
//! Closed-form reference pricing and the verbose accuracy pass.

pub mod bs_analytic;
pub mod validator;
