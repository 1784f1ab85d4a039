// src/mc/mod.rs
//! Monte Carlo pricing: per-option kernel, confidence ranking and the
//! fork-join lane engine.

pub mod engine;
pub mod kernel;
pub mod ranker;
