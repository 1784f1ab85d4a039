// src/output.rs
//! Console report rendering.
//!
//! Everything writes through `io::Write` so the binary can hand in a
//! locked stdout and the tests can render into a buffer.

use crate::analytics::validator::AccuracyStats;
use crate::config::RunConfig;
use crate::mc::engine::EngineReport;
use crate::mc::ranker::RankEntry;
use std::io::{self, Write};

/// Run-parameter banner
pub fn write_banner<W: Write>(w: &mut W, cfg: &RunConfig) -> io::Result<()> {
    writeln!(w, "Monte Carlo European Option Pricing Double Precision")?;
    writeln!(w)?;
    writeln!(
        w,
        "Run Date         = {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(w, "Path Length      = {}", cfg.path_length)?;
    writeln!(w, "Number of Options= {}", cfg.options)?;
    writeln!(w, "Block Size       = {}", cfg.block_length)?;
    writeln!(
        w,
        "Worker Threads   = {} (host has {} cores)",
        cfg.lanes,
        num_cpus::get()
    )?;
    writeln!(w, "Opt per thread   = {}", cfg.options_per_lane())?;
    writeln!(w)
}

/// Ranked result table, descending by confidence radius
pub fn write_top_results<W: Write>(w: &mut W, top: &[RankEntry]) -> io::Result<()> {
    writeln!(w, "------ Top {} results ------", top.len())?;
    writeln!(w)?;
    for entry in top {
        writeln!(
            w,
            " StockPrice = {:.6}    OptionStrikePrice = {:.6}    OptionYears = {:.6}    CallResult = {:.6}    CallConfidence = {:.6}",
            entry.record.stock_price,
            entry.record.strike_price,
            entry.record.years_to_expiry,
            entry.result.call_price,
            entry.result.confidence_radius
        )?;
    }
    writeln!(w)?;
    writeln!(w, "----- End of {} results -----", top.len())?;
    writeln!(w)
}

/// Verbose accuracy block with the pass/fail verdict
pub fn write_accuracy<W: Write>(
    w: &mut W,
    stats: &AccuracyStats,
    total_options: usize,
) -> io::Result<()> {
    writeln!(w, "L1_Norm          = {:E}", stats.l1_norm())?;
    writeln!(
        w,
        "Average RESERVE  = {:.6}",
        stats.average_reserve(total_options)
    )?;
    writeln!(w, "Max Error        = {:E}", stats.max_abs_delta)?;
    if stats.passed(total_options) {
        writeln!(w, "Test passed")
    } else {
        writeln!(w, "Test failed!")
    }
}

/// Elapsed wall time and throughput footer
pub fn write_timing<W: Write>(w: &mut W, elapsed_secs: f64, options: usize) -> io::Result<()> {
    writeln!(w, "==========================================")?;
    writeln!(w, "Time Elapsed = {:.6}", elapsed_secs)?;
    writeln!(w, "Opt/sec      = {:.6}", options as f64 / elapsed_secs)?;
    writeln!(w, "==========================================")
}

/// Full report: banner, top-K table, optional accuracy block, timing
pub fn write_report<W: Write>(
    w: &mut W,
    cfg: &RunConfig,
    report: &EngineReport,
) -> io::Result<()> {
    write_banner(w, cfg)?;
    write_top_results(w, &report.top)?;
    if let Some(stats) = &report.accuracy {
        write_accuracy(w, stats, cfg.options)?;
    }
    write_timing(w, report.elapsed_secs, cfg.options)
}
