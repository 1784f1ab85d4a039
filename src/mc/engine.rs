// src/mc/engine.rs
//! Fork-join lane engine.
//!
//! A fixed pool of worker lanes runs for the duration of the simulation
//! phase: no cooperative suspension, no cancellation. Lane contexts
//! (stream, scratch block) are built before the timed phase and are
//! exclusively owned by their lane, so the hot loop takes no locks; the
//! only cross-lane data are the merged top-K list and the accuracy
//! accumulators, both combined single-threaded or by associative
//! reduction after the join barrier. The elapsed time covers only the
//! parallel pricing phase, never input loading or the accuracy pass.

use crate::analytics::validator::AccuracyStats;
use crate::config::RunConfig;
use crate::error::{BenchError, BenchResult};
use crate::input::OptionRecord;
use crate::math_utils::Timer;
use crate::mc::kernel::{OptionPricer, SimulationResult};
use crate::mc::ranker::{RankEntry, TopK};
use crate::partition::partition;
use crate::rng::{LaneStream, StreamFactory};
use rayon::prelude::*;
use std::ops::Range;

/// Per-lane private state, created at lane start and consumed by the run
struct LaneContext {
    range: Range<usize>,
    stream: LaneStream,
    block: Vec<f64>,
}

/// Everything a lane hands back at the join barrier
struct LaneOutcome {
    range: Range<usize>,
    top: TopK,
    results: Vec<SimulationResult>,
}

/// Result of a full engine run
#[derive(Debug)]
pub struct EngineReport {
    /// Merged top-K entries, descending by confidence radius
    pub top: Vec<RankEntry>,
    /// Aggregate error statistics (verbose mode only)
    pub accuracy: Option<AccuracyStats>,
    /// Wall time of the parallel pricing phase, seconds
    pub elapsed_secs: f64,
    /// Options actually priced (`floor(options / lanes) * lanes`)
    pub options_priced: usize,
}

/// Price the option batch under the given configuration
///
/// Validates the configuration and the input batch size, then runs the
/// fork-join simulation. Past validation the simulation cannot fail.
pub fn run(cfg: &RunConfig, records: &[OptionRecord]) -> BenchResult<EngineReport> {
    cfg.validate()?;

    let assigned = cfg.options_per_lane() * cfg.lanes;
    if records.len() < assigned {
        return Err(BenchError::InvalidConfiguration {
            field: "options".to_string(),
            reason: format!(
                "input supplies {} records but {} are assigned to lanes",
                records.len(),
                assigned
            ),
        });
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cfg.lanes)
        .build()
        .map_err(|e| BenchError::SimulationError {
            lanes: cfg.lanes,
            reason: e.to_string(),
        })?;

    // Lane initialization happens before the clock starts.
    let factory = StreamFactory::new(cfg.seed);
    let contexts: Vec<LaneContext> = partition(cfg.options, cfg.lanes)
        .into_iter()
        .enumerate()
        .map(|(lane, range)| LaneContext {
            range,
            stream: factory.for_lane(lane),
            block: vec![0.0; cfg.block_length],
        })
        .collect();

    let timer = Timer::new();
    let outcomes: Vec<LaneOutcome> = pool.install(|| {
        contexts
            .into_par_iter()
            .map(|ctx| run_lane(ctx, cfg, records))
            .collect()
    });
    let elapsed_secs = timer.elapsed_secs();

    // Single-threaded merge of the lane-local lists, in lane order so
    // that equal radii keep their insertion order.
    let mut top = TopK::new(cfg.top_k);
    for outcome in &outcomes {
        top.merge(&outcome.top);
    }

    let accuracy = if cfg.verbose {
        Some(pool.install(|| {
            outcomes
                .par_iter()
                .map(|outcome| lane_accuracy(outcome, records))
                .reduce(AccuracyStats::default, AccuracyStats::combine)
        }))
    } else {
        None
    };

    Ok(EngineReport {
        top: top.into_entries(),
        accuracy,
        elapsed_secs,
        options_priced: assigned,
    })
}

/// Price one lane's contiguous range of options
///
/// The lane's stream advances continuously across its options; it is
/// never reset between them.
fn run_lane(mut ctx: LaneContext, cfg: &RunConfig, records: &[OptionRecord]) -> LaneOutcome {
    let blocks_per_option = cfg.blocks_per_option();
    let mut top = TopK::new(cfg.top_k);
    let mut results = Vec::with_capacity(ctx.range.len());

    for index in ctx.range.clone() {
        let record = &records[index];
        let mut pricer = OptionPricer::new(record);

        for _ in 0..blocks_per_option {
            ctx.stream.fill_block(&mut ctx.block);
            pricer.consume_block(&ctx.block);
        }

        let result = pricer.estimate(cfg.path_length);
        top.offer(RankEntry {
            record: *record,
            result,
        });
        results.push(result);
    }

    LaneOutcome {
        range: ctx.range,
        top,
        results,
    }
}

fn lane_accuracy(outcome: &LaneOutcome, records: &[OptionRecord]) -> AccuracyStats {
    let mut stats = AccuracyStats::default();
    for (index, result) in outcome.range.clone().zip(&outcome.results) {
        stats.record(&records[index], result);
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<OptionRecord> {
        (0..n)
            .map(|i| OptionRecord {
                years_to_expiry: 1.0 + (i % 5) as f64,
                stock_price: 5.0 + i as f64,
                strike_price: 10.0 + (i % 7) as f64,
            })
            .collect()
    }

    #[test]
    fn test_rejects_short_input() {
        let cfg = RunConfig {
            lanes: 2,
            options: 8,
            path_length: 64,
            block_length: 16,
            ..Default::default()
        };
        let err = run(&cfg, &records(6)).unwrap_err();
        assert!(format!("{}", err).contains("records"));
    }

    #[test]
    fn test_truncates_remainder_options() {
        let cfg = RunConfig {
            lanes: 4,
            options: 10,
            path_length: 64,
            block_length: 16,
            ..Default::default()
        };
        let report = run(&cfg, &records(10)).unwrap();
        assert_eq!(report.options_priced, 8);
    }

    #[test]
    fn test_verbose_toggles_accuracy() {
        let base = RunConfig {
            lanes: 1,
            options: 4,
            path_length: 64,
            block_length: 16,
            ..Default::default()
        };
        let quiet = run(&base, &records(4)).unwrap();
        assert!(quiet.accuracy.is_none());

        let verbose = RunConfig {
            verbose: true,
            ..base
        };
        let report = run(&verbose, &records(4)).unwrap();
        let stats = report.accuracy.unwrap();
        assert!(stats.sum_abs_reference > 0.0);
        assert!(stats.l1_norm() >= 0.0);
    }

    #[test]
    fn test_top_list_is_bounded_and_sorted() {
        let cfg = RunConfig {
            lanes: 2,
            options: 30,
            path_length: 64,
            block_length: 16,
            top_k: 5,
            ..Default::default()
        };
        let report = run(&cfg, &records(30)).unwrap();
        assert_eq!(report.top.len(), 5);
        for pair in report.top.windows(2) {
            assert!(
                pair[0].result.confidence_radius >= pair[1].result.confidence_radius,
                "top list not descending"
            );
        }
    }

    #[test]
    fn test_fewer_options_than_capacity() {
        let cfg = RunConfig {
            lanes: 1,
            options: 3,
            path_length: 64,
            block_length: 16,
            ..Default::default()
        };
        let report = run(&cfg, &records(3)).unwrap();
        assert_eq!(report.top.len(), 3);
    }
}
