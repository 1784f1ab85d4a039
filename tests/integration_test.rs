// tests/integration_test.rs
use mc_options_bench::analytics::bs_analytic;
use mc_options_bench::config::{RunConfig, RISK_FREE_RATE, VOLATILITY};
use mc_options_bench::input::{self, OptionRecord};
use mc_options_bench::mc::engine;

fn option(t: f64, s: f64, k: f64) -> OptionRecord {
    OptionRecord {
        years_to_expiry: t,
        stock_price: s,
        strike_price: k,
    }
}

#[test]
fn test_mc_vs_analytic_end_to_end() {
    let cfg = RunConfig {
        lanes: 1,
        options: 1,
        path_length: 16384,
        block_length: 64,
        ..Default::default()
    };
    let records = vec![option(1.0, 10.0, 10.0)];

    let report = engine::run(&cfg, &records).expect("valid configuration");
    assert_eq!(report.top.len(), 1);

    let estimate = report.top[0].result;
    let analytic = bs_analytic::bs_call_price(10.0, 10.0, RISK_FREE_RATE, VOLATILITY, 1.0);
    let abs_error = (estimate.call_price - analytic).abs();

    println!("MC Price: {}", estimate.call_price);
    println!("Analytic Price: {}", analytic);
    println!("Absolute Error: {}", abs_error);
    println!("Confidence Radius: {}", estimate.confidence_radius);

    assert!(
        abs_error < 0.05,
        "MC price {} deviates from analytic {} by {}",
        estimate.call_price,
        analytic,
        abs_error
    );
    assert!(estimate.confidence_radius > 0.0);
}

#[test]
fn test_runs_are_bit_identical() {
    let cfg = RunConfig {
        lanes: 3,
        options: 9,
        path_length: 1024,
        block_length: 64,
        ..Default::default()
    };
    let records: Vec<OptionRecord> = (0..9)
        .map(|i| option(1.0 + i as f64 * 0.5, 10.0 + i as f64, 12.0))
        .collect();

    let first = engine::run(&cfg, &records).unwrap();
    let second = engine::run(&cfg, &records).unwrap();

    assert_eq!(first.top.len(), second.top.len());
    for (a, b) in first.top.iter().zip(&second.top) {
        assert_eq!(a.result.call_price, b.result.call_price);
        assert_eq!(a.result.confidence_radius, b.result.confidence_radius);
    }
}

#[test]
fn test_lane_split_matches_manual_sub_runs() {
    // A 2-lane run over 4 options must price exactly what two 1-lane
    // runs price: lane 1's stream is seeded base + 1.
    let records: Vec<OptionRecord> = (0..4)
        .map(|i| option(2.0, 15.0 + i as f64, 14.0))
        .collect();

    let full_cfg = RunConfig {
        lanes: 2,
        options: 4,
        path_length: 256,
        block_length: 16,
        ..Default::default()
    };
    let full = engine::run(&full_cfg, &records).unwrap();

    let lane0_cfg = RunConfig {
        lanes: 1,
        options: 2,
        path_length: 256,
        block_length: 16,
        ..Default::default()
    };
    let lane1_cfg = RunConfig {
        seed: lane0_cfg.seed + 1,
        ..lane0_cfg.clone()
    };
    let lane0 = engine::run(&lane0_cfg, &records[..2]).unwrap();
    let lane1 = engine::run(&lane1_cfg, &records[2..]).unwrap();

    let mut expected: Vec<f64> = lane0
        .top
        .iter()
        .chain(&lane1.top)
        .map(|e| e.result.call_price)
        .collect();
    let mut actual: Vec<f64> = full.top.iter().map(|e| e.result.call_price).collect();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    actual.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(actual, expected);
}

#[test]
fn test_full_pipeline_from_json() {
    let records: Vec<OptionRecord> = (0..16)
        .map(|i| option(1.0 + (i % 5) as f64, 5.0 + 3.0 * i as f64, 10.0 + (i % 7) as f64))
        .collect();
    let text = input::records_to_json(&records);
    let loaded = input::parse_records(&text).unwrap();
    assert_eq!(loaded, records);

    let cfg = RunConfig {
        lanes: 4,
        options: 16,
        path_length: 4096,
        block_length: 64,
        verbose: true,
        ..Default::default()
    };
    let report = engine::run(&cfg, &loaded).unwrap();

    assert_eq!(report.options_priced, 16);
    assert!(report.top.len() <= cfg.top_k);
    assert!(report.elapsed_secs >= 0.0);

    let stats = report.accuracy.expect("verbose run reports accuracy");
    println!("L1 Norm: {}", stats.l1_norm());
    println!("Average Reserve: {}", stats.average_reserve(cfg.options));
    println!("Max Error: {}", stats.max_abs_delta);

    assert!(stats.l1_norm() >= 0.0);
    assert!(stats.l1_norm() < 0.1, "L1 norm too large: {}", stats.l1_norm());
    assert!(stats.max_abs_delta >= 0.0);
    assert!(stats.average_reserve(cfg.options) > 0.0);
}

#[test]
fn test_requested_count_caps_input_usage() {
    // 10 records on file, 8 requested over 2 lanes: the engine must not
    // touch the trailing records.
    let records: Vec<OptionRecord> = (0..10)
        .map(|i| option(1.0, 20.0 + i as f64, 18.0))
        .collect();
    let cfg = RunConfig {
        lanes: 2,
        options: 8,
        path_length: 64,
        block_length: 16,
        ..Default::default()
    };
    let report = engine::run(&cfg, &records).unwrap();
    assert_eq!(report.options_priced, 8);
    for entry in &report.top {
        assert!(entry.record.stock_price < 28.0);
    }
}
