// scripts/benchmark.rs
//! Benchmark binary: positional CLI, fatal diagnostics to stderr.
//!
//! Usage:
//!   benchmark <nthreads> <noptions> <path_length> <path_block_length> \
//!             <verbose(default=0)> <input_file>
//!
//! Integer arguments accept k/K/m/M/g/G binary/decimal scale suffixes.
//! Every validation failure terminates with a non-zero status before any
//! output is produced.

use mc_options_bench::config::{parse_scaled, parse_scaled_usize, RunConfig};
use mc_options_bench::mc::engine;
use mc_options_bench::{input, output};
use std::env;
use std::error::Error;
use std::io;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if let Err(error) = run(&args) {
        eprintln!("{}", error);
        process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    if args.len() < 5 {
        return Err(format!(
            "Usage: {} <nthreads> <noptions> <path_length> <path_block_length> \
             <verbose(default=0)> <input_file>",
            args.first().map(String::as_str).unwrap_or("benchmark")
        )
        .into());
    }

    let lanes = parse_scaled_usize("nthreads", &args[1])?;
    let options = parse_scaled_usize("noptions", &args[2])?;
    let path_length = parse_scaled_usize("path_length", &args[3])?;
    let block_length = parse_scaled_usize("path_block_length", &args[4])?;

    if args.len() < 7 {
        return Err("Need an input file: \
                    <verbose> and <input_file> arguments are required"
            .into());
    }
    let verbose = parse_scaled("verbose", &args[5])? != 0;

    let cfg = RunConfig {
        lanes,
        options,
        path_length,
        block_length,
        verbose,
        ..Default::default()
    };
    cfg.validate()?;

    let records = input::load_options(&args[6])?;
    let report = engine::run(&cfg, &records)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, &cfg, &report)?;
    Ok(())
}
