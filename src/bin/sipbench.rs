//! Throughput benchmark for SipHash-2-4.
//!
//! For every message size (doubling from `--min-len` up to `--max-len`), a random message is hashed
//! `--times` times per round, for `--rounds` rounds, and the average round time is reported.

#[macro_use]
extern crate slog;

use std::hint::black_box;
use std::process;
use std::time::Instant;

use clap::Parser;
use rand::Rng;
use slog::{Drain, Level, LevelFilter, Logger};

use siphash24::Key;

/// Benchmark configuration.
#[derive(Parser, Debug)]
#[command(name = "sipbench", version, about = "Measure the throughput of SipHash-2-4.")]
struct Config {
    /// The smallest message length in bytes.
    #[arg(long, default_value_t = 32)]
    min_len: usize,
    /// The largest message length in bytes.
    #[arg(long, default_value_t = 2048)]
    max_len: usize,
    /// The number of hashes computed per round.
    #[arg(long, default_value_t = 1_000_000)]
    times: u32,
    /// The number of rounds per message length.
    #[arg(long, default_value_t = 10)]
    rounds: u32,
    /// Also log the generated key and messages.
    #[arg(short, long)]
    verbose: bool,
}

impl Config {
    /// Check that the configuration describes a non-empty run.
    fn validate(&self) -> Result<(), String> {
        if self.min_len == 0 {
            return Err("--min-len must be at least 1".to_owned());
        }
        if self.min_len > self.max_len {
            return Err(format!("--min-len ({}) exceeds --max-len ({})", self.min_len, self.max_len));
        }
        if self.times == 0 || self.rounds == 0 {
            return Err("--times and --rounds must be positive".to_owned());
        }

        Ok(())
    }

    /// The message lengths to benchmark.
    fn lengths(&self) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut len = self.min_len;
        while len <= self.max_len {
            lengths.push(len);
            len = match len.checked_mul(2) {
                Some(len) => len,
                None => break,
            };
        }

        lengths
    }
}

/// Build the root logger.
fn logger(verbose: bool) -> Logger {
    let decorator = slog_term::PlainSyncDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let level = if verbose { Level::Debug } else { Level::Info };
    let drain = LevelFilter::new(drain, level).fuse();

    Logger::root(drain, o!("version" => env!("CARGO_PKG_VERSION")))
}

/// Hash `msg` `times` times and return the elapsed time in nanoseconds.
fn run_round(key: &Key, msg: &[u8], times: u32) -> u128 {
    let start = Instant::now();
    for _ in 0..times {
        black_box(siphash24::hash(key, black_box(msg)));
    }

    start.elapsed().as_nanos()
}

fn main() {
    let config = Config::parse();
    let log = logger(config.verbose);

    if let Err(err) = config.validate() {
        error!(log, "invalid configuration"; "error" => %err);
        process::exit(2);
    }

    let mut rng = rand::thread_rng();
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let key = Key::from(key);
    debug!(log, "generated key"; "k0" => format!("{:#018x}", key.k0()), "k1" => format!("{:#018x}", key.k1()));

    info!(log, "starting benchmark";
          "times" => config.times, "rounds" => config.rounds,
          "min_len" => config.min_len, "max_len" => config.max_len);

    for len in config.lengths() {
        let mut msg = vec![0u8; len];
        rng.fill_bytes(&mut msg);

        let log = log.new(o!("len" => len));
        debug!(log, "generated message"; "digest" => format!("{:#018x}", siphash24::hash(&key, &msg)));
        let mut total = 0;
        for round in 0..config.rounds {
            let elapsed = run_round(&key, &msg, config.times);
            info!(log, "round complete"; "round" => round, "elapsed_ns" => elapsed as u64);
            total += elapsed;
        }

        // Average round time in microseconds.
        let avg_us = total as f64 / (config.rounds as f64 * 1000.0);
        info!(log, "size complete";
              "avg_round_us" => format!("{:.3}", avg_us),
              "ns_per_hash" => format!("{:.3}", avg_us * 1000.0 / config.times as f64));
    }
}
