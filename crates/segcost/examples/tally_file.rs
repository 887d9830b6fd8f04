//! Cost a text file sequentially and in parallel, and report the speedup.
//!
//! Run with
//!
//! ```bash
//! cargo run --release -p segcost --example tally_file -- <file> [workers] [aligned|naive]
//! ```
//!
//! The file defaults to `input`, the worker count to 16 and the parallel
//! strategy to `aligned`. Set `RUST_LOG=segcost=debug` to see each reduction
//! logged.

use std::{env, fs, process::ExitCode, time::Instant};

use segcost::{Strategy, TallyOptions, tally};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let filename = args.next().unwrap_or_else(|| "input".to_owned());
    let parallel = match parse_options(args.next(), args.next()) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("invalid arguments: {err}");
            return ExitCode::FAILURE;
        }
    };

    let text = match fs::read_to_string(&filename) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error reading {filename}: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("running sequential reduction on {filename}");
    let sequential = TallyOptions::default().strategy(Strategy::Sequential);
    let seq_ns = run(&text, sequential);

    println!(
        "running {} reduction with {} workers on {filename}",
        parallel.strategy, parallel.workers
    );
    let par_ns = run(&text, parallel);

    #[expect(clippy::cast_precision_loss)]
    let speedup = seq_ns as f64 / par_ns.max(1) as f64;
    println!("speedup: {speedup:.2}");
    ExitCode::SUCCESS
}

fn parse_options(
    workers: Option<String>,
    strategy: Option<String>,
) -> Result<TallyOptions, Box<dyn std::error::Error>> {
    let workers = workers.map_or(Ok(16), |w| w.parse::<usize>())?;
    let strategy = strategy.map_or(Ok(Strategy::Aligned), |s| s.parse::<Strategy>())?;
    Ok(TallyOptions::with_workers(workers)?.strategy(strategy))
}

fn run(text: &str, options: TallyOptions) -> u128 {
    let start = Instant::now();
    let cost = tally(text, options);
    let elapsed = start.elapsed().as_nanos();
    println!("cost: {cost}");
    println!("executed in {elapsed} ns");
    elapsed
}
