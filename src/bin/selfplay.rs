//! Batch self-play CLI.
//!
//! Plays many AI-vs-AI games and writes one JSON record per game.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N       Number of games to play (default: 10)
//!   --threads N     Number of parallel threads (default: 4)
//!   --seed N        Random seed, 0 for entropy (default: 0)
//!   --config FILE   JSON game configuration shared by every game
//!   --rows N        Grid rows (default: 25)
//!   --columns N     Grid columns (default: 55)
//!   --cities N      Cities per map (default: 10)
//!   --max-days N    Day limit per game (default: 300)
//!   --output FILE   Output file path (default: stdout)
//!   --quiet         Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use std::process;
use std::str::FromStr;
use std::time::Instant;

use conquest::config::load_config;
use conquest::selfplay::{self, SelfPlayConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("conquest=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = parse(&args, i, "--games");
            }
            "--threads" => {
                i += 1;
                config.threads = parse(&args, i, "--threads");
            }
            "--seed" => {
                i += 1;
                config.seed = parse(&args, i, "--seed");
            }
            "--config" => {
                i += 1;
                config.game = match load_config(Path::new(value(&args, i, "--config"))) {
                    Ok(c) => c,
                    Err(e) => fail(&e.to_string()),
                };
            }
            "--rows" => {
                i += 1;
                config.game.rows = parse(&args, i, "--rows");
            }
            "--columns" => {
                i += 1;
                config.game.columns = parse(&args, i, "--columns");
            }
            "--cities" => {
                i += 1;
                config.game.cities = parse(&args, i, "--cities");
            }
            "--max-days" => {
                i += 1;
                config.game.max_days = parse(&args, i, "--max-days");
            }
            "--output" => {
                i += 1;
                output_path = Some(value(&args, i, "--output").to_string());
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    config.quiet = quiet;
    if let Err(e) = config.game.validate() {
        fail(&e.to_string());
    }

    if !quiet {
        eprintln!(
            "Self-play: {} games on {}x{} maps, {} cities, max {} days, {} threads",
            config.num_games,
            config.game.rows,
            config.game.columns,
            config.game.cities,
            config.game.max_days,
            config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config);
    let elapsed = start.elapsed();

    if !quiet {
        eprintln!(
            "Completed {} games in {:.1}s ({:.1} games/hour)",
            games.len(),
            elapsed.as_secs_f64(),
            games.len() as f64 / elapsed.as_secs_f64().max(f64::EPSILON) * 3600.0
        );
        selfplay::print_summary(&games);
    }

    let written = match &output_path {
        Some(path) => match File::create(path) {
            Ok(file) => selfplay::write_jsonl(&games, &mut BufWriter::new(file)),
            Err(e) => fail(&format!("failed to create {}: {}", path, e)),
        },
        None => {
            let stdout = io::stdout();
            selfplay::write_jsonl(&games, &mut BufWriter::new(stdout.lock()))
        }
    };
    if let Err(e) = written {
        fail(&format!("failed to write output: {}", e));
    }
    if let (Some(path), false) = (&output_path, quiet) {
        eprintln!("Wrote {} games to {}", games.len(), path);
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v.as_str(),
        None => fail(&format!("missing value for {}", flag)),
    }
}

fn parse<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    let raw = value(args, i, flag);
    match raw.parse() {
        Ok(v) => v,
        Err(_) => fail(&format!("invalid {} value: {}", flag, raw)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N        Number of games to play (default: 10)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --config FILE    JSON game configuration shared by every game");
    eprintln!("  --rows N         Grid rows (default: 25)");
    eprintln!("  --columns N      Grid columns (default: 55)");
    eprintln!("  --cities N       Cities per map (default: 10)");
    eprintln!("  --max-days N     Day limit per game (default: 300)");
    eprintln!("  --output FILE    Output file path (default: stdout)");
    eprintln!("  --quiet          Suppress progress and summary output");
    eprintln!("  --help           Show this help");
}
