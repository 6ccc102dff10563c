//! Conquest -- plays one AI-vs-AI island conquest game.
//!
//! Generates a map, lets both AI players take turns until one holds every
//! city with no enemy unit left or the day limit is reached, then prints the
//! outcome and the final map to stdout.

use std::env;
use std::path::Path;
use std::process;
use std::str::FromStr;

use conquest::config::{load_config, GameConfig};
use conquest::engine::Game;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("conquest=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mut config = GameConfig::default();
    let mut show_fog = false;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config = match load_config(Path::new(value(&args, i, "--config"))) {
                    Ok(c) => c,
                    Err(e) => fail(&e.to_string()),
                };
            }
            "--rows" => {
                i += 1;
                config.rows = parse(&args, i, "--rows");
            }
            "--columns" => {
                i += 1;
                config.columns = parse(&args, i, "--columns");
            }
            "--islands" => {
                i += 1;
                config.islands = parse(&args, i, "--islands");
            }
            "--cities" => {
                i += 1;
                config.cities = parse(&args, i, "--cities");
            }
            "--max-days" => {
                i += 1;
                config.max_days = parse(&args, i, "--max-days");
            }
            "--seed" => {
                i += 1;
                config.seed = parse(&args, i, "--seed");
            }
            "--show-fog" => show_fog = true,
            "--quiet" => quiet = true,
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

    let mut game = match Game::new(&config) {
        Ok(game) => game,
        Err(e) => fail(&e.to_string()),
    };

    let outcome = game.play();
    match outcome.winner {
        Some(player) => println!("winner: {} after {} days", player, outcome.days),
        None => println!("draw after {} days", outcome.days),
    }

    if !quiet {
        for row in game.snapshot_with_units(show_fog) {
            println!("{}", row);
        }
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
    eprintln!("Usage: conquest [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load a JSON game configuration");
    eprintln!("  --rows N         Grid rows (default: 25)");
    eprintln!("  --columns N      Grid columns (default: 55)");
    eprintln!("  --islands N      Islands to generate (default: 10)");
    eprintln!("  --cities N       Cities to place (default: 10)");
    eprintln!("  --max-days N     Day limit before a draw (default: 300)");
    eprintln!("  --seed N         Random seed, 0 for entropy (default: 0)");
    eprintln!("  --show-fog       Draw unexplored cells as '?'");
    eprintln!("  --quiet          Print only the outcome line");
    eprintln!("  --help           Show this help");
}
