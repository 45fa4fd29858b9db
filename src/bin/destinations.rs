use std::path::PathBuf;

use sleuth_board::config::BoardConfig;
use sleuth_board::suspects;
use sleuth_board::{BoardQuery, Location};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: destinations <roll> <suspect|x,y> [--config <file.json>] [--json]";

fn usage_exit(msg: &str) -> ! {
    eprintln!(
        "{msg}\n\n{USAGE}\n\nSuspects:\n  - {}",
        suspects::names().join("\n  - ")
    );
    std::process::exit(2);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut positional: Vec<String> = Vec::new();
    let mut config_path: Option<PathBuf> = None;
    let mut as_json = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(p) => config_path = Some(PathBuf::from(p)),
                None => usage_exit("--config needs a file path"),
            },
            "--json" => as_json = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        usage_exit("expected a roll and a start");
    }

    let roll: u32 = match positional[0].parse() {
        Ok(r) => r,
        Err(_) => usage_exit(&format!(
            "roll must be a non-negative integer, got {}",
            positional[0]
        )),
    };

    let start = match suspects::by_name(&positional[1]) {
        Some(loc) => loc,
        None => match positional[1].parse::<Location>() {
            Ok(loc) => loc,
            Err(e) => usage_exit(&format!("unknown suspect or location: {e}")),
        },
    };

    let config = match &config_path {
        Some(path) => match BoardConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => BoardConfig::default(),
    };

    let grid = match config.build_grid() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Invalid board: {e}");
            std::process::exit(1);
        }
    };

    let query = BoardQuery::with_limits(&grid, config.limits());
    let destinations = match query.destinations_from(roll, start) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    let mut sorted: Vec<Location> = destinations.into_iter().collect();
    sorted.sort_by_key(|l| (l.y, l.x));

    if as_json {
        match serde_json::to_string_pretty(&sorted) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize destinations: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Start: {start}  roll: {roll}");
    println!("  board: {}x{}", grid.width(), grid.height());
    println!("  destinations: {}", sorted.len());
    for loc in &sorted {
        println!("    {loc}");
    }
}
