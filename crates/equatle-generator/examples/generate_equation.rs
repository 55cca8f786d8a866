//! Example demonstrating basic equation generation.
//!
//! This example shows how to:
//! - Create an `EquationGenerator` from entropy or a fixed seed
//! - Generate random equations for each supported size
//! - Reproduce the deterministic daily equation for a date
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_equation
//! ```
//!
//! Pick a size and print several equations:
//!
//! ```sh
//! cargo run --example generate_equation -- --size classic --count 5
//! ```
//!
//! Replay a fixed seed (64 hex characters):
//!
//! ```sh
//! cargo run --example generate_equation -- --seed <SEED>
//! ```
//!
//! Print the daily equation for a date instead:
//!
//! ```sh
//! cargo run --example generate_equation -- --date 2024-03-15
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use equatle_generator::{EquationGenerator, EquationSeed, GameSize, daily};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SizeKind {
    Micro,
    Mini,
    Classic,
}

impl From<SizeKind> for GameSize {
    fn from(kind: SizeKind) -> Self {
        match kind {
            SizeKind::Micro => Self::Micro,
            SizeKind::Mini => Self::Mini,
            SizeKind::Classic => Self::Classic,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board size to generate for.
    #[arg(long, value_name = "SIZE", default_value = "classic")]
    size: SizeKind,

    /// Number of equations to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,

    /// Fixed generation seed as 64 hex characters.
    #[arg(long, value_name = "SEED", conflicts_with = "date")]
    seed: Option<String>,

    /// Print the deterministic daily equation for this date (YYYY-MM-DD).
    #[arg(long, value_name = "DATE")]
    date: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let size = GameSize::from(args.size);

    if let Some(date) = &args.date {
        run_daily(size, date);
        return;
    }

    let seed = match &args.seed {
        Some(hex) => match hex.parse::<EquationSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("invalid seed: {err}");
                process::exit(1);
            }
        },
        None => EquationSeed::from_entropy(),
    };

    println!("seed: {seed}");
    let mut generator = EquationGenerator::with_seed(&seed);
    for _ in 0..args.count {
        match generator.generate(size) {
            Ok(equation) => println!("{equation}"),
            Err(err) => {
                eprintln!("generation failed: {err}");
                process::exit(1);
            }
        }
    }
}

fn run_daily(size: GameSize, date: &str) {
    let Some((year, month, day)) = parse_date(date) else {
        eprintln!("invalid date: {date} (expected YYYY-MM-DD)");
        process::exit(1);
    };
    match daily(size, year, month, day) {
        Ok(equation) => println!("{equation}"),
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    }
}

fn parse_date(date: &str) -> Option<(i32, u32, u32)> {
    let mut parts = date.splitn(3, '-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    (1..=12).contains(&month).then_some(())?;
    (1..=31).contains(&day).then_some(())?;
    Some((year, month, day))
}
