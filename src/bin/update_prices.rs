//! Price update job. Run on a schedule, typically once every 24 hours.
//!
//! Usage:
//!   update-prices                 Standard run
//!   update-prices --dry-run       Compute and report without saving
//!   update-prices --limit 100     Process only the first 100 cards
//!   update-prices --data-dir DIR  Use DIR instead of ./data

use pricedex::pipeline::{run, PipelineOptions};
use std::process;

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Usage: update-prices [--dry-run] [--limit N] [--data-dir DIR]");
            process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("Price update failed: {e}");
        process::exit(1);
    }
}

fn parse_args() -> Result<PipelineOptions, String> {
    let mut options = PipelineOptions::default();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dry-run" => options.dry_run = true,
            "--limit" => {
                let value = args.next().ok_or("--limit requires a value")?;
                options.limit = Some(parse_count(&value)?);
            }
            "--data-dir" => {
                options.data_dir = args.next().ok_or("--data-dir requires a value")?.into();
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--limit=") {
                    options.limit = Some(parse_count(value)?);
                } else if let Some(value) = arg.strip_prefix("--data-dir=") {
                    options.data_dir = value.into();
                } else {
                    return Err(format!("unknown argument: {arg}"));
                }
            }
        }
    }

    Ok(options)
}

fn parse_count(value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("invalid count: {value}"))
}
