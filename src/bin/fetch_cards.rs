//! Bulk card data fetch. Materializes the card and set dumps the update
//! pipeline and the site build read.
//!
//! Usage:
//!   fetch-cards                 Fetch all sets, then all cards from page 1
//!   fetch-cards --page 5        Resume the card fetch from page 5
//!   fetch-cards --sets-only     Only fetch sets
//!   fetch-cards --data-dir DIR  Use DIR instead of ./data

use pricedex::api::{CardApiClient, RateLimiter};
use pricedex::config;
use pricedex::store::write_json_file;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

struct FetchOptions {
    data_dir: PathBuf,
    start_page: u32,
    sets_only: bool,
}

fn main() {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Usage: fetch-cards [--page N] [--sets-only] [--data-dir DIR]");
            process::exit(2);
        }
    };

    if let Err(e) = fetch(&options) {
        eprintln!("Fetch failed: {e}");
        process::exit(1);
    }
}

fn fetch(options: &FetchOptions) -> pricedex::Result<()> {
    std::fs::create_dir_all(&options.data_dir)?;

    let limiter = RateLimiter::new(Duration::from_millis(config::RATE_LIMIT_DELAY_MS));
    let mut client = CardApiClient::new(config::API_BASE, limiter);

    println!("Fetching all sets...");
    let sets = client.fetch_sets()?;
    let sets_path = options.data_dir.join(config::SETS_FILE);
    write_json_file(&sets_path, &sets)?;
    println!("Saved {} sets to {}", sets.len(), sets_path.display());

    if options.sets_only {
        return Ok(());
    }

    println!("Fetching all cards from page {}...", options.start_page);
    let cards = client.fetch_all_cards(options.start_page)?;
    let cards_path = options.data_dir.join(config::CARDS_FILE);
    write_json_file(&cards_path, &cards)?;
    println!("Saved {} cards to {}", cards.len(), cards_path.display());

    Ok(())
}

fn parse_args() -> Result<FetchOptions, String> {
    let mut options = FetchOptions {
        data_dir: config::default_data_dir(),
        start_page: 1,
        sets_only: false,
    };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sets-only" => options.sets_only = true,
            "--page" => {
                let value = args.next().ok_or("--page requires a value")?;
                options.start_page = parse_page(&value)?;
            }
            "--data-dir" => {
                options.data_dir = args.next().ok_or("--data-dir requires a value")?.into();
            }
            _ => {
                if let Some(value) = arg.strip_prefix("--page=") {
                    options.start_page = parse_page(value)?;
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

fn parse_page(value: &str) -> Result<u32, String> {
    match value.parse() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(format!("invalid page: {value}")),
    }
}
