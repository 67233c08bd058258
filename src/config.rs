use std::path::PathBuf;

pub const API_BASE: &str = "https://api.pokemontcg.io/v2";

/// Cards fetched per API page.
pub const PAGE_SIZE: u32 = 250;

pub const CARDS_FILE: &str = "cards.json";
pub const SETS_FILE: &str = "sets.json";
pub const PRICES_FILE: &str = "prices.json";
pub const MARKET_MOVERS_FILE: &str = "market-movers.json";

/// Snapshots retained per card. A rolling window: with one capture per day
/// this keeps roughly three months of history and bounds the file size.
pub const HISTORY_CAP: usize = 90;

/// Minimum absolute percent change for a card to count as a market mover.
pub const DEFAULT_MIN_CHANGE_PERCENT: f64 = 10.0;

/// Pause between processed cards and between API page requests, to stay
/// under the upstream rate limit.
pub const RATE_LIMIT_DELAY_MS: u64 = 100;

/// Cards processed between progress lines.
pub const PROGRESS_INTERVAL: usize = 50;

/// Default data directory, shared with the site build that consumes the
/// generated files.
pub fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
