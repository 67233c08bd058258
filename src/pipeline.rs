//! The price update batch run.
//!
//! Single pass: load cards, load history, snapshot each card, persist
//! history, detect movers, persist movers. Failures never cross the per-card
//! boundary; the only fatal condition is a missing card source file.

use crate::config;
use crate::error::{PricedexError, Result};
use crate::models::{Card, MarketMover};
use crate::movers::detect_movers;
use crate::snapshot::snapshot_card;
use crate::store::{read_json_file, write_json_file, HistoryStore};
use chrono::{SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Options and summary
// ---------------------------------------------------------------------------

/// Options for one update run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub data_dir: PathBuf,
    /// Compute and report everything, write nothing.
    pub dry_run: bool,
    /// Process at most this many cards (for staged or manual runs).
    pub limit: Option<usize>,
    pub min_change_percent: f64,
    /// Pause between processed cards. Keeps a preceding fetch stage under
    /// the upstream rate limit; has no effect on correctness.
    pub inter_card_delay: Duration,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            data_dir: config::default_data_dir(),
            dry_run: false,
            limit: None,
            min_change_percent: config::DEFAULT_MIN_CHANGE_PERCENT,
            inter_card_delay: Duration::from_millis(config::RATE_LIMIT_DELAY_MS),
        }
    }
}

/// Counters for a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Cards snapshotted and appended to history this run.
    pub processed: usize,
    /// Cards skipped: no pricing data, or a per-card extraction error.
    pub skipped: usize,
    /// Movers detected (and persisted, unless dry-run).
    pub movers: usize,
    /// Cards with history after this run.
    pub tracked_cards: usize,
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// Execute one update run.
///
/// # Errors
///
/// [`PricedexError::CardsFileMissing`] if the card source file is absent --
/// the fetch stage is an external precondition, not something this run can
/// repair. I/O errors during persistence also propagate and abort the run.
pub fn run(options: &PipelineOptions) -> Result<RunSummary> {
    println!("PriceDex price update");
    println!("=====================");
    if options.dry_run {
        println!("[dry run] no files will be written");
    }

    let cards_path = options.data_dir.join(config::CARDS_FILE);
    let cards = load_cards(&cards_path)?;
    println!("Loaded {} cards", cards.len());

    let mut store = HistoryStore::load(options.data_dir.join(config::PRICES_FILE));
    println!("Loaded price history for {} cards", store.len());

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    let cards_to_process: &[Card] = match options.limit {
        Some(limit) => &cards[..limit.min(cards.len())],
        None => &cards,
    };

    println!("Updating prices for {} cards...", cards_to_process.len());

    let mut processed = 0usize;
    let mut skipped = 0usize;

    for (i, card) in cards_to_process.iter().enumerate() {
        if has_pricing(card) {
            match snapshot_card(card, &timestamp) {
                Ok(snapshot) => {
                    store.append(&card.id, snapshot);
                    processed += 1;
                }
                Err(e) => {
                    eprintln!("Error processing card {}: {}", card.id, e);
                    skipped += 1;
                }
            }
        } else {
            // Expected for cards no retailer lists; not a warning.
            skipped += 1;
        }

        if (i + 1) % config::PROGRESS_INTERVAL == 0 {
            println!(
                "Processed {}/{} cards ({}%)",
                i + 1,
                cards_to_process.len(),
                (i + 1) * 100 / cards_to_process.len()
            );
        }

        if !options.inter_card_delay.is_zero() && i + 1 < cards_to_process.len() {
            thread::sleep(options.inter_card_delay);
        }
    }

    println!("Price update complete: {processed} processed, {skipped} skipped");

    if options.dry_run {
        println!("[dry run] would save price history for {} cards", store.len());
    } else {
        store.persist()?;
        println!("Saved price history to {}", store.path().display());
    }

    println!("Identifying market movers...");
    let movers = detect_movers(store.history(), options.min_change_percent, &timestamp);

    if options.dry_run {
        println!("[dry run] found {} market movers", movers.len());
    } else {
        let movers_path = options.data_dir.join(config::MARKET_MOVERS_FILE);
        write_json_file(&movers_path, &movers)?;
        println!("Saved {} market movers to {}", movers.len(), movers_path.display());
    }

    print_top_movers(&movers);

    Ok(RunSummary {
        processed,
        skipped,
        movers: movers.len(),
        tracked_cards: store.len(),
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load the card source file, accepting a gzipped dump in its place.
fn load_cards(path: &Path) -> Result<Vec<Card>> {
    let gz_path = path.with_extension("json.gz");
    if path.exists() {
        read_json_file(path)
    } else if gz_path.exists() {
        read_json_file(&gz_path)
    } else {
        Err(PricedexError::CardsFileMissing(path.to_path_buf()))
    }
}

fn has_pricing(card: &Card) -> bool {
    card.tcgplayer
        .as_ref()
        .and_then(|block| block.prices.as_ref())
        .is_some()
        || card
            .cardmarket
            .as_ref()
            .and_then(|block| block.prices.as_ref())
            .is_some()
}

/// Top-5 gainers and losers preview, for the operator reading the run log.
fn print_top_movers(movers: &[MarketMover]) {
    if movers.is_empty() {
        return;
    }

    println!("Top gainers:");
    for mover in movers
        .iter()
        .filter(|m| m.price_change_percent > 0.0)
        .take(5)
    {
        println!(
            "  {} ({} #{}): ${:.2} -> ${:.2} (+{}%)",
            mover.card_name,
            mover.set_name,
            mover.card_number,
            mover.previous_price,
            mover.current_price,
            mover.price_change_percent
        );
    }

    println!("Top losers:");
    for mover in movers
        .iter()
        .filter(|m| m.price_change_percent < 0.0)
        .take(5)
    {
        println!(
            "  {} ({} #{}): ${:.2} -> ${:.2} ({}%)",
            mover.card_name,
            mover.set_name,
            mover.card_number,
            mover.previous_price,
            mover.current_price,
            mover.price_change_percent
        );
    }
}
