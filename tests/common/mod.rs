//! Shared fixtures for the pricedex integration tests.
//!
//! Cards are built from raw JSON so the fixtures also exercise the upstream
//! wire shape; snapshots go through the real extractor.
#![allow(dead_code)]

use pricedex::models::{Card, PriceHistory, PriceSnapshot};
use pricedex::pipeline::PipelineOptions;
use pricedex::snapshot_card;
use serde_json::json;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

/// Card with a tcgplayer holofoil condition. `mid`/`market` of `None`
/// serialize as absent fields upstream.
pub fn card_with_holofoil(id: &str, mid: Option<f64>, market: Option<f64>) -> Card {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("Card {id}"),
        "number": "1",
        "set": { "id": "base1", "name": "Base Set" },
        "tcgplayer": {
            "url": "https://prices.example/base1-1",
            "updated_at": "2026/08/07",
            "prices": {
                "holofoil": { "low": 1.0, "mid": mid, "high": 100.0, "market": market }
            }
        }
    }))
    .unwrap()
}

/// Card priced only on cardmarket.
pub fn card_with_cardmarket(id: &str, trend: f64) -> Card {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("Card {id}"),
        "number": "2",
        "set": { "id": "base1", "name": "Base Set" },
        "cardmarket": {
            "url": "https://market.example/base1-2",
            "updated_at": "2026-08-07",
            "prices": { "avg_sell_price": trend, "trend_price": trend }
        }
    }))
    .unwrap()
}

/// Card with no pricing block from any source.
pub fn card_without_prices(id: &str) -> Card {
    serde_json::from_value(json!({
        "id": id,
        "name": format!("Card {id}"),
        "number": "3",
        "set": { "id": "base1", "name": "Base Set" }
    }))
    .unwrap()
}

/// Snapshot of a holofoil-priced card at `timestamp`, via the real extractor.
pub fn holofoil_snapshot(id: &str, mid: f64, timestamp: &str) -> PriceSnapshot {
    snapshot_card(&card_with_holofoil(id, Some(mid), None), timestamp).unwrap()
}

/// Snapshot of a cardmarket-priced card at `timestamp`.
pub fn cardmarket_snapshot(id: &str, trend: f64, timestamp: &str) -> PriceSnapshot {
    snapshot_card(&card_with_cardmarket(id, trend), timestamp).unwrap()
}

/// History holding one card with a (previous, current) holofoil-mid pair.
pub fn pair_history(id: &str, previous_mid: f64, current_mid: f64) -> PriceHistory {
    let mut history = PriceHistory::new();
    history.insert(
        id.to_string(),
        vec![
            holofoil_snapshot(id, previous_mid, "2026-08-06T00:00:00.000Z"),
            holofoil_snapshot(id, current_mid, "2026-08-07T00:00:00.000Z"),
        ],
    );
    history
}

/// Temp data dir seeded with the given card records as `cards.json`.
pub fn data_dir_with_cards(cards: &[Card]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("cards.json"),
        serde_json::to_string_pretty(cards).unwrap(),
    )
    .unwrap();
    dir
}

/// Pipeline options pointed at a temp data dir, with the inter-card delay
/// disabled so tests run at full speed.
pub fn test_options(dir: &TempDir) -> PipelineOptions {
    PipelineOptions {
        data_dir: dir.path().to_path_buf(),
        inter_card_delay: Duration::ZERO,
        ..PipelineOptions::default()
    }
}
