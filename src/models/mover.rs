use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MarketMover — Derived per run, fully replaced each run
// ---------------------------------------------------------------------------

/// Which retailer's pricing backed a mover's displayed prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoverSource {
    Tcgplayer,
    Cardmarket,
}

/// A card whose two most recent snapshots differ by at least the configured
/// percent threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMover {
    pub card_id: String,
    pub card_name: String,
    pub set_name: String,
    pub card_number: String,
    /// Signed change in the extracted unit (current minus previous).
    pub price_change: f64,
    /// Signed percent change, rounded to 2 decimals.
    pub price_change_percent: f64,
    /// Rounded to 2 decimals.
    pub previous_price: f64,
    /// Rounded to 2 decimals.
    pub current_price: f64,
    pub source: MoverSource,
    /// Run time, ISO-8601.
    pub timestamp: String,
}
