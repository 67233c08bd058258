use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// PriceSnapshot — One per-card, per-run capture of normalized pricing
// ---------------------------------------------------------------------------

/// A snapshot of a card's prices at capture time.
///
/// Identifying fields are denormalized so the history can be displayed
/// without re-joining against the card source. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub card_id: String,
    pub card_name: String,
    pub set_name: String,
    pub set_code: String,
    pub card_number: String,
    /// Capture time, ISO-8601.
    pub timestamp: String,
    pub prices: SnapshotPrices,
}

/// Per-source pricing captured in a snapshot. A source absent on the input
/// card is absent here too -- omitted from the JSON, never an empty object.
/// That distinguishes "no data at capture time" from a zero price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<TcgplayerSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardmarket: Option<CardmarketSnapshot>,
}

/// TCGPlayer prices kept in a snapshot: only the recognized condition keys,
/// each reduced to its low/mid/high/market quad.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgplayerSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holofoil: Option<PriceQuad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_holofoil: Option<PriceQuad>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<PriceQuad>,
    #[serde(rename = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The low/mid/high/market price quad for one condition. Absent statistics
/// are omitted, not zero-filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuad {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<f64>,
}

/// CardMarket prices kept in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardmarketSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_sell_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// ---------------------------------------------------------------------------
// PriceHistory
// ---------------------------------------------------------------------------

/// Card id to ordered snapshot sequence, oldest first. A `BTreeMap` so
/// iteration (and thus mover encounter order and the persisted file) is
/// deterministic.
pub type PriceHistory = BTreeMap<String, Vec<PriceSnapshot>>;
