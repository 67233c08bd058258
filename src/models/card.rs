use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Card — Upstream card record (read-only pipeline input)
// ---------------------------------------------------------------------------

/// A card as materialized in `cards.json` by the fetch stage.
///
/// Only the fields the pipeline reads are modeled; everything else in the
/// upstream record is ignored on deserialization. Both pricing blocks are
/// optional -- a card can carry either, both, or neither.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub number: String,
    pub set: CardSetRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcgplayer: Option<TcgplayerBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardmarket: Option<CardmarketBlock>,
}

/// The set a card belongs to, as embedded in the card record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSetRef {
    pub id: String,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Per-retailer pricing blocks
// ---------------------------------------------------------------------------

/// TCGPlayer pricing: a map of condition label (e.g. `holofoil`,
/// `reverseHolofoil`, `normal`, `1stEditionHolofoil`) to price statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcgplayerBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<BTreeMap<String, TcgplayerPrices>>,
}

/// Price statistics for one TCGPlayer condition.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TcgplayerPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_mid: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_high: Option<f64>,
}

/// CardMarket pricing: single aggregate statistics rather than per-condition
/// quads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardmarketBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<CardmarketPrices>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CardmarketPrices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_sell_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_price: Option<f64>,
}
