//! Snapshot extraction and comparable-price reduction.
//!
//! `snapshot_card` normalizes an upstream card record into an immutable
//! [`PriceSnapshot`]; `comparable_price` reduces a snapshot to the single
//! figure used for trend comparison via an ordered fallback chain.

use std::collections::BTreeMap;

use crate::error::{PricedexError, Result};
use crate::models::{
    Card, CardmarketSnapshot, PriceQuad, PriceSnapshot, SnapshotPrices, TcgplayerPrices,
    TcgplayerSnapshot,
};

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Produce a snapshot of `card` at `timestamp`.
///
/// For each pricing source present on the input, copies only the recognized
/// condition keys (`holofoil`, `reverseHolofoil`, `normal`); absent
/// conditions and absent sources are omitted rather than zero-filled. Pure:
/// identical input and timestamp give an identical snapshot.
///
/// # Errors
///
/// Returns [`PricedexError::InvalidCard`] if any present price value is
/// negative or non-finite. The batch driver treats that as a per-card skip.
pub fn snapshot_card(card: &Card, timestamp: &str) -> Result<PriceSnapshot> {
    let mut prices = SnapshotPrices::default();

    if let Some(tcgplayer) = &card.tcgplayer {
        if let Some(condition_map) = &tcgplayer.prices {
            prices.tcgplayer = Some(TcgplayerSnapshot {
                holofoil: condition_quad(&card.id, condition_map, "holofoil")?,
                reverse_holofoil: condition_quad(&card.id, condition_map, "reverseHolofoil")?,
                normal: condition_quad(&card.id, condition_map, "normal")?,
                updated_at: tcgplayer.updated_at.clone(),
            });
        }
    }

    if let Some(cardmarket) = &card.cardmarket {
        if let Some(stats) = &cardmarket.prices {
            validate_price(&card.id, "avg_sell_price", stats.avg_sell_price)?;
            validate_price(&card.id, "trend_price", stats.trend_price)?;
            prices.cardmarket = Some(CardmarketSnapshot {
                avg_sell_price: stats.avg_sell_price,
                trend_price: stats.trend_price,
                updated_at: cardmarket.updated_at.clone(),
            });
        }
    }

    Ok(PriceSnapshot {
        card_id: card.id.clone(),
        card_name: card.name.clone(),
        set_name: card.set.name.clone(),
        set_code: card.set.id.clone(),
        card_number: card.number.clone(),
        timestamp: timestamp.to_string(),
        prices,
    })
}

/// Look up one condition and reduce its statistics to the stored quad,
/// validating each present value.
fn condition_quad(
    card_id: &str,
    condition_map: &BTreeMap<String, TcgplayerPrices>,
    condition: &str,
) -> Result<Option<PriceQuad>> {
    let stats = match condition_map.get(condition) {
        Some(stats) => stats,
        None => return Ok(None),
    };

    for (field, value) in [
        ("low", stats.low),
        ("mid", stats.mid),
        ("high", stats.high),
        ("market", stats.market),
    ] {
        validate_price(card_id, &format!("{condition}.{field}"), value)?;
    }

    Ok(Some(PriceQuad {
        low: stats.low,
        mid: stats.mid,
        high: stats.high,
        market: stats.market,
    }))
}

fn validate_price(card_id: &str, field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(PricedexError::InvalidCard(
            card_id.to_string(),
            format!("price {field} is {v}"),
        )),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Comparable price
// ---------------------------------------------------------------------------

/// Ordered fallback chain for the comparable price: the most granular
/// available statistic wins, falling back progressively across sources.
const COMPARABLE_ACCESSORS: [fn(&PriceSnapshot) -> Option<f64>; 3] = [
    |s| s.prices.tcgplayer.as_ref()?.holofoil?.mid,
    |s| s.prices.tcgplayer.as_ref()?.holofoil?.market,
    |s| s.prices.cardmarket.as_ref()?.trend_price,
];

/// The single representative price for trend comparison, or `None` if the
/// snapshot has no usable candidate.
///
/// A stored value of exactly `0.0` is treated the same as an absent field
/// and the chain moves on to the next accessor. The upstream feed uses 0 to
/// mean "no data", so `None` here covers both cases; callers must treat it
/// as "cannot compare", never as a free card.
pub fn comparable_price(snapshot: &PriceSnapshot) -> Option<f64> {
    COMPARABLE_ACCESSORS
        .iter()
        .filter_map(|accessor| accessor(snapshot))
        .find(|price| *price != 0.0)
}
