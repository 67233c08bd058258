//! Market-mover detection over the price history.

use std::cmp::Ordering;

use crate::models::{MarketMover, MoverSource, PriceHistory};
use crate::snapshot::comparable_price;

/// Compare each card's two most recent snapshots and return the cards whose
/// comparable price moved by at least `min_change_percent` (absolute),
/// ranked largest move first.
///
/// Cards with fewer than two snapshots are skipped, as are cards where
/// either snapshot has no comparable price -- a card that just gained
/// pricing data for the first time does not register a percent change.
///
/// Pure over the in-memory history; the caller persists the result.
pub fn detect_movers(
    history: &PriceHistory,
    min_change_percent: f64,
    timestamp: &str,
) -> Vec<MarketMover> {
    let mut movers = Vec::new();

    for (card_id, snapshots) in history {
        if snapshots.len() < 2 {
            continue;
        }

        let current = &snapshots[snapshots.len() - 1];
        let previous = &snapshots[snapshots.len() - 2];

        let (Some(current_price), Some(previous_price)) =
            (comparable_price(current), comparable_price(previous))
        else {
            continue;
        };

        let price_change = current_price - previous_price;
        let price_change_percent = price_change / previous_price * 100.0;

        if price_change_percent.abs() < min_change_percent {
            continue;
        }

        // Attributed to whichever source is present on the current snapshot,
        // TCGPlayer first.
        let source = if current.prices.tcgplayer.is_some() {
            MoverSource::Tcgplayer
        } else {
            MoverSource::Cardmarket
        };

        movers.push(MarketMover {
            card_id: card_id.clone(),
            card_name: current.card_name.clone(),
            set_name: current.set_name.clone(),
            card_number: current.card_number.clone(),
            price_change,
            price_change_percent: round2(price_change_percent),
            previous_price: round2(previous_price),
            current_price: round2(current_price),
            source,
            timestamp: timestamp.to_string(),
        });
    }

    // Stable sort: ties keep encounter (card id) order.
    movers.sort_by(|a, b| {
        b.price_change_percent
            .abs()
            .partial_cmp(&a.price_change_percent.abs())
            .unwrap_or(Ordering::Equal)
    });

    movers
}

/// Round to 2 decimal places, as displayed.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
