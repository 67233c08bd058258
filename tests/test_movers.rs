//! Unit tests for market-mover detection.

mod common;

use common::*;
use pricedex::models::{Card, MoverSource, PriceHistory};
use pricedex::{detect_movers, snapshot_card};
use serde_json::json;

const RUN_TS: &str = "2026-08-07T12:00:00.000Z";

// ---------------------------------------------------------------------------
// Threshold
// ---------------------------------------------------------------------------

#[test]
fn change_just_under_threshold_is_excluded() {
    let history = pair_history("card-a", 100.0, 109.99);
    assert!(detect_movers(&history, 10.0, RUN_TS).is_empty());
}

#[test]
fn change_exactly_at_threshold_is_included() {
    let history = pair_history("card-a", 100.0, 110.0);
    let movers = detect_movers(&history, 10.0, RUN_TS);

    assert_eq!(movers.len(), 1);
    let mover = &movers[0];
    assert_eq!(mover.price_change_percent, 10.0);
    assert_eq!(mover.previous_price, 100.0);
    assert_eq!(mover.current_price, 110.0);
    assert_eq!(mover.price_change, 10.0);
}

#[test]
fn losses_count_toward_the_threshold_too() {
    let history = pair_history("card-a", 100.0, 80.0);
    let movers = detect_movers(&history, 10.0, RUN_TS);
    assert_eq!(movers.len(), 1);
    assert_eq!(movers[0].price_change_percent, -20.0);
}

#[test]
fn threshold_is_configurable() {
    let history = pair_history("card-a", 100.0, 105.0);
    assert!(detect_movers(&history, 10.0, RUN_TS).is_empty());
    assert_eq!(detect_movers(&history, 5.0, RUN_TS).len(), 1);
}

// ---------------------------------------------------------------------------
// Exclusions
// ---------------------------------------------------------------------------

#[test]
fn single_snapshot_card_is_excluded() {
    let mut history = PriceHistory::new();
    history.insert(
        "card-a".to_string(),
        vec![holofoil_snapshot("card-a", 100.0, "t0")],
    );
    assert!(detect_movers(&history, 10.0, RUN_TS).is_empty());
}

#[test]
fn card_without_comparable_price_is_excluded_despite_two_snapshots() {
    let unpriced = snapshot_card(&card_without_prices("card-a"), "t0").unwrap();
    let mut history = PriceHistory::new();
    history.insert("card-a".to_string(), vec![unpriced.clone(), unpriced]);
    assert!(detect_movers(&history, 10.0, RUN_TS).is_empty());
}

#[test]
fn card_gaining_pricing_for_the_first_time_is_excluded() {
    // Previous snapshot has no usable price; a percent change would be
    // division by zero or a nonsensical infinite move.
    let mut history = PriceHistory::new();
    history.insert(
        "card-a".to_string(),
        vec![
            snapshot_card(&card_without_prices("card-a"), "t0").unwrap(),
            holofoil_snapshot("card-a", 500.0, "t1"),
        ],
    );
    assert!(detect_movers(&history, 10.0, RUN_TS).is_empty());
}

#[test]
fn zero_previous_price_is_treated_as_unavailable() {
    let history = pair_history("card-a", 0.0, 500.0);
    assert!(detect_movers(&history, 10.0, RUN_TS).is_empty());
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[test]
fn ranks_by_absolute_percent_descending() {
    let mut history = PriceHistory::new();
    history.extend(pair_history("card-a", 100.0, 135.2));
    history.extend(pair_history("card-b", 100.0, 60.0));
    history.extend(pair_history("card-c", 100.0, 112.0));

    let movers = detect_movers(&history, 10.0, RUN_TS);
    let percents: Vec<f64> = movers.iter().map(|m| m.price_change_percent).collect();
    assert_eq!(percents, [-40.0, 35.2, 12.0]);
}

#[test]
fn ties_keep_card_id_order() {
    let mut history = PriceHistory::new();
    history.extend(pair_history("card-b", 100.0, 120.0));
    history.extend(pair_history("card-a", 100.0, 80.0));

    let movers = detect_movers(&history, 10.0, RUN_TS);
    let ids: Vec<&str> = movers.iter().map(|m| m.card_id.as_str()).collect();
    assert_eq!(ids, ["card-a", "card-b"]);
}

// ---------------------------------------------------------------------------
// Mover contents
// ---------------------------------------------------------------------------

#[test]
fn identifying_fields_come_from_the_current_snapshot() {
    let history = pair_history("card-a", 100.0, 150.0);
    let movers = detect_movers(&history, 10.0, RUN_TS);

    let mover = &movers[0];
    assert_eq!(mover.card_id, "card-a");
    assert_eq!(mover.card_name, "Card card-a");
    assert_eq!(mover.set_name, "Base Set");
    assert_eq!(mover.card_number, "1");
    assert_eq!(mover.timestamp, RUN_TS);
    assert_eq!(mover.source, MoverSource::Tcgplayer);
}

#[test]
fn cardmarket_only_card_is_attributed_to_cardmarket() {
    let mut history = PriceHistory::new();
    history.insert(
        "card-a".to_string(),
        vec![
            cardmarket_snapshot("card-a", 10.0, "t0"),
            cardmarket_snapshot("card-a", 20.0, "t1"),
        ],
    );

    let movers = detect_movers(&history, 10.0, RUN_TS);
    assert_eq!(movers[0].source, MoverSource::Cardmarket);
}

#[test]
fn attribution_follows_current_snapshot_block_not_the_compared_field() {
    // The tcgplayer block is present but has no usable holofoil figures, so
    // the compared price comes from cardmarket; attribution still says
    // tcgplayer because that block exists on the current snapshot.
    fn hybrid_card(trend: f64) -> Card {
        serde_json::from_value(json!({
            "id": "card-a",
            "name": "Card card-a",
            "number": "1",
            "set": { "id": "base1", "name": "Base Set" },
            "tcgplayer": { "updated_at": "2026/08/07", "prices": {} },
            "cardmarket": {
                "updated_at": "2026-08-07",
                "prices": { "avg_sell_price": trend, "trend_price": trend }
            }
        }))
        .unwrap()
    }

    let mut history = PriceHistory::new();
    history.insert(
        "card-a".to_string(),
        vec![
            snapshot_card(&hybrid_card(10.0), "t0").unwrap(),
            snapshot_card(&hybrid_card(20.0), "t1").unwrap(),
        ],
    );

    let movers = detect_movers(&history, 10.0, RUN_TS);
    assert_eq!(movers.len(), 1);
    assert_eq!(movers[0].previous_price, 10.0);
    assert_eq!(movers[0].current_price, 20.0);
    assert_eq!(movers[0].source, MoverSource::Tcgplayer);
}

#[test]
fn prices_and_percent_are_rounded_to_two_decimals() {
    let history = pair_history("card-a", 3.333, 3.777);
    let movers = detect_movers(&history, 10.0, RUN_TS);

    let mover = &movers[0];
    assert_eq!(mover.previous_price, 3.33);
    assert_eq!(mover.current_price, 3.78);
    assert_eq!(mover.price_change_percent, 13.32);
}
