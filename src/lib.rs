//! Price snapshot and market-mover pipeline for the PriceDex card site.
//!
//! Captures per-card price snapshots from a locally materialized card dump,
//! maintains a bounded rolling history per card in a flat JSON file, and
//! derives a ranked list of market movers from each card's two most recent
//! snapshots. Designed to run as a scheduled job via the `update-prices`
//! binary; `fetch-cards` materializes the card dump it consumes.
//!
//! # Quick start
//!
//! ```no_run
//! use pricedex::pipeline::{run, PipelineOptions};
//!
//! let summary = run(&PipelineOptions::default()).unwrap();
//! println!(
//!     "{} processed, {} skipped, {} movers",
//!     summary.processed, summary.skipped, summary.movers
//! );
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod movers;
pub mod pipeline;
pub mod snapshot;
pub mod store;

pub use api::{CardApiClient, RateLimiter};
pub use error::{PricedexError, Result};
pub use models::{Card, MarketMover, MoverSource, PriceHistory, PriceSnapshot};
pub use movers::detect_movers;
pub use pipeline::{run, PipelineOptions, RunSummary};
pub use snapshot::{comparable_price, snapshot_card};
pub use store::HistoryStore;
