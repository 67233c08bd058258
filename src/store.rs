//! Flat-file JSON store for the pipeline's inputs and outputs.
//!
//! Reads handle `.gz` transparently so a compressed card dump can be dropped
//! in place of the plain file. Writes go to a temp file first and rename on
//! success, so an interrupted run never leaves a partially written file
//! behind -- the store is either fully the previous run's state or fully the
//! new one.

use crate::config::HISTORY_CAP;
use crate::error::Result;
use crate::models::{PriceHistory, PriceSnapshot};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File helpers
// ---------------------------------------------------------------------------

/// Read and parse a JSON file, decompressing transparently if the path ends
/// in `.gz`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let mut buf_reader = BufReader::new(decoder);
        let mut contents = String::new();
        buf_reader.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize `value` as pretty JSON and replace `path` atomically.
///
/// Writes to `<path>.tmp` and renames on success; a failed write removes the
/// temp file and leaves the destination untouched.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_dest = path.with_extension(format!(
        "{}.tmp",
        path.extension().and_then(|e| e.to_str()).unwrap_or("")
    ));

    let result = (|| -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&tmp_dest, json)?;
        fs::rename(&tmp_dest, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_dest);
    }

    result
}

// ---------------------------------------------------------------------------
// HistoryStore
// ---------------------------------------------------------------------------

/// The persisted per-card snapshot history.
///
/// Loading never fails the pipeline: a missing file is a first run and a
/// corrupt file degrades to empty history, re-accumulating from this run
/// forward.
pub struct HistoryStore {
    path: PathBuf,
    history: PriceHistory,
}

impl HistoryStore {
    /// Load persisted history from `path`, or start empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let history = if path.exists() {
            match read_json_file::<PriceHistory>(&path) {
                Ok(history) => history,
                Err(e) => {
                    eprintln!(
                        "Corrupt price history {}: {} -- starting fresh",
                        path.display(),
                        e
                    );
                    PriceHistory::new()
                }
            }
        } else {
            PriceHistory::new()
        };
        Self { path, history }
    }

    /// Number of cards with at least one snapshot.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    /// The snapshot sequence for one card, oldest first.
    pub fn snapshots(&self, card_id: &str) -> Option<&[PriceSnapshot]> {
        self.history.get(card_id).map(Vec::as_slice)
    }

    /// Append a snapshot to a card's sequence, evicting from the front once
    /// the sequence exceeds [`HISTORY_CAP`].
    pub fn append(&mut self, card_id: &str, snapshot: PriceSnapshot) {
        let snapshots = self.history.entry(card_id.to_string()).or_default();
        snapshots.push(snapshot);
        if snapshots.len() > HISTORY_CAP {
            let excess = snapshots.len() - HISTORY_CAP;
            snapshots.drain(..excess);
        }
    }

    /// Write the full mapping back to disk atomically.
    pub fn persist(&self) -> Result<()> {
        write_json_file(&self.path, &self.history)
    }
}
