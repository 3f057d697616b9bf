//! Bounded, deduplicated, most-recent-first lookup history.

use tracing::{debug, info, warn};
use vinscout_core::{VehicleRecord, Vin};

use crate::store::HistoryStore;

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 5;

/// Recent lookups, newest first.
///
/// The history owns the ordering; the store only keeps the serialized blob.
/// Every mutation rewrites the whole blob. Store failures are logged and
/// otherwise ignored, so the in-memory sequence stays authoritative for the
/// rest of the session.
///
/// Mutation takes `&mut self`; callers sharing a history across threads must
/// serialize access themselves.
#[derive(Debug)]
pub struct History<S: HistoryStore> {
    store: S,
    entries: Vec<VehicleRecord>,
}

impl<S: HistoryStore> History<S> {
    /// Opens the history, loading whatever the store holds.
    pub fn open(store: S) -> Self {
        let entries = read_entries(&store);
        Self { store, entries }
    }

    /// Reloads the persisted history, replacing the in-memory sequence.
    ///
    /// Missing or unparsable state yields an empty history.
    pub fn load(&mut self) -> &[VehicleRecord] {
        self.entries = read_entries(&self.store);
        &self.entries
    }

    /// Records a successful lookup as the most recent entry.
    ///
    /// An existing entry with the same VIN is dropped first, so a repeated
    /// lookup is promoted rather than duplicated. The oldest entries beyond
    /// [`HISTORY_CAPACITY`] are discarded.
    pub fn record_lookup(&mut self, record: VehicleRecord) {
        self.entries.retain(|entry| entry.vin() != record.vin());
        self.entries.insert(0, record);
        self.entries.truncate(HISTORY_CAPACITY);
        self.persist();
    }

    /// Removes the entry for `vin`, if any. Returns whether an entry was
    /// removed; nothing is written when the VIN is absent.
    ///
    /// `vin` is compared after trimming and uppercasing.
    pub fn remove(&mut self, vin: &str) -> bool {
        let target = vin.trim().to_uppercase();
        let before = self.entries.len();
        self.entries.retain(|entry| entry.vin().as_str() != target);

        if self.entries.len() == before {
            debug!("{} is not in the history", target);
            return false;
        }
        self.persist();
        true
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Returns the entries, newest first.
    pub fn entries(&self) -> &[VehicleRecord] {
        &self.entries
    }

    /// Returns the entry for `vin`.
    pub fn get(&self, vin: &Vin) -> Option<&VehicleRecord> {
        self.entries.iter().find(|entry| entry.vin() == vin)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let bytes = match serde_json::to_vec(&self.entries) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to serialize history: {}", e);
                return;
            }
        };

        match self.store.save(&bytes) {
            Ok(()) => debug!("Saved {} history entries", self.entries.len()),
            Err(e) => warn!("Failed to save history: {}", e),
        }
    }
}

/// Reads and sanitizes the persisted entries.
///
/// A blob written by something other than this type may break the
/// invariants; duplicates after the first occurrence and anything past
/// capacity are dropped.
fn read_entries<S: HistoryStore>(store: &S) -> Vec<VehicleRecord> {
    let bytes = match store.load() {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read history, starting empty: {}", e);
            return Vec::new();
        }
    };

    let mut entries: Vec<VehicleRecord> = match serde_json::from_slice(&bytes) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Discarding unreadable history: {}", e);
            return Vec::new();
        }
    };

    let mut seen = Vec::with_capacity(entries.len());
    entries.retain(|entry| {
        if seen.contains(entry.vin()) {
            false
        } else {
            seen.push(entry.vin().clone());
            true
        }
    });
    entries.truncate(HISTORY_CAPACITY);

    info!("Loaded {} history entries", entries.len());
    entries
}
