//! Lookup controller: validate, fetch, decode, record.

use tracing::{info, warn};
use vinscout_cache::{History, HistoryStore};
use vinscout_core::{VehicleRecord, decode, validate};

use crate::LookupError;
use crate::source::AttributeSource;

/// Drives VIN lookups and owns the recent-lookup history.
///
/// Every successful lookup is recorded exactly once; failed lookups leave the
/// history untouched. Concurrent lookups of the same VIN are not
/// deduplicated.
pub struct Scout<S: AttributeSource, P: HistoryStore> {
    source: S,
    history: History<P>,
}

impl<S: AttributeSource, P: HistoryStore> Scout<S, P> {
    /// Creates a controller, loading the persisted history from `store`.
    pub fn new(source: S, store: P) -> Self {
        Self {
            source,
            history: History::open(store),
        }
    }

    /// Looks up `candidate`.
    ///
    /// The candidate is normalized and validated before any request is made.
    pub async fn lookup(&mut self, candidate: &str) -> Result<VehicleRecord, LookupError> {
        let vin = validate(candidate)?;
        info!("Looking up {}", vin);

        let pairs = self.source.fetch_attributes(&vin).await.inspect_err(|e| {
            warn!("Fetch failed for {}: {}", vin, e);
        })?;
        let record = decode(&vin, &pairs)?;

        self.history.record_lookup(record.clone());
        Ok(record)
    }

    /// Recent lookups, newest first.
    pub fn history(&self) -> &[VehicleRecord] {
        self.history.entries()
    }

    /// Removes `vin` from the history. Returns whether it was present.
    pub fn forget(&mut self, vin: &str) -> bool {
        self.history.remove(vin)
    }

    /// Empties the history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns the underlying history store.
    pub fn store(&self) -> &P {
        self.history.store()
    }
}
