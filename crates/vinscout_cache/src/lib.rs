//! # vinscout_cache
//!
//! Recent-lookup history for VINScout.
//!
//! [`History`] keeps at most [`HISTORY_CAPACITY`] records, newest first, one
//! per VIN. It delegates persistence of its serialized form to a
//! [`HistoryStore`]: [`FileStore`] for real use, [`MemoryStore`] for tests.

mod error;
mod history;
mod store;

pub use error::StoreError;
pub use history::{HISTORY_CAPACITY, History};
pub use store::{FileStore, HISTORY_KEY, HistoryStore, MemoryStore};
