//! Time tracking for freelance work: projects with hourly rates, a pausable
//! stopwatch, a ledger of billable entries, summaries and CSV export.

pub mod domain;
pub mod export;
pub mod store;
mod tracker;

pub use domain::*;
pub use store::{JsonFileStore, MemoryStore, Storage, StorageError, StorageKey};
pub use tracker::Tracker;
