//! `guildbank-infra` — persistence adapters around the ledger.

pub mod snapshot;

pub use snapshot::{InMemorySnapshotStore, JsonFileSnapshotStore, SnapshotError, SnapshotStore};
