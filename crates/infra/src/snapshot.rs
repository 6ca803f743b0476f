//! Snapshot persistence: the whole ledger as one serialized blob.
//!
//! Saves rewrite the entire `{profiles, bank}` record on every call:
//! read-modify-write of a single key, never incremental.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use guildbank_ledger::LedgerSnapshot;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Whole-ledger snapshot storage.
pub trait SnapshotStore: Send + Sync {
    /// The last saved snapshot, or `None` when nothing has been persisted.
    fn load(&self) -> Result<Option<LedgerSnapshot>, SnapshotError>;

    /// Replace the persisted snapshot with `snapshot`.
    fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), SnapshotError>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn load(&self) -> Result<Option<LedgerSnapshot>, SnapshotError> {
        (**self).load()
    }

    fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), SnapshotError> {
        (**self).save(snapshot)
    }
}

/// In-memory snapshot store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    inner: RwLock<Option<LedgerSnapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self) -> Result<Option<LedgerSnapshot>, SnapshotError> {
        Ok(self.inner.read().ok().and_then(|guard| guard.clone()))
    }

    fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), SnapshotError> {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(snapshot.clone());
        }
        Ok(())
    }
}

/// Snapshot store backed by a single JSON file on local disk.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> Result<Option<LedgerSnapshot>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&raw)?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_vec_pretty(snapshot)?;
        std::fs::write(&self.path, raw)?;
        tracing::debug!(path = %self.path.display(), "ledger snapshot written");
        Ok(())
    }
}
