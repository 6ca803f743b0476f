use std::sync::Arc;

use guildbank_core::{DomainResult, ProfileId};
use guildbank_infra::{InMemorySnapshotStore, JsonFileSnapshotStore, SnapshotStore};
use guildbank_ledger::{Funds, LedgerStore, LedgerSummary, Level, PlayerName, Profile};

/// Default opening reserve for a fresh ledger, overridable via
/// `GUILDBANK_OPENING_RESERVE`.
const DEFAULT_OPENING_RESERVE: u64 = 750_000;

/// The API's view of the backend: the ledger store plus snapshot
/// persistence. Mutations go through here so every successful write is
/// followed by a whole-blob snapshot save.
pub struct AppServices {
    ledger: LedgerStore,
    snapshots: Arc<dyn SnapshotStore>,
}

impl AppServices {
    pub fn new(ledger: LedgerStore, snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self { ledger, snapshots }
    }

    // ---- reads ----

    pub fn profiles(&self) -> DomainResult<Vec<Profile>> {
        self.ledger.profiles()
    }

    pub fn get(&self, id: ProfileId) -> DomainResult<Profile> {
        self.ledger.get(id)
    }

    pub fn bank(&self) -> DomainResult<Profile> {
        self.ledger.bank()
    }

    pub fn summary(&self) -> DomainResult<LedgerSummary> {
        self.ledger.summary()
    }

    // ---- mutations (persisted after success) ----

    pub fn create_profile(
        &self,
        name: PlayerName,
        level: Level,
        funds: Funds,
        avatar_url: String,
    ) -> DomainResult<Profile> {
        let profile = self.ledger.create_profile(name, level, funds, avatar_url)?;
        tracing::debug!(id = %profile.id_typed(), "profile created");
        self.persist();
        Ok(profile)
    }

    pub fn update_funds(&self, id: ProfileId, funds: Funds) -> DomainResult<Profile> {
        let profile = self.ledger.update_funds(id, funds)?;
        self.persist();
        Ok(profile)
    }

    pub fn rename(&self, id: ProfileId, name: PlayerName) -> DomainResult<Profile> {
        let profile = self.ledger.rename(id, name)?;
        self.persist();
        Ok(profile)
    }

    pub fn delete_profile(&self, id: ProfileId) -> DomainResult<Profile> {
        let removed = self.ledger.delete_profile(id)?;
        tracing::debug!(id = %removed.id_typed(), "profile deleted");
        self.persist();
        Ok(removed)
    }

    pub fn transfer(
        &self,
        from: ProfileId,
        to: ProfileId,
        amount: Funds,
    ) -> DomainResult<(Profile, Profile)> {
        let moved = self.ledger.transfer(from, to, amount)?;
        self.persist();
        Ok(moved)
    }

    /// Best-effort snapshot save: a failed write is logged, not surfaced.
    /// The in-memory ledger stays authoritative for the session.
    fn persist(&self) {
        match self.ledger.snapshot() {
            Ok(snapshot) => {
                if let Err(e) = self.snapshots.save(&snapshot) {
                    tracing::warn!("snapshot save failed: {e}");
                }
            }
            Err(e) => tracing::warn!("snapshot capture failed: {e}"),
        }
    }
}

/// Wire services from the environment: JSON-file snapshots when
/// `GUILDBANK_SNAPSHOT_PATH` is set, in-memory otherwise.
pub fn build_services() -> AppServices {
    let opening_reserve = opening_reserve_from_env();

    match std::env::var("GUILDBANK_SNAPSHOT_PATH") {
        Ok(path) => {
            let snapshots = JsonFileSnapshotStore::new(path);
            let ledger = restore_or_seed(&snapshots, opening_reserve);
            AppServices::new(ledger, Arc::new(snapshots))
        }
        Err(_) => AppServices::new(
            LedgerStore::seeded(opening_reserve),
            Arc::new(InMemorySnapshotStore::new()),
        ),
    }
}

fn opening_reserve_from_env() -> Funds {
    match std::env::var("GUILDBANK_OPENING_RESERVE") {
        Ok(raw) => match raw.parse::<u64>() {
            Ok(value) => Funds::from_raw(value),
            Err(_) => {
                tracing::warn!("GUILDBANK_OPENING_RESERVE is not a number; using default");
                Funds::from_raw(DEFAULT_OPENING_RESERVE)
            }
        },
        Err(_) => Funds::from_raw(DEFAULT_OPENING_RESERVE),
    }
}

/// Load the persisted ledger if there is a usable snapshot; otherwise seed
/// a fresh one. A missing or corrupt blob never blocks startup.
fn restore_or_seed(snapshots: &JsonFileSnapshotStore, opening_reserve: Funds) -> LedgerStore {
    match snapshots.load() {
        Ok(Some(snapshot)) => match LedgerStore::from_snapshot(snapshot) {
            Ok(ledger) => {
                tracing::info!(path = %snapshots.path().display(), "ledger restored from snapshot");
                ledger
            }
            Err(e) => {
                tracing::warn!("snapshot rejected ({e}); seeding a fresh ledger");
                LedgerStore::seeded(opening_reserve)
            }
        },
        Ok(None) => LedgerStore::seeded(opening_reserve),
        Err(e) => {
            tracing::warn!("snapshot load failed ({e}); seeding a fresh ledger");
            LedgerStore::seeded(opening_reserve)
        }
    }
}
