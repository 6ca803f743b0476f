//! The ledger store: single source of truth for all profile records.
//!
//! Every fund-mutating operation validates against current state first, then
//! rewrites both affected records before releasing the write lock, so no
//! caller observes a bank debit without the matching player credit (or vice
//! versa). The sum of all balances, bank included, is invariant across every
//! operation.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use guildbank_core::{DomainError, DomainResult, ProfileId};

use crate::profile::{Profile, ProfileRole};
use crate::roster;
use crate::value::{Funds, Level, PlayerName};

/// Serialized ledger state: the whole store as one blob.
///
/// Persistence rewrites the entire snapshot on every save; there is no
/// incremental format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub profiles: Vec<Profile>,
    pub bank: Profile,
}

/// Aggregate figures over the current ledger, for the status surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub total_players: usize,
    pub total_player_funds: u64,
    pub average_funds: u64,
    pub highest_level: u32,
    pub bank_funds: u64,
    pub total_capacity: u64,
}

struct LedgerState {
    records: HashMap<ProfileId, Profile>,
    /// The single bank record's id, held alongside the collection so role
    /// checks are id comparisons rather than per-record flag inspection.
    bank_id: ProfileId,
}

impl LedgerState {
    fn bank(&self) -> DomainResult<&Profile> {
        self.records
            .get(&self.bank_id)
            .ok_or_else(|| DomainError::inconsistency("bank record missing from ledger"))
    }
}

/// Owns all profile records and is the only component permitted to mutate
/// balances. Constructed once at process start and shared by handle.
pub struct LedgerStore {
    inner: RwLock<LedgerState>,
}

impl LedgerStore {
    /// Fresh ledger: just the bank, holding the whole opening reserve.
    pub fn with_bank(opening_reserve: Funds) -> Self {
        let now = Utc::now();
        let bank = roster::default_bank(opening_reserve, now);
        let bank_id = bank.id_typed();
        let mut records = HashMap::new();
        records.insert(bank_id, bank);
        Self {
            inner: RwLock::new(LedgerState { records, bank_id }),
        }
    }

    /// Fresh ledger seeded with the stock roster plus the bank.
    pub fn seeded(opening_reserve: Funds) -> Self {
        let now = Utc::now();
        let bank = roster::default_bank(opening_reserve, now);
        let bank_id = bank.id_typed();
        let mut records = HashMap::new();
        records.insert(bank_id, bank);
        for player in roster::default_players(now) {
            records.insert(player.id_typed(), player);
        }
        Self {
            inner: RwLock::new(LedgerState { records, bank_id }),
        }
    }

    /// Rehydrate a ledger from a persisted snapshot.
    ///
    /// Rejects snapshots that violate the single-bank invariant or carry
    /// duplicate ids; a store cannot start from a corrupt blob.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> DomainResult<Self> {
        if snapshot.bank.role() != ProfileRole::Bank {
            return Err(DomainError::inconsistency(
                "snapshot bank record does not carry the bank role",
            ));
        }

        let bank_id = snapshot.bank.id_typed();
        let mut records = HashMap::with_capacity(snapshot.profiles.len() + 1);
        records.insert(bank_id, snapshot.bank);

        for profile in snapshot.profiles {
            if profile.role() != ProfileRole::Player {
                return Err(DomainError::inconsistency(
                    "snapshot contains more than one bank record",
                ));
            }
            if records.insert(profile.id_typed(), profile).is_some() {
                return Err(DomainError::inconsistency(
                    "snapshot contains duplicate profile ids",
                ));
            }
        }

        Ok(Self {
            inner: RwLock::new(LedgerState { records, bank_id }),
        })
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, LedgerState>> {
        self.inner
            .read()
            .map_err(|_| DomainError::inconsistency("ledger lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, LedgerState>> {
        self.inner
            .write()
            .map_err(|_| DomainError::inconsistency("ledger lock poisoned"))
    }

    /// All player records; order is not significant.
    pub fn profiles(&self) -> DomainResult<Vec<Profile>> {
        let state = self.read()?;
        Ok(state
            .records
            .values()
            .filter(|p| p.role() == ProfileRole::Player)
            .cloned()
            .collect())
    }

    /// A single record by id (player or bank).
    pub fn get(&self, id: ProfileId) -> DomainResult<Profile> {
        let state = self.read()?;
        state.records.get(&id).cloned().ok_or(DomainError::NotFound)
    }

    /// The unique bank record.
    pub fn bank(&self) -> DomainResult<Profile> {
        let state = self.read()?;
        Ok(state.bank()?.clone())
    }

    /// Sum of every balance in the store, bank included. Constant across
    /// all operations.
    pub fn total_funds(&self) -> DomainResult<u128> {
        let state = self.read()?;
        Ok(state
            .records
            .values()
            .map(|p| p.funds().get() as u128)
            .sum())
    }

    /// Aggregate figures for the status surface.
    pub fn summary(&self) -> DomainResult<LedgerSummary> {
        let state = self.read()?;
        let bank_funds = state.bank()?.funds().get();

        let mut total_players = 0usize;
        let mut total_player_funds = 0u64;
        let mut highest_level = 0u32;
        for p in state.records.values() {
            if p.role() != ProfileRole::Player {
                continue;
            }
            total_players += 1;
            total_player_funds = total_player_funds.saturating_add(p.funds().get());
            highest_level = highest_level.max(p.level().get());
        }

        let average_funds = if total_players > 0 {
            (total_player_funds as f64 / total_players as f64).round() as u64
        } else {
            0
        };

        Ok(LedgerSummary {
            total_players,
            total_player_funds,
            average_funds,
            highest_level,
            bank_funds,
            total_capacity: bank_funds.saturating_add(total_player_funds),
        })
    }

    /// Whole-store snapshot for persistence.
    pub fn snapshot(&self) -> DomainResult<LedgerSnapshot> {
        let state = self.read()?;
        let bank = state.bank()?.clone();
        let mut profiles: Vec<Profile> = state
            .records
            .values()
            .filter(|p| p.role() == ProfileRole::Player)
            .cloned()
            .collect();
        // Time-ordered ids give the blob a stable, creation-ordered layout.
        profiles.sort_by_key(|p| Uuid::from(p.id_typed()));
        Ok(LedgerSnapshot { profiles, bank })
    }

    /// Create a player, funding its opening balance out of the bank reserve.
    ///
    /// The debit and the insert happen under one write lock; no observer
    /// sees one without the other.
    pub fn create_profile(
        &self,
        name: PlayerName,
        level: Level,
        funds_requested: Funds,
        avatar_url: String,
    ) -> DomainResult<Profile> {
        let mut state = self.write()?;
        let bank = state.bank()?.clone();
        let remaining = bank.funds().checked_sub(funds_requested).ok_or_else(|| {
            DomainError::insufficient_funds(format!(
                "bank reserve {} cannot cover an opening balance of {}",
                bank.funds(),
                funds_requested
            ))
        })?;

        let now = Utc::now();
        let profile = Profile::new_player(name, level, funds_requested, avatar_url, now);
        state.records.insert(profile.id_typed(), profile.clone());
        let bank_id = state.bank_id;
        state.records.insert(bank_id, bank.with_funds(remaining, now));
        Ok(profile)
    }

    /// Set a player's balance to an absolute value, moving the difference
    /// to or from the bank reserve. The bank itself is not a valid target.
    pub fn update_funds(&self, id: ProfileId, new_funds: Funds) -> DomainResult<Profile> {
        let mut state = self.write()?;
        if id == state.bank_id {
            return Err(DomainError::invalid_target(
                "the bank reserve moves with player mutations and cannot be set directly",
            ));
        }
        let player = state.records.get(&id).cloned().ok_or(DomainError::NotFound)?;
        let bank = state.bank()?.clone();
        let current = player.funds();

        let (player_funds, bank_funds) = if new_funds >= current {
            // Raising a balance draws the difference from the reserve.
            let increase = Funds::from_raw(new_funds.get() - current.get());
            let bank_funds = bank.funds().checked_sub(increase).ok_or_else(|| {
                DomainError::insufficient_funds(format!(
                    "bank reserve {} cannot cover an increase of {}",
                    bank.funds(),
                    increase
                ))
            })?;
            (new_funds, bank_funds)
        } else {
            // Lowering a balance returns the difference to the reserve. The
            // player side cannot underflow here; the subtraction stays
            // checked anyway.
            let decrease = Funds::from_raw(current.get() - new_funds.get());
            let player_funds = current.checked_sub(decrease).ok_or_else(|| {
                DomainError::insufficient_funds(format!(
                    "player balance {current} cannot cover a decrease of {decrease}"
                ))
            })?;
            let bank_funds = bank
                .funds()
                .checked_add(decrease)
                .ok_or_else(|| DomainError::inconsistency("bank reserve overflow"))?;
            (player_funds, bank_funds)
        };

        let now = Utc::now();
        let updated = player.with_funds(player_funds, now);
        state.records.insert(id, updated.clone());
        let bank_id = state.bank_id;
        state.records.insert(bank_id, bank.with_funds(bank_funds, now));
        Ok(updated)
    }

    /// Rename a player. No fund effect.
    pub fn rename(&self, id: ProfileId, new_name: PlayerName) -> DomainResult<Profile> {
        let mut state = self.write()?;
        if id == state.bank_id {
            return Err(DomainError::invalid_target("the bank cannot be renamed"));
        }
        let player = state.records.get(&id).cloned().ok_or(DomainError::NotFound)?;
        let updated = player.with_name(new_name, Utc::now());
        state.records.insert(id, updated.clone());
        Ok(updated)
    }

    /// Remove a player, returning its full balance to the bank reserve.
    /// Returns the removed record.
    pub fn delete_profile(&self, id: ProfileId) -> DomainResult<Profile> {
        let mut state = self.write()?;
        if id == state.bank_id {
            return Err(DomainError::invalid_target("the bank cannot be deleted"));
        }
        let player = state.records.get(&id).cloned().ok_or(DomainError::NotFound)?;
        let bank = state.bank()?.clone();
        let reserve = bank
            .funds()
            .checked_add(player.funds())
            .ok_or_else(|| DomainError::inconsistency("bank reserve overflow"))?;

        let now = Utc::now();
        state.records.remove(&id);
        let bank_id = state.bank_id;
        state.records.insert(bank_id, bank.with_funds(reserve, now));
        Ok(player)
    }

    /// Move `amount` between any two records: player to player, player to
    /// bank, or bank to player. Zero amounts and self-transfers succeed
    /// without touching either record.
    pub fn transfer(
        &self,
        from: ProfileId,
        to: ProfileId,
        amount: Funds,
    ) -> DomainResult<(Profile, Profile)> {
        let mut state = self.write()?;
        let source = state.records.get(&from).cloned().ok_or(DomainError::NotFound)?;
        let target = state.records.get(&to).cloned().ok_or(DomainError::NotFound)?;

        let debited = source.funds().checked_sub(amount).ok_or_else(|| {
            DomainError::insufficient_funds(format!(
                "source balance {} cannot cover a transfer of {}",
                source.funds(),
                amount
            ))
        })?;

        if amount == Funds::ZERO || from == to {
            return Ok((source, target));
        }

        let credited = target
            .funds()
            .checked_add(amount)
            .ok_or_else(|| DomainError::inconsistency("target balance overflow"))?;

        let now = Utc::now();
        let source = source.with_funds(debited, now);
        let target = target.with_funds(credited, now);
        state.records.insert(from, source.clone());
        state.records.insert(to, target.clone());
        Ok((source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn name(s: &str) -> PlayerName {
        PlayerName::new(s).unwrap()
    }

    fn level(n: i64) -> Level {
        Level::new(n).unwrap()
    }

    fn funds(n: u64) -> Funds {
        Funds::from_raw(n)
    }

    fn create(store: &LedgerStore, player: &str, opening: u64) -> Profile {
        store
            .create_profile(name(player), level(40), funds(opening), "https://example.com/a.png".into())
            .unwrap()
    }

    #[test]
    fn create_moves_opening_balance_out_of_reserve() {
        let store = LedgerStore::with_bank(funds(750_000));
        let player = create(&store, "Alex Hunter", 15_750);

        assert_eq!(player.funds(), funds(15_750));
        assert_eq!(store.bank().unwrap().funds(), funds(734_250));
        assert_eq!(store.total_funds().unwrap(), 750_000);
    }

    #[test]
    fn create_rejects_opening_balance_beyond_reserve() {
        let store = LedgerStore::with_bank(funds(100));
        let err = store
            .create_profile(name("Nova Storm"), level(52), funds(101), "a".into())
            .unwrap_err();

        match err {
            DomainError::InsufficientFunds(msg) => assert!(msg.contains("bank reserve")),
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
        assert!(store.profiles().unwrap().is_empty());
        assert_eq!(store.bank().unwrap().funds(), funds(100));
    }

    #[test]
    fn update_funds_increase_draws_from_reserve() {
        let store = LedgerStore::with_bank(funds(1_000));
        let player = create(&store, "Tech Wizard", 200);

        let updated = store.update_funds(player.id_typed(), funds(500)).unwrap();
        assert_eq!(updated.funds(), funds(500));
        assert_eq!(store.bank().unwrap().funds(), funds(500));
        assert_eq!(store.total_funds().unwrap(), 1_000);
    }

    #[test]
    fn update_funds_decrease_returns_to_reserve() {
        let store = LedgerStore::with_bank(funds(1_000));
        let player = create(&store, "Luna Phoenix", 800);

        let updated = store.update_funds(player.id_typed(), funds(300)).unwrap();
        assert_eq!(updated.funds(), funds(300));
        assert_eq!(store.bank().unwrap().funds(), funds(700));
        assert_eq!(store.total_funds().unwrap(), 1_000);
    }

    #[test]
    fn update_funds_refreshes_both_timestamps() {
        let store = LedgerStore::with_bank(funds(1_000));
        let player = create(&store, "Iron Bear", 0);
        let bank_before = store.bank().unwrap();

        let updated = store.update_funds(player.id_typed(), funds(10)).unwrap();
        let bank_after = store.bank().unwrap();
        assert!(updated.last_updated() >= player.last_updated());
        assert!(bank_after.last_updated() >= bank_before.last_updated());
        assert_eq!(updated.last_updated(), bank_after.last_updated());
    }

    #[test]
    fn failed_increase_leaves_records_untouched() {
        // Player at 100, reserve at 100: raising to 50_000 needs 49_900.
        let store = LedgerStore::with_bank(funds(200));
        let player = create(&store, "Golden Arrow", 100);
        let bank_before = store.bank().unwrap();

        let err = store.update_funds(player.id_typed(), funds(50_000)).unwrap_err();
        match err {
            DomainError::InsufficientFunds(msg) => assert!(msg.contains("bank reserve")),
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }

        assert_eq!(store.get(player.id_typed()).unwrap(), player);
        assert_eq!(store.bank().unwrap(), bank_before);
    }

    #[test]
    fn update_funds_rejects_the_bank_as_target() {
        let store = LedgerStore::with_bank(funds(1_000));
        let bank_id = store.bank().unwrap().id_typed();

        let err = store.update_funds(bank_id, funds(100)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTarget(_)));
        assert_eq!(store.bank().unwrap().funds(), funds(1_000));
    }

    #[test]
    fn update_funds_rejects_unknown_id() {
        let store = LedgerStore::with_bank(funds(1_000));
        let err = store.update_funds(ProfileId::new(), funds(1)).unwrap_err();
        assert!(matches!(err, DomainError::NotFound));
    }

    #[test]
    fn rename_changes_name_only() {
        let store = LedgerStore::with_bank(funds(1_000));
        let player = create(&store, "Fire Rose", 250);

        let renamed = store.rename(player.id_typed(), name("Ember Rose")).unwrap();
        assert_eq!(renamed.name().as_str(), "Ember Rose");
        assert_eq!(renamed.funds(), funds(250));
        assert_eq!(store.total_funds().unwrap(), 1_000);
    }

    #[test]
    fn rename_rejects_the_bank() {
        let store = LedgerStore::with_bank(funds(1_000));
        let bank_id = store.bank().unwrap().id_typed();
        let err = store.rename(bank_id, name("Other Bank")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTarget(_)));
    }

    #[test]
    fn delete_returns_full_balance_to_reserve() {
        let store = LedgerStore::with_bank(funds(1_000));
        let player = create(&store, "Storm Walker", 500);

        let removed = store.delete_profile(player.id_typed()).unwrap();
        assert_eq!(removed.id_typed(), player.id_typed());
        assert_eq!(store.bank().unwrap().funds(), funds(1_000));
        assert!(store.profiles().unwrap().is_empty());
        assert!(matches!(store.get(player.id_typed()), Err(DomainError::NotFound)));
    }

    #[test]
    fn delete_rejects_the_bank() {
        let store = LedgerStore::with_bank(funds(1_000));
        let bank_id = store.bank().unwrap().id_typed();
        let err = store.delete_profile(bank_id).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTarget(_)));
        assert_eq!(store.bank().unwrap().id_typed(), bank_id);
    }

    #[test]
    fn transfer_moves_amount_between_players() {
        let store = LedgerStore::with_bank(funds(2_000));
        let a = create(&store, "Cyber Queen", 1_000);
        let b = create(&store, "Neon Strike", 0);

        let (from, to) = store.transfer(a.id_typed(), b.id_typed(), funds(200)).unwrap();
        assert_eq!(from.funds(), funds(800));
        assert_eq!(to.funds(), funds(200));
        assert_eq!(from.funds().get() + to.funds().get(), 1_000);
        assert_eq!(store.total_funds().unwrap(), 2_000);
    }

    #[test]
    fn transfer_works_against_the_bank_in_both_directions() {
        let store = LedgerStore::with_bank(funds(1_000));
        let player = create(&store, "Mystic Dawn", 100);
        let bank_id = store.bank().unwrap().id_typed();

        store.transfer(bank_id, player.id_typed(), funds(400)).unwrap();
        assert_eq!(store.get(player.id_typed()).unwrap().funds(), funds(500));
        assert_eq!(store.bank().unwrap().funds(), funds(500));

        store.transfer(player.id_typed(), bank_id, funds(500)).unwrap();
        assert_eq!(store.get(player.id_typed()).unwrap().funds(), funds(0));
        assert_eq!(store.bank().unwrap().funds(), funds(1_000));
    }

    #[test]
    fn transfer_rejects_insufficient_source_balance() {
        let store = LedgerStore::with_bank(funds(1_000));
        let a = create(&store, "Alex Hunter", 50);
        let b = create(&store, "Nova Storm", 0);

        let err = store.transfer(a.id_typed(), b.id_typed(), funds(51)).unwrap_err();
        match err {
            DomainError::InsufficientFunds(msg) => assert!(msg.contains("source balance")),
            other => panic!("expected InsufficientFunds, got {other:?}"),
        }
        assert_eq!(store.get(a.id_typed()).unwrap(), a);
        assert_eq!(store.get(b.id_typed()).unwrap(), b);
    }

    #[test]
    fn transfer_rejects_unknown_ids() {
        let store = LedgerStore::with_bank(funds(1_000));
        let a = create(&store, "Alex Hunter", 50);

        assert!(matches!(
            store.transfer(a.id_typed(), ProfileId::new(), funds(1)),
            Err(DomainError::NotFound)
        ));
        assert!(matches!(
            store.transfer(ProfileId::new(), a.id_typed(), funds(1)),
            Err(DomainError::NotFound)
        ));
    }

    #[test]
    fn zero_amount_transfer_is_a_noop_success() {
        let store = LedgerStore::with_bank(funds(1_000));
        let a = create(&store, "Alex Hunter", 50);
        let b = create(&store, "Nova Storm", 25);
        let before = store.snapshot().unwrap();

        let (from, to) = store.transfer(a.id_typed(), b.id_typed(), Funds::ZERO).unwrap();
        assert_eq!(from, a);
        assert_eq!(to, b);
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn self_transfer_is_a_noop_success() {
        let store = LedgerStore::with_bank(funds(1_000));
        let a = create(&store, "Alex Hunter", 50);
        let before = store.snapshot().unwrap();

        store.transfer(a.id_typed(), a.id_typed(), funds(30)).unwrap();
        assert_eq!(store.snapshot().unwrap(), before);

        // Sufficiency still applies even when nothing would move.
        assert!(matches!(
            store.transfer(a.id_typed(), a.id_typed(), funds(51)),
            Err(DomainError::InsufficientFunds(_))
        ));
    }

    #[test]
    fn exactly_one_bank_survives_any_sequence() {
        let store = LedgerStore::seeded(funds(10_000));
        let a = create(&store, "Extra One", 1_000);
        store.update_funds(a.id_typed(), funds(2_000)).unwrap();
        store.delete_profile(a.id_typed()).unwrap();

        let players = store.profiles().unwrap();
        assert!(players.iter().all(|p| p.role() == ProfileRole::Player));
        assert_eq!(store.bank().unwrap().role(), ProfileRole::Bank);
        assert_eq!(store.total_funds().unwrap(), 10_000);
    }

    #[test]
    fn seeded_roster_holds_no_funds_outside_the_bank() {
        let store = LedgerStore::seeded(funds(7_100));
        let players = store.profiles().unwrap();
        assert_eq!(players.len(), 12);
        assert!(players.iter().all(|p| p.funds() == Funds::ZERO));
        assert_eq!(store.bank().unwrap().funds(), funds(7_100));
        assert_eq!(store.summary().unwrap().highest_level, 63);
    }

    #[test]
    fn summary_reflects_the_ledger() {
        let store = LedgerStore::with_bank(funds(1_000));
        let a = create(&store, "Alex Hunter", 100);
        create(&store, "Nova Storm", 201);
        store.rename(a.id_typed(), name("Alexandra Hunter")).unwrap();

        let summary = store.summary().unwrap();
        assert_eq!(summary.total_players, 2);
        assert_eq!(summary.total_player_funds, 301);
        assert_eq!(summary.average_funds, 151); // 150.5 rounds up
        assert_eq!(summary.highest_level, 40);
        assert_eq!(summary.bank_funds, 699);
        assert_eq!(summary.total_capacity, 1_000);
    }

    #[test]
    fn snapshot_round_trips() {
        let store = LedgerStore::with_bank(funds(5_000));
        create(&store, "Alex Hunter", 750);
        create(&store, "Nova Storm", 1_250);

        let snapshot = store.snapshot().unwrap();
        let restored = LedgerStore::from_snapshot(snapshot.clone()).unwrap();
        assert_eq!(restored.snapshot().unwrap(), snapshot);
        assert_eq!(restored.total_funds().unwrap(), 5_000);
    }

    #[test]
    fn from_snapshot_rejects_bank_role_violations() {
        let store = LedgerStore::with_bank(funds(5_000));
        let player = create(&store, "Alex Hunter", 750);
        let snapshot = store.snapshot().unwrap();

        // A player posing as the bank record.
        let bad = LedgerSnapshot {
            profiles: vec![],
            bank: player,
        };
        assert!(matches!(
            LedgerStore::from_snapshot(bad),
            Err(DomainError::Inconsistency(_))
        ));

        // A second bank hiding in the player list.
        let bad = LedgerSnapshot {
            profiles: vec![snapshot.bank.clone()],
            bank: snapshot.bank,
        };
        assert!(matches!(
            LedgerStore::from_snapshot(bad),
            Err(DomainError::Inconsistency(_))
        ));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Create(u64),
        Update(usize, u64),
        Delete(usize),
        Transfer(usize, usize, u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u64..5_000).prop_map(Op::Create),
            (any::<usize>(), 0u64..5_000).prop_map(|(i, f)| Op::Update(i, f)),
            any::<usize>().prop_map(Op::Delete),
            (any::<usize>(), any::<usize>(), 0u64..5_000)
                .prop_map(|(a, b, f)| Op::Transfer(a, b, f)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: whatever sequence of operations runs, and whether each
        /// succeeds or fails, the sum of all balances never changes.
        #[test]
        fn conservation_holds_across_random_operations(ops in prop::collection::vec(op_strategy(), 1..40)) {
            const RESERVE: u64 = 1_000_000;
            let store = LedgerStore::with_bank(Funds::from_raw(RESERVE));
            let bank_id = store.bank().unwrap().id_typed();
            let mut ids = vec![bank_id];

            for op in ops {
                match op {
                    Op::Create(opening) => {
                        if let Ok(p) = store.create_profile(
                            name("Roster Player"),
                            level(10),
                            funds(opening),
                            "a".into(),
                        ) {
                            ids.push(p.id_typed());
                        }
                    }
                    Op::Update(i, new_funds) => {
                        let id = ids[i % ids.len()];
                        let _ = store.update_funds(id, funds(new_funds));
                    }
                    Op::Delete(i) => {
                        let id = ids[i % ids.len()];
                        if store.delete_profile(id).is_ok() {
                            ids.retain(|known| *known != id);
                        }
                    }
                    Op::Transfer(a, b, amount) => {
                        let from = ids[a % ids.len()];
                        let to = ids[b % ids.len()];
                        let _ = store.transfer(from, to, funds(amount));
                    }
                }

                prop_assert_eq!(store.total_funds().unwrap(), RESERVE as u128);
            }

            // The bank survives everything.
            prop_assert_eq!(store.bank().unwrap().id_typed(), bank_id);
        }
    }
}
