//! `guildbank-ledger` — profile records and the fund-conservation ledger.
//!
//! The [`store::LedgerStore`] is the single source of truth for all profile
//! records and the only component permitted to mutate balances. Everything
//! that can reject a request before the store is touched lives in the
//! validated value objects of [`value`].

pub mod profile;
pub mod roster;
pub mod store;
pub mod value;

pub use profile::{Profile, ProfileRole};
pub use store::{LedgerSnapshot, LedgerStore, LedgerSummary};
pub use value::{Funds, Level, PlayerName};
