//! Validated value objects: the request-validation boundary.
//!
//! Constructors here are pure and independent of store state. A value that
//! exists is in range; handlers reject bad input before the ledger is
//! touched.

use serde::{Deserialize, Serialize};

use guildbank_core::{DomainError, DomainResult, ValueObject};

/// Upper bound accepted for any funds or transfer amount in a request.
pub const MAX_FUNDS: u64 = 999_999_999;

/// Maximum accepted profile name length, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// A non-negative amount of in-game currency, in whole units.
///
/// Non-negativity holds by construction; the [`MAX_FUNDS`] ceiling is a
/// request-validation bound, so arithmetic on existing balances goes through
/// the checked helpers rather than re-validating.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Funds(u64);

impl Funds {
    pub const ZERO: Funds = Funds(0);

    /// Validate a raw request value into funds.
    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 0 {
            return Err(DomainError::validation("funds", "must be non-negative"));
        }
        let value = value as u64;
        if value > MAX_FUNDS {
            return Err(DomainError::validation(
                "funds",
                format!("must be at most {MAX_FUNDS}"),
            ));
        }
        Ok(Self(value))
    }

    /// Wrap an already-trusted balance (seed data, snapshot, arithmetic).
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, other: Funds) -> Option<Funds> {
        self.0.checked_add(other.0).map(Funds)
    }

    pub fn checked_sub(self, other: Funds) -> Option<Funds> {
        self.0.checked_sub(other.0).map(Funds)
    }
}

impl ValueObject for Funds {}

impl core::fmt::Display for Funds {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A profile display name: trimmed, 1..=50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(
                "name",
                format!("must be at most {MAX_NAME_LEN} characters"),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PlayerName {}

impl core::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A player level: positive integer. The bank uses the reserved sentinel
/// [`Level::BANK`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(u32);

impl Level {
    /// Reserved sentinel level carried by the bank record.
    pub const BANK: Level = Level(100);

    pub fn new(value: i64) -> DomainResult<Self> {
        if value < 1 {
            return Err(DomainError::validation("level", "must be positive"));
        }
        if value > u32::MAX as i64 {
            return Err(DomainError::validation("level", "out of range"));
        }
        Ok(Self(value as u32))
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl ValueObject for Level {}
