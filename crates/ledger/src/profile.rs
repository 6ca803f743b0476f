use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use guildbank_core::{Entity, ProfileId};

use crate::value::{Funds, Level, PlayerName};

/// Role of a profile record.
///
/// Exactly one record in a ledger carries [`ProfileRole::Bank`]; it is the
/// system-wide fund reservoir and is created once at store initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    Bank,
    Player,
}

/// A profile record: a player, or the bank.
///
/// Records are owned exclusively by the ledger store; fund and name
/// mutations go through the store's atomic operations, never through the
/// record directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    id: ProfileId,
    name: PlayerName,
    level: Level,
    funds: Funds,
    avatar_url: String,
    last_updated: DateTime<Utc>,
    role: ProfileRole,
}

impl Profile {
    /// Create a fresh player record with a new time-ordered id.
    pub fn new_player(
        name: PlayerName,
        level: Level,
        funds: Funds,
        avatar_url: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ProfileId::new(),
            name,
            level,
            funds,
            avatar_url,
            last_updated: now,
            role: ProfileRole::Player,
        }
    }

    /// Create the bank record holding the opening reserve.
    pub fn new_bank(name: PlayerName, reserve: Funds, avatar_url: String, now: DateTime<Utc>) -> Self {
        Self {
            id: ProfileId::new(),
            name,
            level: Level::BANK,
            funds: reserve,
            avatar_url,
            last_updated: now,
            role: ProfileRole::Bank,
        }
    }

    pub fn id_typed(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn funds(&self) -> Funds {
        self.funds
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn role(&self) -> ProfileRole {
        self.role
    }

    /// Rewrite the balance, refreshing the mutation timestamp.
    pub(crate) fn with_funds(mut self, funds: Funds, now: DateTime<Utc>) -> Self {
        self.funds = funds;
        self.last_updated = now;
        self
    }

    /// Rewrite the display name, refreshing the mutation timestamp.
    pub(crate) fn with_name(mut self, name: PlayerName, now: DateTime<Utc>) -> Self {
        self.name = name;
        self.last_updated = now;
        self
    }
}

impl Entity for Profile {
    type Id = ProfileId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
