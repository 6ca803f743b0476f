//! Default seed data for a fresh ledger.

use chrono::{DateTime, Utc};

use crate::profile::Profile;
use crate::value::{Funds, Level, PlayerName};

const BANK_NAME: &str = "Main Bank";
const BANK_AVATAR: &str = "https://images.unsplash.com/photo-1559526324-4b87b5e36e44?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200";

/// (name, level, avatar) for the stock player roster.
const PLAYERS: &[(&str, u32, &str)] = &[
    ("Alex Hunter", 47, "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Nova Storm", 52, "https://images.unsplash.com/photo-1494790108755-2616c727e29b?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Tech Wizard", 38, "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Luna Phoenix", 44, "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Iron Bear", 61, "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Golden Arrow", 49, "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Shadow Blade", 55, "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Fire Rose", 42, "https://images.unsplash.com/photo-1544005313-94ddf0286df2?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Storm Walker", 36, "https://images.unsplash.com/photo-1566492031773-4f4e44671d66?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Cyber Queen", 58, "https://images.unsplash.com/photo-1487412720507-e7ab37603c6f?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Neon Strike", 45, "https://images.unsplash.com/photo-1560250097-0b93528c311a?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
    ("Mystic Dawn", 63, "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?ixlib=rb-4.0.3&auto=format&fit=crop&w=200&h=200"),
];

/// The bank record for a fresh ledger, holding the whole opening reserve.
pub fn default_bank(opening_reserve: Funds, now: DateTime<Utc>) -> Profile {
    let name = PlayerName::new(BANK_NAME).expect("bank name is valid");
    Profile::new_bank(name, opening_reserve, BANK_AVATAR.to_string(), now)
}

/// The stock twelve-player roster. Players seed with zero funds; capacity
/// lives entirely in the bank until allocated.
pub fn default_players(now: DateTime<Utc>) -> Vec<Profile> {
    PLAYERS
        .iter()
        .map(|(name, level, avatar)| {
            let name = PlayerName::new(name).expect("roster name is valid");
            let level = Level::new(*level as i64).expect("roster level is valid");
            Profile::new_player(name, level, Funds::ZERO, avatar.to_string(), now)
        })
        .collect()
}
