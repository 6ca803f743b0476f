//! Request DTOs.
//!
//! Field names are camelCase, as the web client sends them. Responses
//! serialize domain types directly; `Profile` already carries the wire
//! shape (id, name, level, funds, avatarUrl, lastUpdated, role).

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub name: String,
    pub level: i64,
    /// Opening balance drawn from the bank; defaults to zero.
    #[serde(default)]
    pub funds: Option<i64>,
    pub avatar_url: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFundsRequest {
    pub funds: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub from_id: String,
    pub to_id: String,
    pub amount: i64,
}
